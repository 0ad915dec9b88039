//! Declarative command catalog and resolver.
//!
//! Maps a command name plus an argument bag to a fully-formed request
//! descriptor using a static schema table. The catalog is checked at
//! compile time; an unknown command is a configuration error raised before
//! any network activity.

mod catalog;
mod fixup;
mod resolver;

pub use catalog::{command, CommandSpec, ParamSpec, Placement, CATALOG};
pub use fixup::fix_repeated_params;
pub use resolver::{Args, CommandResolver, ParamValue, RequestDescriptor};

//! Lists service for the Marketo API.
//!
//! Static list lookup and list membership operations.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;

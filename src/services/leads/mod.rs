//! Leads service for the Marketo API.
//!
//! Covers lead create/update operations and the lead lookup endpoints.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;

//! Response types for the leads service.

use crate::types::{Lead, ResponseEnvelope};

/// Envelope of lead records
pub type LeadsResponse = ResponseEnvelope<Lead>;

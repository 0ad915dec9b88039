//! Response types for the campaigns service.

use crate::types::{Campaign, ResponseEnvelope};

/// Envelope of campaign records
pub type CampaignsResponse = ResponseEnvelope<Campaign>;

//! Response types for the lists service.

use crate::types::{LeadChange, LeadList, ListMembership, ResponseEnvelope};

/// Envelope of list records
pub type ListsResponse = ResponseEnvelope<LeadList>;

/// Envelope of membership statuses
pub type MembershipResponse = ResponseEnvelope<ListMembership>;

/// Envelope of per-lead add/remove outcomes
pub type EditListMembersResponse = ResponseEnvelope<LeadChange>;

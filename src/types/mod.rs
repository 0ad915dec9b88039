//! Shared response envelope and record types for the Marketo API.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Standard Marketo response wrapper.
///
/// Every REST endpoint answers with this envelope: a success flag, an
/// optional error list, and an optional result array. Unknown fields are
/// ignored so schema evolution on the server does not break decoding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    /// Correlation id assigned by the API
    #[serde(default)]
    pub request_id: Option<String>,
    /// Success indicator
    pub success: bool,
    /// Error entries, populated when `success` is false
    #[serde(default = "Vec::new")]
    pub errors: Vec<ApiErrorEntry>,
    /// Result records
    #[serde(default = "Vec::new")]
    pub result: Vec<T>,
    /// Whether more pages are available
    #[serde(default)]
    pub more_result: bool,
    /// Paging token for the next page
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    /// Consume the envelope, returning the result records
    pub fn into_result(self) -> Vec<T> {
        self.result
    }

    /// The first result record, if any
    pub fn into_first(self) -> Option<T> {
        self.result.into_iter().next()
    }
}

/// Error entry carried inside a failed envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEntry {
    /// Marketo error code, e.g. "1006"
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// A Marketo lead record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Lead id
    #[serde(default)]
    pub id: Option<i64>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Operation status for write results (created/updated/skipped)
    #[serde(default)]
    pub status: Option<String>,
    /// Any further fields requested by the caller
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// A static or smart list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadList {
    /// List id
    pub id: i64,
    /// List name
    #[serde(default)]
    pub name: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Owning program name
    #[serde(default)]
    pub program_name: Option<String>,
    /// Workspace name
    #[serde(default)]
    pub workspace_name: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A campaign record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Campaign id
    pub id: i64,
    /// Campaign name
    #[serde(default)]
    pub name: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Campaign type (batch/trigger)
    #[serde(rename = "type", default)]
    pub campaign_type: Option<String>,
    /// Owning program name
    #[serde(default)]
    pub program_name: Option<String>,
    /// Workspace name
    #[serde(default)]
    pub workspace_name: Option<String>,
    /// Whether the campaign is active
    #[serde(default)]
    pub active: Option<bool>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Membership status for one lead in a list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMembership {
    /// Lead id
    pub id: i64,
    /// Membership status, `memberof` or `notmemberof`
    pub status: String,
}

impl ListMembership {
    /// Whether this lead is a member of the list
    pub fn is_member(&self) -> bool {
        self.status.eq_ignore_ascii_case("memberof")
    }
}

/// Per-lead outcome of a list add/remove operation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadChange {
    /// Lead id
    pub id: i64,
    /// Outcome status, `added`, `removed`, or `skipped`
    pub status: String,
    /// Reasons for skipped entries
    #[serde(default = "Vec::new")]
    pub reasons: Vec<ApiErrorEntry>,
}

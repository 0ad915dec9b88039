//! Request types for the campaigns service.

use crate::commands::ParamValue;

/// Request to fetch a single campaign by id
#[derive(Debug, Clone)]
pub struct GetCampaignRequest {
    /// Campaign id
    pub id: i64,
    /// Undeclared parameters passed through to the query string
    pub extra: Vec<(String, ParamValue)>,
}

impl GetCampaignRequest {
    /// Create a new request
    pub fn new(id: i64) -> Self {
        Self {
            id,
            extra: Vec::new(),
        }
    }

    /// Add a passthrough parameter
    pub fn extra(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }
}

/// Request to enumerate campaigns, optionally filtered
#[derive(Debug, Clone, Default)]
pub struct GetCampaignsRequest {
    /// Campaign ids to fetch, serialized as repeated `id` params
    pub ids: Option<Vec<i64>>,
    /// Filter by campaign name
    pub name: Option<String>,
    /// Filter by owning program name
    pub program_name: Option<String>,
    /// Filter by workspace name
    pub workspace_name: Option<String>,
    /// Page size
    pub batch_size: Option<i32>,
    /// Paging token
    pub next_page_token: Option<String>,
    /// Undeclared parameters passed through to the query string
    pub extra: Vec<(String, ParamValue)>,
}

impl GetCampaignsRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given campaign ids
    pub fn ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    /// Filter by campaign name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by program name
    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    /// Filter by workspace name
    pub fn workspace_name(mut self, name: impl Into<String>) -> Self {
        self.workspace_name = Some(name.into());
        self
    }

    /// Set the page size
    pub fn batch_size(mut self, size: i32) -> Self {
        self.batch_size = Some(size);
        self
    }

    /// Set the paging token
    pub fn next_page_token(mut self, token: impl Into<String>) -> Self {
        self.next_page_token = Some(token.into());
        self
    }

    /// Add a passthrough parameter
    pub fn extra(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }
}

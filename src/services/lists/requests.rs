//! Request types for the lists service.

use crate::commands::ParamValue;

/// Request to enumerate lists, optionally filtered
#[derive(Debug, Clone, Default)]
pub struct GetListsRequest {
    /// List ids to fetch, serialized as repeated `id` params
    pub ids: Option<Vec<i64>>,
    /// Filter by list name
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

impl GetListsRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given list ids
    pub fn ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    /// Filter by list name
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

/// Request to fetch a single list by id
#[derive(Debug, Clone)]
pub struct GetListRequest {
    /// List id
    pub id: i64,
    /// Undeclared parameters passed through to the query string
    pub extra: Vec<(String, ParamValue)>,
}

impl GetListRequest {
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

/// Request to check list membership for one or more leads
#[derive(Debug, Clone)]
pub struct MembershipRequest {
    /// List id
    pub list_id: i64,
    /// Lead ids to check, serialized as repeated `id` params
    pub ids: Vec<i64>,
    /// Undeclared parameters passed through to the query string
    pub extra: Vec<(String, ParamValue)>,
}

impl MembershipRequest {
    /// Check several leads at once
    pub fn new(list_id: i64, ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            list_id,
            ids: ids.into_iter().collect(),
            extra: Vec::new(),
        }
    }

    /// Check a single lead
    pub fn single(list_id: i64, id: i64) -> Self {
        Self::new(list_id, [id])
    }

    /// Add a passthrough parameter
    pub fn extra(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }
}

/// Request to add or remove leads from a static list
#[derive(Debug, Clone)]
pub struct EditListMembersRequest {
    /// List id
    pub list_id: i64,
    /// Lead ids, serialized as repeated `id` params
    pub ids: Vec<i64>,
    /// Undeclared parameters passed through to the query string
    pub extra: Vec<(String, ParamValue)>,
}

impl EditListMembersRequest {
    /// Create a new request
    pub fn new(list_id: i64, ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            list_id,
            ids: ids.into_iter().collect(),
            extra: Vec::new(),
        }
    }

    /// Add a passthrough parameter
    pub fn extra(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }
}

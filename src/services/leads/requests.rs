//! Request types for the leads service.

use crate::commands::ParamValue;
use serde_json::Value;

/// Action discriminator for the shared lead-sync command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadAction {
    /// Create new leads only, skip existing
    CreateOnly,
    /// Update existing leads only
    UpdateOnly,
    /// Create or update based on the lookup field
    CreateOrUpdate,
    /// Create duplicates without deduplication
    CreateDuplicate,
}

impl LeadAction {
    /// The wire value for the `action` body field
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadAction::CreateOnly => "createOnly",
            LeadAction::UpdateOnly => "updateOnly",
            LeadAction::CreateOrUpdate => "createOrUpdate",
            LeadAction::CreateDuplicate => "createDuplicate",
        }
    }
}

/// Request to push leads (create/update variants share this shape)
#[derive(Debug, Clone)]
pub struct SyncLeadsRequest {
    /// Lead records to push, as raw JSON objects
    pub input: Vec<Value>,
    /// Field used to deduplicate, defaults to email on the server
    pub lookup_field: Option<String>,
    /// Lead partition name
    pub partition_name: Option<String>,
    /// Undeclared parameters passed through to the request body
    pub extra: Vec<(String, ParamValue)>,
}

impl SyncLeadsRequest {
    /// Create a new request from lead records
    pub fn new(input: Vec<Value>) -> Self {
        Self {
            input,
            lookup_field: None,
            partition_name: None,
            extra: Vec::new(),
        }
    }

    /// Set the lookup field
    pub fn lookup_field(mut self, field: impl Into<String>) -> Self {
        self.lookup_field = Some(field.into());
        self
    }

    /// Set the partition name
    pub fn partition_name(mut self, name: impl Into<String>) -> Self {
        self.partition_name = Some(name.into());
        self
    }

    /// Add a passthrough parameter
    pub fn extra(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }
}

/// Request to get a single lead by id
#[derive(Debug, Clone)]
pub struct GetLeadRequest {
    /// Lead id
    pub id: i64,
    /// Undeclared parameters passed through to the query string
    pub extra: Vec<(String, ParamValue)>,
}

impl GetLeadRequest {
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

/// Request to look up leads by filter type
#[derive(Debug, Clone)]
pub struct FilterLeadsRequest {
    /// Filter field, e.g. `email` or `id`
    pub filter_type: String,
    /// Values to match, joined with commas on the wire
    pub filter_values: Vec<String>,
    /// Fields to return
    pub fields: Option<Vec<String>>,
    /// Page size
    pub batch_size: Option<i32>,
    /// Paging token
    pub next_page_token: Option<String>,
    /// Undeclared parameters passed through to the query string
    pub extra: Vec<(String, ParamValue)>,
}

impl FilterLeadsRequest {
    /// Create a new request
    pub fn new(
        filter_type: impl Into<String>,
        filter_values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            filter_type: filter_type.into(),
            filter_values: filter_values.into_iter().map(Into::into).collect(),
            fields: None,
            batch_size: None,
            next_page_token: None,
            extra: Vec::new(),
        }
    }

    /// Set the fields to return
    pub fn fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
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

/// Request for the leads belonging to a static list
#[derive(Debug, Clone)]
pub struct LeadsByListRequest {
    /// List id
    pub list_id: i64,
    /// Fields to return
    pub fields: Option<Vec<String>>,
    /// Page size
    pub batch_size: Option<i32>,
    /// Paging token
    pub next_page_token: Option<String>,
    /// Undeclared parameters passed through to the query string
    pub extra: Vec<(String, ParamValue)>,
}

impl LeadsByListRequest {
    /// Create a new request
    pub fn new(list_id: i64) -> Self {
        Self {
            list_id,
            fields: None,
            batch_size: None,
            next_page_token: None,
            extra: Vec::new(),
        }
    }

    /// Set the fields to return
    pub fn fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
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

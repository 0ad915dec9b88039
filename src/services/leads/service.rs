//! Leads service implementation.

use super::*;
use crate::commands::{Args, CommandResolver};
use crate::errors::MarketoResult;
use crate::executor::Executor;
use crate::types::Lead;
use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

/// Trait for leads service operations
#[async_trait]
pub trait LeadsServiceTrait: Send + Sync {
    /// Create new leads, skipping ones that already exist
    async fn create_leads(&self, request: SyncLeadsRequest) -> MarketoResult<LeadsResponse>;

    /// Update existing leads only
    async fn update_leads(&self, request: SyncLeadsRequest) -> MarketoResult<LeadsResponse>;

    /// Create or update leads based on the lookup field
    async fn create_or_update_leads(
        &self,
        request: SyncLeadsRequest,
    ) -> MarketoResult<LeadsResponse>;

    /// Create leads without deduplication
    async fn create_duplicate_leads(
        &self,
        request: SyncLeadsRequest,
    ) -> MarketoResult<LeadsResponse>;

    /// Get a single lead by id
    async fn get_lead(&self, request: GetLeadRequest) -> MarketoResult<LeadsResponse>;

    /// Look up leads by filter type
    async fn get_leads_by_filter_type(
        &self,
        request: FilterLeadsRequest,
    ) -> MarketoResult<LeadsResponse>;

    /// Look up a single lead by filter type, returning the first match
    async fn get_lead_by_filter_type(
        &self,
        filter_type: &str,
        value: &str,
    ) -> MarketoResult<Option<Lead>>;

    /// Get the leads belonging to a static list
    async fn get_leads_by_list(&self, request: LeadsByListRequest)
        -> MarketoResult<LeadsResponse>;
}

/// Leads service implementation
#[derive(Debug, Clone)]
pub struct LeadsService {
    executor: Executor,
    resolver: CommandResolver,
}

impl LeadsService {
    /// Create a new leads service
    pub fn new(executor: Executor, resolver: CommandResolver) -> Self {
        Self { executor, resolver }
    }

    async fn sync_leads(
        &self,
        action: LeadAction,
        request: SyncLeadsRequest,
    ) -> MarketoResult<LeadsResponse> {
        let mut args = Args::new()
            .set("action", action.as_str())
            .set("input", Value::Array(request.input));
        if let Some(field) = request.lookup_field {
            args.insert("lookupField", field);
        }
        if let Some(partition) = request.partition_name {
            args.insert("partitionName", partition);
        }
        args.extend(request.extra);

        let descriptor = self.resolver.resolve("createOrUpdateLeads", args)?;
        self.executor.execute(descriptor).await
    }
}

#[async_trait]
impl LeadsServiceTrait for LeadsService {
    #[instrument(skip(self, request), fields(leads = request.input.len()))]
    async fn create_leads(&self, request: SyncLeadsRequest) -> MarketoResult<LeadsResponse> {
        self.sync_leads(LeadAction::CreateOnly, request).await
    }

    #[instrument(skip(self, request), fields(leads = request.input.len()))]
    async fn update_leads(&self, request: SyncLeadsRequest) -> MarketoResult<LeadsResponse> {
        self.sync_leads(LeadAction::UpdateOnly, request).await
    }

    #[instrument(skip(self, request), fields(leads = request.input.len()))]
    async fn create_or_update_leads(
        &self,
        request: SyncLeadsRequest,
    ) -> MarketoResult<LeadsResponse> {
        self.sync_leads(LeadAction::CreateOrUpdate, request).await
    }

    #[instrument(skip(self, request), fields(leads = request.input.len()))]
    async fn create_duplicate_leads(
        &self,
        request: SyncLeadsRequest,
    ) -> MarketoResult<LeadsResponse> {
        self.sync_leads(LeadAction::CreateDuplicate, request).await
    }

    #[instrument(skip(self, request), fields(id = request.id))]
    async fn get_lead(&self, request: GetLeadRequest) -> MarketoResult<LeadsResponse> {
        let mut args = Args::new().set("id", request.id);
        args.extend(request.extra);

        let descriptor = self.resolver.resolve("getLead", args)?;
        self.executor.execute(descriptor).await
    }

    #[instrument(skip(self, request), fields(filter_type = %request.filter_type))]
    async fn get_leads_by_filter_type(
        &self,
        request: FilterLeadsRequest,
    ) -> MarketoResult<LeadsResponse> {
        let mut args = Args::new()
            .set("filterType", request.filter_type)
            .set("filterValues", request.filter_values.join(","));
        if let Some(fields) = request.fields {
            args.insert("fields", fields.join(","));
        }
        if let Some(size) = request.batch_size {
            args.insert("batchSize", size);
        }
        if let Some(token) = request.next_page_token {
            args.insert("nextPageToken", token);
        }
        args.extend(request.extra);

        let descriptor = self.resolver.resolve("getLeadsByFilterType", args)?;
        self.executor.execute(descriptor).await
    }

    async fn get_lead_by_filter_type(
        &self,
        filter_type: &str,
        value: &str,
    ) -> MarketoResult<Option<Lead>> {
        let response = self
            .get_leads_by_filter_type(FilterLeadsRequest::new(filter_type, [value]))
            .await?;
        Ok(response.into_first())
    }

    #[instrument(skip(self, request), fields(list_id = request.list_id))]
    async fn get_leads_by_list(
        &self,
        request: LeadsByListRequest,
    ) -> MarketoResult<LeadsResponse> {
        let mut args = Args::new().set("listId", request.list_id);
        if let Some(fields) = request.fields {
            args.insert("fields", fields.join(","));
        }
        if let Some(size) = request.batch_size {
            args.insert("batchSize", size);
        }
        if let Some(token) = request.next_page_token {
            args.insert("nextPageToken", token);
        }
        args.extend(request.extra);

        let descriptor = self.resolver.resolve("getLeadsByList", args)?;
        self.executor.execute(descriptor).await
    }
}

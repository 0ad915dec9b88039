//! Campaigns service implementation.

use super::*;
use crate::commands::{Args, CommandResolver};
use crate::errors::MarketoResult;
use crate::executor::Executor;
use crate::types::Campaign;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for campaigns service operations
#[async_trait]
pub trait CampaignsServiceTrait: Send + Sync {
    /// Get a single campaign by id
    async fn get_campaign(&self, request: GetCampaignRequest)
        -> MarketoResult<CampaignsResponse>;

    /// Get a single campaign by id, returning the first record or `None`
    async fn find_campaign(&self, id: i64) -> MarketoResult<Option<Campaign>>;

    /// Enumerate campaigns, optionally filtered
    async fn get_campaigns(&self, request: GetCampaignsRequest)
        -> MarketoResult<CampaignsResponse>;
}

/// Campaigns service implementation
#[derive(Debug, Clone)]
pub struct CampaignsService {
    executor: Executor,
    resolver: CommandResolver,
}

impl CampaignsService {
    /// Create a new campaigns service
    pub fn new(executor: Executor, resolver: CommandResolver) -> Self {
        Self { executor, resolver }
    }
}

#[async_trait]
impl CampaignsServiceTrait for CampaignsService {
    #[instrument(skip(self, request), fields(id = request.id))]
    async fn get_campaign(
        &self,
        request: GetCampaignRequest,
    ) -> MarketoResult<CampaignsResponse> {
        let mut args = Args::new().set("id", request.id);
        args.extend(request.extra);

        let descriptor = self.resolver.resolve("getCampaign", args)?;
        self.executor.execute(descriptor).await
    }

    async fn find_campaign(&self, id: i64) -> MarketoResult<Option<Campaign>> {
        let response = self.get_campaign(GetCampaignRequest::new(id)).await?;
        Ok(response.into_first())
    }

    #[instrument(skip(self, request))]
    async fn get_campaigns(
        &self,
        request: GetCampaignsRequest,
    ) -> MarketoResult<CampaignsResponse> {
        let mut args = Args::new();
        if let Some(ids) = request.ids {
            args.insert("id", ids);
        }
        if let Some(name) = request.name {
            args.insert("name", name);
        }
        if let Some(name) = request.program_name {
            args.insert("programName", name);
        }
        if let Some(name) = request.workspace_name {
            args.insert("workspaceName", name);
        }
        if let Some(size) = request.batch_size {
            args.insert("batchSize", size);
        }
        if let Some(token) = request.next_page_token {
            args.insert("nextPageToken", token);
        }
        args.extend(request.extra);

        let descriptor = self.resolver.resolve("getCampaigns", args)?;
        self.executor.execute(descriptor).await
    }
}

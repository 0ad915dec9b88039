//! Lists service implementation.

use super::*;
use crate::commands::{Args, CommandResolver};
use crate::errors::MarketoResult;
use crate::executor::Executor;
use crate::types::LeadList;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for lists service operations
#[async_trait]
pub trait ListsServiceTrait: Send + Sync {
    /// Enumerate lists, optionally filtered
    async fn get_lists(&self, request: GetListsRequest) -> MarketoResult<ListsResponse>;

    /// Get a single list by id
    async fn get_list(&self, request: GetListRequest) -> MarketoResult<ListsResponse>;

    /// Get a single list by id, returning the first record or `None`
    async fn find_list(&self, id: i64) -> MarketoResult<Option<LeadList>>;

    /// Check list membership for one or more leads
    async fn is_member_of_list(
        &self,
        request: MembershipRequest,
    ) -> MarketoResult<MembershipResponse>;

    /// Add leads to a static list
    async fn add_leads_to_list(
        &self,
        request: EditListMembersRequest,
    ) -> MarketoResult<EditListMembersResponse>;

    /// Remove leads from a static list
    async fn remove_leads_from_list(
        &self,
        request: EditListMembersRequest,
    ) -> MarketoResult<EditListMembersResponse>;
}

/// Lists service implementation
#[derive(Debug, Clone)]
pub struct ListsService {
    executor: Executor,
    resolver: CommandResolver,
}

impl ListsService {
    /// Create a new lists service
    pub fn new(executor: Executor, resolver: CommandResolver) -> Self {
        Self { executor, resolver }
    }

    async fn edit_members(
        &self,
        command: &str,
        request: EditListMembersRequest,
    ) -> MarketoResult<EditListMembersResponse> {
        let mut args = Args::new()
            .set("listId", request.list_id)
            .set("id", request.ids);
        args.extend(request.extra);

        let descriptor = self.resolver.resolve(command, args)?;
        self.executor.execute(descriptor).await
    }
}

#[async_trait]
impl ListsServiceTrait for ListsService {
    #[instrument(skip(self, request))]
    async fn get_lists(&self, request: GetListsRequest) -> MarketoResult<ListsResponse> {
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

        let descriptor = self.resolver.resolve("getLists", args)?;
        self.executor.execute(descriptor).await
    }

    #[instrument(skip(self, request), fields(id = request.id))]
    async fn get_list(&self, request: GetListRequest) -> MarketoResult<ListsResponse> {
        let mut args = Args::new().set("id", request.id);
        args.extend(request.extra);

        let descriptor = self.resolver.resolve("getList", args)?;
        self.executor.execute(descriptor).await
    }

    async fn find_list(&self, id: i64) -> MarketoResult<Option<LeadList>> {
        let response = self.get_list(GetListRequest::new(id)).await?;
        Ok(response.into_first())
    }

    #[instrument(skip(self, request), fields(list_id = request.list_id, leads = request.ids.len()))]
    async fn is_member_of_list(
        &self,
        request: MembershipRequest,
    ) -> MarketoResult<MembershipResponse> {
        let mut args = Args::new()
            .set("listId", request.list_id)
            .set("id", request.ids);
        args.extend(request.extra);

        let descriptor = self.resolver.resolve("isMemberOfList", args)?;
        self.executor.execute(descriptor).await
    }

    #[instrument(skip(self, request), fields(list_id = request.list_id, leads = request.ids.len()))]
    async fn add_leads_to_list(
        &self,
        request: EditListMembersRequest,
    ) -> MarketoResult<EditListMembersResponse> {
        self.edit_members("addLeadsToList", request).await
    }

    #[instrument(skip(self, request), fields(list_id = request.list_id, leads = request.ids.len()))]
    async fn remove_leads_from_list(
        &self,
        request: EditListMembersRequest,
    ) -> MarketoResult<EditListMembersResponse> {
        self.edit_members("removeLeadsFromList", request).await
    }
}

//! Marketo client implementation.
//!
//! Provides the main entry point for interacting with the Marketo REST API.

use crate::auth::Authenticator;
use crate::commands::CommandResolver;
use crate::config::MarketoConfig;
use crate::errors::MarketoResult;
use crate::executor::Executor;
use crate::services::{CampaignsService, LeadsService, ListsService};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

/// Trait defining the Marketo client interface
pub trait MarketoClient: Send + Sync {
    /// Get the configuration
    fn config(&self) -> &MarketoConfig;

    /// Get the authenticator
    fn authenticator(&self) -> &Authenticator;

    /// Get the leads service
    fn leads(&self) -> &dyn crate::services::leads::LeadsServiceTrait;

    /// Get the lists service
    fn lists(&self) -> &dyn crate::services::lists::ListsServiceTrait;

    /// Get the campaigns service
    fn campaigns(&self) -> &dyn crate::services::campaigns::CampaignsServiceTrait;
}

/// Main Marketo client implementation
#[derive(Clone)]
pub struct MarketoClientImpl {
    config: Arc<MarketoConfig>,
    auth: Authenticator,
    leads_service: LeadsService,
    lists_service: ListsService,
    campaigns_service: CampaignsService,
}

impl MarketoClientImpl {
    /// Create a new Marketo client with the given configuration
    pub fn new(config: MarketoConfig) -> MarketoResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Self::with_transport(config, transport)
    }

    /// Create a new Marketo client with a custom transport
    pub fn with_transport(
        config: MarketoConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> MarketoResult<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let auth = Authenticator::new(config.clone(), transport.clone());
        let executor = Executor::new(transport, auth.clone());
        let resolver = CommandResolver::new(config.build_rest_url("")?);

        let leads_service = LeadsService::new(executor.clone(), resolver.clone());
        let lists_service = ListsService::new(executor.clone(), resolver.clone());
        let campaigns_service = CampaignsService::new(executor, resolver);

        Ok(Self {
            config,
            auth,
            leads_service,
            lists_service,
            campaigns_service,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &MarketoConfig {
        &self.config
    }

    /// Get the authenticator
    pub fn authenticator(&self) -> &Authenticator {
        &self.auth
    }

    /// Get the leads service
    pub fn leads(&self) -> &LeadsService {
        &self.leads_service
    }

    /// Get the lists service
    pub fn lists(&self) -> &ListsService {
        &self.lists_service
    }

    /// Get the campaigns service
    pub fn campaigns(&self) -> &CampaignsService {
        &self.campaigns_service
    }
}

impl MarketoClient for MarketoClientImpl {
    fn config(&self) -> &MarketoConfig {
        &self.config
    }

    fn authenticator(&self) -> &Authenticator {
        &self.auth
    }

    fn leads(&self) -> &dyn crate::services::leads::LeadsServiceTrait {
        &self.leads_service
    }

    fn lists(&self) -> &dyn crate::services::lists::ListsServiceTrait {
        &self.lists_service
    }

    fn campaigns(&self) -> &dyn crate::services::campaigns::CampaignsServiceTrait {
        &self.campaigns_service
    }
}

impl std::fmt::Debug for MarketoClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketoClientImpl")
            .field("config", &self.config)
            .finish()
    }
}

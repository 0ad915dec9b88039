//! Marketo REST API Client
//!
//! Client for the Marketo marketing-automation REST API with:
//! - OAuth2 client-credentials authentication with token caching/refresh
//! - A declarative command catalog resolving names and argument bags into
//!   concrete HTTP requests
//! - Typed lead, list, and campaign operations decoding the standard
//!   response envelope
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use marketo_client::services::leads::SyncLeadsRequest;
//! use marketo_client::services::leads::LeadsServiceTrait;
//! use marketo_client::MarketoConfig;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MarketoConfig::builder()
//!         .munchkin_id("123-ABC-456")
//!         .client_id("your-client-id")
//!         .client_secret("your-client-secret")
//!         .build()?;
//!     let client = marketo_client::create_client(config)?;
//!
//!     let response = client
//!         .leads()
//!         .create_leads(
//!             SyncLeadsRequest::new(vec![json!({"email": "a@b.com"})]).lookup_field("email"),
//!         )
//!         .await?;
//!
//!     println!("Created {} leads", response.result.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod auth;
pub mod client;
pub mod commands;
pub mod config;
pub mod errors;
pub mod executor;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::{MarketoClient, MarketoClientImpl};
pub use config::{MarketoConfig, MarketoConfigBuilder};
pub use errors::{MarketoError, MarketoResult};

/// Default REST API version
pub const DEFAULT_API_VERSION: u32 = 1;

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Create a Marketo client with the given configuration
pub fn create_client(config: MarketoConfig) -> MarketoResult<MarketoClientImpl> {
    MarketoClientImpl::new(config)
}

/// Create a Marketo client from environment variables
///
/// Reads:
/// - `MARKETO_BASE_URL` or `MARKETO_MUNCHKIN_ID` - instance location
/// - `MARKETO_CLIENT_ID` - OAuth2 client id
/// - `MARKETO_CLIENT_SECRET` - OAuth2 client secret
/// - `MARKETO_API_VERSION` - REST version (default 1)
/// - `MARKETO_TIMEOUT` - request timeout in seconds
pub fn create_client_from_env() -> MarketoResult<MarketoClientImpl> {
    let config = MarketoConfig::from_env()?;
    create_client(config)
}

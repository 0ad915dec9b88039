//! Configuration management for the Marketo client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern

use crate::errors::{ConfigurationError, MarketoResult};
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Configuration for the Marketo client
#[derive(Clone)]
pub struct MarketoConfig {
    /// Base URL for the Marketo instance
    pub(crate) base_url: Option<Url>,
    /// Munchkin account id, expanded to `https://{id}.mktorest.com`
    pub(crate) munchkin_id: Option<String>,
    /// OAuth2 client id
    pub(crate) client_id: Option<String>,
    /// OAuth2 client secret
    pub(crate) client_secret: Option<SecretString>,
    /// REST API version, forms the `/rest/v{version}` prefix
    pub api_version: u32,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers added to every request
    pub default_headers: HeaderMap,
}

impl std::fmt::Debug for MarketoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketoConfig")
            .field("base_url", &self.base_url)
            .field("munchkin_id", &self.munchkin_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.is_some())
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for MarketoConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            munchkin_id: None,
            client_id: None,
            client_secret: None,
            api_version: crate::DEFAULT_API_VERSION,
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
        }
    }
}

impl MarketoConfig {
    /// Create a new configuration builder
    pub fn builder() -> MarketoConfigBuilder {
        MarketoConfigBuilder::new()
    }

    /// Create configuration from environment variables
    pub fn from_env() -> MarketoResult<Self> {
        let mut builder = MarketoConfigBuilder::new();

        if let Ok(url) = std::env::var("MARKETO_BASE_URL") {
            builder = builder.base_url(&url)?;
        }
        if let Ok(id) = std::env::var("MARKETO_MUNCHKIN_ID") {
            builder = builder.munchkin_id(&id);
        }
        if let Ok(id) = std::env::var("MARKETO_CLIENT_ID") {
            builder = builder.client_id(&id);
        }
        if let Ok(secret) = std::env::var("MARKETO_CLIENT_SECRET") {
            builder = builder.client_secret(&secret);
        }
        if let Ok(version) = std::env::var("MARKETO_API_VERSION") {
            if let Ok(v) = version.parse::<u32>() {
                builder = builder.api_version(v);
            }
        }
        if let Ok(timeout) = std::env::var("MARKETO_TIMEOUT") {
            if let Ok(secs) = timeout.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(secs));
            }
        }

        builder.build()
    }

    /// Get the client id
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Expose the client secret for the token request
    pub(crate) fn expose_client_secret(&self) -> Option<&str> {
        self.client_secret.as_ref().map(|s| s.expose_secret().as_str())
    }

    /// Resolve the effective base URL, expanding the munchkin id when no
    /// explicit URL was supplied
    pub fn resolved_base_url(&self) -> Result<Url, ConfigurationError> {
        if let Some(url) = &self.base_url {
            return Ok(url.clone());
        }
        if let Some(id) = &self.munchkin_id {
            return Url::parse(&format!("https://{}.mktorest.com", id)).map_err(|e| {
                ConfigurationError::InvalidConfiguration {
                    message: format!("Invalid munchkin id '{}': {}", id, e),
                }
            });
        }
        Err(ConfigurationError::MissingBaseUrl)
    }

    /// The REST path prefix, e.g. `/rest/v1`
    pub fn rest_prefix(&self) -> String {
        format!("/rest/v{}", self.api_version)
    }

    /// The OAuth2 token endpoint for this instance
    pub fn identity_url(&self) -> Result<String, ConfigurationError> {
        let base = self.resolved_base_url()?;
        Ok(format!(
            "{}/identity/oauth/token",
            base.as_str().trim_end_matches('/')
        ))
    }

    /// Build the full URL for a REST endpoint path
    pub fn build_rest_url(&self, path: &str) -> Result<String, ConfigurationError> {
        let base = self.resolved_base_url()?;
        Ok(format!(
            "{}{}/{}",
            base.as_str().trim_end_matches('/'),
            self.rest_prefix(),
            path.trim_start_matches('/')
        ))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.base_url.is_none() && self.munchkin_id.is_none() {
            return Err(ConfigurationError::MissingBaseUrl);
        }
        if self.client_id.is_none() {
            return Err(ConfigurationError::MissingClientId);
        }
        if self.client_secret.is_none() {
            return Err(ConfigurationError::MissingClientSecret);
        }
        Ok(())
    }
}

/// Builder for MarketoConfig
#[derive(Default)]
pub struct MarketoConfigBuilder {
    config: MarketoConfig,
}

impl MarketoConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: MarketoConfig::default(),
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.base_url =
            Some(
                Url::parse(url).map_err(|e| ConfigurationError::InvalidConfiguration {
                    message: format!("Invalid URL: {}", e),
                })?,
            );
        Ok(self)
    }

    /// Set the munchkin account id
    pub fn munchkin_id(mut self, id: &str) -> Self {
        self.config.munchkin_id = Some(id.to_string());
        self
    }

    /// Set the OAuth2 client id
    pub fn client_id(mut self, id: &str) -> Self {
        self.config.client_id = Some(id.to_string());
        self
    }

    /// Set the OAuth2 client secret
    pub fn client_secret(mut self, secret: &str) -> Self {
        self.config.client_secret = Some(SecretString::new(secret.to_string()));
        self
    }

    /// Set the REST API version
    pub fn api_version(mut self, version: u32) -> Self {
        self.config.api_version = version;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        if let Ok(header_name) = name.parse::<http::header::HeaderName>() {
            if let Ok(header_value) = value.parse::<http::header::HeaderValue>() {
                self.config.default_headers.insert(header_name, header_value);
            }
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> MarketoResult<MarketoConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the configuration without validation (for testing)
    pub fn build_unchecked(self) -> MarketoConfig {
        self.config
    }
}

//! Authentication management for the Marketo client.
//!
//! Obtains access tokens via the OAuth2 client-credentials grant against the
//! instance's identity endpoint, caches the single token with its absolute
//! expiry, and refreshes it when it nears expiration. The cached token is
//! owned exclusively by the [`Authenticator`].

use crate::config::MarketoConfig;
use crate::errors::{AuthError, ConfigurationError, MarketoError, MarketoResult};
use crate::transport::{HttpTransport, TransportRequest};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use http::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Safety margin subtracted from the token lifetime before a refresh is
/// triggered
pub const EXPIRY_MARGIN_SECS: i64 = 30;

/// Token endpoint response payload
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Cached access token with its absolute expiry. Never leaves this module.
struct CachedToken {
    access_token: SecretString,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - ChronoDuration::seconds(EXPIRY_MARGIN_SECS) > now
    }
}

/// Authentication manager for Marketo API requests
#[derive(Clone)]
pub struct Authenticator {
    config: Arc<MarketoConfig>,
    transport: Arc<dyn HttpTransport>,
    // Held across the refresh await so concurrent callers serialize refreshes
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl Authenticator {
    /// Create a new authenticator
    pub fn new(config: Arc<MarketoConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config,
            transport,
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// Get headers for an API request, acquiring or refreshing the access
    /// token first when necessary
    pub async fn bearer_headers(&self) -> MarketoResult<HeaderMap> {
        let token = self.access_token().await?;
        self.build_headers(&token)
    }

    /// Get a valid access token, reusing the cached one while it has not
    /// passed its expiry margin
    pub async fn access_token(&self) -> MarketoResult<SecretString> {
        let mut guard = self.token.lock().await;

        if let Some(cached) = guard.as_ref() {
            if cached.is_valid_at(Utc::now()) {
                return Ok(cached.access_token.clone());
            }
        }

        let fresh = self.acquire_token().await?;
        let access_token = fresh.access_token.clone();
        *guard = Some(fresh);
        Ok(access_token)
    }

    /// Drop the cached token so the next call re-acquires one
    pub async fn invalidate(&self) {
        *self.token.lock().await = None;
    }

    #[instrument(skip(self))]
    async fn acquire_token(&self) -> MarketoResult<CachedToken> {
        let identity_url = self.config.identity_url()?;

        let client_id = self
            .config
            .client_id()
            .ok_or(ConfigurationError::MissingClientId)?
            .to_string();
        let client_secret = self
            .config
            .expose_client_secret()
            .ok_or(ConfigurationError::MissingClientSecret)?
            .to_string();

        let fields = vec![
            ("grant_type".to_string(), "client_credentials".to_string()),
            ("client_id".to_string(), client_id),
            ("client_secret".to_string(), client_secret),
        ];

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let response = self
            .transport
            .send(TransportRequest::post_form(identity_url, headers, fields))
            .await?;

        if !response.is_success() {
            return Err(MarketoError::Auth(AuthError::TokenRequestFailed {
                status: response.status.as_u16(),
                body: response.body,
            }));
        }

        let parsed: TokenResponse = serde_json::from_str(&response.body).map_err(|e| {
            MarketoError::Auth(AuthError::MalformedTokenResponse {
                message: e.to_string(),
            })
        })?;

        debug!(expires_in = parsed.expires_in, "Acquired access token");

        Ok(CachedToken {
            access_token: SecretString::new(parsed.access_token),
            expires_at: Utc::now() + ChronoDuration::seconds(parsed.expires_in),
        })
    }

    fn build_headers(&self, token: &SecretString) -> MarketoResult<HeaderMap> {
        let mut headers = self.config.default_headers.clone();

        let auth_value = format!("Bearer {}", token.expose_secret());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value)
                .map_err(|_| MarketoError::Auth(AuthError::InvalidHeaderValue))?,
        );

        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/json; charset=utf-8"),
            );
        }

        Ok(headers)
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("config", &self.config)
            .finish()
    }
}

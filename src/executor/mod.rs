//! Request executor and response mapper.
//!
//! Attaches the bearer token, sends resolved requests through the transport,
//! and decodes JSON payloads into typed response envelopes.

use crate::auth::Authenticator;
use crate::commands::RequestDescriptor;
use crate::errors::{DecodeError, MarketoError, MarketoResult};
use crate::transport::{HttpTransport, TransportBody, TransportRequest};
use crate::types::ResponseEnvelope;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Executes resolved requests and maps responses into typed envelopes
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn HttpTransport>,
    auth: Authenticator,
}

impl Executor {
    /// Create a new executor
    pub fn new(transport: Arc<dyn HttpTransport>, auth: Authenticator) -> Self {
        Self { transport, auth }
    }

    /// The authenticator backing this executor
    pub fn auth(&self) -> &Authenticator {
        &self.auth
    }

    /// Execute a resolved request and decode the response envelope.
    ///
    /// Fails with a transport error on network failure, an API error when the
    /// envelope's success flag is false, and a decode error when the payload
    /// is not a valid envelope.
    #[instrument(skip(self, descriptor), fields(method = %descriptor.method, url = %descriptor.url))]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> MarketoResult<ResponseEnvelope<T>> {
        let headers = self.auth.bearer_headers().await?;

        let request = TransportRequest {
            method: descriptor.method,
            url: descriptor.url.to_string(),
            headers,
            body: descriptor.body.map(TransportBody::Json),
        };

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            warn!(status = %response.status, "Request failed with non-success status");
            return Err(MarketoError::Decode(DecodeError::UnexpectedStatus {
                status: response.status.as_u16(),
                body: response.body,
            }));
        }

        let envelope: ResponseEnvelope<T> =
            serde_json::from_str(&response.body).map_err(DecodeError::from)?;

        if !envelope.success {
            let (code, message) = envelope
                .errors
                .first()
                .map(|e| (e.code.clone(), e.message.clone()))
                .unwrap_or_else(|| ("unknown".to_string(), "unknown".to_string()));
            return Err(MarketoError::Api { code, message });
        }

        debug!(
            request_id = envelope.request_id.as_deref().unwrap_or(""),
            results = envelope.result.len(),
            "Decoded response envelope"
        );

        Ok(envelope)
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor").field("auth", &self.auth).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Args, CommandResolver};
    use crate::config::MarketoConfigBuilder;
    use crate::mocks::{MockHttpTransport, MockResponse};
    use crate::types::Lead;
    use std::sync::Arc;

    fn executor_with(transport: Arc<MockHttpTransport>) -> Executor {
        let config = Arc::new(
            MarketoConfigBuilder::new()
                .base_url("https://app.example.com")
                .unwrap()
                .client_id("client")
                .client_secret("secret")
                .build_unchecked(),
        );
        let auth = Authenticator::new(config, transport.clone());
        Executor::new(transport, auth)
    }

    fn token_ok() -> MockResponse {
        MockResponse::ok(r#"{"access_token":"tok","token_type":"bearer","expires_in":3600}"#)
    }

    fn descriptor() -> crate::commands::RequestDescriptor {
        CommandResolver::new("https://app.example.com/rest/v1")
            .resolve("getLead", Args::new().set("id", 1))
            .unwrap()
    }

    #[tokio::test]
    async fn test_execute_attaches_bearer_token() {
        let transport = Arc::new(
            MockHttpTransport::new()
                .add_response(token_ok())
                .add_response(MockResponse::ok(
                    r#"{"success":true,"result":[{"id":1,"email":"a@b.com"}]}"#,
                )),
        );
        let executor = executor_with(transport.clone());

        let envelope: ResponseEnvelope<Lead> = executor.execute(descriptor()).await.unwrap();
        assert_eq!(envelope.result[0].id, Some(1));

        let api_request = transport.recorded_requests().into_iter().nth(1).unwrap();
        let auth_header = api_request
            .headers
            .iter()
            .find(|(name, _)| name == "authorization")
            .map(|(_, value)| value.clone())
            .unwrap();
        assert_eq!(auth_header, "Bearer tok");
    }

    #[tokio::test]
    async fn test_execute_maps_api_error() {
        let transport = Arc::new(
            MockHttpTransport::new()
                .add_response(token_ok())
                .add_response(MockResponse::ok(crate::fixtures::ERROR_ENVELOPE)),
        );
        let executor = executor_with(transport);

        let err = executor.execute::<Lead>(descriptor()).await.unwrap_err();
        match err {
            MarketoError::Api { code, message } => {
                assert_eq!(code, "1006");
                assert_eq!(message, "Field 'custom' not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_maps_decode_error() {
        let transport = Arc::new(
            MockHttpTransport::new()
                .add_response(token_ok())
                .add_response(MockResponse::ok("<html>gateway</html>")),
        );
        let executor = executor_with(transport);

        let err = executor.execute::<Lead>(descriptor()).await.unwrap_err();
        assert!(matches!(
            err,
            MarketoError::Decode(DecodeError::Deserialization { .. })
        ));
    }

    #[tokio::test]
    async fn test_execute_maps_unexpected_status() {
        let transport = Arc::new(
            MockHttpTransport::new()
                .add_response(token_ok())
                .add_response(MockResponse::status(503, "unavailable")),
        );
        let executor = executor_with(transport);

        let err = executor.execute::<Lead>(descriptor()).await.unwrap_err();
        assert!(matches!(
            err,
            MarketoError::Decode(DecodeError::UnexpectedStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_execute_empty_error_list_uses_placeholder() {
        let transport = Arc::new(
            MockHttpTransport::new()
                .add_response(token_ok())
                .add_response(MockResponse::ok(r#"{"success":false}"#)),
        );
        let executor = executor_with(transport);

        let err = executor.execute::<Lead>(descriptor()).await.unwrap_err();
        match err {
            MarketoError::Api { code, .. } => assert_eq!(code, "unknown"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

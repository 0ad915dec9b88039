//! HTTP transport layer for the Marketo client.
//!
//! Provides low-level HTTP communication with the Marketo API. The transport
//! returns the raw status and body; envelope decoding lives in the executor.

use crate::errors::{MarketoResult, TransportError};
use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and receive the raw response
    async fn send(&self, request: TransportRequest) -> MarketoResult<TransportResponse>;
}

/// Request body variants
#[derive(Debug, Clone)]
pub enum TransportBody {
    /// JSON body
    Json(serde_json::Value),
    /// URL-encoded form body
    Form(Vec<(String, String)>),
}

/// A fully-resolved request handed to the transport
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, query string included
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<TransportBody>,
}

impl TransportRequest {
    /// Create a new GET request
    pub fn get(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers,
            body: None,
        }
    }

    /// Create a new POST request with a JSON body
    pub fn post_json(
        url: impl Into<String>,
        headers: HeaderMap,
        body: serde_json::Value,
    ) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            body: Some(TransportBody::Json(body)),
        }
    }

    /// Create a new POST request with a form-encoded body
    pub fn post_form(
        url: impl Into<String>,
        headers: HeaderMap,
        fields: Vec<(String, String)>,
    ) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            body: Some(TransportBody::Form(fields)),
        }
    }
}

/// Raw response from the transport
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body text
    pub body: String,
}

impl TransportResponse {
    /// Check for an HTTP-level success status
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> MarketoResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        Ok(Self { client })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: TransportRequest) -> MarketoResult<TransportResponse> {
        let mut req_builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        match request.body {
            Some(TransportBody::Json(json)) => {
                req_builder = req_builder.json(&json);
            }
            Some(TransportBody::Form(fields)) => {
                req_builder = req_builder.form(&fields);
            }
            None => {}
        }

        let response = req_builder
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;

        debug!(status = %status, response_body = %body, "Received response");

        Ok(TransportResponse { status, body })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request_builder() {
        let request = TransportRequest::get("https://app.example.com/rest/v1/lists.json", HeaderMap::new());

        assert_eq!(request.method, Method::GET);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_post_json_request_builder() {
        let body = serde_json::json!({"action": "createOnly"});
        let request = TransportRequest::post_json(
            "https://app.example.com/rest/v1/leads.json",
            HeaderMap::new(),
            body,
        );

        assert_eq!(request.method, Method::POST);
        assert!(matches!(request.body, Some(TransportBody::Json(_))));
    }

    #[test]
    fn test_post_form_request_builder() {
        let request = TransportRequest::post_form(
            "https://app.example.com/identity/oauth/token",
            HeaderMap::new(),
            vec![("grant_type".to_string(), "client_credentials".to_string())],
        );

        match request.body {
            Some(TransportBody::Form(fields)) => {
                assert_eq!(fields[0].0, "grant_type");
            }
            _ => panic!("expected form body"),
        }
    }
}

//! Mock implementations for testing.
//!
//! Provides a mock transport that queues canned responses and records every
//! outgoing request for verification.

use crate::errors::MarketoResult;
use crate::transport::{HttpTransport, TransportBody, TransportRequest, TransportResponse};
use async_trait::async_trait;
use http::StatusCode;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Mock response configuration
#[derive(Debug)]
pub struct MockResponse {
    /// Response body
    pub body: String,
    /// HTTP status code
    pub status: u16,
    /// Error to return instead of a response
    pub error: Option<crate::errors::MarketoError>,
}

impl MockResponse {
    /// Create a 200 response with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status: 200,
            error: None,
        }
    }

    /// Create a response with an explicit status code
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status,
            error: None,
        }
    }

    /// Create a successful Marketo envelope wrapping the given result JSON
    pub fn envelope(result_json: &str) -> Self {
        Self::ok(format!(
            r#"{{"requestId":"mock#1","success":true,"result":{}}}"#,
            result_json
        ))
    }

    /// Create a failed Marketo envelope with one error entry
    pub fn api_error(code: &str, message: &str) -> Self {
        Self::ok(format!(
            r#"{{"requestId":"mock#1","success":false,"errors":[{{"code":"{}","message":"{}"}}]}}"#,
            code, message
        ))
    }

    /// Create a response that fails with the given error
    pub fn error(error: crate::errors::MarketoError) -> Self {
        Self {
            body: String::new(),
            status: 0,
            error: Some(error),
        }
    }
}

/// Recorded request for verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request method
    pub method: String,
    /// Request body rendered as text (JSON or form-encoded)
    pub body: Option<String>,
    /// Request headers
    pub headers: Vec<(String, String)>,
}

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a response
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Queue multiple responses
    pub fn add_responses(self, responses: impl IntoIterator<Item = MockResponse>) -> Self {
        let mut queue = self.responses.lock();
        for response in responses {
            queue.push_back(response);
        }
        drop(queue);
        self
    }

    /// Get all recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Number of queued responses not yet consumed
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }

    fn record(&self, request: &TransportRequest) {
        let body = request.body.as_ref().map(|body| match body {
            TransportBody::Json(json) => json.to_string(),
            TransportBody::Form(fields) => fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("&"),
        });

        let headers = request
            .headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        self.requests.lock().push(RecordedRequest {
            url: request.url.clone(),
            method: request.method.to_string(),
            body,
            headers,
        });
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: TransportRequest) -> MarketoResult<TransportResponse> {
        self.record(&request);

        let response = self
            .responses
            .lock()
            .pop_front()
            .expect("MockHttpTransport: no queued response for request");

        if let Some(error) = response.error {
            return Err(error);
        }

        Ok(TransportResponse {
            status: StatusCode::from_u16(response.status).expect("valid mock status"),
            body: response.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, Method};

    #[tokio::test]
    async fn test_mock_records_and_replays() {
        let transport = MockHttpTransport::new()
            .add_response(MockResponse::envelope(r#"[{"id":1}]"#));

        let response = transport
            .send(TransportRequest {
                method: Method::GET,
                url: "https://x.test/rest/v1/leads/1.json".to_string(),
                headers: HeaderMap::new(),
                body: None,
            })
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains(r#""success":true"#));

        let recorded = transport.last_request().unwrap();
        assert_eq!(recorded.method, "GET");
        assert_eq!(recorded.url, "https://x.test/rest/v1/leads/1.json");
    }

    #[tokio::test]
    async fn test_mock_error_response() {
        let transport = MockHttpTransport::new().add_response(MockResponse::error(
            crate::errors::MarketoError::Transport(crate::errors::TransportError::Timeout),
        ));

        let result = transport
            .send(TransportRequest::get("https://x.test", HeaderMap::new()))
            .await;
        assert!(result.is_err());
    }
}

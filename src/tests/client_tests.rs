//! Client-level tests: token lifecycle across services.

use crate::config::MarketoConfigBuilder;
use crate::fixtures;
use crate::mocks::{MockHttpTransport, MockResponse};
use crate::services::campaigns::CampaignsServiceTrait;
use crate::services::lists::ListsServiceTrait;
use crate::MarketoClientImpl;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn client_with(transport: Arc<MockHttpTransport>) -> MarketoClientImpl {
    let config = MarketoConfigBuilder::new()
        .base_url("https://app.example.com")
        .unwrap()
        .client_id("client")
        .client_secret("secret")
        .build_unchecked();
    MarketoClientImpl::with_transport(config, transport).unwrap()
}

#[tokio::test]
async fn one_token_request_is_shared_across_services() {
    let transport = Arc::new(MockHttpTransport::new().add_responses([
        MockResponse::ok(fixtures::TOKEN_RESPONSE),
        MockResponse::ok(fixtures::LISTS_ENVELOPE),
        MockResponse::ok(fixtures::CAMPAIGN_ENVELOPE),
    ]));
    let client = client_with(transport.clone());

    client.lists().find_list(100).await.unwrap();
    client.campaigns().find_campaign(1004).await.unwrap();

    let token_requests: Vec<_> = transport
        .recorded_requests()
        .into_iter()
        .filter(|r| r.url.ends_with("/identity/oauth/token"))
        .collect();
    assert_eq!(token_requests.len(), 1);
}

#[tokio::test]
async fn invalidated_token_is_reacquired() {
    let transport = Arc::new(MockHttpTransport::new().add_responses([
        MockResponse::ok(fixtures::TOKEN_RESPONSE),
        MockResponse::ok(fixtures::LISTS_ENVELOPE),
        MockResponse::ok(fixtures::TOKEN_RESPONSE),
        MockResponse::ok(fixtures::LISTS_ENVELOPE),
    ]));
    let client = client_with(transport.clone());

    client.lists().find_list(100).await.unwrap();
    client.authenticator().invalidate().await;
    client.lists().find_list(100).await.unwrap();

    let token_requests = transport
        .recorded_requests()
        .into_iter()
        .filter(|r| r.url.ends_with("/identity/oauth/token"))
        .count();
    assert_eq!(token_requests, 2);
}

#[tokio::test]
async fn every_api_request_carries_the_bearer_token() {
    let transport = Arc::new(MockHttpTransport::new().add_responses([
        MockResponse::ok(fixtures::TOKEN_RESPONSE),
        MockResponse::ok(fixtures::LISTS_ENVELOPE),
        MockResponse::ok(fixtures::CAMPAIGN_ENVELOPE),
    ]));
    let client = client_with(transport.clone());

    client.lists().find_list(100).await.unwrap();
    client.campaigns().find_campaign(1004).await.unwrap();

    for request in transport
        .recorded_requests()
        .into_iter()
        .filter(|r| !r.url.ends_with("/identity/oauth/token"))
    {
        let auth = request
            .headers
            .iter()
            .find(|(name, _)| name == "authorization")
            .map(|(_, value)| value.clone());
        assert_eq!(auth.as_deref(), Some("Bearer fixture-token"), "{}", request.url);
    }
}

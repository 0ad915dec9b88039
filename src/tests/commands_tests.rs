//! Resolution failures must surface before any network activity.

use crate::auth::Authenticator;
use crate::commands::{command, Args, CommandResolver, CATALOG};
use crate::config::MarketoConfigBuilder;
use crate::errors::{CommandError, MarketoError, MarketoResult};
use crate::executor::Executor;
use crate::mocks::MockHttpTransport;
use crate::types::{Lead, ResponseEnvelope};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn resolver() -> CommandResolver {
    CommandResolver::new("https://app.example.com/rest/v1")
}

#[test]
fn unknown_command_fails_resolution() {
    let err = resolver().resolve("cloneProgram", Args::new()).unwrap_err();
    assert!(matches!(
        err,
        MarketoError::Command(CommandError::UnknownCommand { .. })
    ));
}

#[test]
fn missing_required_parameter_fails_resolution() {
    for (name, args) in [
        ("getList", Args::new()),
        ("getLead", Args::new()),
        ("isMemberOfList", Args::new().set("listId", 100)),
        ("getLeadsByFilterType", Args::new().set("filterType", "email")),
        ("createOrUpdateLeads", Args::new().set("action", "createOnly")),
    ] {
        let err = resolver().resolve(name, args).unwrap_err();
        assert!(
            matches!(
                err,
                MarketoError::Command(CommandError::MissingParameter { .. })
            ),
            "expected missing-parameter error for {name}"
        );
    }
}

#[test]
fn resolved_paths_carry_the_rest_prefix() {
    let descriptor = resolver()
        .resolve("getLists", Args::new())
        .unwrap();
    assert_eq!(
        descriptor.url.as_str(),
        "https://app.example.com/rest/v1/lists.json"
    );
}

#[test]
fn catalog_templates_match_declared_verbs() {
    // GET commands never declare body parameters
    for spec in CATALOG {
        if spec.method == http::Method::GET {
            assert!(
                spec.params
                    .iter()
                    .all(|p| p.placement != crate::commands::Placement::Body),
                "GET command {} declares a body parameter",
                spec.name
            );
        }
    }
}

#[tokio::test]
async fn resolution_failures_reach_no_transport() {
    // No queued responses: any request through the mock would panic
    let transport = Arc::new(MockHttpTransport::new());
    let config = Arc::new(
        MarketoConfigBuilder::new()
            .base_url("https://app.example.com")
            .unwrap()
            .client_id("client")
            .client_secret("secret")
            .build_unchecked(),
    );
    let auth = Authenticator::new(config, transport.clone());
    let executor = Executor::new(transport.clone(), auth);

    // Same resolve-then-execute sequence the services run
    let call = |name: &'static str, args: Args| {
        let resolver = resolver();
        let executor = executor.clone();
        async move {
            let result: MarketoResult<ResponseEnvelope<Lead>> =
                match resolver.resolve(name, args) {
                    Ok(descriptor) => executor.execute(descriptor).await,
                    Err(err) => Err(err),
                };
            result
        }
    };

    let err = call("isMemberOfList", Args::new().set("listId", 100))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MarketoError::Command(CommandError::MissingParameter { .. })
    ));

    let err = call("cloneProgram", Args::new()).await.unwrap_err();
    assert!(matches!(
        err,
        MarketoError::Command(CommandError::UnknownCommand { .. })
    ));

    assert!(transport.recorded_requests().is_empty());
}

#[test]
fn remove_command_uses_the_corrected_name() {
    assert!(command("removeLeadsFromList").is_some());
    assert!(command("removeLeadsToList").is_none());
}

//! Tests for deployment bucket resolution.

#![allow(clippy::expect_used)]

use deployctl_cli::application::services::deploy::DeployState;
use deployctl_cli::domain::error::error_code;
use deployctl_cli::domain::stack::ProviderRequest;

use crate::mocks::{RecordingProvider, SERVICE_YAML, service};

#[tokio::test]
async fn test_bucket_is_looked_up_from_stack_resource() {
    let target = service(SERVICE_YAML).resolve(Some("prod"), None);
    let provider = RecordingProvider {
        bucket: Some("svc-prod-serverlessdeploymentbucket-1a2b".into()),
        ..RecordingProvider::default()
    };
    let mut state = DeployState::default();

    let name = state
        .set_bucket_name(&provider, &target)
        .await
        .expect("resolved")
        .to_string();

    assert_eq!(name, "svc-prod-serverlessdeploymentbucket-1a2b");
    assert_eq!(
        provider.requests(),
        vec![ProviderRequest::DescribeStackResource {
            stack_name: "svc-prod".into(),
            logical_resource_id: "ServerlessDeploymentBucket".into(),
        }]
    );
}

#[tokio::test]
async fn test_configured_bucket_skips_provider() {
    let yaml = "\
service: svc
provider:
  deploymentBucket: my-artifacts
";
    let target = service(yaml).resolve(None, None);
    let provider = RecordingProvider::default();
    let mut state = DeployState::default();

    let name = state
        .set_bucket_name(&provider, &target)
        .await
        .expect("resolved")
        .to_string();

    assert_eq!(name, "my-artifacts");
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_bucket_name_is_resolved_once() {
    let target = service(SERVICE_YAML).resolve(None, None);
    let provider = RecordingProvider {
        bucket: Some("b".into()),
        ..RecordingProvider::default()
    };
    let mut state = DeployState::default();

    state.set_bucket_name(&provider, &target).await.expect("first");
    state.set_bucket_name(&provider, &target).await.expect("second");

    assert_eq!(provider.requests().len(), 1);
    assert_eq!(state.bucket_name(), Some("b"));
}

#[tokio::test]
async fn test_known_bucket_name_wins() {
    let target = service(SERVICE_YAML).resolve(None, None);
    let provider = RecordingProvider::default();
    let mut state = DeployState::with_bucket_name("preset");

    let name = state
        .set_bucket_name(&provider, &target)
        .await
        .expect("resolved")
        .to_string();

    assert_eq!(name, "preset");
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_missing_bucket_resource_is_an_error_and_not_memoized() {
    let target = service(SERVICE_YAML).resolve(None, None);
    let provider = RecordingProvider::default();
    let mut state = DeployState::default();

    let err = state
        .set_bucket_name(&provider, &target)
        .await
        .expect_err("should fail");

    assert_eq!(error_code(&err), "STACK_RESOURCE_NOT_FOUND");
    assert_eq!(state.bucket_name(), None);
}

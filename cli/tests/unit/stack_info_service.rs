//! Tests for the `gather_stack_info` application service.
//!
//! Verifies request order against the provider and how the stack's outputs
//! become the `info` report.

#![allow(clippy::expect_used)]

use deployctl_cli::application::services::stack_info::gather_stack_info;
use deployctl_cli::domain::error::error_code;
use deployctl_cli::domain::stack::ProviderRequest;

use crate::mocks::{RecordingProvider, SERVICE_YAML, output, service};

const HTTP_API_YAML: &str = "\
service: svc
provider:
  name: aws
  httpApi:
    id: abc123
functions:
  hello:
";

// ── Absent stack ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_absent_stack_yields_empty_report() {
    let target = service(SERVICE_YAML).resolve(None, None);
    let provider = RecordingProvider::default();

    let report = gather_stack_info(&provider, &target).await.expect("gather");

    assert!(report.info.functions.is_empty());
    assert!(report.info.layers.is_empty());
    assert!(report.info.endpoints.is_empty());
    assert!(report.info.cloud_front.is_none());
    assert!(report.outputs.is_empty());
    assert_eq!(report.info.stack, "svc-dev");

    let json = serde_json::to_value(&report).expect("json");
    assert!(json["info"].get("cloudFront").is_none());
}

#[tokio::test]
async fn test_absent_stack_with_http_api_issues_two_requests_in_order() {
    let target = service(HTTP_API_YAML).resolve(Some("prod"), None);
    let provider = RecordingProvider {
        api_endpoint: Some("https://abc123.execute-api.us-east-1.amazonaws.com".into()),
        ..RecordingProvider::default()
    };

    let report = gather_stack_info(&provider, &target).await.expect("gather");

    assert_eq!(
        provider.requests(),
        vec![
            ProviderRequest::DescribeStacks {
                stack_name: "svc-prod".into()
            },
            ProviderRequest::GetApi {
                api_id: "abc123".into()
            },
        ]
    );
    assert_eq!(
        report.info.endpoints,
        vec!["httpApi: https://abc123.execute-api.us-east-1.amazonaws.com"]
    );
    assert!(report.info.functions.is_empty());
}

#[tokio::test]
async fn test_no_http_api_means_single_request() {
    let target = service(SERVICE_YAML).resolve(None, None);
    let provider = RecordingProvider::default();

    gather_stack_info(&provider, &target).await.expect("gather");

    assert_eq!(provider.requests().len(), 1);
}

// ── Present stack ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_service_endpoint_and_functions_are_reported() {
    let target = service(SERVICE_YAML).resolve(None, None);
    let provider = RecordingProvider::with_outputs(
        "svc-dev",
        vec![output("ServiceEndpoint", "https://e1.example.com/dev")],
    );

    let report = gather_stack_info(&provider, &target).await.expect("gather");

    assert_eq!(report.info.endpoints, vec!["https://e1.example.com/dev"]);
    let names: Vec<_> = report
        .info
        .functions
        .iter()
        .map(|f| (f.name.as_str(), f.deployed_name.as_str()))
        .collect();
    assert_eq!(names, vec![("hello", "svc-dev-hello"), ("world", "custom-world")]);
    assert!(report.info.functions.iter().all(|f| f.artifact_size.is_none()));
}

#[tokio::test]
async fn test_rest_endpoint_comes_before_http_api_endpoint() {
    let target = service(HTTP_API_YAML).resolve(None, None);
    let provider = RecordingProvider {
        api_endpoint: Some("https://h.example.com".into()),
        ..RecordingProvider::with_outputs(
            "svc-dev",
            vec![output("ServiceEndpoint", "https://r.example.com/dev")],
        )
    };

    let report = gather_stack_info(&provider, &target).await.expect("gather");

    assert_eq!(
        report.info.endpoints,
        vec!["https://r.example.com/dev", "httpApi: https://h.example.com"]
    );
}

#[tokio::test]
async fn test_matching_layer_output_yields_one_entry() {
    let yaml = "\
service: svc
layers:
  deps:
  my-utils:
  unpublished:
";
    let target = service(yaml).resolve(None, None);
    let provider = RecordingProvider::with_outputs(
        "svc-dev",
        vec![
            output("DepsLambdaLayerQualifiedArn", "arn:aws:lambda:us-east-1:1:layer:deps:4"),
            output(
                "MyDashutilsLambdaLayerQualifiedArn",
                "arn:aws:lambda:us-east-1:1:layer:my-utils:2",
            ),
            output("SomethingElse", "ignored"),
        ],
    );

    let report = gather_stack_info(&provider, &target).await.expect("gather");

    let layers: Vec<_> = report
        .info
        .layers
        .iter()
        .map(|l| (l.name.as_str(), l.arn.as_str()))
        .collect();
    assert_eq!(
        layers,
        vec![
            ("deps", "arn:aws:lambda:us-east-1:1:layer:deps:4"),
            ("my-utils", "arn:aws:lambda:us-east-1:1:layer:my-utils:2"),
        ]
    );
    assert_eq!(report.outputs.len(), 3, "outputs are passed through verbatim");
}

#[tokio::test]
async fn test_cloudfront_domain_is_reported() {
    let target = service(SERVICE_YAML).resolve(None, None);
    let provider = RecordingProvider::with_outputs(
        "svc-dev",
        vec![output("CloudFrontDistributionDomainName", "d111.cloudfront.net")],
    );

    let report = gather_stack_info(&provider, &target).await.expect("gather");

    assert_eq!(report.info.cloud_front.as_deref(), Some("d111.cloudfront.net"));
    assert!(report.info.endpoints.is_empty());
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_other_provider_errors_propagate() {
    let target = service(HTTP_API_YAML).resolve(None, None);
    let provider = RecordingProvider {
        describe_failure: Some("ExpiredToken: the security token has expired".into()),
        ..RecordingProvider::default()
    };

    let err = gather_stack_info(&provider, &target)
        .await
        .expect_err("should fail");

    assert!(err.to_string().contains("ExpiredToken"));
    assert_eq!(error_code(&err), "UNEXPECTED_ERROR");
    assert_eq!(provider.requests().len(), 1, "getApi must not run after a failure");
}

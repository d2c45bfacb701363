//! Deterministic resource names shared by the CLI and its tests.

/// Name of the CloudFormation stack for a service stage.
#[must_use]
pub fn stack_name(service: &str, stage: &str) -> String {
    format!("{service}-{stage}")
}

/// Default physical name of a function that does not declare `name`.
#[must_use]
pub fn function_deployed_name(service: &str, stage: &str, function: &str) -> String {
    format!("{service}-{stage}-{function}")
}

/// Upper-cases the first character.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Like [`normalize_name`], but spells out `-` and `_` so the result is a
/// valid CloudFormation logical id.
#[must_use]
pub fn normalize_name_with_separators(name: &str) -> String {
    normalize_name(&name.replace('-', "Dash").replace('_', "Underscore"))
}

/// Logical id of a layer version resource.
#[must_use]
pub fn layer_logical_id(layer: &str) -> String {
    format!("{}LambdaLayer", normalize_name_with_separators(layer))
}

/// Stack output key holding a layer's qualified ARN.
#[must_use]
pub fn layer_output_key(layer: &str) -> String {
    format!("{}QualifiedArn", layer_logical_id(layer))
}

/// Output key of the REST API endpoint.
pub const SERVICE_ENDPOINT_OUTPUT: &str = "ServiceEndpoint";

/// Output key of the CloudFront distribution domain.
pub const CLOUDFRONT_DOMAIN_OUTPUT: &str = "CloudFrontDistributionDomainName";

/// Logical id of the deployment bucket resource.
pub const DEPLOYMENT_BUCKET_LOGICAL_ID: &str = "ServerlessDeploymentBucket";

//! Deployed stack model and the `info` aggregation.
//!
//! Pure functions only. The provider calls happen in
//! `application::services::stack_info`.

use std::fmt;

use deployctl_common::naming::{self, CLOUDFRONT_DOMAIN_OUTPUT, SERVICE_ENDPOINT_OUTPUT};
use deployctl_common::{FunctionInfo, GatheredInfo, LayerInfo, StackInfo, StackOutput};

use crate::domain::service::DeployTarget;

/// A deployed stack as returned by `describeStacks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    pub stack_name: String,
    pub outputs: Vec<StackOutput>,
}

impl Stack {
    /// Value of the first output with `key`.
    #[must_use]
    pub fn output(&self, key: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|o| o.output_key == key)
            .map(|o| o.output_value.as_str())
    }
}

/// An HTTP API as returned by `getApi`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpApi {
    pub api_endpoint: Option<String>,
}

/// A single provider call, named the way the provider names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderRequest {
    DescribeStacks {
        stack_name: String,
    },
    GetApi {
        api_id: String,
    },
    DescribeStackResource {
        stack_name: String,
        logical_resource_id: String,
    },
}

impl ProviderRequest {
    #[must_use]
    pub fn service(&self) -> &'static str {
        match self {
            Self::DescribeStacks { .. } | Self::DescribeStackResource { .. } => "CloudFormation",
            Self::GetApi { .. } => "ApiGatewayV2",
        }
    }

    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            Self::DescribeStacks { .. } => "describeStacks",
            Self::GetApi { .. } => "getApi",
            Self::DescribeStackResource { .. } => "describeStackResource",
        }
    }
}

impl fmt::Display for ProviderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.service(), self.operation())?;
        match self {
            Self::DescribeStacks { stack_name } => write!(f, " StackName={stack_name}"),
            Self::GetApi { api_id } => write!(f, " ApiId={api_id}"),
            Self::DescribeStackResource {
                stack_name,
                logical_resource_id,
            } => write!(
                f,
                " StackName={stack_name} LogicalResourceId={logical_resource_id}"
            ),
        }
    }
}

/// Prefix of the endpoint entry contributed by an HTTP API.
pub const HTTP_API_ENDPOINT_PREFIX: &str = "httpApi: ";

/// Builds the `info` report from a describe result and an optional HTTP API.
///
/// With no stack, functions, layers, and outputs are empty and `cloudFront`
/// is absent; the HTTP API endpoint is still reported.
#[must_use]
pub fn aggregate_stack_info(
    stack: Option<&Stack>,
    http_api: Option<&HttpApi>,
    target: &DeployTarget,
) -> StackInfo {
    let mut info = GatheredInfo {
        functions: Vec::new(),
        layers: Vec::new(),
        endpoints: Vec::new(),
        cloud_front: None,
        service: target.service.clone(),
        stage: target.stage.clone(),
        region: target.region.clone(),
        stack: target.stack.clone(),
    };

    if let Some(stack) = stack {
        info.functions = target
            .functions
            .iter()
            .map(|f| FunctionInfo {
                name: f.logical_name.clone(),
                deployed_name: f.deployed_name.clone(),
                artifact_size: None,
            })
            .collect();

        info.layers = target
            .layers
            .iter()
            .filter_map(|layer| {
                stack
                    .output(&naming::layer_output_key(layer))
                    .map(|arn| LayerInfo {
                        name: layer.clone(),
                        arn: arn.to_string(),
                    })
            })
            .collect();

        if let Some(endpoint) = stack.output(SERVICE_ENDPOINT_OUTPUT) {
            info.endpoints.push(endpoint.to_string());
        }
        info.cloud_front = stack.output(CLOUDFRONT_DOMAIN_OUTPUT).map(str::to_string);
    }

    if let Some(endpoint) = http_api.and_then(|api| api.api_endpoint.as_deref()) {
        info.endpoints
            .push(format!("{HTTP_API_ENDPOINT_PREFIX}{endpoint}"));
    }

    StackInfo {
        info,
        outputs: stack.map(|s| s.outputs.clone()).unwrap_or_default(),
    }
}

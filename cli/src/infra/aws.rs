//! AWS SDK implementation of the `CloudProvider` port.
//!
//! One SDK call per port method, no retries beyond the SDK's own policy.

use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cloudformation::config::http::HttpResponse;
use aws_sdk_cloudformation::error::{ProvideErrorMetadata, SdkError};
use deployctl_common::StackOutput;

use crate::application::ports::CloudProvider;
use crate::domain::error::ProviderError;
use crate::domain::stack::{HttpApi, ProviderRequest, Stack};

/// CloudFormation + API Gateway v2 clients bound to one region.
pub struct AwsProvider {
    cloudformation: aws_sdk_cloudformation::Client,
    api_gateway: aws_sdk_apigatewayv2::Client,
}

impl AwsProvider {
    /// Load the default credential chain for `region`, optionally pinned to
    /// a named profile.
    pub async fn connect(region: &str, profile: Option<&str>) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;
        Self {
            cloudformation: aws_sdk_cloudformation::Client::new(&sdk_config),
            api_gateway: aws_sdk_apigatewayv2::Client::new(&sdk_config),
        }
    }
}

fn is_missing_stack_message(message: Option<&str>) -> bool {
    message.is_some_and(|m| m.contains("does not exist"))
}

/// Maps a CloudFormation SDK error: a missing stack becomes
/// `ProviderError::StackNotFound`, anything else keeps its source.
fn map_cfn_error<E>(
    err: SdkError<E, HttpResponse>,
    stack_name: &str,
    request: &ProviderRequest,
) -> anyhow::Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    if is_missing_stack_message(err.as_service_error().and_then(ProvideErrorMetadata::message)) {
        return ProviderError::StackNotFound {
            stack: stack_name.to_string(),
        }
        .into();
    }
    anyhow::Error::new(err).context(format!("{request} failed"))
}

impl CloudProvider for AwsProvider {
    async fn describe_stack(&self, stack_name: &str) -> Result<Option<Stack>> {
        let request = ProviderRequest::DescribeStacks {
            stack_name: stack_name.to_string(),
        };
        tracing::debug!(%request, "provider request");

        let response = self
            .cloudformation
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(|err| map_cfn_error(err, stack_name, &request))?;

        let Some(stack) = response.stacks().first() else {
            return Ok(None);
        };
        let outputs = stack
            .outputs()
            .iter()
            .filter_map(|o| {
                Some(StackOutput {
                    description: o.description().map(str::to_string),
                    output_key: o.output_key()?.to_string(),
                    output_value: o.output_value()?.to_string(),
                })
            })
            .collect();
        Ok(Some(Stack {
            stack_name: stack.stack_name().unwrap_or(stack_name).to_string(),
            outputs,
        }))
    }

    async fn get_http_api(&self, api_id: &str) -> Result<HttpApi> {
        let request = ProviderRequest::GetApi {
            api_id: api_id.to_string(),
        };
        tracing::debug!(%request, "provider request");

        let response = self
            .api_gateway
            .get_api()
            .api_id(api_id)
            .send()
            .await
            .map_err(anyhow::Error::new)
            .with_context(|| format!("{request} failed"))?;
        Ok(HttpApi {
            api_endpoint: response.api_endpoint().map(str::to_string),
        })
    }

    async fn stack_resource_physical_id(
        &self,
        stack_name: &str,
        logical_id: &str,
    ) -> Result<String> {
        let request = ProviderRequest::DescribeStackResource {
            stack_name: stack_name.to_string(),
            logical_resource_id: logical_id.to_string(),
        };
        tracing::debug!(%request, "provider request");

        let response = self
            .cloudformation
            .describe_stack_resource()
            .stack_name(stack_name)
            .logical_resource_id(logical_id)
            .send()
            .await
            .map_err(|err| map_cfn_error(err, stack_name, &request))?;

        response
            .stack_resource_detail()
            .and_then(|detail| detail.physical_resource_id())
            .map(str::to_string)
            .ok_or_else(|| {
                ProviderError::ResourceNotFound {
                    stack: stack_name.to_string(),
                    logical_id: logical_id.to_string(),
                }
                .into()
            })
    }
}

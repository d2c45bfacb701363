//! Application service: `info` gathering use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through the injected `CloudProvider`.

use anyhow::Result;
use deployctl_common::StackInfo;

use crate::application::ports::CloudProvider;
use crate::domain::error::is_stack_not_found;
use crate::domain::service::DeployTarget;
use crate::domain::stack::{Stack, aggregate_stack_info};

/// Describe the target's stack (and its HTTP API, if configured) and build
/// the `info` report.
///
/// Requests are issued in order: `describeStacks`, then `getApi` when
/// `provider.httpApi.id` is set.
///
/// # Errors
///
/// Provider errors propagate, except a missing stack which yields an empty
/// report.
pub async fn gather_stack_info(
    provider: &impl CloudProvider,
    target: &DeployTarget,
) -> Result<StackInfo> {
    let stack = describe_stack_or_none(provider, &target.stack).await?;

    let http_api = match &target.http_api_id {
        Some(api_id) => Some(provider.get_http_api(api_id).await?),
        None => None,
    };

    Ok(aggregate_stack_info(
        stack.as_ref(),
        http_api.as_ref(),
        target,
    ))
}

async fn describe_stack_or_none(
    provider: &impl CloudProvider,
    stack_name: &str,
) -> Result<Option<Stack>> {
    match provider.describe_stack(stack_name).await {
        Ok(Some(stack)) => {
            tracing::debug!(
                stack_name = %stack.stack_name,
                outputs = stack.outputs.len(),
                "stack described"
            );
            Ok(Some(stack))
        }
        Ok(None) => Ok(None),
        Err(e) if is_stack_not_found(&e) => {
            tracing::debug!(stack_name, "stack does not exist yet");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

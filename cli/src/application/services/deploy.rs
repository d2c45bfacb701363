//! Application service: deployment bucket resolution.

use anyhow::Result;
use deployctl_common::naming::DEPLOYMENT_BUCKET_LOGICAL_ID;

use crate::application::ports::CloudProvider;
use crate::domain::service::DeployTarget;

/// Per-run deploy state.
#[derive(Debug, Default)]
pub struct DeployState {
    bucket_name: Option<String>,
}

impl DeployState {
    #[must_use]
    pub fn with_bucket_name(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: Some(bucket_name.into()),
        }
    }

    #[must_use]
    pub fn bucket_name(&self) -> Option<&str> {
        self.bucket_name.as_deref()
    }

    /// Resolve the deployment bucket once.
    ///
    /// Order: the already-known name, then `provider.deploymentBucket`,
    /// then the stack's `ServerlessDeploymentBucket` resource.
    ///
    /// # Errors
    ///
    /// Provider errors propagate; nothing is memoized on failure.
    pub async fn set_bucket_name(
        &mut self,
        provider: &impl CloudProvider,
        target: &DeployTarget,
    ) -> Result<&str> {
        if self.bucket_name.is_none() {
            let name = match &target.deployment_bucket {
                Some(configured) => configured.clone(),
                None => {
                    provider
                        .stack_resource_physical_id(&target.stack, DEPLOYMENT_BUCKET_LOGICAL_ID)
                        .await?
                }
            };
            self.bucket_name = Some(name);
        }
        Ok(self.bucket_name.as_deref().unwrap_or_default())
    }
}

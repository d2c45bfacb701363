//! `deployctl bucket`: resolve the deployment bucket of a stage.

use anyhow::Result;
use futures_util::future::LocalBoxFuture;

use crate::app::AppContext;
use crate::application::ports::{CloudProvider, ServiceConfigStore as _};
use crate::application::services::deploy::DeployState;
use crate::application::{HookRegistry, LifecycleEvent};
use crate::commands::ServiceArgs;
use crate::domain::service::{DeployTarget, ServiceConfig};
use crate::infra::aws::AwsProvider;

/// Events `bucket` goes through, in order.
pub const EVENTS: [LifecycleEvent; 2] = [
    LifecycleEvent::Initialize,
    LifecycleEvent::DeploySetBucketName,
];

/// State threaded through the `bucket` hooks.
pub struct BucketLifecycle<'a, P> {
    pub app: &'a AppContext,
    pub provider: &'a P,
    pub service: ServiceConfig,
    pub target: DeployTarget,
    pub deploy: DeployState,
}

/// Run the bucket command.
///
/// # Errors
///
/// Service file, provider, and rendering errors propagate.
pub async fn run(app: &AppContext, args: &ServiceArgs) -> Result<()> {
    let service = app.service_config.load()?;
    let target = service.resolve(args.stage.as_deref(), args.region.as_deref());
    let provider = AwsProvider::connect(&target.region, args.aws_profile.as_deref()).await;
    let bucket = execute(app, &provider, service, target).await?;
    app.renderer().render_bucket(&bucket)
}

/// Run the `bucket` lifecycle and return the resolved name.
///
/// # Errors
///
/// Returns the first hook error.
pub async fn execute<P: CloudProvider>(
    app: &AppContext,
    provider: &P,
    service: ServiceConfig,
    target: DeployTarget,
) -> Result<String> {
    let mut hooks: HookRegistry<BucketLifecycle<'_, P>> = HookRegistry::new();
    hooks
        .register(LifecycleEvent::Initialize, initialize)
        .register(LifecycleEvent::DeploySetBucketName, set_bucket_name);

    let mut run = BucketLifecycle {
        app,
        provider,
        service,
        target,
        deploy: DeployState::default(),
    };
    hooks.run_all(&EVENTS, &mut run).await?;
    Ok(run.deploy.bucket_name().unwrap_or_default().to_string())
}

fn initialize<'c, 'a, P: CloudProvider>(
    run: &'c mut BucketLifecycle<'a, P>,
) -> LocalBoxFuture<'c, Result<()>> {
    Box::pin(async move {
        run.app.report_deprecations(&run.service);
        Ok(())
    })
}

fn set_bucket_name<'c, 'a, P: CloudProvider>(
    run: &'c mut BucketLifecycle<'a, P>,
) -> LocalBoxFuture<'c, Result<()>> {
    Box::pin(async move {
        let name = run.deploy.set_bucket_name(run.provider, &run.target).await?;
        tracing::debug!(bucket = name, "deployment bucket resolved");
        Ok(())
    })
}

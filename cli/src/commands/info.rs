//! `deployctl info`: show what is deployed for a stage.

use anyhow::Result;
use deployctl_common::StackInfo;
use futures_util::future::LocalBoxFuture;

use crate::app::AppContext;
use crate::application::ports::{CloudProvider, ServiceConfigStore as _};
use crate::application::services::stack_info::gather_stack_info;
use crate::application::{HookRegistry, LifecycleEvent};
use crate::commands::ServiceArgs;
use crate::domain::service::{DeployTarget, ServiceConfig};
use crate::infra::aws::AwsProvider;
use crate::output::progress;

/// Events `info` goes through, in order.
pub const EVENTS: [LifecycleEvent; 3] = [
    LifecycleEvent::Initialize,
    LifecycleEvent::InfoGatherData,
    LifecycleEvent::InfoDisplay,
];

/// State threaded through the `info` hooks.
pub struct InfoLifecycle<'a, P> {
    pub app: &'a AppContext,
    pub provider: &'a P,
    pub service: ServiceConfig,
    pub target: DeployTarget,
    pub report: Option<StackInfo>,
}

/// Run the info command.
///
/// # Errors
///
/// Service file, provider, and rendering errors propagate.
pub async fn run(app: &AppContext, args: &ServiceArgs) -> Result<()> {
    let service = app.service_config.load()?;
    let target = service.resolve(args.stage.as_deref(), args.region.as_deref());
    let provider = AwsProvider::connect(&target.region, args.aws_profile.as_deref()).await;
    execute(app, &provider, service, target).await?;
    Ok(())
}

/// Run the `info` lifecycle against `provider`.
///
/// # Errors
///
/// Returns the first hook error.
pub async fn execute<P: CloudProvider>(
    app: &AppContext,
    provider: &P,
    service: ServiceConfig,
    target: DeployTarget,
) -> Result<Option<StackInfo>> {
    let mut hooks: HookRegistry<InfoLifecycle<'_, P>> = HookRegistry::new();
    hooks
        .register(LifecycleEvent::Initialize, initialize)
        .register(LifecycleEvent::InfoGatherData, gather_data)
        .register(LifecycleEvent::InfoDisplay, display);

    let mut run = InfoLifecycle {
        app,
        provider,
        service,
        target,
        report: None,
    };
    hooks.run_all(&EVENTS, &mut run).await?;
    Ok(run.report)
}

fn initialize<'c, 'a, P: CloudProvider>(
    run: &'c mut InfoLifecycle<'a, P>,
) -> LocalBoxFuture<'c, Result<()>> {
    Box::pin(async move {
        run.app.report_deprecations(&run.service);
        Ok(())
    })
}

fn gather_data<'c, 'a, P: CloudProvider>(
    run: &'c mut InfoLifecycle<'a, P>,
) -> LocalBoxFuture<'c, Result<()>> {
    Box::pin(async move {
        let spinner = run
            .app
            .output
            .show_progress()
            .then(|| progress::spinner(&format!("Gathering {}", run.target.stack)));
        let gathered = gather_stack_info(run.provider, &run.target).await;
        if let Some(pb) = &spinner {
            progress::finish_clear(pb);
        }
        run.report = Some(gathered?);
        Ok(())
    })
}

fn display<'c, 'a, P: CloudProvider>(
    run: &'c mut InfoLifecycle<'a, P>,
) -> LocalBoxFuture<'c, Result<()>> {
    Box::pin(async move {
        if let Some(report) = &run.report {
            run.app.renderer().render_info(report)?;
        }
        Ok(())
    })
}

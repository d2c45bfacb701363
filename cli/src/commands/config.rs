//! `deployctl config`: provider configuration.

use anyhow::Result;
use clap::{Args, Subcommand};
use futures_util::future::LocalBoxFuture;

use crate::app::AppContext;
use crate::application::ports::CredentialsStore;
use crate::application::services::credentials::{
    CredentialsOptions, CredentialsOutcome, configure_credentials,
};
use crate::application::{HookRegistry, LifecycleEvent};
use crate::infra::credentials::FileCredentialsStore;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Store provider credentials in a named profile
    Credentials(CredentialsArgs),
}

/// Arguments of `config credentials`.
#[derive(Args, Debug, Clone)]
pub struct CredentialsArgs {
    /// Provider name (only `aws` is handled)
    #[arg(short, long)]
    pub provider: String,

    /// Access key id
    #[arg(short, long)]
    pub key: Option<String>,

    /// Secret access key
    #[arg(short, long)]
    pub secret: Option<String>,

    /// Profile name (default: `default`)
    #[arg(short = 'n', long)]
    pub profile: Option<String>,

    /// Replace credentials already stored in the profile
    #[arg(short, long)]
    pub overwrite: bool,
}

impl From<CredentialsArgs> for CredentialsOptions {
    fn from(args: CredentialsArgs) -> Self {
        Self {
            provider: args.provider,
            key: args.key,
            secret: args.secret,
            profile: args.profile,
            overwrite: args.overwrite,
        }
    }
}

/// State threaded through the `config credentials` hooks.
pub struct CredentialsLifecycle<'a, S> {
    pub app: &'a AppContext,
    pub store: &'a S,
    pub options: CredentialsOptions,
    pub outcome: Option<CredentialsOutcome>,
}

/// Run the config command.
///
/// # Errors
///
/// Validation, credentials file, and rendering errors propagate.
pub async fn run(app: &AppContext, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Credentials(args) => {
            let store = FileCredentialsStore::new()?;
            let outcome = credentials(app, &store, args.into()).await?;
            app.renderer().render_credentials(&outcome)
        }
    }
}

/// Run the `config credentials` lifecycle against `store`.
///
/// # Errors
///
/// Returns the first hook error.
pub async fn credentials<S: CredentialsStore>(
    app: &AppContext,
    store: &S,
    options: CredentialsOptions,
) -> Result<CredentialsOutcome> {
    let mut hooks: HookRegistry<CredentialsLifecycle<'_, S>> = HookRegistry::new();
    hooks.register(LifecycleEvent::ConfigCredentials, configure);

    let mut run = CredentialsLifecycle {
        app,
        store,
        options,
        outcome: None,
    };
    hooks.run(LifecycleEvent::ConfigCredentials, &mut run).await?;
    run.outcome
        .ok_or_else(|| anyhow::anyhow!("no credentials handler ran"))
}

fn configure<'c, 'a, S: CredentialsStore>(
    run: &'c mut CredentialsLifecycle<'a, S>,
) -> LocalBoxFuture<'c, Result<()>> {
    Box::pin(async move {
        let reporter = run.app.reporter();
        let outcome = configure_credentials(run.store, &run.options, &reporter).await?;
        run.outcome = Some(outcome);
        Ok(())
    })
}

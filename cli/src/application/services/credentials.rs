//! Application service: `config credentials` use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::Result;

use crate::application::ports::{CredentialsStore, ProgressReporter};
use crate::domain::credentials::{
    Credentials, SUPPORTED_PROVIDER, apply_credentials, normalize_profile, normalize_provider,
};

/// Options of `config credentials` as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CredentialsOptions {
    pub provider: String,
    pub key: Option<String>,
    pub secret: Option<String>,
    pub profile: Option<String>,
    pub overwrite: bool,
}

/// What `configure_credentials` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsOutcome {
    /// The profile was written.
    Configured { profile: String },
    /// The provider is not handled here; nothing was read or written.
    UnsupportedProvider { provider: String },
}

/// Store an access key pair under a named profile.
///
/// # Errors
///
/// - `CredentialsError::MissingCredentialsOption` before any I/O when the
///   key or secret is empty.
/// - `CredentialsError::ProfileAlreadyConfigured` when the profile already
///   has credentials and `overwrite` is not set; the file is not written.
/// - Any store error, unchanged.
pub async fn configure_credentials(
    store: &impl CredentialsStore,
    options: &CredentialsOptions,
    reporter: &impl ProgressReporter,
) -> Result<CredentialsOutcome> {
    let provider = normalize_provider(&options.provider);
    let profile = normalize_profile(options.profile.as_deref());

    if provider != SUPPORTED_PROVIDER {
        tracing::debug!(%provider, "provider not supported, skipping credentials setup");
        return Ok(CredentialsOutcome::UnsupportedProvider { provider });
    }

    let credentials = Credentials::new(options.key.as_deref(), options.secret.as_deref())?;

    reporter.step(&format!("Updating {}", store.path().display()));
    let content = store.load().await?.unwrap_or_default();
    let updated = apply_credentials(&content, &profile, &credentials, options.overwrite)?;
    store.save(&updated).await?;

    reporter.success(&format!("Profile \"{profile}\" has been configured"));
    Ok(CredentialsOutcome::Configured { profile })
}

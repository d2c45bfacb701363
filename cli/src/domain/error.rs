//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::net`. All error types
//! implement `thiserror::Error` and convert to `anyhow::Error` via the `?`
//! operator. Each variant carries a stable machine code used by `--json`.

use thiserror::Error;

/// Code reported for errors that carry no domain code.
pub const UNEXPECTED_ERROR_CODE: &str = "UNEXPECTED_ERROR";

// ── Credentials errors ───────────────────────────────────────────────────────

/// Errors raised while configuring a credentials profile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Please include --key and --secret options for AWS.")]
    MissingCredentialsOption,

    #[error(
        "Failed! The credentials file already has a \"{profile}\" profile. \
         Use the overwrite flag (\"-o\" or \"--overwrite\") to force the update."
    )]
    ProfileAlreadyConfigured { profile: String },
}

impl CredentialsError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredentialsOption => "MISSING_KEY_AND_SECRET_CLI_OPTIONS",
            Self::ProfileAlreadyConfigured { .. } => "CREDENTIALS_PROFILE_ALREADY_CONFIGURED",
        }
    }
}

// ── Provider errors ──────────────────────────────────────────────────────────

/// Errors surfaced by cloud provider adapters that callers branch on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Stack with id {stack} does not exist")]
    StackNotFound { stack: String },

    #[error("Stack {stack} has no resource {logical_id}")]
    ResourceNotFound { stack: String, logical_id: String },
}

impl ProviderError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::StackNotFound { .. } => "STACK_NOT_FOUND",
            Self::ResourceNotFound { .. } => "STACK_RESOURCE_NOT_FOUND",
        }
    }
}

// ── Service config errors ────────────────────────────────────────────────────

/// Errors related to loading the service file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceConfigError {
    #[error("No service file found at {0}. Pass --config <file> or run from the service directory.")]
    NotFound(String),

    #[error("Cannot parse service file {path}: {message}")]
    Invalid { path: String, message: String },

    #[error("Service file {0} does not declare a \"service\" name")]
    MissingServiceName(String),
}

impl ServiceConfigError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "SERVICE_CONFIG_NOT_FOUND",
            Self::Invalid { .. } => "SERVICE_CONFIG_INVALID",
            Self::MissingServiceName(_) => "SERVICE_CONFIG_MISSING_SERVICE",
        }
    }
}

/// Machine code for an error chain: the first domain error found wins.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<CredentialsError>() {
            return e.code();
        }
        if let Some(e) = cause.downcast_ref::<ProviderError>() {
            return e.code();
        }
        if let Some(e) = cause.downcast_ref::<ServiceConfigError>() {
            return e.code();
        }
    }
    UNEXPECTED_ERROR_CODE
}

/// Returns `true` when the error chain says the stack is absent.
#[must_use]
pub fn is_stack_not_found(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<ProviderError>(),
            Some(ProviderError::StackNotFound { .. })
        )
    })
}

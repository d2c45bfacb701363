//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;

use anyhow::Result;

use crate::domain::{HttpApi, ServiceConfig, Stack};

// ── Cloud Provider Port ───────────────────────────────────────────────────────

/// The provider control-plane calls used by this tool.
///
/// Implementations perform exactly one request per call and do not retry.
#[allow(async_fn_in_trait)]
pub trait CloudProvider {
    /// `CloudFormation.describeStacks`. `Ok(None)` for an empty response.
    ///
    /// # Errors
    ///
    /// A missing stack is reported as `ProviderError::StackNotFound`; other
    /// failures propagate unchanged.
    async fn describe_stack(&self, stack_name: &str) -> Result<Option<Stack>>;
    /// `ApiGatewayV2.getApi`.
    async fn get_http_api(&self, api_id: &str) -> Result<HttpApi>;
    /// `CloudFormation.describeStackResource`, returning the physical id.
    async fn stack_resource_physical_id(&self, stack_name: &str, logical_id: &str)
    -> Result<String>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Credentials and Service File Ports ────────────────────────────────────────

/// Raw access to the shared credentials file.
#[allow(async_fn_in_trait)]
pub trait CredentialsStore {
    /// Read the file, returning `None` if it does not exist.
    async fn load(&self) -> Result<Option<String>>;
    /// Replace the file content; the result is readable by the owner only.
    async fn save(&self, content: &str) -> Result<()>;
    /// Location of the file, for messages.
    fn path(&self) -> &Path;
}

/// Loads the service file describing functions, layers, and provider settings.
pub trait ServiceConfigStore {
    /// Load and parse the service file.
    ///
    /// # Errors
    ///
    /// Returns `ServiceConfigError` when the file is missing or malformed.
    fn load(&self) -> Result<ServiceConfig>;
    /// Location of the service file.
    fn path(&self) -> &Path;
}

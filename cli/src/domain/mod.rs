//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod credentials;
pub mod deprecation;
pub mod error;
pub mod service;
pub mod stack;

pub use credentials::{Credentials, CredentialsFile, apply_credentials};
pub use error::{CredentialsError, ProviderError, ServiceConfigError, error_code};
pub use service::{DeployTarget, ServiceConfig};
pub use stack::{HttpApi, ProviderRequest, Stack, aggregate_stack_info};

//! Application layer: port trait definitions, lifecycle hooks, and use-case
//! orchestration.
//!
//! This module depends only on `crate::domain`, never on `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod lifecycle;
pub mod ports;
pub mod services;

pub use lifecycle::{HookFn, HookRegistry, LifecycleEvent};
pub use ports::{CloudProvider, CredentialsStore, ProgressReporter, ServiceConfigStore};

//! Typed lifecycle events and hook registration.
//!
//! A command declares the events it goes through and registers handlers for
//! them. Handlers for one event run in registration order; the first error
//! stops the run.

use std::fmt;

use anyhow::Result;
use futures_util::future::LocalBoxFuture;

/// Named points in a command's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Runs before any command-specific event.
    Initialize,
    ConfigCredentials,
    InfoGatherData,
    InfoDisplay,
    DeploySetBucketName,
}

impl LifecycleEvent {
    /// Stable hook name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::ConfigCredentials => "config:credentials:config",
            Self::InfoGatherData => "info:gatherData",
            Self::InfoDisplay => "info:display",
            Self::DeploySetBucketName => "deploy:setBucketName",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hook handler. Receives the command's context mutably.
pub type HookFn<C> = for<'c> fn(&'c mut C) -> LocalBoxFuture<'c, Result<()>>;

/// Ordered event-to-handler table for one command context type.
pub struct HookRegistry<C> {
    hooks: Vec<(LifecycleEvent, HookFn<C>)>,
}

impl<C> Default for HookRegistry<C> {
    fn default() -> Self {
        Self { hooks: Vec::new() }
    }
}

impl<C> HookRegistry<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler for `event`.
    pub fn register(&mut self, event: LifecycleEvent, hook: HookFn<C>) -> &mut Self {
        self.hooks.push((event, hook));
        self
    }

    /// Distinct registered events in first-registration order.
    #[must_use]
    pub fn events(&self) -> Vec<LifecycleEvent> {
        let mut events = Vec::new();
        for (event, _) in &self.hooks {
            if !events.contains(event) {
                events.push(*event);
            }
        }
        events
    }

    /// Number of handlers registered for `event`.
    #[must_use]
    pub fn handler_count(&self, event: LifecycleEvent) -> usize {
        self.hooks.iter().filter(|(e, _)| *e == event).count()
    }

    /// Run every handler registered for `event`.
    ///
    /// # Errors
    ///
    /// Returns the first handler error; later handlers do not run.
    pub async fn run(&self, event: LifecycleEvent, ctx: &mut C) -> Result<()> {
        for (registered, hook) in &self.hooks {
            if *registered == event {
                tracing::debug!(hook = %event, "running lifecycle hook");
                hook(ctx).await?;
            }
        }
        Ok(())
    }

    /// Run `events` in order.
    ///
    /// # Errors
    ///
    /// Returns the first handler error.
    pub async fn run_all(&self, events: &[LifecycleEvent], ctx: &mut C) -> Result<()> {
        for event in events {
            self.run(*event, ctx).await?;
        }
        Ok(())
    }
}

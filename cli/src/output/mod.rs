//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use anyhow::Result;
use console::Term;
use deployctl_common::StackInfo;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

use crate::application::services::credentials::CredentialsOutcome;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }
}

/// Mode-dispatching renderer handed out by `AppContext::renderer`.
pub enum Renderer<'a> {
    /// Terminal output.
    Human(HumanRenderer<'a>),
    /// `--json` output.
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render a gathered stack report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_info(&self, info: &StackInfo) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_info(info);
                Ok(())
            }
            Self::Json(r) => r.render(info),
        }
    }

    /// Render the resolved deployment bucket name.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_bucket(&self, bucket: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_bucket(bucket);
                Ok(())
            }
            Self::Json(r) => r.render(&serde_json::json!({ "deploymentBucket": bucket })),
        }
    }

    /// Render the outcome of `config credentials`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_credentials(&self, outcome: &CredentialsOutcome) -> Result<()> {
        match self {
            // The service already reported success through the progress reporter.
            Self::Human(_) => Ok(()),
            Self::Json(r) => match outcome {
                CredentialsOutcome::Configured { profile } => r.render(&serde_json::json!({
                    "configured": true,
                    "provider": "aws",
                    "profile": profile,
                })),
                CredentialsOutcome::UnsupportedProvider { provider } => {
                    r.render(&serde_json::json!({
                        "configured": false,
                        "provider": provider,
                    }))
                }
            },
        }
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(r) => r.render(&serde_json::json!({ "version": version })),
        }
    }
}

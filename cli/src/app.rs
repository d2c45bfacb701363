//! Application context: unified state passed to every command handler.
//!
//! Built once from the top-level flags in `Cli::run()`.

use std::path::PathBuf;

use crate::application::services::deprecation::{DeprecationReporter, report_service_deprecations};
use crate::domain::service::ServiceConfig;
use crate::infra::config::{SERVICE_CONFIG_ENV, YamlServiceConfigStore};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter};

/// Comma-separated deprecation codes to silence; `*` silences all.
pub const DEPRECATION_DISABLE_ENV: &str = "DEPLOYCTL_DEPRECATION_DISABLE";

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
#[derive(Debug, Default)]
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
#[derive(Debug, Default)]
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// `--config` path to the service file.
    pub config: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Service file store.
    pub service_config: YamlServiceConfigStore,
    /// Deprecation codes silenced for this run.
    pub disabled_deprecations: Vec<String>,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags and the environment.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        // Progress chatter would corrupt the JSON document on stdout.
        let quiet = flags.output.quiet || flags.output.json;

        let config_path = flags
            .config
            .clone()
            .or_else(|| std::env::var_os(SERVICE_CONFIG_ENV).map(PathBuf::from));

        let disabled_deprecations = std::env::var(DEPRECATION_DISABLE_ENV)
            .map(|v| parse_code_list(&v))
            .unwrap_or_default();

        Self {
            output: OutputContext::new(flags.output.no_color, quiet),
            mode,
            service_config: YamlServiceConfigStore::new(config_path),
            disabled_deprecations,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Progress reporter writing to this context's terminal.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Warn about deprecated settings in `service`. Returns the codes emitted.
    pub fn report_deprecations(&self, service: &ServiceConfig) -> Vec<&'static str> {
        let reporter = self.reporter();
        let deprecations =
            DeprecationReporter::new(&reporter, self.disabled_deprecations.iter().cloned());
        report_service_deprecations(service, &deprecations);
        deprecations.emitted()
    }
}

/// Split `"A, B,,C"` into `["A", "B", "C"]`.
#[must_use]
pub fn parse_code_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

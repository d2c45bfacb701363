//! Service file schema and resolution of a deploy target.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use deployctl_common::naming;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::domain::error::ServiceConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_STAGE: &str = "dev";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_SERVICE_FILE: &str = "serverless.yml";

// ── Schema ───────────────────────────────────────────────────────────────────

/// Top-level service file (`serverless.yml`).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    #[serde(default)]
    pub service: String,
    /// Deprecation codes to silence; `*` silences all.
    #[serde(default)]
    pub disabled_deprecations: Vec<String>,
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Functions in declaration order.
    #[serde(default)]
    pub functions: IndexMap<String, Option<FunctionConfig>>,
    /// Layers in declaration order.
    #[serde(default)]
    pub layers: IndexMap<String, Option<LayerConfig>>,
    #[serde(default)]
    pub package: Option<PackageConfig>,
    /// The document as parsed, for property-path lookups.
    #[serde(skip)]
    pub raw: serde_yaml::Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(default = "default_provider_name")]
    pub name: String,
    pub stage: Option<String>,
    pub region: Option<String>,
    pub stack_name: Option<String>,
    pub deployment_bucket: Option<String>,
    pub http_api: Option<HttpApiConfig>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_provider_name(),
            stage: None,
            region: None,
            stack_name: None,
            deployment_bucket: None,
            http_api: None,
        }
    }
}

fn default_provider_name() -> String {
    "aws".to_string()
}

/// `provider.httpApi`. Only an externally managed API carries an `id`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct HttpApiConfig {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FunctionConfig {
    /// Explicit deployed name.
    pub name: Option<String>,
    pub package: Option<PackageConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LayerConfig {
    pub package: Option<PackageConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PackageConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

impl PackageConfig {
    /// Whether the legacy `include`/`exclude` keys are used.
    #[must_use]
    pub fn uses_include_or_exclude(&self) -> bool {
        self.include.is_some() || self.exclude.is_some()
    }
}

impl ServiceConfig {
    /// Parses a service file. `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `ServiceConfigError::Invalid` for malformed YAML or schema
    /// mismatches, `MissingServiceName` when `service` is absent.
    pub fn from_yaml(content: &str, path: &str) -> Result<Self, ServiceConfigError> {
        let invalid = |e: serde_yaml::Error| ServiceConfigError::Invalid {
            path: path.to_string(),
            message: e.to_string(),
        };
        let raw: serde_yaml::Value = serde_yaml::from_str(content).map_err(invalid)?;
        let mut config: ServiceConfig = serde_yaml::from_value(raw.clone()).map_err(invalid)?;
        if config.service.trim().is_empty() {
            return Err(ServiceConfigError::MissingServiceName(path.to_string()));
        }
        config.raw = raw;
        Ok(config)
    }

    /// Resolves stage/region (CLI overrides first) and all derived names.
    #[must_use]
    pub fn resolve(&self, stage: Option<&str>, region: Option<&str>) -> DeployTarget {
        let stage = stage
            .or(self.provider.stage.as_deref())
            .unwrap_or(DEFAULT_STAGE)
            .to_string();
        let region = region
            .or(self.provider.region.as_deref())
            .unwrap_or(DEFAULT_REGION)
            .to_string();
        let stack = self
            .provider
            .stack_name
            .clone()
            .unwrap_or_else(|| naming::stack_name(&self.service, &stage));

        let functions = self
            .functions
            .iter()
            .map(|(logical, config)| {
                let deployed = config
                    .as_ref()
                    .and_then(|c| c.name.clone())
                    .unwrap_or_else(|| naming::function_deployed_name(&self.service, &stage, logical));
                FunctionTarget {
                    logical_name: logical.clone(),
                    deployed_name: deployed,
                }
            })
            .collect();

        DeployTarget {
            service: self.service.clone(),
            stage,
            region,
            stack,
            functions,
            layers: self.layers.keys().cloned().collect(),
            http_api_id: self.provider.http_api.as_ref().and_then(|h| h.id.clone()),
            deployment_bucket: self.provider.deployment_bucket.clone(),
        }
    }
}

// ── Resolved target ──────────────────────────────────────────────────────────

/// A function's logical and deployed names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionTarget {
    pub logical_name: String,
    pub deployed_name: String,
}

/// Everything the provider-facing services need about one service stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployTarget {
    pub service: String,
    pub stage: String,
    pub region: String,
    pub stack: String,
    pub functions: Vec<FunctionTarget>,
    pub layers: Vec<String>,
    pub http_api_id: Option<String>,
    pub deployment_bucket: Option<String>,
}

// ── Unit tests ───────────────────────────────────────────────────────────────

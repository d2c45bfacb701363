//! Infrastructure implementation of the `ServiceConfigStore` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ServiceConfigStore;
use crate::domain::error::ServiceConfigError;
use crate::domain::service::{DEFAULT_SERVICE_FILE, ServiceConfig};

/// Environment variable naming the service file.
pub const SERVICE_CONFIG_ENV: &str = "DEPLOYCTL_SERVICE_CONFIG";

/// Reads the YAML service file from disk.
pub struct YamlServiceConfigStore {
    path: PathBuf,
}

impl YamlServiceConfigStore {
    /// `path` if given, else `serverless.yml` in the working directory.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(|| PathBuf::from(DEFAULT_SERVICE_FILE)),
        }
    }
}

impl ServiceConfigStore for YamlServiceConfigStore {
    fn load(&self) -> Result<ServiceConfig> {
        let shown = self.path.display().to_string();
        if !self.path.exists() {
            return Err(ServiceConfigError::NotFound(shown).into());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {shown}"))?;
        let config = ServiceConfig::from_yaml(&content, &shown)?;
        tracing::debug!(path = %shown, service = %config.service, "loaded service file");
        Ok(config)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

//! Infrastructure implementation of the `CredentialsStore` port.
//!
//! Writes go through a temp file in the same directory that is restricted
//! to the owner and then renamed over the target, so readers never see a
//! half-written file.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::CredentialsStore;

/// Environment variable that relocates the credentials file.
pub const CREDENTIALS_FILE_ENV: &str = "AWS_SHARED_CREDENTIALS_FILE";

/// File-backed credentials store.
pub struct FileCredentialsStore {
    path: PathBuf,
}

impl FileCredentialsStore {
    /// Store at `$AWS_SHARED_CREDENTIALS_FILE`, else `~/.aws/credentials`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        if let Some(path) = std::env::var_os(CREDENTIALS_FILE_ENV).filter(|p| !p.is_empty()) {
            return Ok(Self::with_path(PathBuf::from(path)));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(Self::with_path(home.join(".aws").join("credentials")))
    }

    /// Store with an explicit path (used in tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_sync(path: &Path) -> Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading credentials file {}", path.display())),
        }
    }

    fn save_sync(path: &Path, content: &str) -> Result<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;

        let mut temp = tempfile::NamedTempFile::new_in(parent)
            .with_context(|| format!("creating temp file in {}", parent.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("setting permissions on {}", temp.path().display()))?;
        }

        temp.write_all(content.as_bytes())
            .with_context(|| format!("writing {}", temp.path().display()))?;
        temp.as_file()
            .sync_all()
            .with_context(|| format!("syncing {}", temp.path().display()))?;
        temp.persist(path)
            .with_context(|| format!("finalizing credentials file {}", path.display()))?;
        Ok(())
    }
}

impl CredentialsStore for FileCredentialsStore {
    async fn load(&self) -> Result<Option<String>> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .context("credentials load task panicked")?
    }

    async fn save(&self, content: &str) -> Result<()> {
        let path = self.path.clone();
        let content = content.to_string();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &content))
            .await
            .context("credentials save task panicked")?
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

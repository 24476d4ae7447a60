//! Remembered sign-in identity.
//!
//! Only the public account fields are kept; there is no token and the
//! server never checks who is calling.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

use crate::api::dto::User;
use crate::config::CliConfig;

pub trait IdentityStore: Send + Sync {
    fn load(&self) -> Result<Option<User>>;
    fn save(&self, user: &User) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// JSON file under the user config directory, readable only by its owner.
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Result<Self> {
        Ok(Self::new(CliConfig::root_dir()?.join("identity.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn secure_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

impl IdentityStore for FileIdentityStore {
    fn load(&self) -> Result<Option<User>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path).context("Failed to read identity file")?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let user = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse identity at {}", self.path.display()))?;
        Ok(Some(user))
    }

    fn save(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        secure_write(&self.path, &raw)
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Process-local store; nothing survives exit.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    slot: Mutex<Option<User>>,
}

impl MemoryIdentityStore {
    pub fn with_user(user: User) -> Self {
        Self {
            slot: Mutex::new(Some(user)),
        }
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Result<Option<User>> {
        Ok(self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("identity lock poisoned"))?
            .clone())
    }

    fn save(&self, user: &User) -> Result<()> {
        *self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("identity lock poisoned"))? = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("identity lock poisoned"))? = None;
        Ok(())
    }
}

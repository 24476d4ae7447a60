use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Base URL of the ideas server, e.g. "http://localhost:5000"
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl CliConfig {
    pub fn root_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("ideas-cli"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::root_dir()?.join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// An explicit URL (flag or `IDEAS_API_URL`) wins over the file.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api_url, "http://localhost:5000");
    }

    #[test]
    fn reads_api_url_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = \"http://ideas.internal:8080\"\n").unwrap();

        let config = CliConfig::load_from(&path).unwrap();
        assert_eq!(config.api_url, "http://ideas.internal:8080");
    }

    #[test]
    fn explicit_url_overrides_file() {
        let config = CliConfig::default().with_api_url(Some("http://other:5000".into()));
        assert_eq!(config.api_url, "http://other:5000");

        let config = CliConfig::default().with_api_url(Some("  ".into()));
        assert_eq!(config.api_url, "http://localhost:5000");
    }
}

// Configuration: built-in defaults, optional YAML file, then overrides

use crate::kv::{FileKv, KeyValueStore, SqliteKv};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "todostore";
const CONFIG_FILE: &str = "config.yml";
const DB_FILE: &str = "todostore.db";

/// Settings that cannot be used as given
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Store path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Which key-value backend holds the task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON file per key
    #[default]
    File,
    /// Single SQLite database
    Sqlite,
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store_path: PathBuf,
    pub backend: Backend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            backend: Backend::default(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults
    ///
    /// An explicitly given `path` must exist. Without one, the default
    /// location is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Apply overrides from flags or the environment
    pub fn with_overrides(mut self, store_path: Option<PathBuf>, backend: Option<Backend>) -> Self {
        if let Some(store_path) = store_path {
            self.store_path = store_path;
        }
        if let Some(backend) = backend {
            self.backend = backend;
        }
        self
    }

    /// Open the configured backend
    pub fn open_backend(&self) -> Result<Box<dyn KeyValueStore>> {
        debug!(path = ?self.store_path, backend = ?self.backend, "Opening backend");
        let kv: Box<dyn KeyValueStore> = match self.backend {
            Backend::File => Box::new(FileKv::open(&self.store_path)?),
            Backend::Sqlite => Box::new(SqliteKv::open(self.store_path.join(DB_FILE))?),
        };
        Ok(kv)
    }
}

/// `<data dir>/todostore`, or `./.todostore` when no data dir is known
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_DIR)))
}

/// `<config dir>/todostore/config.yml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Fail early on a store path that exists but is not a directory
pub fn check_store_path(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(ConfigError::NotADirectory(path.to_path_buf()).into());
    }
    Ok(())
}

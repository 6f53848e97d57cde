//! Configuration for where the contact book keeps its collection
//!
//! A `contact-book.toml` file may set:
//!
//! ```toml
//! data_dir = "/home/me/.contacts"
//! file_name = "contacts.json"
//! ```
//!
//! Missing keys fall back to the defaults (current directory,
//! `contacts.json`).

use crate::store::DEFAULT_CONTACTS_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name looked up by the CLI
pub const DEFAULT_CONFIG_FILE: &str = "contact-book.toml";

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Location of the persisted collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookConfig {
    /// Directory the storage backend is rooted at
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Collection file, relative to `data_dir`
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_name() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_name: default_file_name(),
        }
    }
}

impl BookConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Override the data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Override the collection file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Full path of the collection file
    pub fn contacts_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("file_name cannot be empty".to_string()));
        }
        if self.file_name.contains("..") {
            return Err(ConfigError::Invalid(
                "file_name must stay inside data_dir".to_string(),
            ));
        }
        Ok(())
    }
}

//! Error type for the contact-book binary

use crate::config::ConfigError;
use crate::storage::StorageError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// The submission was rejected; the message is for the user
    #[error("{0}")]
    Rejected(String),

    #[error("Contact {0} not found")]
    NotFound(u64),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Data directory {0} is not a directory")]
    InvalidDataDir(PathBuf),

    #[error("Failed to start runtime: {0}")]
    Runtime(String),

    #[error("Failed to render output: {0}")]
    Output(String),
}

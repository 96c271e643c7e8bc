use thiserror::Error;

use rayting_client::ClientError;
use rayting_lib::{PersistError, SettingsError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Backend request failed
    #[error("Backend error: {0}")]
    Client(#[from] ClientError),

    /// Saved item list could not be read or written
    #[error("{0}")]
    Load(#[from] rayting_catalog::LoadError),

    /// Local cache or remembered state could not be written
    #[error("Cache error: {0}")]
    Persist(#[from] PersistError),

    /// Settings file error
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// Malformed item JSON from the user
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Bad command-line input
    #[error("{0}")]
    Usage(String),

    /// No item with this id
    #[error("No {collection} with id {id}")]
    NotFound { collection: String, id: i64 },
}

impl CliError {
    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}

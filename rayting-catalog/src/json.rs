//! JSON loading for exported item lists.
//!
//! The backend's `GET /<collection>` response is a plain JSON array of items;
//! a saved copy of it can be browsed offline.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load a list of items from a JSON array file.
pub fn load_items<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write a list of items as a pretty-printed JSON array.
pub fn save_items<T: Serialize>(path: &Path, items: &[T]) -> Result<(), LoadError> {
    let json = serde_json::to_string_pretty(items).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    std::fs::write(path, json).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

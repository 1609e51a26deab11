// web_app/error.rs - Error types
//
// None of these are fatal. Callers log them and fall back to an empty or
// partial view.

use thiserror::Error;

/// Failure to read or write the shopping list storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser storage is not available")]
    Unavailable,
    #[error("failed to read key '{key}': {message}")]
    Read { key: String, message: String },
    #[error("failed to write key '{key}': {message}")]
    Write { key: String, message: String },
    #[error("stored books are not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure to put content into a rendered container
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Element with class '{0}' not found.")]
    ContainerMissing(&'static str),
}

/// Failure to fetch the remote book catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed with status {0}")]
    Status(u16),
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("catalog response is not a list of books: {0}")]
    Decode(String),
}

#[cfg(feature = "server-tools")]
impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            CatalogError::Status(status.as_u16())
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}

//! Page errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or reading host pages
#[derive(Error, Debug)]
pub enum PageError {
    /// No host page for the requested name
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Host page exists but could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for page operations
pub type PageResult<T> = Result<T, PageError>;

//! Review document load errors
//!
//! Everything that can go wrong between a review source and a parsed document.

use thiserror::Error;

/// Errors raised while fetching or parsing the review document
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading a local document failed
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Transport-level HTTP failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote document answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Document is not valid JSON or does not match the review shape
    #[error("Malformed review document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for review loading
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::Status {
            url: "http://localhost/reviews.json".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 404 from http://localhost/reviews.json"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LoadError = json_err.into();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}

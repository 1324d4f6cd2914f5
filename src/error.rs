//! Custom error types for get-papers-list.
//!
//! All library functions return `Result<T, PapersError>` instead of using `unwrap()`.

use thiserror::Error;

/// Main error type for get-papers-list operations.
#[derive(Debug, Error)]
pub enum PapersError {
    /// Network/HTTP request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// E-utilities returned a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message
        message: String,
    },

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias using `PapersError`
pub type Result<T> = std::result::Result<T, PapersError>;

/// Extension trait for adding context to Option types
pub trait OptionExt<T> {
    /// Convert Option to Result with a parse error message
    fn ok_or_parse(self, msg: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_parse(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| PapersError::Parse(msg.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_or_parse() {
        assert_eq!(Some(3).ok_or_parse("missing").ok(), Some(3));

        match None::<i32>.ok_or_parse("missing result") {
            Err(err @ PapersError::Parse(_)) => {
                assert_eq!(err.to_string(), "Parse error: missing result")
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}

//! Error types for CodeArena

use thiserror::Error;

/// Main error type for CodeArena operations
#[derive(Error, Debug)]
pub enum Error {
    /// A `data-page` key that names no page
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Stat text with no leading number to count up to
    #[error("Invalid stat value: {0:?}")]
    InvalidStat(String),

    /// Catalog file could not be parsed
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CodeArena operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::UnknownPage("settings".to_string());
        assert_eq!(err.to_string(), "Unknown page: settings");

        let err = Error::InvalidStat("n/a".to_string());
        assert_eq!(err.to_string(), "Invalid stat value: \"n/a\"");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}

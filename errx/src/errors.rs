//! Error types for registry loading and configuration
//!
//! Resolution never fails; only bulk loads, exports and configuration do.

use crate::parsers::ParserError;
use std::path::PathBuf;

/// Registry load, export and configuration errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Unknown message format: {0}")]
    UnknownFormat(String),
}

impl RegistryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RegistryError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_io_error_display_includes_path() {
        let error = RegistryError::io(
            "static/en.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(error.to_string(), "Failed to read 'static/en.json': missing");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_parser_error_converts() {
        let parser_error = ParserError::Decode {
            format: "json",
            reason: "expected value".to_string(),
        };
        let error: RegistryError = parser_error.into();
        assert_matches!(error, RegistryError::Parser(ParserError::Decode { format: "json", .. }));
    }
}

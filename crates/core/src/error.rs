//! Base error types for tesseract
//!
//! This module provides the foundation error types that all crates can use.

use std::path::PathBuf;
use thiserror::Error;

/// Error type shared by the engine and its collaborators
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest path was never configured
    #[error("Manifest path not set")]
    ManifestPathUnset,

    /// Manifest file does not exist
    #[error("Manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    /// Manifest is not valid JSON or is missing the `commands` mapping
    #[error("Failed to parse manifest {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Invocation supplied no command token
    #[error("No command provided")]
    MissingCommand,

    /// Resolved command has no entry in the manifest
    #[error("Command \"{command}\" not found in manifest")]
    CommandNotFound { command: String },

    /// Fewer positional values than declared parameters
    #[error("Parameter \"{name}\" (position {position}) not provided")]
    MissingParameter { name: String, position: usize },

    /// `execute` was invoked before a successful `load`
    #[error("Engine not loaded; call load() before execute()")]
    NotLoaded,

    /// A hook callback raised an error
    #[error("Hook for event \"{event}\" failed: {message}")]
    HookExecution { event: String, message: String },

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_missing_parameter_names_parameter_and_position() {
        let error = Error::MissingParameter {
            name: "name".to_string(),
            position: 1,
        };
        assert_eq!(
            error.to_string(),
            "Parameter \"name\" (position 1) not provided"
        );
    }

    #[test]
    fn test_manifest_parse_carries_source() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = Error::ManifestParse {
            path: PathBuf::from("./tesseract.json"),
            source,
        };
        assert!(error.to_string().starts_with("Failed to parse manifest"));
        assert!(std::error::Error::source(&error).is_some());
    }
}

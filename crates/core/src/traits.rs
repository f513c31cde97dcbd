//! Collaborator traits for tesseract components
//!
//! The engine never touches the process environment, the terminal, or the
//! disk directly. It talks to these traits instead, which keeps the core
//! algorithm callable from tests (and embeddable in other tools) with
//! in-memory substitutes.

use crate::Result;
use crate::logger::{LogLevel, LogOptions};
use std::path::Path;

/// Logging sink interface
///
/// Four severity-leveled write operations, each accepting a message plus
/// free-form additional values rendered after it, and a getter/setter for
/// the formatting options.
///
/// # Examples
///
/// ```ignore
/// fn announce(logger: &dyn Logger) {
///     logger.info("Configuration loaded", &[]);
///     logger.error("Command failed", &[serde_json::json!({"code": 500})]);
/// }
/// ```
pub trait Logger {
    /// Write a message at the given level
    fn log(&self, level: LogLevel, message: &str, values: &[serde_json::Value]);

    /// Write a debug-level message
    fn debug(&self, message: &str, values: &[serde_json::Value]) {
        self.log(LogLevel::Debug, message, values);
    }

    /// Write an info-level message
    fn info(&self, message: &str, values: &[serde_json::Value]) {
        self.log(LogLevel::Info, message, values);
    }

    /// Write a warning-level message
    fn warning(&self, message: &str, values: &[serde_json::Value]) {
        self.log(LogLevel::Warning, message, values);
    }

    /// Write an error-level message
    fn error(&self, message: &str, values: &[serde_json::Value]) {
        self.log(LogLevel::Error, message, values);
    }

    /// Replace the formatting options
    fn set_options(&mut self, options: LogOptions);

    /// Get the current formatting options
    fn options(&self) -> LogOptions;
}

/// Filesystem interface
///
/// The four operations the engine needs: read a file, write a file, check
/// existence, create a directory recursively.
pub trait FileSystem {
    /// Read the full text content of a file
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write text content to a file, overwriting any existing file
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Check whether a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all intermediate segments (idempotent)
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

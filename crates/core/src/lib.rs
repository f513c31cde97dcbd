//! Core types and utilities for tesseract
//!
//! This is the foundation crate that all other tesseract crates depend on.
//! It provides:
//! - Base error types
//! - Collaborator traits (`Logger`, `FileSystem`)
//! - The provided default implementations (`ConsoleLogger`, `OsFileSystem`)
//!
//! This crate has no dependencies on other tesseract crates.

pub mod error;
pub mod fs;
pub mod logger;
pub mod traits;

pub use error::{Error, Result};
pub use fs::OsFileSystem;
pub use logger::{ConsoleLogger, LogLevel, LogOptions};
pub use traits::{FileSystem, Logger};

//! Manifest model
//!
//! The JSON document describing available commands and their directory and
//! file actions. Parsed once per `load`; command order and parameter order
//! are preserved as declared.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The parsed manifest document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Informational base path; not used by the engine algorithm
    #[serde(default)]
    pub src: Option<String>,

    /// Available commands, keyed by unique name
    pub commands: IndexMap<String, CommandSpec>,
}

impl Manifest {
    /// Parse a manifest from JSON text
    ///
    /// Fails if the text is not valid JSON or lacks the `commands` mapping.
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Look up a command by name
    #[must_use]
    pub fn command(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }
}

/// One command entry of the manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Declared parameter names; the i-th name binds to the i-th positional value
    #[serde(default)]
    pub params: Vec<String>,

    /// Directories to ensure exist before file processing
    #[serde(default)]
    pub dir: Vec<String>,

    /// Template files to render, in declared order
    #[serde(default)]
    pub files: Vec<FileMapping>,
}

/// A source template and its destination path template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMapping {
    /// Path of the template file to read
    pub from: String,

    /// Destination path template, may contain placeholders
    pub to: String,
}

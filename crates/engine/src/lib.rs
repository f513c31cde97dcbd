//! Command execution engine for tesseract
//!
//! This crate implements the scaffolding core:
//! - `invocation`: the injected ordered token list (command + positional values)
//! - `manifest`: the JSON manifest model (commands, directories, file mappings)
//! - `transform`: the fixed registry of placeholder string transforms
//! - `render`: literal and `{key|transform}` placeholder substitution
//! - `hooks`: lifecycle events and the scoped hook registry
//! - `engine`: the `load`/`execute` state machine driving all of the above

pub mod engine;
pub mod hooks;
pub mod invocation;
pub mod manifest;
pub mod render;
pub mod transform;

// Re-export error types from core
pub use tesseract_core::{Error, Result};

// Re-export main types
pub use engine::Engine;
pub use hooks::{HookArgs, HookEvent};
pub use invocation::Invocation;
pub use manifest::{CommandSpec, FileMapping, Manifest};

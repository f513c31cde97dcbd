//! Invocation inputs
//!
//! The ordered token list supplied by the process context, reshaped into an
//! explicit value so the engine never reads ambient process state. `load`
//! and `execute` take an [`Invocation`] as a parameter, which makes the
//! engine callable multiple times in one process and trivially testable.

/// A resolved invocation: the command name and its positional values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    command: Option<String>,
    params: Vec<String>,
}

impl Invocation {
    /// Build an invocation from an explicit command and parameter values
    #[must_use]
    pub fn new(command: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            command: Some(command.into()),
            params,
        }
    }

    /// Build an invocation from a raw argv-style token list
    ///
    /// Token at index 2 is the command name; tokens from index 3 onward are
    /// positional parameter values. This matches the process argument shape
    /// of an interpreter-launched script (`[runtime, script, command, ...]`).
    pub fn from_argv<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut tokens = tokens.into_iter().skip(2);
        let command = tokens.next();
        Self {
            command,
            params: tokens.collect(),
        }
    }

    /// The command name, if one was supplied
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// The positional parameter value at `index` (0-based)
    #[must_use]
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// All positional parameter values in order
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

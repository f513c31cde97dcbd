//! Console logger
//!
//! Default implementation of the [`Logger`](crate::Logger) trait: leveled,
//! optionally colored terminal output with an RFC 3339 timestamp prefix.
//! Debug and info messages go to stdout, warnings and errors to stderr.

use crate::traits::Logger;
use chrono::{SecondsFormat, Utc};
use nu_ansi_term::{Color, Style};

/// Log severity levels, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Diagnostic detail
    Debug,
    /// Normal progress
    Info,
    /// Recoverable problems
    Warning,
    /// Fatal conditions
    Error,
}

impl LogLevel {
    /// Uppercase label used in rendered output
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Debug => Color::Cyan,
            Self::Info => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Formatting options for rendered log lines
///
/// All options default to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    /// Include a `[<RFC 3339>]` timestamp prefix
    pub timestamp: bool,
    /// Include the severity label
    pub level: bool,
    /// Apply ANSI coloring
    pub color: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            timestamp: true,
            level: true,
            color: true,
        }
    }
}

/// Terminal logger with configurable formatting
pub struct ConsoleLogger {
    options: LogOptions,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(LogOptions::default())
    }
}

impl ConsoleLogger {
    /// Create a logger with the given formatting options
    #[must_use]
    pub fn new(options: LogOptions) -> Self {
        Self {
            options,
            min_level: LogLevel::Debug,
        }
    }

    /// Suppress messages below `level`
    ///
    /// Filtering is a property of this implementation, not of the
    /// [`Logger`] contract; formatting options never affect which
    /// messages are emitted.
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Render a log line without writing it
    #[must_use]
    pub fn format(&self, level: LogLevel, message: &str, values: &[serde_json::Value]) -> String {
        let mut line = String::new();

        if self.options.timestamp {
            let stamp = format!(
                "[{}]",
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
            );
            if self.options.color {
                line.push_str(&Style::new().dimmed().paint(stamp).to_string());
            } else {
                line.push_str(&stamp);
            }
            line.push(' ');
        }

        if self.options.level {
            let label = format!("{:<7}", level.label());
            if self.options.color {
                line.push_str(&level.color().bold().paint(label).to_string());
            } else {
                line.push_str(&label);
            }
            line.push(' ');
        }

        line.push_str(message);

        for value in values {
            line.push(' ');
            line.push_str(&render_value(value));
        }

        line
    }
}

/// Render an additional value: scalars inline, structures as pretty JSON
fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str, values: &[serde_json::Value]) {
        if level < self.min_level {
            return;
        }
        let line = self.format(level, message, values);
        match level {
            LogLevel::Debug | LogLevel::Info => println!("{line}"),
            LogLevel::Warning | LogLevel::Error => eprintln!("{line}"),
        }
    }

    fn set_options(&mut self, options: LogOptions) {
        self.options = options;
    }

    fn options(&self) -> LogOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde_json::json;

    fn plain() -> ConsoleLogger {
        ConsoleLogger::new(LogOptions {
            timestamp: false,
            level: false,
            color: false,
        })
    }

    #[test]
    fn test_plain_format_is_just_the_message() {
        let logger = plain();
        assert_eq!(logger.format(LogLevel::Info, "hello", &[]), "hello");
    }

    #[test]
    fn test_level_label_is_padded() {
        let logger = ConsoleLogger::new(LogOptions {
            timestamp: false,
            level: true,
            color: false,
        });
        assert_eq!(logger.format(LogLevel::Info, "x", &[]), "INFO    x");
        assert_eq!(logger.format(LogLevel::Warning, "x", &[]), "WARNING x");
    }

    #[test]
    fn test_timestamp_prefix_present_when_enabled() {
        let logger = ConsoleLogger::new(LogOptions {
            timestamp: true,
            level: false,
            color: false,
        });
        let line = logger.format(LogLevel::Debug, "x", &[]);
        assert!(line.starts_with('['));
        assert!(line.ends_with("] x"));
    }

    #[test]
    fn test_scalar_values_render_inline() {
        let logger = plain();
        let line = logger.format(LogLevel::Info, "count:", &[json!(3), json!("items")]);
        assert_eq!(line, "count: 3 items");
    }

    #[test]
    fn test_object_values_render_as_pretty_json() {
        let logger = plain();
        let line = logger.format(LogLevel::Error, "failed", &[json!({"code": 500})]);
        assert!(line.contains("\"code\": 500"));
    }

    #[test]
    fn test_options_roundtrip() {
        let mut logger = ConsoleLogger::default();
        assert_eq!(logger.options(), LogOptions::default());
        let custom = LogOptions {
            timestamp: false,
            level: true,
            color: false,
        };
        logger.set_options(custom);
        assert_eq!(logger.options(), custom);
    }

    #[test]
    fn test_color_codes_only_when_enabled() {
        let colored = ConsoleLogger::new(LogOptions {
            timestamp: false,
            level: true,
            color: true,
        });
        assert!(colored.format(LogLevel::Error, "x", &[]).contains("\x1b["));
        assert!(!plain().format(LogLevel::Error, "x", &[]).contains("\x1b["));
    }
}

//! Placeholder transforms
//!
//! A fixed registry of named pure string transforms applicable inside a
//! placeholder (`{key|transform}`). Names are case-sensitive literals;
//! unrecognized names return the value unchanged.

/// Apply a named transform to a value
///
/// | name | effect |
/// |---|---|
/// | `lower` | lowercase the entire string |
/// | `upper` | uppercase the entire string |
/// | `capitalize` | uppercase the first character only |
/// | `snake` | replace every space with `_` |
/// | `camelToSnake` | `helloWorld` → `hello_world` |
/// | anything else | identity |
#[must_use]
pub fn apply(value: &str, name: &str) -> String {
    match name {
        "lower" => value.to_lowercase(),
        "upper" => value.to_uppercase(),
        "capitalize" => capitalize(value),
        "snake" => value.replace(' ', "_"),
        "camelToSnake" => camel_to_snake(value),
        _ => value.to_string(),
    }
}

/// Uppercase the first character, leaving the rest unchanged
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a camelCase or PascalCase string to snake_case
///
/// Inserts `_` before every ASCII uppercase letter, lowercases the whole
/// string, then strips a single leading `_` if present.
#[must_use]
pub fn camel_to_snake(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    match out.strip_prefix('_') {
        Some(stripped) => stripped.to_string(),
        None => out,
    }
}

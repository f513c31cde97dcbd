//! Placeholder substitution
//!
//! Replaces `{key}` and `{key|transform}` tokens in destination-path
//! templates and file contents. Substitution is performed one bound
//! parameter at a time, literal occurrences first, then transformed ones.

use crate::transform;
use regex::Regex;
use tesseract_core::{Error, Result};

/// Prepared substitution for one bound parameter
///
/// Holds the literal `{key}` token and the compiled `{key|transform}`
/// pattern so both can be applied to any number of strings.
#[derive(Debug)]
pub struct Substitution<'a> {
    value: &'a str,
    literal: String,
    transformed: Regex,
}

impl<'a> Substitution<'a> {
    /// Prepare a substitution for `key` bound to `value`
    pub fn new(key: &str, value: &'a str) -> Result<Self> {
        let pattern = format!(r"\{{{}\|([A-Za-z0-9_]+)\}}", regex::escape(key));
        let transformed = Regex::new(&pattern).map_err(|e| {
            Error::Message(format!("Invalid placeholder pattern for \"{key}\": {e}"))
        })?;
        Ok(Self {
            value,
            literal: format!("{{{key}}}"),
            transformed,
        })
    }

    /// Replace every placeholder for this parameter in `input`
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        let replaced = input.replace(&self.literal, self.value);
        self.transformed
            .replace_all(&replaced, |caps: &regex::Captures<'_>| {
                transform::apply(self.value, &caps[1])
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn sub<'a>(key: &str, value: &'a str) -> Substitution<'a> {
        Substitution::new(key, value).unwrap()
    }

    #[test]
    fn test_literal_substitution() {
        let s = sub("name", "World");
        assert_eq!(s.apply("Hello {name}!"), "Hello World!");
    }

    #[test]
    fn test_transform_substitution() {
        let s = sub("name", "geek");
        assert_eq!(s.apply("{name|upper}"), "GEEK");
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let s = sub("name", "demo");
        assert_eq!(
            s.apply("{name}/{name|upper}/{name}"),
            "demo/DEMO/demo"
        );
    }

    #[test]
    fn test_unknown_transform_passes_value_through() {
        let s = sub("name", "Demo");
        assert_eq!(s.apply("{name|reverse}"), "Demo");
    }

    #[test]
    fn test_other_keys_are_untouched() {
        let s = sub("name", "demo");
        assert_eq!(s.apply("{other} {other|upper}"), "{other} {other|upper}");
    }

    #[test]
    fn test_destination_path_rendering() {
        let s = sub("model", "UserProfile");
        assert_eq!(
            s.apply("src/models/{model|camelToSnake}.rs"),
            "src/models/user_profile.rs"
        );
    }

    #[test]
    fn test_key_with_regex_metacharacters() {
        let s = sub("na.me", "x");
        assert_eq!(s.apply("{na.me|upper}"), "X");
        assert_eq!(s.apply("{named}"), "{named}");
    }
}

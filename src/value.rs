#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{OracleError, Result};

/// A comparable value arriving from outside the type system, such as a CLI
/// argument or a JSON fixture.
///
/// Integers order before strings, but a well-formed sequence never mixes the
/// two; see [`Key::homogeneous`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// An integer value.
    Int(i64),
    /// A string value.
    Str(String),
}

impl Key {
    /// Returns true for [`Key::Int`].
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Checks that every value in `values` is of the same kind as the first.
    pub fn homogeneous(values: &[Key]) -> Result<()> {
        let Some(first) = values.first() else {
            return Ok(());
        };
        match values.iter().find(|v| v.is_int() != first.is_int()) {
            Some(offending) => Err(OracleError::MixedTypes {
                first:     first.to_string(),
                offending: offending.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Parses a JSON array into a sequence of keys, rejecting mixed kinds.
    pub fn parse_sequence(json: &str) -> anyhow::Result<Vec<Key>> {
        let values: Vec<Key> = serde_json::from_str(json)?;
        Key::homogeneous(&values)?;
        Ok(values)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<char> for Key {
    fn from(value: char) -> Self {
        Key::Str(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_sequence() {
        let keys = Key::parse_sequence("[5, 3, 8]").expect("parse");
        assert_eq!(keys, vec![Key::Int(5), Key::Int(3), Key::Int(8)]);
    }

    #[test]
    fn parses_string_sequence() {
        let keys = Key::parse_sequence(r#"["b", "a"]"#).expect("parse");
        assert_eq!(keys, vec![Key::from("b"), Key::from("a")]);
    }

    #[test]
    fn rejects_mixed_sequence() {
        let err = Key::homogeneous(&[Key::Int(1), Key::from("a")]).unwrap_err();
        assert_eq!(
            err,
            OracleError::MixedTypes {
                first:     "1".into(),
                offending: "\"a\"".into(),
            }
        );
    }

    #[test]
    fn empty_sequence_is_homogeneous() {
        assert!(Key::homogeneous(&[]).is_ok());
    }
}

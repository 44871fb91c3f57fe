use serde::{Deserialize, Serialize};
use std::fmt;

/// A primary-key value, kept in the type the storage layer reported.
///
/// Serializes untagged, so an integer key is written as `1` and a string key
/// as `"abc"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryKey {
    Int(i64),
    Str(String),
}

impl PrimaryKey {
    /// Integer value used when looking a record up for restore.
    ///
    /// Strings follow the loose web-framework cast: leading whitespace is
    /// skipped, an optional sign and the leading run of digits are read, and
    /// anything without digits becomes `0`. Out-of-range values saturate.
    #[must_use]
    pub fn coerce_to_int(&self) -> i64 {
        match self {
            PrimaryKey::Int(value) => *value,
            PrimaryKey::Str(s) => coerce_str(s),
        }
    }
}

fn coerce_str(s: &str) -> i64 {
    let trimmed = s.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let magnitude = digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0_i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d))
        });
    if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    }
}

impl fmt::Display for PrimaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryKey::Int(value) => write!(f, "{value}"),
            PrimaryKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PrimaryKey {
    fn from(value: i64) -> Self {
        PrimaryKey::Int(value)
    }
}

impl From<i32> for PrimaryKey {
    fn from(value: i32) -> Self {
        PrimaryKey::Int(i64::from(value))
    }
}

impl From<u32> for PrimaryKey {
    fn from(value: u32) -> Self {
        PrimaryKey::Int(i64::from(value))
    }
}

impl From<&str> for PrimaryKey {
    fn from(value: &str) -> Self {
        PrimaryKey::Str(value.to_string())
    }
}

impl From<String> for PrimaryKey {
    fn from(value: String) -> Self {
        PrimaryKey::Str(value)
    }
}

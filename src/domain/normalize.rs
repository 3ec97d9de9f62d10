//! Coercion of raw form values into well-formed numbers.
//!
//! Nothing in here fails: a value that cannot be read as a finite number
//! degrades to the caller's fallback.

use serde::{Deserialize, Serialize};

/// A numeric field as it arrives from a form or a saved state file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    #[default]
    Missing,
    Other(serde_json::Value),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(value: String) -> Self {
        RawNumber::Text(value)
    }
}

/// Reads `raw` as a finite number, stripping thousands separators from text.
/// Missing, blank, non-numeric and non-finite values yield `fallback`.
pub fn parse_number(raw: &RawNumber, fallback: f64) -> f64 {
    let parsed = match raw {
        RawNumber::Number(value) => Some(*value),
        RawNumber::Text(text) => parse_text(text),
        RawNumber::Missing | RawNumber::Other(_) => None,
    };

    parsed.filter(|value| value.is_finite()).unwrap_or(fallback)
}

fn parse_text(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|ch| *ch != ',').collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Restricts `value` to `[lo, hi]`.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Floor at zero for counts, money and day figures.
pub fn non_negative(value: f64) -> f64 {
    value.max(0.0)
}

/// Keeps a derived figure finite: overflow saturates at `±f64::MAX`, NaN becomes 0.
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        clamp(value, -f64::MAX, f64::MAX)
    }
}

/// Percentage clamped to `[0, 100]`.
pub fn percent(value: f64) -> f64 {
    clamp(value, 0.0, 100.0)
}

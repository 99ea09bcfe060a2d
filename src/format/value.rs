//! Values substituted into templates.

use std::collections::BTreeMap;
use std::fmt;

/// A value a template placeholder can consume.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Text, substituted verbatim.
    Str(String),
    /// Number, usable by `number`, `plural` and plain placeholders.
    Number(f64),
}

/// Flat parameter set for one render: name -> value.
pub type ResolvedParams = BTreeMap<String, ParamValue>;

impl ParamValue {
    /// What: Numeric view of the value.
    ///
    /// Output:
    /// - `Some(f64)` for numbers and for strings that parse as numbers
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Str(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            #[allow(clippy::cast_possible_truncation)]
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

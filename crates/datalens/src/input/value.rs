//! Typed cell values produced by ingestion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Raw text is coerced into a `Value` exactly once, at ingestion time, so
/// the analysis engine never has to re-test types at each use site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value (`true`/`false`, case-insensitive in source text).
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Any other text.
    Text(String),
    /// Missing value.
    #[default]
    Null,
}

impl Value {
    /// Coerce a raw cell into a typed value.
    ///
    /// Blank cells become [`Value::Null`], `true`/`false` become booleans,
    /// anything that parses as a finite float becomes a number, and the
    /// rest stays text.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }

        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::Text(raw.to_string()),
        }
    }

    /// Returns the number if this is a finite numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Returns true for null and empty-string values.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns true if this is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Null => Ok(()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_numbers() {
        assert_eq!(Value::coerce("42"), Value::Number(42.0));
        assert_eq!(Value::coerce(" -3.5 "), Value::Number(-3.5));
        assert_eq!(Value::coerce("1e3"), Value::Number(1000.0));
    }

    #[test]
    fn test_coerce_non_finite_stays_text() {
        assert_eq!(Value::coerce("NaN"), Value::Text("NaN".to_string()));
        assert_eq!(Value::coerce("inf"), Value::Text("inf".to_string()));
    }

    #[test]
    fn test_coerce_booleans() {
        assert_eq!(Value::coerce("true"), Value::Bool(true));
        assert_eq!(Value::coerce("FALSE"), Value::Bool(false));
        assert_eq!(Value::coerce("yes"), Value::Text("yes".to_string()));
    }

    #[test]
    fn test_coerce_blank_is_null() {
        assert_eq!(Value::coerce(""), Value::Null);
        assert_eq!(Value::coerce("   "), Value::Null);
    }

    #[test]
    fn test_is_missing() {
        assert!(Value::Null.is_missing());
        assert!(Value::Text(String::new()).is_missing());
        assert!(!Value::Text("x".into()).is_missing());
        assert!(!Value::Number(0.0).is_missing());
        assert!(!Value::Bool(false).is_missing());
        assert!(Value::default().is_missing());
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn test_serialize_untagged() {
        let values = vec![
            Value::Number(1.5),
            Value::Bool(true),
            Value::Text("a".into()),
            Value::Null,
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[1.5,true,"a",null]"#);
    }
}

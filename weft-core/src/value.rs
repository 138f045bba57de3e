//! Closed payload value model for the remote control protocol

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single payload field value.
///
/// The wire protocol carries exactly these shapes. Every boundary matches
/// this enum exhaustively instead of reaching into untyped JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null (distinct from an absent field)
    Null,
    /// Boolean flag
    Bool(bool),
    /// Integer (24-bit colors travel as integers)
    Int(i64),
    /// Text
    Str(String),
    /// Ordered sequence of values
    Seq(Vec<Value>),
    /// Name -> value mapping
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Return the boolean if this value is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Return the integer if this value is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Return the string slice if this value is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Return the mapping if this value is a `Map`.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// True for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Integer-or-null, the shape nullable color entries take on the wire.
impl From<Option<u32>> for Value {
    fn from(v: Option<u32>) -> Self {
        match v {
            Some(i) => Value::Int(i64::from(i)),
            None => Value::Null,
        }
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(m: BTreeMap<String, Value>) -> Self {
        Value::Map(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_serialization() {
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::Int(0xff0000)).unwrap(), "16711680");
        assert_eq!(
            serde_json::to_string(&Value::Str("id:1".into())).unwrap(),
            r#""id:1""#
        );
    }

    #[test]
    fn test_untagged_deserialization() {
        let v: Value = serde_json::from_str("null").unwrap();
        assert!(v.is_null());

        let v: Value = serde_json::from_str("42").unwrap();
        assert_eq!(v.as_int(), Some(42));

        let v: Value = serde_json::from_str(r#"{"background": null, "foreground": 255}"#).unwrap();
        let map = v.as_map().unwrap();
        assert!(map["background"].is_null());
        assert_eq!(map["foreground"].as_int(), Some(255));
    }

    #[test]
    fn test_nullable_int_conversion() {
        assert_eq!(Value::from(Some(0xff0000_u32)), Value::Int(0xff0000));
        assert_eq!(Value::from(None::<u32>), Value::Null);
    }
}

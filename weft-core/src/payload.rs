//! Schema-checked command payloads

use crate::error::Result;
use crate::schema::CommandSchema;
use crate::value::Value;
use std::collections::BTreeMap;

/// A validated field map for one command invocation.
///
/// Constructed once (on the client before transmission, and again on the
/// host from the deserialized request), consumed once by the command that
/// runs it, and never mutated in between.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    fields: BTreeMap<String, Value>,
}

impl Payload {
    /// Validate `fields` against `schema` and wrap them.
    pub fn new(schema: &CommandSchema, fields: BTreeMap<String, Value>) -> Result<Self> {
        schema.validate(&fields)?;
        Ok(Self { fields })
    }

    /// Raw field access.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Boolean field, `default` when absent or null.
    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(default)
    }

    /// String field; absent and null both read as `None`.
    pub fn str_opt(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Mapping field; absent and null both read as `None`.
    pub fn map_opt(&self, name: &str) -> Option<&BTreeMap<String, Value>> {
        self.get(name).and_then(Value::as_map)
    }

    /// Borrow all fields (for serialization into a request).
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Consume the payload, yielding its fields.
    pub fn into_fields(self) -> BTreeMap<String, Value> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SET_COLORS;

    fn payload_with(entries: &[(&str, Value)]) -> Payload {
        let mut fields = BTreeMap::new();
        fields.insert("colors".to_string(), Value::Map(BTreeMap::new()));
        for (name, value) in entries {
            fields.insert((*name).to_string(), value.clone());
        }
        Payload::new(&SET_COLORS, fields).unwrap()
    }

    #[test]
    fn test_bool_defaults() {
        let payload = payload_with(&[("all", Value::Bool(true))]);
        assert!(payload.bool_or("all", false));
        assert!(!payload.bool_or("reset", false));
    }

    #[test]
    fn test_null_string_reads_as_absent() {
        let payload = payload_with(&[("match_window", Value::Null)]);
        assert_eq!(payload.str_opt("match_window"), None);
        assert_eq!(payload.str_opt("match_tab"), None);
    }

    #[test]
    fn test_construction_validates() {
        let mut fields = BTreeMap::new();
        fields.insert("colors".to_string(), Value::Map(BTreeMap::new()));
        fields.insert("extra".to_string(), Value::Bool(true));
        assert!(Payload::new(&SET_COLORS, fields).is_err());
    }
}

//! Declarative per-command schemas
//!
//! Every remote command is described by a static [`CommandSchema`]: its
//! payload fields, its CLI option flags, and its positional-argument spec.
//! Schemas carry no behavior; the client encoder and the host dispatcher
//! both validate against the same schema instance.

use crate::error::{CommandError, Result};
use crate::value::Value;
use std::collections::BTreeMap;

/// Wire type of a payload field or option flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Str,
    Map,
    Seq,
}

impl FieldKind {
    /// Whether a concrete value has this kind.
    pub fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (FieldKind::Bool, Value::Bool(_)) => true,
            (FieldKind::Int, Value::Int(_)) => true,
            (FieldKind::Str, Value::Str(_)) => true,
            (FieldKind::Map, Value::Map(_)) => true,
            (FieldKind::Seq, Value::Seq(_)) => true,
            _ => false,
        }
    }

    fn name(self) -> &'static str {
        match self {
            FieldKind::Bool => "boolean",
            FieldKind::Int => "integer",
            FieldKind::Str => "string",
            FieldKind::Map => "mapping",
            FieldKind::Seq => "sequence",
        }
    }
}

/// One payload field in a command schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name as it appears on the wire
    pub name: &'static str,
    /// Expected value kind
    pub kind: FieldKind,
    /// Whether the field must be present in every payload
    pub required: bool,
}

/// One CLI option flag in a command schema.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Long flag name (without leading dashes)
    pub long: &'static str,
    /// Optional short flag
    pub short: Option<char>,
    /// Value kind the flag carries
    pub kind: FieldKind,
    /// Help text shown by the CLI
    pub help: &'static str,
}

/// Positional-argument spec for a command.
#[derive(Debug, Clone, Copy)]
pub struct ArgsSpec {
    /// Placeholder shown in usage, e.g. `COLOR_OR_FILE ...`
    pub placeholder: &'static str,
    /// Payload field the interpreted positionals feed, if any
    pub field: Option<&'static str>,
}

/// Immutable contract for one remote command.
///
/// Built as static data at process start and referenced for the lifetime of
/// the process by both halves of the protocol.
#[derive(Debug, Clone, Copy)]
pub struct CommandSchema {
    /// Command name used for dispatch
    pub name: &'static str,
    /// Payload fields
    pub fields: &'static [FieldSpec],
    /// CLI option flags
    pub options: &'static [OptionSpec],
    /// Positional-argument spec
    pub args: ArgsSpec,
    /// When set, the host sends no response for this command
    pub no_response: bool,
}

impl CommandSchema {
    /// Look up a field spec by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate a payload field map against this schema.
    ///
    /// Rejects unknown fields, missing required fields, and kind mismatches.
    /// `Value::Null` is accepted for any optional field (explicitly cleared,
    /// as opposed to absent).
    pub fn validate(&self, fields: &BTreeMap<String, Value>) -> Result<()> {
        for (name, value) in fields {
            let Some(spec) = self.field(name) else {
                return Err(CommandError::Protocol(format!(
                    "unknown field '{}' for command '{}'",
                    name, self.name
                )));
            };
            if value.is_null() && !spec.required {
                continue;
            }
            if !spec.kind.matches(value) {
                return Err(CommandError::Protocol(format!(
                    "field '{}' of command '{}' must be a {}",
                    name,
                    self.name,
                    spec.kind.name()
                )));
            }
        }
        for spec in self.fields {
            if spec.required && !fields.contains_key(spec.name) {
                return Err(CommandError::Protocol(format!(
                    "missing required field '{}' for command '{}'",
                    spec.name, self.name
                )));
            }
        }
        Ok(())
    }
}

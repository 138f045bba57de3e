//! Weft Core Library
//!
//! Shared contract between the weft host process and the remote control
//! client: the payload value model, per-command schemas, the wire protocol,
//! and color parsing. This crate is used by both the host and CLI components.

pub mod color;
pub mod commands;
pub mod error;
pub mod paths;
pub mod payload;
pub mod protocol;
pub mod schema;
pub mod value;

// Re-export commonly used types
pub use color::{Color, ColorSetting, NULLABLE_COLORS};
pub use error::{CommandError, ErrorKind, Result};
pub use payload::Payload;
pub use protocol::{Request, Response};
pub use schema::{ArgsSpec, CommandSchema, FieldKind, FieldSpec, OptionSpec};
pub use value::Value;

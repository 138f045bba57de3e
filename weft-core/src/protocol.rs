//! Wire request/response types
//!
//! One JSON object per line in each direction over the control socket.
//! Framing and transport details belong to the channel, not to this crate.

use crate::error::{CommandError, ErrorKind};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A remote command request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Command name, e.g. `set-colors`
    pub cmd: String,
    /// Payload fields (validated against the command schema by the host)
    #[serde(default)]
    pub payload: BTreeMap<String, Value>,
}

/// Error descriptor carried by a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    /// Which stage of the round trip failed
    pub kind: ErrorKind,
    /// Human-readable message, surfaced verbatim by the client
    pub message: String,
}

/// Response to a remote command request.
///
/// Exactly one per request, unless the command schema declares no-response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Status: "ok" or "error"
    pub status: String,
    /// Success value, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Error descriptor for failed requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDescriptor>,
}

impl Response {
    /// Create a successful response.
    pub fn ok(data: Option<Value>) -> Self {
        Self {
            status: "ok".to_string(),
            data,
            error: None,
        }
    }

    /// Create an error response from a command error.
    pub fn from_error(err: &CommandError) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            error: Some(ErrorDescriptor {
                kind: err.kind(),
                message: err.to_string(),
            }),
        }
    }

    /// True when the request succeeded.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Convert back into a result, rebuilding the error on failure.
    pub fn into_result(self) -> crate::error::Result<Option<Value>> {
        match self.error {
            None => Ok(self.data),
            Some(desc) => Err(desc.kind.into_error(desc.message)),
        }
    }
}

//! Error types for the weft remote control protocol

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised anywhere along a remote command round trip.
///
/// The variant determines which side of the protocol failed and how far the
/// request got:
/// - `Argument` is raised client-side before anything is transmitted.
/// - `Protocol` is raised by the dispatcher before any command logic runs.
/// - `Host` is raised during target resolution or mutation and is converted
///   into an error response rather than terminating the host.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Malformed token or missing file on the client
    #[error("{0}")]
    Argument(String),

    /// Request violates the command schema
    #[error("{0}")]
    Protocol(String),

    /// Failure while resolving targets or applying the mutation
    #[error("{0}")]
    Host(String),
}

impl CommandError {
    /// The wire-level kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Argument(_) => ErrorKind::Argument,
            CommandError::Protocol(_) => ErrorKind::Protocol,
            CommandError::Host(_) => ErrorKind::Host,
        }
    }
}

/// Error kind as it appears in an error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Argument,
    Protocol,
    Host,
}

impl ErrorKind {
    /// Rebuild a [`CommandError`] of this kind from a wire message.
    pub fn into_error(self, message: impl Into<String>) -> CommandError {
        match self {
            ErrorKind::Argument => CommandError::Argument(message.into()),
            ErrorKind::Protocol => CommandError::Protocol(message.into()),
            ErrorKind::Host => CommandError::Host(message.into()),
        }
    }
}

/// Result type alias for remote command operations
pub type Result<T> = std::result::Result<T, CommandError>;

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Protocol(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            CommandError::Argument("bad token".into()).kind(),
            ErrorKind::Argument
        );
        assert_eq!(
            CommandError::Protocol("unknown field".into()).kind(),
            ErrorKind::Protocol
        );
        assert_eq!(CommandError::Host("no such tab".into()).kind(), ErrorKind::Host);
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(serde_json::to_string(&ErrorKind::Argument).unwrap(), r#""argument""#);
        assert_eq!(serde_json::to_string(&ErrorKind::Host).unwrap(), r#""host""#);
    }

    #[test]
    fn test_message_is_verbatim() {
        let err = CommandError::Host("window 7 vanished".into());
        assert_eq!(format!("{}", err), "window 7 vanished");
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CommandError = json_err.into();
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }
}

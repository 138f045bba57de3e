//! Command dispatcher
//!
//! Holds the immutable registry of host commands, built once at startup.
//! A request is looked up by name, its payload validated against the shared
//! schema, and the command run; any failure becomes an error response. A
//! command failure never terminates the host.

use crate::state::Host;
use std::collections::BTreeMap;
use tracing::{debug, warn};
use weft_core::{CommandError, CommandSchema, Payload, Request, Response, Result, Value};

/// Host-side half of a remote command: resolve targets and apply mutations.
///
/// Implementations never see the client process; their only input is the
/// validated payload.
pub trait HostCommand {
    /// The shared schema this command validates against.
    fn schema(&self) -> &'static CommandSchema;

    /// Run the command against host state.
    fn run(&self, host: &mut Host, payload: Payload) -> Result<Option<Value>>;
}

/// Immutable name-keyed command registry.
pub struct Dispatcher {
    commands: BTreeMap<&'static str, Box<dyn HostCommand + Send>>,
}

impl Dispatcher {
    /// Build the registry of builtin commands.
    ///
    /// All-or-nothing: a duplicate command name aborts startup.
    pub fn builtin() -> anyhow::Result<Self> {
        let mut dispatcher = Self {
            commands: BTreeMap::new(),
        };
        dispatcher.register(Box::new(crate::commands::SetColors))?;
        Ok(dispatcher)
    }

    fn register(&mut self, command: Box<dyn HostCommand + Send>) -> anyhow::Result<()> {
        let name = command.schema().name;
        if self.commands.insert(name, command).is_some() {
            anyhow::bail!("duplicate command registration: '{name}'");
        }
        Ok(())
    }

    /// Registered command names, for logging.
    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    /// Dispatch one request.
    ///
    /// Returns `None` only for commands whose schema declares no-response.
    pub fn dispatch(&self, host: &mut Host, request: &Request) -> Option<Response> {
        debug!("Dispatching command '{}'", request.cmd);

        let Some(command) = self.commands.get(request.cmd.as_str()) else {
            let err = CommandError::Protocol(format!("unknown command '{}'", request.cmd));
            warn!("{err}");
            return Some(Response::from_error(&err));
        };

        let schema = command.schema();
        let result = Payload::new(schema, request.payload.clone())
            .and_then(|payload| command.run(host, payload));

        match result {
            Ok(data) => {
                if schema.no_response {
                    None
                } else {
                    Some(Response::ok(data))
                }
            }
            Err(err) => {
                warn!("Command '{}' failed: {err}", request.cmd);
                if schema.no_response {
                    None
                } else {
                    Some(Response::from_error(&err))
                }
            }
        }
    }
}

//! weftd library
//!
//! Host-side half of the weft remote control protocol: the live window/tab
//! inventory, target resolution, color mutation, the command dispatcher, and
//! the control socket loop. The binary in `main.rs` wires these together;
//! the modules are exported so integration tests can drive a host directly.

pub mod colors;
pub mod commands;
pub mod dispatch;
pub mod inventory;
pub mod notify;
pub mod resolver;
pub mod server;
pub mod state;

//! weftctl library
//!
//! Client-side half of the weft remote control protocol: the clap surface,
//! the argument interpreter that turns tokens into validated payloads, the
//! control socket client, and the CLI configuration chain.
//!
//! The client never touches host state; it communicates with the running
//! weft process only through serialized requests and responses.

pub mod cli;
pub mod client;
pub mod config;

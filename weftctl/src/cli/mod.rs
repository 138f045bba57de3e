//! CLI command definitions and handlers
//!
//! This module organizes the CLI into logical submodules:
//! - [`commands`] - Command and argument definitions
//! - [`colors`] - Argument interpreter for color specifications
//! - [`handlers`] - Command execution handlers

pub mod colors;
mod commands;
mod handlers;

pub use commands::*;
pub use handlers::*;

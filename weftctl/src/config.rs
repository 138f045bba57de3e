//! CLI configuration management
//!
//! Priority chain (lowest to highest): defaults, config file, environment
//! variables, CLI arguments. The CLI arguments are applied by `main` after
//! the config is loaded.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use weft_core::paths::{default_ctl_config_path, default_socket_path};

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CtlConfig {
    /// Control socket path
    pub socket: PathBuf,

    /// Enable verbose logging by default
    pub verbose: bool,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for CtlConfig {
    fn default() -> Self {
        Self {
            socket: default_socket_path(),
            verbose: false,
            timeout: 10,
        }
    }
}

impl CtlConfig {
    /// Load configuration from the default file, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&default_ctl_config_path())
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read CLI config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse CLI config file {}", path.display()))
    }

    /// Update configuration with environment variables.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(socket) = std::env::var("WEFT_SOCKET") {
            self.socket = PathBuf::from(socket);
        }

        if let Ok(verbose) = std::env::var("WEFT_VERBOSE") {
            self.verbose = verbose.eq_ignore_ascii_case("true") || verbose == "1";
        }

        if let Ok(timeout) = std::env::var("WEFT_TIMEOUT") {
            if let Ok(timeout) = timeout.parse() {
                self.timeout = timeout;
            }
        }
    }
}

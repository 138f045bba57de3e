//! Weft remote control CLI
//!
//! Sends typed commands to a running weft terminal over its control socket.

use anyhow::Result;
use clap::Parser;
use weftctl::cli::{generate_completion, handle_set_colors, Cli, Commands};
use weftctl::client::ControlClient;
use weftctl::config::CtlConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Build configuration: defaults → file → env → CLI args
    let mut config = if cli.no_config {
        CtlConfig::default()
    } else {
        match CtlConfig::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        }
    };
    config.apply_env_overrides();
    if let Some(socket) = cli.socket.clone() {
        config.socket = socket;
    }
    if let Some(verbose) = cli.verbose {
        config.verbose = verbose;
    }

    if config.verbose {
        eprintln!("Verbose mode enabled");
        eprintln!("Control socket: {}", config.socket.display());
    }

    let client = ControlClient::new(config.socket.clone(), config.timeout);

    let result = match cli.command {
        Commands::SetColors(ref args) => handle_set_colors(&client, args, config.verbose).await,
        Commands::Completion { shell } => {
            generate_completion(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if config.verbose {
            eprintln!("Error details: {:?}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}

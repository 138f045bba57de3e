//! Weft terminal host
//!
//! Runs the interactive host process and its remote control socket. Remote
//! commands mutate live state (colors across panes, for now) without a
//! restart: the CLI encodes a payload client-side, this process resolves the
//! targets and applies the mutation inside its single-threaded event loop.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use weft_core::paths::{default_host_config_path, default_socket_path};
use weftd::colors::load_startup_colors;
use weftd::dispatch::Dispatcher;
use weftd::server;
use weftd::state::Host;

/// Weft terminal host
#[derive(Parser, Debug)]
#[command(name = "weftd")]
#[command(version, about = "Weft terminal host process", long_about = None)]
struct Args {
    /// Path to the color configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Control socket path
    #[arg(short, long)]
    socket: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Title for the initial window
    #[arg(long, default_value = "shell")]
    title: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose);

    info!("Weft host starting...");

    // Determine config path: CLI flag > env var > default
    let config_path = args.config.unwrap_or_else(|| {
        std::env::var("WEFT_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_host_config_path())
    });
    info!("Color configuration file: {}", config_path.display());

    // Capture the startup snapshot before anything can mutate colors
    let configured = load_startup_colors(&config_path)?;
    let mut host = Host::new(configured);

    // Seed the initial session
    let tab = host.inventory.add_tab("main");
    let window = host.new_window(tab, args.title.as_str());
    info!("Initial session: tab 'main', window '{}' ({:?})", args.title, window);

    // Build the command registry; a duplicate registration aborts startup
    let dispatcher = Dispatcher::builtin()?;

    let socket_path = args.socket.unwrap_or_else(|| {
        std::env::var("WEFT_SOCKET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_socket_path())
    });
    let listener = server::bind(&socket_path)?;
    info!("Weft host listening on {}", socket_path.display());

    let result = server::run(listener, &mut host, &dispatcher).await;

    let _ = std::fs::remove_file(&socket_path);
    info!("Host shutdown complete");
    result
}

/// Initialize tracing subscriber for logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

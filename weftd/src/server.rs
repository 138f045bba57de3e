//! Control socket loop
//!
//! Newline-delimited JSON over a unix domain socket. Connections are
//! accepted and served one at a time on a current-thread runtime, so each
//! command runs to completion before the next request line is even read.
//! Multi-window mutations are therefore observed atomically by everything
//! else in the process.

use crate::dispatch::Dispatcher;
use crate::state::Host;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::signal;
use tracing::{debug, info, warn};
use weft_core::{CommandError, Request, Response};

/// Bind the control socket, removing any stale socket file first.
pub fn bind(socket_path: &Path) -> Result<UnixListener> {
    if let Some(parent) = socket_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create socket directory {}", parent.display()))?;
    }
    if socket_path.exists() {
        std::fs::remove_file(socket_path)
            .with_context(|| format!("Failed to remove stale socket {}", socket_path.display()))?;
    }
    UnixListener::bind(socket_path)
        .with_context(|| format!("Failed to bind control socket {}", socket_path.display()))
}

/// Serve control connections until a shutdown signal arrives.
pub async fn run(
    listener: UnixListener,
    host: &mut Host,
    dispatcher: &Dispatcher,
) -> Result<()> {
    info!(
        "Control socket ready, commands: {}",
        dispatcher.command_names().join(", ")
    );

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, _)) => {
                        if let Err(e) = serve_connection(stream, host, dispatcher).await {
                            warn!("Control connection error: {e}");
                        }
                    }
                    Err(e) => warn!("Failed to accept control connection: {e}"),
                }
            }
        }
    }

    info!("Control socket shutting down");
    Ok(())
}

/// Serve one connection: read request lines, dispatch each in turn, write
/// responses. An unparseable line yields a protocol-error response rather
/// than dropping the connection.
pub async fn serve_connection(
    stream: UnixStream,
    host: &mut Host,
    dispatcher: &Dispatcher,
) -> Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => dispatcher.dispatch(host, &request),
            Err(e) => {
                let err = CommandError::Protocol(format!("invalid request: {e}"));
                warn!("{err}");
                Some(Response::from_error(&err))
            }
        };
        if let Some(response) = response {
            let mut out = serde_json::to_string(&response)?;
            out.push('\n');
            write_half.write_all(out.as_bytes()).await?;
        }
        debug!("Request handled");
    }
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::ColorTable;
    use std::collections::BTreeMap;
    use weft_core::Value;

    #[tokio::test]
    async fn test_serve_connection_roundtrip() {
        let mut host = Host::new(ColorTable::startup_defaults());
        let tab = host.inventory.add_tab("main");
        let window = host.new_window(tab, "shell");
        let dispatcher = Dispatcher::builtin().unwrap();

        let (client, server) = UnixStream::pair().unwrap();
        let serve = serve_connection(server, &mut host, &dispatcher);

        let drive = async move {
            let (read_half, mut write_half) = client.into_split();
            let mut colors = BTreeMap::new();
            colors.insert("foreground".to_string(), Value::Int(0xff0000));
            let mut payload = BTreeMap::new();
            payload.insert("colors".to_string(), Value::Map(colors));
            let request = Request {
                cmd: "set-colors".to_string(),
                payload,
            };
            let mut line = serde_json::to_string(&request).unwrap();
            line.push('\n');
            write_half.write_all(line.as_bytes()).await.unwrap();
            write_half.shutdown().await.unwrap();

            let mut reader = BufReader::new(read_half);
            let mut response_line = String::new();
            reader.read_line(&mut response_line).await.unwrap();
            serde_json::from_str::<Response>(response_line.trim_end()).unwrap()
        };

        let (serve_result, response) = tokio::join!(serve, drive);
        serve_result.unwrap();
        assert!(response.is_ok());
        assert!(response.data.is_none());

        let live = &host.inventory.window(window).unwrap().colors;
        assert_eq!(live.get("foreground"), Some(Some(0xff0000)));
    }

    #[tokio::test]
    async fn test_bad_json_yields_protocol_error() {
        let mut host = Host::new(ColorTable::startup_defaults());
        let dispatcher = Dispatcher::builtin().unwrap();

        let (client, server) = UnixStream::pair().unwrap();
        let serve = serve_connection(server, &mut host, &dispatcher);

        let drive = async move {
            let (read_half, mut write_half) = client.into_split();
            write_half.write_all(b"this is not json\n").await.unwrap();
            write_half.shutdown().await.unwrap();

            let mut reader = BufReader::new(read_half);
            let mut response_line = String::new();
            reader.read_line(&mut response_line).await.unwrap();
            serde_json::from_str::<Response>(response_line.trim_end()).unwrap()
        };

        let (serve_result, response) = tokio::join!(serve, drive);
        serve_result.unwrap();
        assert!(!response.is_ok());
        assert_eq!(
            response.error.unwrap().kind,
            weft_core::ErrorKind::Protocol
        );
    }
}

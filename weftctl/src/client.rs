//! Socket client for communicating with the weft host process.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;
use weft_core::{Request, Response};

/// Client for the weft control socket.
///
/// The protocol is newline-delimited JSON: one request object per line, and
/// (unless the command declares no-response) exactly one response line back.
/// Connection and read timeouts guard against a wedged host; retries are
/// left to the caller since commands are not idempotent in general.
#[derive(Debug, Clone)]
pub struct ControlClient {
    socket_path: PathBuf,
    timeout: Duration,
}

impl ControlClient {
    /// Create a client for the socket at `socket_path`.
    pub fn new(socket_path: PathBuf, timeout_secs: u64) -> Self {
        Self {
            socket_path,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// The socket path this client targets.
    pub fn socket_path(&self) -> &PathBuf {
        &self.socket_path
    }

    async fn connect(&self) -> Result<UnixStream> {
        let connect = UnixStream::connect(&self.socket_path);
        tokio::time::timeout(self.timeout, connect)
            .await
            .with_context(|| {
                format!(
                    "Timed out connecting to weft control socket at {}",
                    self.socket_path.display()
                )
            })?
            .with_context(|| {
                format!(
                    "Cannot connect to weft control socket at {}. Is weft running?",
                    self.socket_path.display()
                )
            })
    }

    /// Send a request and wait for its response.
    pub async fn roundtrip(&self, request: &Request) -> Result<Response> {
        let mut stream = self.connect().await?;
        let line = serde_json::to_string(request).context("Failed to serialize request")?;
        stream.write_all(line.as_bytes()).await?;
        stream.write_all(b"\n").await?;

        let mut reader = BufReader::new(stream);
        let mut response_line = String::new();
        let read = reader.read_line(&mut response_line);
        let n = tokio::time::timeout(self.timeout, read)
            .await
            .context("Timed out waiting for a response from weft")??;
        if n == 0 {
            anyhow::bail!("weft closed the control connection without responding");
        }

        serde_json::from_str(response_line.trim_end())
            .context("Failed to parse response from weft")
    }

    /// Send a request for a no-response command.
    pub async fn send(&self, request: &Request) -> Result<()> {
        let mut stream = self.connect().await?;
        let line = serde_json::to_string(request).context("Failed to serialize request")?;
        stream.write_all(line.as_bytes()).await?;
        stream.write_all(b"\n").await?;
        stream.shutdown().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_failure_names_socket() {
        let client = ControlClient::new(PathBuf::from("/no/such/weft.sock"), 1);
        let request = Request {
            cmd: "set-colors".to_string(),
            payload: Default::default(),
        };
        let err = client.roundtrip(&request).await.unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/weft.sock"));
    }

    #[tokio::test]
    async fn test_roundtrip_over_socketpair() {
        let dir = std::env::temp_dir().join(format!("weftctl-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let socket_path = dir.join("control.sock");
        let _ = std::fs::remove_file(&socket_path);

        let listener = tokio::net::UnixListener::bind(&socket_path).unwrap();
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            reader.read_line(&mut line).await.unwrap();
            let request: Request = serde_json::from_str(line.trim_end()).unwrap();
            assert_eq!(request.cmd, "set-colors");
            let response = serde_json::to_string(&Response::ok(None)).unwrap();
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.write_all(b"\n").await.unwrap();
        });

        let client = ControlClient::new(socket_path.clone(), 5);
        let request = Request {
            cmd: "set-colors".to_string(),
            payload: Default::default(),
        };
        let response = client.roundtrip(&request).await.unwrap();
        assert!(response.is_ok());

        server.await.unwrap();
        let _ = std::fs::remove_file(&socket_path);
    }
}

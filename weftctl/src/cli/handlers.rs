//! Command execution handlers

use super::colors;
use super::commands::{Cli, SetColorsArgs};
use crate::client::ControlClient;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use weft_core::commands::SET_COLORS;
use weft_core::Request;

/// Handle the `set-colors` command.
///
/// Encodes the arguments into a payload, sends it to the host, and surfaces
/// the host's error message verbatim on failure. A successful invocation
/// prints nothing unless the host returned data.
pub async fn handle_set_colors(
    client: &ControlClient,
    args: &SetColorsArgs,
    verbose: bool,
) -> Result<()> {
    let payload = colors::build_payload(args)?;
    let request = Request {
        cmd: SET_COLORS.name.to_string(),
        payload: payload.into_fields(),
    };

    if SET_COLORS.no_response {
        client.send(&request).await?;
        return Ok(());
    }

    let response = client.roundtrip(&request).await?;
    match response.into_result() {
        Ok(Some(data)) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
        Ok(None) => {
            if verbose {
                eprintln!("Colors updated");
            }
            Ok(())
        }
        Err(err) => Err(anyhow::anyhow!("{err}")),
    }
}

/// Generate shell completion scripts for the CLI.
pub fn generate_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

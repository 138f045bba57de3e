//! Argument interpreter for the `set-colors` command
//!
//! Turns the positional tokens and option flags into a validated payload.
//! Each token is either a single `name=value` assignment (parsed with the
//! same grammar as a weft.conf line) or a path to a file of such lines.
//! Entries merge left to right with last-wins semantics, matching how a
//! persisted configuration file overrides earlier entries.

use super::commands::SetColorsArgs;
use colored::Colorize;
use std::collections::BTreeMap;
use weft_core::color::{is_nullable_color, parse_config_colors, parse_config_line, ColorSetting};
use weft_core::commands::SET_COLORS;
use weft_core::paths::expand_user;
use weft_core::{CommandError, Payload, Result, Value};

/// Parse color tokens into the wire color map.
///
/// Nullable color names come out as integer-or-null; all other names carry
/// a concrete 24-bit integer. Errors name the offending token or file and
/// are raised before any payload exists.
pub fn parse_colors(args: &[String]) -> Result<BTreeMap<String, Option<u32>>> {
    let mut colors: BTreeMap<String, ColorSetting> = BTreeMap::new();
    for spec in args {
        if spec.contains('=') {
            // One key=value entry, same grammar as a config line
            let line = spec.replacen('=', " ", 1);
            match parse_config_line(&line)? {
                Some((key, setting)) => {
                    colors.insert(key, setting);
                }
                None => {
                    return Err(CommandError::Argument(format!(
                        "invalid color specification '{spec}'"
                    )));
                }
            }
        } else {
            // A path to a file of config-syntax color lines
            let path = expand_user(spec);
            let text = std::fs::read_to_string(&path).map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    CommandError::Argument(format!(
                        "The colors configuration file {} was not found.",
                        spec.bold()
                    ))
                } else {
                    CommandError::Argument(format!(
                        "Failed to read colors from {}: {err}",
                        spec.bold()
                    ))
                }
            })?;
            let entries = parse_config_colors(&text).map_err(|err| {
                CommandError::Argument(format!("{} in {}", err, spec.bold()))
            })?;
            colors.extend(entries);
        }
    }

    // Split the fixed nullable set out of the merged map, then fold the two
    // halves back together as integers and nulls.
    let mut nullable_color_map: BTreeMap<String, Option<u32>> = BTreeMap::new();
    let mut plain: BTreeMap<String, u32> = BTreeMap::new();
    for (key, setting) in colors {
        if is_nullable_color(&key) {
            nullable_color_map.insert(key, setting.to_int());
        } else if let Some(rgb) = setting.to_int() {
            plain.insert(key, rgb);
        }
    }
    let mut ans: BTreeMap<String, Option<u32>> =
        plain.into_iter().map(|(k, v)| (k, Some(v))).collect();
    ans.extend(nullable_color_map);
    Ok(ans)
}

/// Build the `set-colors` payload from parsed CLI arguments.
///
/// With `--reset`, positional tokens are ignored and an empty color map is
/// sent; the host substitutes its startup snapshot.
pub fn build_payload(args: &SetColorsArgs) -> Result<Payload> {
    let mut final_colors: BTreeMap<String, Option<u32>> = BTreeMap::new();
    if !args.reset {
        final_colors = parse_colors(&args.colors)?;
    }

    let color_values: BTreeMap<String, Value> = final_colors
        .into_iter()
        .map(|(k, v)| (k, Value::from(v)))
        .collect();

    let mut fields = BTreeMap::new();
    fields.insert("colors".to_string(), Value::Map(color_values));
    if let Some(ref m) = args.match_window {
        fields.insert("match_window".to_string(), Value::from(m.as_str()));
    }
    if let Some(ref m) = args.match_tab {
        fields.insert("match_tab".to_string(), Value::from(m.as_str()));
    }
    fields.insert("all".to_string(), Value::Bool(args.all || args.reset));
    fields.insert(
        "configured".to_string(),
        Value::Bool(args.configured || args.reset),
    );
    fields.insert("reset".to_string(), Value::Bool(args.reset));

    Payload::new(&SET_COLORS, fields)
}

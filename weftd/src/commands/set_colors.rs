//! Host half of the `set-colors` command

use crate::colors::ColorMap;
use crate::dispatch::HostCommand;
use crate::resolver::resolve_targets;
use crate::state::Host;
use weft_core::color::is_color_option;
use weft_core::commands::SET_COLORS;
use weft_core::{CommandError, CommandSchema, Payload, Result, Value};

/// Apply a color map to the matched windows' live color tables and,
/// when requested, to the shared configured table.
pub struct SetColors;

impl HostCommand for SetColors {
    fn schema(&self) -> &'static CommandSchema {
        &SET_COLORS
    }

    fn run(&self, host: &mut Host, payload: Payload) -> Result<Option<Value>> {
        // Resolution happens before any mutation; a bad match expression
        // aborts with host state untouched.
        let targets = resolve_targets(
            &host.inventory,
            payload.str_opt("match_window"),
            payload.str_opt("match_tab"),
            payload.bool_or("all", false),
        )?;

        let configured = payload.bool_or("configured", false);
        let reset = payload.bool_or("reset", false);

        let colors: ColorMap = if reset {
            host.startup_colors().clone()
        } else {
            match payload.map_opt("colors") {
                Some(map) => convert_colors(map)?,
                None => ColorMap::new(),
            }
        };

        // Both applications derive from the same map and complete before any
        // notification is queued.
        for id in &targets {
            if let Some(window) = host.inventory.window_mut(*id) {
                window.colors.patch(&colors, true);
            }
        }
        if configured {
            host.configured.patch(&colors, reset);
        }

        let default_bg_changed = colors.contains_key("background");
        for id in &targets {
            if default_bg_changed {
                host.notifier.background_changed(*id);
            }
            host.notifier.refresh(*id);
        }

        Ok(None)
    }
}

/// Convert the wire color map into integer-or-null entries, validating
/// names and the 24-bit range.
fn convert_colors(
    colors: &std::collections::BTreeMap<String, Value>,
) -> Result<ColorMap> {
    let mut out = ColorMap::new();
    for (name, value) in colors {
        if !is_color_option(name) {
            return Err(CommandError::Host(format!("unknown color option '{name}'")));
        }
        let entry = match value {
            Value::Null => None,
            Value::Int(i) if (0..=0xff_ffff).contains(i) => Some(*i as u32),
            Value::Int(i) => {
                return Err(CommandError::Host(format!(
                    "color value {i} for '{name}' is out of 24-bit range"
                )));
            }
            _ => {
                return Err(CommandError::Host(format!(
                    "color '{name}' must be an integer or null"
                )));
            }
        };
        out.insert(name.clone(), entry);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_convert_valid_map() {
        let mut colors = BTreeMap::new();
        colors.insert("foreground".to_string(), Value::Int(0xff0000));
        colors.insert("cursor".to_string(), Value::Null);
        let map = convert_colors(&colors).unwrap();
        assert_eq!(map["foreground"], Some(0xff0000));
        assert_eq!(map["cursor"], None);
    }

    #[test]
    fn test_convert_rejects_out_of_range() {
        let mut colors = BTreeMap::new();
        colors.insert("foreground".to_string(), Value::Int(0x1_000_000));
        assert!(convert_colors(&colors).is_err());
    }

    #[test]
    fn test_convert_rejects_unknown_name() {
        let mut colors = BTreeMap::new();
        colors.insert("font_size".to_string(), Value::Int(12));
        assert!(convert_colors(&colors).is_err());
    }

    #[test]
    fn test_convert_rejects_wrong_shape() {
        let mut colors = BTreeMap::new();
        colors.insert("foreground".to_string(), Value::from("red"));
        assert!(convert_colors(&colors).is_err());
    }
}

//! Live and configured color tables

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;
use weft_core::color::parse_config_colors;

/// Color name to 24-bit integer, or null for an explicitly cleared nullable
/// color. This is the shape color maps take on the wire and in snapshots.
pub type ColorMap = BTreeMap<String, Option<u32>>;

/// A color table: one per window (live colors) plus one shared instance for
/// the configured colors applied to new windows.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    entries: ColorMap,
}

impl ColorTable {
    /// The built-in startup defaults: base colors plus the standard
    /// 16-color palette.
    pub fn startup_defaults() -> Self {
        let mut entries = ColorMap::new();
        let base: &[(&str, Option<u32>)] = &[
            ("foreground", Some(0xdddddd)),
            ("background", Some(0x000000)),
            ("cursor", Some(0xcccccc)),
            ("cursor_text_color", Some(0x111111)),
            ("selection_foreground", Some(0x000000)),
            ("selection_background", Some(0xfffacd)),
            ("visual_bell_color", None),
            ("active_border_color", Some(0x00ff00)),
            ("inactive_border_color", Some(0xcccccc)),
            ("url_color", Some(0x0087bd)),
        ];
        for &(name, value) in base {
            entries.insert(name.to_string(), value);
        }
        const PALETTE: [u32; 16] = [
            0x000000, 0xcc0403, 0x19cb00, 0xcecb00, 0x0d73cc, 0xcb1ed1, 0x0dcdcd, 0xdddddd,
            0x767676, 0xf2201f, 0x23fd00, 0xfffd00, 0x1a8fff, 0xfd28ff, 0x14ffff, 0xffffff,
        ];
        for (i, &rgb) in PALETTE.iter().enumerate() {
            entries.insert(format!("color{i}"), Some(rgb));
        }
        Self { entries }
    }

    /// Look up a color. Outer `None` means the name is not in the table;
    /// inner `None` means the color is explicitly unset.
    pub fn get(&self, name: &str) -> Option<Option<u32>> {
        self.entries.get(name).copied()
    }

    /// Set one entry.
    pub fn set(&mut self, name: impl Into<String>, value: Option<u32>) {
        self.entries.insert(name.into(), value);
    }

    /// Apply a color map to this table.
    ///
    /// Null entries clear the color only when `allow_clear` is set: live
    /// tables always allow clearing, the configured table only during a
    /// reset. This keeps the configured table free of implicit nulls.
    pub fn patch(&mut self, colors: &ColorMap, allow_clear: bool) {
        for (name, value) in colors {
            if value.is_none() && !allow_clear {
                continue;
            }
            self.entries.insert(name.clone(), *value);
        }
    }

    /// Immutable copy of the table, used for the startup snapshot.
    pub fn snapshot(&self) -> ColorMap {
        self.entries.clone()
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::startup_defaults()
    }
}

/// Build the configured color table from the defaults overridden by an
/// optional weft.conf-syntax file.
pub fn load_startup_colors(path: &Path) -> Result<ColorTable> {
    let mut table = ColorTable::startup_defaults();
    if !path.exists() {
        info!("No color configuration at {}, using defaults", path.display());
        return Ok(table);
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read color configuration {}", path.display()))?;
    let entries = parse_config_colors(&text)
        .with_context(|| format!("Invalid color configuration {}", path.display()))?;
    for (name, setting) in entries {
        table.set(name, setting.to_int());
    }
    info!("Loaded startup colors from {}", path.display());
    Ok(table)
}

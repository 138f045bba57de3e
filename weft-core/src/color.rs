//! Color values and the `name value` configuration grammar
//!
//! The same grammar backs the persisted configuration file and the
//! `name=value` assignment tokens accepted by the CLI (the client rewrites
//! `=` to a space before parsing).

use crate::error::{CommandError, Result};

/// Color option names that may be explicitly cleared with `none`.
///
/// A cleared entry travels as null on the wire and may be null only in a
/// window's live color table; the configured table is never implicitly null.
pub const NULLABLE_COLORS: &[&str] = &[
    "cursor",
    "cursor_text_color",
    "selection_foreground",
    "selection_background",
    "visual_bell_color",
];

/// Non-palette color option names.
const BASE_COLORS: &[&str] = &[
    "foreground",
    "background",
    "active_border_color",
    "inactive_border_color",
    "url_color",
];

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xffffff),
    ("red", 0xff0000),
    ("green", 0x008000),
    ("blue", 0x0000ff),
    ("yellow", 0xffff00),
    ("magenta", 0xff00ff),
    ("cyan", 0x00ffff),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("silver", 0xc0c0c0),
    ("maroon", 0x800000),
    ("navy", 0x000080),
    ("olive", 0x808000),
    ("purple", 0x800080),
    ("teal", 0x008080),
    ("orange", 0xffa500),
];

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u32);

impl Color {
    /// Wrap a 24-bit integer (upper byte ignored).
    pub fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    /// The 24-bit integer projection used on the wire.
    pub fn as_rgb(self) -> u32 {
        self.0
    }

    /// Parse `#rgb`, `#rrggbb`, or a known color name.
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if let Some(hex) = spec.strip_prefix('#') {
            return Self::parse_hex(hex)
                .ok_or_else(|| CommandError::Argument(format!("invalid color value '{spec}'")));
        }
        let lower = spec.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|&(_, rgb)| Self(rgb))
            .ok_or_else(|| CommandError::Argument(format!("unknown color name '{spec}'")))
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        match hex.len() {
            3 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                let (r, g, b) = ((v >> 8) & 0xf, (v >> 4) & 0xf, v & 0xf);
                Some(Self((r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11)))
            }
            6 => u32::from_str_radix(hex, 16).ok().map(Self),
            _ => None,
        }
    }
}

/// Parsed value of a color option: a concrete color, or explicitly unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSetting {
    Rgb(Color),
    Unset,
}

impl ColorSetting {
    /// Integer-or-null projection for the wire.
    pub fn to_int(self) -> Option<u32> {
        match self {
            ColorSetting::Rgb(c) => Some(c.as_rgb()),
            ColorSetting::Unset => None,
        }
    }
}

/// Whether `name` is in the fixed nullable set.
pub fn is_nullable_color(name: &str) -> bool {
    NULLABLE_COLORS.contains(&name)
}

/// Whether `name` is a recognized color option (base set or `colorN`).
pub fn is_color_option(name: &str) -> bool {
    if BASE_COLORS.contains(&name) || NULLABLE_COLORS.contains(&name) {
        return true;
    }
    name.strip_prefix("color").is_some_and(|n| {
        !n.is_empty()
            && n.bytes().all(|b| b.is_ascii_digit())
            && n.parse::<u16>().is_ok_and(|v| v <= 255)
    })
}

/// Parse one configuration line.
///
/// Returns `Ok(None)` for blank lines and `#` comments. Errors carry the
/// offending key or value so the caller can surface them verbatim.
pub fn parse_config_line(line: &str) -> Result<Option<(String, ColorSetting)>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (key, value) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| CommandError::Argument(format!("missing value in '{line}'")))?;
    let key = key.trim();
    let value = value.trim();
    if !is_color_option(key) {
        return Err(CommandError::Argument(format!("unknown color option '{key}'")));
    }
    if value.eq_ignore_ascii_case("none") {
        if !is_nullable_color(key) {
            return Err(CommandError::Argument(format!(
                "color '{key}' cannot be set to none"
            )));
        }
        return Ok(Some((key.to_string(), ColorSetting::Unset)));
    }
    let color = Color::parse(value)?;
    Ok(Some((key.to_string(), ColorSetting::Rgb(color))))
}

/// Parse a block of configuration text into ordered entries.
///
/// Order is preserved so callers can apply the last-wins merge contract.
pub fn parse_config_colors(text: &str) -> Result<Vec<(String, ColorSetting)>> {
    let mut entries = Vec::new();
    for line in text.lines() {
        if let Some(entry) = parse_config_line(line)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

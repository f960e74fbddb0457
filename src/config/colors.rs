//! Color configuration for the TUI.

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

/// Configuration for all TUI colors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub active_border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub inactive_border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub title: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub description: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub badge_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub badge_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub tag: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub metadata: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub image_ref: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub pager_active: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub pager_disabled: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub overlay_border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub search: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_bg: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            active_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            selection_bg: Color::Cyan,
            selection_fg: Color::Black,
            title: Color::White,
            description: Color::Gray,
            badge_fg: Color::Black,
            badge_bg: Color::Green,
            tag: Color::LightBlue,
            metadata: Color::Yellow,
            image_ref: Color::DarkGray,
            pager_active: Color::Cyan,
            pager_disabled: Color::DarkGray,
            overlay_border: Color::LightCyan,
            search: Color::LightYellow,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
        }
    }
}

/// Custom deserializer for Color that supports named colors and hex codes.
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color_string(&s).map_err(de::Error::custom)
}

/// Parse a color string into a ratatui Color.
///
/// Supports:
/// - Named colors: "Black", "Red", "Green", "Yellow", "Blue", "Magenta", "Cyan", "Gray",
///   "DarkGray", "LightRed", "LightGreen", "LightYellow", "LightBlue", "LightMagenta",
///   "LightCyan", "White", "Reset"
/// - Hex colors: "#RRGGBB" or "#RGB"
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();

    // Handle hex colors
    if s.starts_with('#') {
        return parse_hex_color(s);
    }

    // Handle named colors (case-insensitive)
    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        "reset" => Ok(Color::Reset),
        _ => Err(format!("Unknown color: {}", s)),
    }
}

/// Parse "#RRGGBB" or "#RGB".
fn parse_hex_color(s: &str) -> Result<Color, String> {
    let hex = s.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(|| format!("Invalid hex color: {}", s))
    };

    match hex.len() {
        6 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        // #RGB expands each digit: F -> FF
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        _ => Err(format!("Invalid hex color format: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_ignore_case() {
        for name in ["LightCyan", "lightcyan", "LIGHTCYAN"] {
            assert_eq!(parse_color_string(name).unwrap(), Color::LightCyan);
        }
        assert_eq!(parse_color_string("grey").unwrap(), Color::Gray);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color_string("#1e90ff").unwrap(), Color::Rgb(30, 144, 255));
        assert_eq!(parse_color_string("#0F0").unwrap(), Color::Rgb(0, 255, 0));
    }

    #[test]
    fn test_invalid_colors() {
        assert!(parse_color_string("mauve").is_err());
        assert!(parse_color_string("#XYZXYZ").is_err());
        assert!(parse_color_string("#1234").is_err());
    }

    #[test]
    fn test_color_config_from_toml() {
        let config: ColorConfig = toml::from_str(
            r##"
badge_bg = "#336699"
tag = "Magenta"
"##,
        )
        .unwrap();
        assert_eq!(config.badge_bg, Color::Rgb(0x33, 0x66, 0x99));
        assert_eq!(config.tag, Color::Magenta);
        assert_eq!(config.pager_active, Color::Cyan);
    }
}

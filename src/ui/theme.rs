//! Colour palettes and ANSI escape sequence generation.
//!
//! Each [`Theme`](crate::domain::Theme) value maps to a [`Palette`]. The two
//! built-in palettes are compiled in from `themes/*.toml`; either can be
//! replaced by a custom TOML file through configuration.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-palette"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! nav_active_fg = "#1e1e2e"
//! nav_active_bg = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! link_fg = "#89dceb"
//! modal_border = "#f38ba8"
//! modal_fg = "#cdd6f4"
//! empty_state_fg = "#89b4fa"
//! ```

use crate::domain::error::{BoardError, Result};
use crate::domain::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Colour scheme used by the render components.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Palette {
    /// Human-readable palette name.
    pub name: String,
    /// Colour definitions.
    pub colors: PaletteColors,
}

/// Hex colour strings (`"#rrggbb"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaletteColors {
    pub header_fg: String,
    /// Optional header background; dark palettes usually leave it unset.
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    pub text_dim: String,
    pub border: String,
    pub search_bar_border: String,

    /// Active navigation item.
    pub nav_active_fg: String,
    pub nav_active_bg: String,

    /// Query matches inside result titles.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub link_fg: String,

    pub modal_border: String,
    pub modal_fg: String,

    pub empty_state_fg: String,
}

impl Palette {
    /// Returns the built-in palette for a theme.
    ///
    /// # Panics
    ///
    /// Panics if a bundled palette file fails to parse, which the unit tests
    /// rule out.
    #[must_use]
    pub fn builtin(theme: Theme) -> Self {
        let source = match theme {
            Theme::Light => include_str!("../../themes/light.toml"),
            Theme::Dark => include_str!("../../themes/dark.toml"),
        };
        toml::from_str(source).expect("bundled palettes are valid TOML")
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Palette`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| BoardError::Palette(format!("failed to read palette file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| BoardError::Palette(format!("failed to parse palette TOML: {e}")))
    }

    /// Converts a hex colour to an RGB tuple; malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence for a hex colour.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for a hex colour.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

/// The light and dark palettes, chosen between by the active theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palettes {
    pub light: Palette,
    pub dark: Palette,
}

impl Palettes {
    /// Palette to render with for `theme`.
    #[must_use]
    pub const fn for_theme(&self, theme: Theme) -> &Palette {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            light: Palette::builtin(Theme::Light),
            dark: Palette::builtin(Theme::Dark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_palettes_parse() {
        let palettes = Palettes::default();
        assert_eq!(palettes.for_theme(Theme::Light).name, "board-light");
        assert_eq!(palettes.for_theme(Theme::Dark).name, "board-dark");
        assert!(palettes.light.colors.header_bg.is_some());
        assert!(palettes.dark.colors.header_bg.is_none());
    }

    #[test]
    fn hex_colours_become_truecolor_sequences() {
        assert_eq!(Palette::fg("#1e66f5"), "\u{1b}[38;2;30;102;245m");
        assert_eq!(Palette::bg("ffffff"), "\u{1b}[48;2;255;255;255m");
        assert_eq!(Palette::fg("#abc"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_palette_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut palette = Palette::builtin(Theme::Dark);
        palette.name = "custom".to_string();
        std::fs::write(&path, toml::to_string(&palette).unwrap()).unwrap();

        assert_eq!(Palette::from_file(&path).unwrap(), palette);
        assert!(matches!(
            Palette::from_file(dir.path().join("missing.toml")),
            Err(BoardError::Palette(_))
        ));
    }
}

use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{ThemeMode, UiConfig};

/// Colors for one theme mode
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
    pub selection_bg: Color,
}

impl Palette {
    pub fn light() -> Self {
        Palette {
            background: Color::Rgb(0xEE, 0xF2, 0xFF),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            border: Color::Rgb(0xE5, 0xE7, 0xEB),
            text: Color::Rgb(0x1F, 0x29, 0x37),
            text_bright: Color::Rgb(0x11, 0x18, 0x27),
            dim: Color::Rgb(0x6B, 0x72, 0x80),
            highlight: Color::Rgb(0x3B, 0x82, 0xF6),
            green: Color::Rgb(0x22, 0xC5, 0x5E),
            red: Color::Rgb(0xEF, 0x44, 0x44),
            yellow: Color::Rgb(0x4B, 0x55, 0x63),
            selection_bg: Color::Rgb(0xDB, 0xEA, 0xFE),
        }
    }

    pub fn dark() -> Self {
        Palette {
            background: Color::Rgb(0x11, 0x18, 0x27),
            surface: Color::Rgb(0x1F, 0x29, 0x37),
            border: Color::Rgb(0x37, 0x41, 0x51),
            text: Color::Rgb(0xD1, 0xD5, 0xDB),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x9C, 0xA3, 0xAF),
            highlight: Color::Rgb(0x25, 0x63, 0xEB),
            green: Color::Rgb(0x22, 0xC5, 0x5E),
            red: Color::Rgb(0xEF, 0x44, 0x44),
            yellow: Color::Rgb(0xFA, 0xCC, 0x15),
            selection_bg: Color::Rgb(0x37, 0x41, 0x51),
        }
    }

    /// Apply `[ui.light]` / `[ui.dark]` hex overrides; unknown keys and bad
    /// colors are ignored
    fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        for (key, value) in overrides {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => self.background = color,
                "surface" => self.surface = color,
                "border" => self.border = color,
                "text" => self.text = color,
                "text_bright" => self.text_bright = color,
                "dim" => self.dim = color,
                "highlight" => self.highlight = color,
                "green" => self.green = color,
                "red" => self.red = color,
                "yellow" => self.yellow = color,
                "selection_bg" => self.selection_bg = color,
                _ => {}
            }
        }
        self
    }
}

/// Both palettes, resolved once from config
#[derive(Debug, Clone)]
pub struct Palettes {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for Palettes {
    fn default() -> Self {
        Palettes {
            light: Palette::light(),
            dark: Palette::dark(),
        }
    }
}

impl Palettes {
    pub fn from_config(ui: &UiConfig) -> Self {
        Palettes {
            light: Palette::light().with_overrides(&ui.light),
            dark: Palette::dark().with_overrides(&ui.dark),
        }
    }

    pub fn for_mode(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

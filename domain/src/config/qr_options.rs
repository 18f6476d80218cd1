//! QR rendering options value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Largest accepted image width in pixels
pub const MAX_QR_WIDTH: u32 = 2048;

/// Largest accepted quiet zone in modules
pub const MAX_QR_MARGIN: u32 = 16;

/// How a QR code is rasterized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrOptions {
    /// Target image width in pixels
    pub width: u32,
    /// Quiet zone around the code, in modules
    pub margin: u32,
    /// Module color as `#RRGGBB`
    pub dark_color: String,
    /// Background color as `#RRGGBB`
    pub light_color: String,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            width: 160,
            margin: 1,
            dark_color: "#000000".to_string(),
            light_color: "#FFFFFF".to_string(),
        }
    }
}

impl QrOptions {
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_colors(mut self, dark: impl Into<String>, light: impl Into<String>) -> Self {
        self.dark_color = dark.into();
        self.light_color = light.into();
        self
    }

    /// Parsed module color
    pub fn dark_rgb(&self) -> Result<[u8; 3], DomainError> {
        parse_hex_color(&self.dark_color)
    }

    /// Parsed background color
    pub fn light_rgb(&self) -> Result<[u8; 3], DomainError> {
        parse_hex_color(&self.light_color)
    }
}

/// Parse a `#RRGGBB` color
pub fn parse_hex_color(s: &str) -> Result<[u8; 3], DomainError> {
    let invalid = || DomainError::InvalidColor(s.to_string());
    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

//! QR configuration from TOML (`[qr]` section)

use protocol_domain::QrOptions;
use serde::{Deserialize, Serialize};

/// Raw QR configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQrConfig {
    /// Image width in pixels
    pub width: u32,
    /// Quiet zone in modules
    pub margin: u32,
    /// Module color (`#RRGGBB`)
    pub dark: String,
    /// Background color (`#RRGGBB`)
    pub light: String,
}

impl Default for FileQrConfig {
    fn default() -> Self {
        let options = QrOptions::default();
        Self {
            width: options.width,
            margin: options.margin,
            dark: options.dark_color,
            light: options.light_color,
        }
    }
}

impl FileQrConfig {
    pub fn to_options(&self) -> QrOptions {
        QrOptions::default()
            .with_width(self.width)
            .with_margin(self.margin)
            .with_colors(self.dark.clone(), self.light.clone())
    }
}

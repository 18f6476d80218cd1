//! PNG QR renderer backed by `qrcode` and `image`
//!
//! The code matrix is laid out with `margin` light modules on every side and
//! scaled to `width` pixels. When `width` is smaller than the module count
//! the image falls back to one pixel per module.

use base64::Engine as _;
use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use protocol_application::{QrRenderer, RenderError};
use protocol_domain::{MAX_QR_MARGIN, MAX_QR_WIDTH, QrOptions};
use qrcode::{Color, QrCode};
use std::io::Cursor;

/// [`QrRenderer`] that produces base64-encoded PNG images
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodeRenderer;

impl QrCodeRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Rasterize `payload` into an RGB image
    pub fn rasterize(&self, payload: &str, options: &QrOptions) -> Result<RgbImage, RenderError> {
        if options.width == 0 || options.width > MAX_QR_WIDTH {
            return Err(RenderError::InvalidOptions(format!(
                "width must be between 1 and {}, got {}",
                MAX_QR_WIDTH, options.width
            )));
        }
        if options.margin > MAX_QR_MARGIN {
            return Err(RenderError::InvalidOptions(format!(
                "margin cannot exceed {}, got {}",
                MAX_QR_MARGIN, options.margin
            )));
        }
        let dark = Rgb(options
            .dark_rgb()
            .map_err(|e| RenderError::InvalidOptions(e.to_string()))?);
        let light = Rgb(options
            .light_rgb()
            .map_err(|e| RenderError::InvalidOptions(e.to_string()))?);

        let code =
            QrCode::new(payload.as_bytes()).map_err(|e| RenderError::Encoding(e.to_string()))?;
        let modules = code.width();
        let colors = code.to_colors();
        let margin = options.margin as usize;
        let span = modules + 2 * margin;

        let size = (options.width as usize).max(span);
        let side = u32::try_from(size)
            .map_err(|_| RenderError::InvalidOptions(format!("image side {} is too large", size)))?;
        let module_at = |pixel: u32| pixel as usize * span / size;

        let image = ImageBuffer::from_fn(side, side, |x, y| {
            let (mx, my) = (module_at(x), module_at(y));
            let inside = (margin..margin + modules).contains(&mx)
                && (margin..margin + modules).contains(&my);
            if inside && colors[(my - margin) * modules + (mx - margin)] == Color::Dark {
                dark
            } else {
                light
            }
        });
        Ok(image)
    }

    /// Rasterize and encode as PNG
    pub fn render_png(&self, payload: &str, options: &QrOptions) -> Result<Vec<u8>, RenderError> {
        let image = self.rasterize(payload, options)?;
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| RenderError::Image(e.to_string()))?;
        Ok(bytes)
    }
}

impl QrRenderer for QrCodeRenderer {
    fn render(&self, payload: &str, options: &QrOptions) -> Result<String, RenderError> {
        let png = self.render_png(payload, options)?;
        Ok(base64::engine::general_purpose::STANDARD.encode(png))
    }
}

//! QR code rendering adapter

mod renderer;

pub use renderer::QrCodeRenderer;

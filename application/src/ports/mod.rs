//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod package_writer;
pub mod progress;
pub mod qr_renderer;

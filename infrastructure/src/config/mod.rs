//! Configuration file loading for meeting-protocol
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MEETING_PROTOCOL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./protocol.toml` or `./.protocol.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/meeting-protocol/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileQrConfig, FileRenderConfig,
    FileSummaryFormat,
};
pub use loader::{ConfigLoader, ENV_PREFIX};

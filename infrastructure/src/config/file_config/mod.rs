//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod qr;
mod render;

pub use output::{FileOutputConfig, FileSummaryFormat};
pub use qr::FileQrConfig;
pub use render::FileRenderConfig;

use protocol_application::GenerationParams;
use protocol_domain::{
    CompanyProfile, DocumentOptions, DomainError, MAX_QR_MARGIN, MAX_QR_WIDTH, QrOptions,
    parse_hex_color,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("qr.width must be between 1 and {}", MAX_QR_WIDTH)]
    InvalidQrWidth,

    #[error("qr.margin cannot exceed {}", MAX_QR_MARGIN)]
    InvalidQrMargin,

    #[error("render.concurrency cannot be 0")]
    InvalidConcurrency,

    #[error("qr.{field}: {source}")]
    InvalidColor {
        field: &'static str,
        source: DomainError,
    },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Operator company that signs the protocol (uses domain type)
    pub company: CompanyProfile,
    /// QR rasterizing settings
    pub qr: FileQrConfig,
    /// Document composition settings (uses domain type)
    pub document: DocumentOptions,
    /// Render pool settings
    pub render: FileRenderConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration values that deserialize but cannot be used
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.qr.width == 0 || self.qr.width > MAX_QR_WIDTH {
            return Err(ConfigValidationError::InvalidQrWidth);
        }

        if self.qr.margin > MAX_QR_MARGIN {
            return Err(ConfigValidationError::InvalidQrMargin);
        }

        if self.render.concurrency == 0 {
            return Err(ConfigValidationError::InvalidConcurrency);
        }

        for (field, value) in [("dark", &self.qr.dark), ("light", &self.qr.light)] {
            parse_hex_color(value)
                .map_err(|source| ConfigValidationError::InvalidColor { field, source })?;
        }

        Ok(())
    }

    pub fn qr_options(&self) -> QrOptions {
        self.qr.to_options()
    }

    pub fn generation_params(&self) -> GenerationParams {
        self.render.to_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol_domain::{DecisionRule, Locale, SummaryFormat, VoterListPolicy};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r##"
[company]
name = "KSK Samal"
registration_number = "123456789012"
bank_name = "Halyk"
bank_code = "HSBKKZKX"
account = "KZ00123"
address = "Almaty"
phone = "+7 700 000 00 00"

[qr]
width = 200
margin = 2
dark = "#222222"
light = "#FAFAFA"

[document]
locale = "kk"
decision_rule = "item_policy"
voter_lists = "always"

[render]
concurrency = 4

[output]
dir = "out"
summary = "none"
color = false
"##;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.company.name, "KSK Samal");
        assert_eq!(config.company.phone.as_deref(), Some("+7 700 000 00 00"));
        assert!(config.company.email.is_none());
        assert_eq!(config.qr.width, 200);
        assert_eq!(config.qr.margin, 2);
        assert_eq!(config.document.locale, Locale::Kk);
        assert_eq!(config.document.decision_rule, DecisionRule::ItemPolicy);
        assert_eq!(config.document.voter_lists, VoterListPolicy::Always);
        assert_eq!(config.generation_params().render_concurrency, 4);
        assert_eq!(config.output.summary, SummaryFormat::None);
        assert!(!config.output.color);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[document]
locale = "kk"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.document.locale, Locale::Kk);
        // Defaults should apply
        assert_eq!(config.document.decision_rule, DecisionRule::FlatMajority);
        assert_eq!(config.qr, FileQrConfig::default());
        assert!(!config.company.is_configured());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.qr_options(), QrOptions::default());
        assert_eq!(config.generation_params(), GenerationParams::default());
        assert_eq!(config.document, DocumentOptions::default());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_width() {
        let mut config = FileConfig::default();
        config.qr.width = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidQrWidth));
    }

    #[test]
    fn test_validate_width_upper_bound() {
        let mut config = FileConfig::default();
        config.qr.width = MAX_QR_WIDTH;
        assert_eq!(config.validate(), Ok(()));

        config.qr.width = MAX_QR_WIDTH + 1;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidQrWidth));
    }

    #[test]
    fn test_validate_margin_upper_bound() {
        let mut config = FileConfig::default();
        config.qr.margin = MAX_QR_MARGIN;
        assert_eq!(config.validate(), Ok(()));

        config.qr.margin = u32::MAX;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidQrMargin));
    }

    #[test]
    fn test_validate_zero_concurrency() {
        let mut config = FileConfig::default();
        config.render.concurrency = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidConcurrency)
        );
    }

    #[test]
    fn test_validate_malformed_color() {
        let mut config = FileConfig::default();
        config.qr.light = "white".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidColor { field: "light", .. })
        ));
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let toml_str = r#"
[document]
voter_lists = "sometimes"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}

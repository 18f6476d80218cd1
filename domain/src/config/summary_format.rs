//! Summary format value object

use serde::{Deserialize, Serialize};

/// How the run summary is printed after a protocol is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    /// Human-readable tally and file location (default)
    #[default]
    Text,
    /// Machine-readable summary on stdout
    Json,
    /// Print nothing
    None,
}

impl std::str::FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(SummaryFormat::Text),
            "json" => Ok(SummaryFormat::Json),
            "none" | "off" => Ok(SummaryFormat::None),
            _ => Err(format!(
                "Unknown summary format: {}. Valid: text, json, none",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_text() {
        assert_eq!(SummaryFormat::default(), SummaryFormat::Text);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&SummaryFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: SummaryFormat = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(format, SummaryFormat::None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("OFF".parse::<SummaryFormat>(), Ok(SummaryFormat::None));
        assert!("yaml".parse::<SummaryFormat>().is_err());
    }
}

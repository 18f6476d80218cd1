//! Operator company profile
//!
//! The company that manages the building signs every protocol with a
//! verification QR block built from this profile. It is passed in per
//! generation so that several operators can share one deployment.

use serde::{Deserialize, Serialize};

/// Legal and banking details of the managing company
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub name: String,
    /// Business identification number
    pub registration_number: String,
    pub bank_name: String,
    /// Bank identification code
    pub bank_code: String,
    /// Settlement account (IBAN)
    pub account: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl CompanyProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A profile with no name cannot sign anything
    pub fn is_configured(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_configured() {
        assert!(!CompanyProfile::default().is_configured());
        assert!(!CompanyProfile::new("  ").is_configured());
        assert!(CompanyProfile::new("ТОО «Уютный дом»").is_configured());
    }

    #[test]
    fn test_partial_deserialize() {
        let profile: CompanyProfile =
            serde_json::from_str(r#"{"name": "Acme", "phone": "+7 700 000 00 00"}"#).unwrap();
        assert_eq!(profile.name, "Acme");
        assert_eq!(profile.phone.as_deref(), Some("+7 700 000 00 00"));
        assert!(profile.account.is_empty());
    }
}

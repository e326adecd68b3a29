//! The per-wallet feature document.

use serde::{Deserialize, Serialize};

use super::ecosystem::EcosystemFeatures;
use super::privacy::PrivacyFeatures;
use super::security::{HardwareFeatures, SecurityFeatures};
use super::sovereignty::SelfSovereigntyFeatures;
use super::transparency::TransparencyFeatures;
use super::Variant;
use crate::errors::FeatureError;

/// One wallet: who it is, which variants exist, and what it supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletDocument {
    pub metadata: WalletMetadata,
    pub variants: Vec<Variant>,
    pub features: WalletFeatures,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletMetadata {
    /// Kebab-case identifier, unique within a catalog.
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub urls: WalletUrls,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalletUrls {
    pub website: Option<String>,
    pub repository: Option<String>,
    pub docs: Option<String>,
}

/// Feature sections. All are required except `hardware`, which only
/// hardware-variant attributes read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletFeatures {
    pub security: SecurityFeatures,
    pub privacy: PrivacyFeatures,
    pub self_sovereignty: SelfSovereigntyFeatures,
    pub transparency: TransparencyFeatures,
    pub ecosystem: EcosystemFeatures,
    #[serde(default)]
    pub hardware: Option<HardwareFeatures>,
}

impl WalletDocument {
    /// Parse and validate a JSON document.
    pub fn from_json(source: &str) -> Result<Self, FeatureError> {
        let doc: WalletDocument =
            serde_json::from_str(source).map_err(|e| FeatureError::Malformed {
                format: "json",
                message: e.to_string(),
            })?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, FeatureError> {
        let doc: WalletDocument = toml::from_str(source).map_err(|e| FeatureError::Malformed {
            format: "toml",
            message: e.to_string(),
        })?;
        doc.validate()?;
        Ok(doc)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<(), FeatureError> {
        if !is_kebab_case(&self.metadata.id) {
            return Err(FeatureError::InvalidWalletId(self.metadata.id.clone()));
        }
        if self.metadata.display_name.trim().is_empty() {
            return Err(FeatureError::MissingDisplayName(self.metadata.id.clone()));
        }
        for (i, variant) in self.variants.iter().enumerate() {
            if self.variants[..i].contains(variant) {
                return Err(FeatureError::DuplicateVariant {
                    wallet: self.metadata.id.clone(),
                    variant: *variant,
                });
            }
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn has_variant(&self, variant: Variant) -> bool {
        self.variants.contains(&variant)
    }

    /// The first declared variant, used when no variant is requested.
    pub fn primary_variant(&self) -> Option<Variant> {
        self.variants.first().copied()
    }
}

fn is_kebab_case(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && !id.contains("--")
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "metadata": { "id": "tiny", "display_name": "Tiny" },
        "variants": ["browser"],
        "features": {
            "security": {}, "privacy": {}, "self_sovereignty": {},
            "transparency": {}, "ecosystem": {}
        }
    }"#;

    #[test]
    fn minimal_document_is_all_unknown() {
        let doc = WalletDocument::from_json(MINIMAL).unwrap();
        assert_eq!(doc.primary_variant(), Some(Variant::Browser));
        assert!(doc.features.security.security_audits.is_none());
        assert!(doc.features.ecosystem.address_resolution.is_unknown());
        assert!(doc.features.hardware.is_none());
    }

    #[test]
    fn missing_section_is_malformed() {
        let source = r#"{
            "metadata": { "id": "tiny", "display_name": "Tiny" },
            "variants": ["browser"],
            "features": { "security": {}, "privacy": {} }
        }"#;
        let err = WalletDocument::from_json(source).unwrap_err();
        assert!(matches!(err, FeatureError::Malformed { format: "json", .. }));
    }

    #[test]
    fn misspelled_field_is_malformed() {
        let source = MINIMAL.replace("\"security\": {}", "\"security\": {\"scam_alert\": null}");
        assert!(WalletDocument::from_json(&source).is_err());
    }

    #[test]
    fn rejects_bad_ids_and_duplicate_variants() {
        let bad_id = MINIMAL.replace("\"tiny\"", "\"Tiny Wallet\"");
        assert!(matches!(
            WalletDocument::from_json(&bad_id),
            Err(FeatureError::InvalidWalletId(_))
        ));

        let dup = MINIMAL.replace("[\"browser\"]", "[\"browser\", \"browser\"]");
        assert!(matches!(
            WalletDocument::from_json(&dup),
            Err(FeatureError::DuplicateVariant { .. })
        ));
    }

    #[test]
    fn kebab_case_rules() {
        assert!(is_kebab_case("rabby"));
        assert!(is_kebab_case("safe-wallet-2"));
        assert!(!is_kebab_case("-lead"));
        assert!(!is_kebab_case("double--dash"));
        assert!(!is_kebab_case("Upper"));
        assert!(!is_kebab_case(""));
    }
}

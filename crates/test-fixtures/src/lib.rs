//! Sample wallet documents and a builder for hand-made ones.
//!
//! - `lantern` (browser, mobile): well documented, mostly passing.
//! - `mist` (desktop): mostly failing, with several unknowns.
//! - `basalt` (hardware): hardware signer, stored as TOML.

use std::path::PathBuf;

use walletrate_core::features::{
    EcosystemFeatures, PrivacyFeatures, SecurityFeatures, SelfSovereigntyFeatures,
    TransparencyFeatures, WalletFeatures, WalletMetadata, WalletUrls,
};
use walletrate_core::{Variant, WalletDocument};

pub const LANTERN_JSON: &str = include_str!("../wallets/lantern.json");
pub const MIST_JSON: &str = include_str!("../wallets/mist.json");
pub const BASALT_TOML: &str = include_str!("../wallets/basalt.toml");

/// Directory holding every sample document, usable as a catalog.
pub fn wallets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("wallets")
}

pub fn lantern() -> WalletDocument {
    WalletDocument::from_json(LANTERN_JSON).expect("lantern fixture is valid")
}

pub fn mist() -> WalletDocument {
    WalletDocument::from_json(MIST_JSON).expect("mist fixture is valid")
}

pub fn basalt() -> WalletDocument {
    WalletDocument::from_toml(BASALT_TOML).expect("basalt fixture is valid")
}

pub fn all_wallets() -> Vec<WalletDocument> {
    vec![lantern(), mist(), basalt()]
}

/// Builds a document where every feature starts unknown.
pub struct WalletBuilder {
    doc: WalletDocument,
}

impl WalletBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            doc: WalletDocument {
                metadata: WalletMetadata {
                    id: id.to_string(),
                    display_name: id.to_string(),
                    icon: None,
                    urls: WalletUrls::default(),
                    blurb: String::new(),
                    last_updated: None,
                },
                variants: Vec::new(),
                features: WalletFeatures {
                    security: SecurityFeatures::default(),
                    privacy: PrivacyFeatures::default(),
                    self_sovereignty: SelfSovereigntyFeatures::default(),
                    transparency: TransparencyFeatures::default(),
                    ecosystem: EcosystemFeatures::default(),
                    hardware: None,
                },
            },
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.doc.variants.push(variant);
        self
    }

    pub fn display_name(mut self, name: &str) -> Self {
        self.doc.metadata.display_name = name.to_string();
        self
    }

    /// Edit the feature sections in place.
    pub fn features(mut self, edit: impl FnOnce(&mut WalletFeatures)) -> Self {
        edit(&mut self.doc.features);
        self
    }

    pub fn build(self) -> WalletDocument {
        self.doc
    }
}

//! Security and hardware feature sections.

use serde::{Deserialize, Serialize};

use super::transparency::License;
use super::Support;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecurityFeatures {
    /// `None` means audits were not researched; an empty list means none exist.
    pub security_audits: Option<Vec<SecurityAudit>>,
    pub hardware_wallet_support: Support<HardwareWalletSupport>,
    pub clear_signing: Support<ClearSigning>,
    pub scam_alerts: Support<ScamAlerts>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecurityAudit {
    pub auditor: String,
    pub date: String,
    /// Flaws the auditor reported that remain unfixed. `None` if not tracked.
    #[serde(default)]
    pub unaddressed_flaws: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HardwareWalletSupport {
    pub brands: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearSigningLevel {
    /// Every transaction field is decoded and shown before signing.
    Full,
    /// Some calldata is decoded; the rest is shown as raw bytes.
    Partial,
    /// Only a hash is shown.
    Blind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClearSigning {
    pub level: ClearSigningLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScamAlerts {
    pub contract_warnings: bool,
    pub phishing_domains: bool,
    /// Visited domains or contract addresses are sent to a third party.
    pub leaks_browsing_data: bool,
}

/// Section present only for wallets with a hardware variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HardwareFeatures {
    pub firmware_license: Option<License>,
    pub supply_chain: Option<SupplyChain>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SupplyChain {
    pub tamper_evident_packaging: bool,
    pub device_attestation: bool,
}

use serde::{Deserialize, Serialize};

use super::Support;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelfSovereigntyFeatures {
    pub custom_rpc: Support<CustomRpc>,
    pub transaction_submission: Support<TransactionSubmission>,
    pub key_export: Support<KeyExport>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomRpc {
    /// The endpoint can be set for every chain, not only mainnet.
    pub per_chain: bool,
}

/// Paths a user has to get a transaction included without the wallet's servers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransactionSubmission {
    pub own_node: bool,
    /// L2 transactions can be forced through the L1 inbox.
    pub forced_inclusion: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyExport {
    pub formats: Vec<KeyExportFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyExportFormat {
    Bip39Mnemonic,
    PrivateKey,
    Proprietary,
}

impl KeyExportFormat {
    /// Formats any other wallet can import.
    pub fn is_standard(self) -> bool {
        matches!(self, KeyExportFormat::Bip39Mnemonic | KeyExportFormat::PrivateKey)
    }
}

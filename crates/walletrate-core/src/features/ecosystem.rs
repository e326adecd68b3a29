use serde::{Deserialize, Serialize};

use super::Support;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EcosystemFeatures {
    pub account_types: Option<AccountTypes>,
    pub address_resolution: Support<AddressResolution>,
    pub chain_configurability: Support<ChainConfigurability>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountTypes {
    pub eoa: bool,
    pub erc4337: bool,
    pub eip7702: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AddressResolution {
    pub ens: bool,
    /// Chain-specific addresses (`name@chain`).
    pub chain_specific: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainConfigurability {
    pub custom_chains: bool,
    pub l2_networks: bool,
}

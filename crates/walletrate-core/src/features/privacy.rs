use serde::{Deserialize, Serialize};

use super::Support;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrivacyFeatures {
    pub data_collection: Option<DataCollection>,
    pub multi_address: Option<MultiAddressHandling>,
    pub stealth_addresses: Support<StealthAddresses>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataCollection {
    pub collectors: Vec<DataCollector>,
}

/// A party that receives user data while the wallet is in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataCollector {
    pub entity: String,
    #[serde(default)]
    pub collects_ip: bool,
    #[serde(default)]
    pub collects_addresses: bool,
}

/// How balance lookups for several addresses reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiAddressHandling {
    /// Separate requests over separate circuits.
    Isolated,
    /// Batched, but through a proxy hiding the user's IP.
    BatchedViaProxy,
    /// Batched in one request; the provider links every address.
    Batched,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StealthAddresses {
    pub standard: String,
}

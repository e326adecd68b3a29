use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransparencyFeatures {
    pub license: Option<License>,
    pub source_visibility: Option<SourceVisibility>,
    /// `None` means not researched; an empty list means nothing is disclosed.
    pub funding: Option<Vec<FundingSource>>,
    pub fee_display: Option<FeeDisplay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum License {
    Mit,
    Apache2,
    Gpl3,
    Agpl3,
    Mpl2,
    Bsd,
    /// Business Source License: readable, not free to reuse until conversion.
    Busl,
    Proprietary,
}

impl License {
    pub fn is_free_and_open_source(self) -> bool {
        matches!(
            self,
            License::Mit
                | License::Apache2
                | License::Gpl3
                | License::Agpl3
                | License::Mpl2
                | License::Bsd
        )
    }

    pub fn is_source_available(self) -> bool {
        self == License::Busl
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceVisibility {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingSource {
    Donations,
    Grants,
    VentureCapital,
    TransactionFees,
    Subscriptions,
    Undisclosed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeeDisplay {
    pub network_fee_shown: bool,
    pub wallet_fee_shown: bool,
    /// Wallet fee in basis points, if the wallet charges one.
    pub wallet_fee_bps: Option<u32>,
}

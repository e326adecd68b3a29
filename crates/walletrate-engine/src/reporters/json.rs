//! JSON reporter: the full rated wallets, for the presentation layer.

use walletrate_core::errors::ReportError;

use super::Reporter;
use crate::rated::RatedWallet;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, wallets: &[RatedWallet]) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(wallets)?)
    }
}

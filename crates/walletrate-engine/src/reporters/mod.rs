//! Output formats for rated wallets.

pub mod console;
pub mod json;

use walletrate_core::errors::ReportError;

use crate::rated::RatedWallet;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, wallets: &[RatedWallet]) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str, use_color: bool) -> Result<Box<dyn Reporter>, ReportError> {
    match format {
        "json" => Ok(Box::new(json::JsonReporter)),
        "console" => Ok(Box::new(console::ConsoleReporter::new(use_color))),
        other => Err(ReportError::UnknownFormat(other.to_string())),
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json"]
}

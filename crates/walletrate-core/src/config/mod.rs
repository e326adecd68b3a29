//! Configuration system for walletrate.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod catalog_config;
pub mod report_config;
pub mod scoring_config;
pub mod walletrate_config;

pub use catalog_config::CatalogConfig;
pub use report_config::ReportConfig;
pub use scoring_config::ScoringConfig;
pub use walletrate_config::{CliOverrides, WalletRateConfig};

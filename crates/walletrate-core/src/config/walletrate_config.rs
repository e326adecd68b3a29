//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, ReportConfig, ScoringConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "walletrate.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`WALLETRATE_*`)
/// 3. Project config (`walletrate.toml` in the project root, or an explicit file)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WalletRateConfig {
    pub scoring: ScoringConfig,
    pub catalog: CatalogConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub catalog_path: Option<PathBuf>,
    pub report_format: Option<String>,
    pub report_color: Option<bool>,
}

impl WalletRateConfig {
    /// Load configuration from `root/walletrate.toml` with env and CLI layers.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(CONFIG_FILE_NAME);
        let file = project_config_path
            .exists()
            .then_some(project_config_path.as_path());
        Self::resolve(file, cli_overrides)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_file(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Self::resolve(Some(path), cli_overrides)
    }

    fn resolve(file: Option<&Path>, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = file {
            Self::merge_toml_file(&mut config, path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &WalletRateConfig) -> Result<(), ConfigError> {
        let scoring = &config.scoring;
        for (field, value) in [
            ("scoring.pass_value", scoring.pass_value),
            ("scoring.partial_value", scoring.partial_value),
            ("scoring.fail_value", scoring.fail_value),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        let (pass, partial, fail) = (
            scoring.effective_pass_value(),
            scoring.effective_partial_value(),
            scoring.effective_fail_value(),
        );
        if !(fail <= partial && partial <= pass) {
            return Err(ConfigError::ValidationFailed {
                field: "scoring".to_string(),
                message: format!(
                    "values must satisfy fail <= partial <= pass (got {fail}, {partial}, {pass})"
                ),
            });
        }

        if let Some(format) = config.report.format.as_deref() {
            if !matches!(format, "console" | "json") {
                return Err(ConfigError::ValidationFailed {
                    field: "report.format".to_string(),
                    message: format!("unknown format {format:?}, expected console or json"),
                });
            }
        }
        if config.catalog.extensions.iter().any(|e| e.is_empty() || e.starts_with('.')) {
            return Err(ConfigError::ValidationFailed {
                field: "catalog.extensions".to_string(),
                message: "extensions must be non-empty and given without a leading dot".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut WalletRateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: WalletRateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut WalletRateConfig, other: &WalletRateConfig) {
        // Scoring
        if other.scoring.pass_value.is_some() {
            base.scoring.pass_value = other.scoring.pass_value;
        }
        if other.scoring.partial_value.is_some() {
            base.scoring.partial_value = other.scoring.partial_value;
        }
        if other.scoring.fail_value.is_some() {
            base.scoring.fail_value = other.scoring.fail_value;
        }

        // Catalog
        if other.catalog.path.is_some() {
            base.catalog.path = other.catalog.path.clone();
        }
        if !other.catalog.extensions.is_empty() {
            base.catalog.extensions = other.catalog.extensions.clone();
        }

        // Report
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.color.is_some() {
            base.report.color = other.report.color;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `WALLETRATE_CATALOG_PATH`, `WALLETRATE_REPORT_FORMAT`, etc.
    fn apply_env_overrides(config: &mut WalletRateConfig) {
        if let Ok(val) = std::env::var("WALLETRATE_CATALOG_PATH") {
            config.catalog.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("WALLETRATE_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
        if let Ok(val) = std::env::var("WALLETRATE_REPORT_COLOR") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.color = Some(v);
            }
        }
        for (key, slot) in [
            ("WALLETRATE_SCORING_PASS_VALUE", &mut config.scoring.pass_value),
            ("WALLETRATE_SCORING_PARTIAL_VALUE", &mut config.scoring.partial_value),
            ("WALLETRATE_SCORING_FAIL_VALUE", &mut config.scoring.fail_value),
        ] {
            if let Some(v) = std::env::var(key).ok().and_then(|val| val.parse::<f64>().ok()) {
                *slot = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut WalletRateConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.catalog_path {
            config.catalog.path = Some(v.clone());
        }
        if let Some(ref v) = cli.report_format {
            config.report.format = Some(v.clone());
        }
        if let Some(v) = cli.report_color {
            config.report.color = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

//! Tests for the walletrate configuration system.

use std::path::PathBuf;
use std::sync::Mutex;

use walletrate_core::config::{CliOverrides, WalletRateConfig};
use walletrate_core::errors::ConfigError;
use walletrate_core::Rating;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all WALLETRATE_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "WALLETRATE_CATALOG_PATH",
        "WALLETRATE_REPORT_FORMAT",
        "WALLETRATE_REPORT_COLOR",
        "WALLETRATE_SCORING_PASS_VALUE",
        "WALLETRATE_SCORING_PARTIAL_VALUE",
        "WALLETRATE_SCORING_FAIL_VALUE",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("walletrate.toml"),
        r#"
[catalog]
path = "data/wallets"

[report]
format = "json"
color = false

[scoring]
partial_value = 0.4
"#,
    )
    .unwrap();

    std::env::set_var("WALLETRATE_SCORING_PARTIAL_VALUE", "0.6");
    let cli = CliOverrides {
        report_format: Some("console".to_string()),
        ..Default::default()
    };

    let config = WalletRateConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats the project file
    assert_eq!(config.report.effective_format(), "console");
    // Env beats the project file
    assert_eq!(config.scoring.partial_value, Some(0.6));
    // Project file beats defaults
    assert_eq!(config.catalog.effective_path(), PathBuf::from("data/wallets"));
    assert!(!config.report.effective_color());

    clear_env_vars();
}

#[test]
fn test_env_overrides_every_scoring_value() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("WALLETRATE_SCORING_PASS_VALUE", "0.9");
    std::env::set_var("WALLETRATE_SCORING_PARTIAL_VALUE", "0.45");
    std::env::set_var("WALLETRATE_SCORING_FAIL_VALUE", "0.1");
    let dir = tempdir();
    let config = WalletRateConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.scoring.value_of(Rating::Pass), Some(0.9));
    assert_eq!(config.scoring.value_of(Rating::Partial), Some(0.45));
    assert_eq!(config.scoring.value_of(Rating::Fail), Some(0.1));

    // Unparseable values are ignored
    std::env::set_var("WALLETRATE_SCORING_FAIL_VALUE", "zero");
    let config = WalletRateConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.scoring.fail_value, None);

    clear_env_vars();
}

#[test]
fn test_missing_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = WalletRateConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.scoring.value_of(Rating::Pass), Some(1.0));
    assert_eq!(config.scoring.value_of(Rating::Partial), Some(0.5));
    assert_eq!(config.scoring.value_of(Rating::Fail), Some(0.0));
    assert_eq!(config.scoring.value_of(Rating::Exempt), None);
    assert_eq!(config.scoring.value_of(Rating::Unrated), None);
    assert_eq!(config.catalog.effective_extensions(), vec!["json", "toml"]);
    assert_eq!(config.report.effective_format(), "console");
}

#[test]
fn test_explicit_file_must_exist() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let result = WalletRateConfig::load_file(&dir.path().join("nope.toml"), None);
    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("walletrate.toml"), "this is not valid toml {{{{").unwrap();

    match WalletRateConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_out_of_range_scoring_value() {
    let result = WalletRateConfig::from_toml("[scoring]\npass_value = 1.5\n");
    match result {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "scoring.pass_value");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_non_monotonic_scoring_rejected() {
    let result = WalletRateConfig::from_toml("[scoring]\npartial_value = 0.0\nfail_value = 0.2\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_unknown_report_format_rejected() {
    let result = WalletRateConfig::from_toml("[report]\nformat = \"html\"\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_dotted_extension_rejected() {
    let result = WalletRateConfig::from_toml("[catalog]\nextensions = [\".json\"]\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_toml_round_trip() {
    let config = WalletRateConfig::from_toml(
        "[scoring]\npartial_value = 0.25\n[report]\nformat = \"json\"\n",
    )
    .unwrap();
    let serialized = config.to_toml().unwrap();
    let reparsed = WalletRateConfig::from_toml(&serialized).unwrap();
    assert_eq!(reparsed.scoring.partial_value, Some(0.25));
    assert_eq!(reparsed.report.effective_format(), "json");
}

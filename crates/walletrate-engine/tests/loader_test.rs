//! Catalog loading from a directory of wallet documents.

use std::fs;

use tempfile::TempDir;
use walletrate_core::errors::{ErrorCode, LoadError};
use walletrate_engine::loader::{load_catalog, load_document};

fn extensions() -> Vec<String> {
    vec!["json".to_string(), "toml".to_string()]
}

#[test]
fn loads_sample_catalog_in_path_order() {
    let docs = load_catalog(&test_fixtures::wallets_dir(), &extensions()).unwrap();
    let ids: Vec<&str> = docs.iter().map(|d| d.id()).collect();
    assert_eq!(ids, vec!["basalt", "lantern", "mist"]);
    assert_eq!(docs[1], test_fixtures::lantern());
}

#[test]
fn extension_filter_applies() {
    let docs = load_catalog(&test_fixtures::wallets_dir(), &["toml".to_string()]).unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id(), "basalt");
}

#[test]
fn ignores_other_files_and_subdirectories() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lantern.json"), test_fixtures::LANTERN_JSON).unwrap();
    fs::write(dir.path().join("README.md"), "# not a wallet").unwrap();
    fs::create_dir(dir.path().join("drafts.json")).unwrap();

    let docs = load_catalog(dir.path(), &extensions()).unwrap();
    assert_eq!(docs.len(), 1);
}

#[test]
fn duplicate_wallet_id_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), test_fixtures::LANTERN_JSON).unwrap();
    fs::write(dir.path().join("b.json"), test_fixtures::LANTERN_JSON).unwrap();

    match load_catalog(dir.path(), &extensions()).unwrap_err() {
        LoadError::DuplicateWallet { id, first, second } => {
            assert_eq!(id, "lantern");
            assert!(first.ends_with("a.json"));
            assert!(second.ends_with("b.json"));
        }
        other => panic!("Expected DuplicateWallet, got: {other:?}"),
    }
}

#[test]
fn malformed_document_names_its_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.json"), "{ \"metadata\": ").unwrap();

    let err = load_catalog(dir.path(), &extensions()).unwrap_err();
    assert!(matches!(err, LoadError::Document { .. }));
    assert!(err.to_string().contains("broken.json"));
    assert_eq!(err.error_code(), "FEATURE_ERROR");
}

#[test]
fn unknown_feature_key_rejected() {
    let dir = TempDir::new().unwrap();
    let tampered = test_fixtures::LANTERN_JSON.replacen("\"security\": {", "\"security\": { \"bogus\": true,", 1);
    assert_ne!(tampered, test_fixtures::LANTERN_JSON);
    let path = dir.path().join("tampered.json");
    fs::write(&path, tampered).unwrap();

    assert!(matches!(load_document(&path), Err(LoadError::Document { .. })));
}

#[test]
fn missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_catalog(&dir.path().join("absent"), &extensions()).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert_eq!(err.error_code(), "LOAD_ERROR");
}

#[test]
fn unsupported_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wallet.yaml");
    fs::write(&path, "id: nope").unwrap();
    assert!(matches!(
        load_document(&path),
        Err(LoadError::UnsupportedExtension(_))
    ));
}

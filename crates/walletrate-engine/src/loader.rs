//! Catalog loading: one wallet document per file in a directory.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use walletrate_core::errors::LoadError;
use walletrate_core::WalletDocument;

/// Parse a single wallet document, choosing the format by extension.
pub fn load_document(path: &Path) -> Result<WalletDocument, LoadError> {
    let display = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let parse: fn(&str) -> Result<WalletDocument, _> = match extension.as_str() {
        "json" => WalletDocument::from_json,
        "toml" => WalletDocument::from_toml,
        _ => return Err(LoadError::UnsupportedExtension(display)),
    };

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: display.clone(),
        source,
    })?;
    parse(&content).map_err(|source| LoadError::Document {
        path: display,
        source,
    })
}

/// Load every document in `dir` whose extension is in `extensions`.
///
/// Files are read in path order so the result is stable. Subdirectories and
/// other files are ignored. Any invalid document or duplicate wallet id
/// aborts the load.
pub fn load_catalog(dir: &Path, extensions: &[String]) -> Result<Vec<WalletDocument>, LoadError> {
    let span = tracing::info_span!("walletrate.load", dir = %dir.display());
    let _guard = span.enter();

    let entries = std::fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)));
        if matches {
            paths.push(path);
        }
    }
    paths.sort();

    let mut seen: FxHashMap<String, PathBuf> = FxHashMap::default();
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let doc = load_document(&path)?;
        if let Some(first) = seen.insert(doc.metadata.id.clone(), path.clone()) {
            return Err(LoadError::DuplicateWallet {
                id: doc.metadata.id,
                first: first.display().to_string(),
                second: path.display().to_string(),
            });
        }
        tracing::debug!(wallet = %doc.metadata.id, path = %path.display(), "wallet document loaded");
        documents.push(doc);
    }

    tracing::info!(wallets = documents.len(), "catalog loaded");
    Ok(documents)
}

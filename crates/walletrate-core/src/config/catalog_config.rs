use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where wallet documents are read from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog directory. Default: `wallets`.
    pub path: Option<PathBuf>,
    /// File extensions treated as wallet documents. Default: `json`, `toml`.
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl CatalogConfig {
    pub fn effective_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("wallets"))
    }

    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            vec!["json".to_string(), "toml".to_string()]
        } else {
            self.extensions.clone()
        }
    }
}

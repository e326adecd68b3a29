//! Catalog loading errors.

use super::error_code::{self, ErrorCode};
use super::FeatureError;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid wallet document {path}: {source}")]
    Document {
        path: String,
        #[source]
        source: FeatureError,
    },

    #[error("Wallet id {id} defined twice ({first} and {second})")]
    DuplicateWallet {
        id: String,
        first: String,
        second: String,
    },

    #[error("Unsupported wallet document file (expected .json or .toml): {0}")]
    UnsupportedExtension(String),
}

impl ErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Document { source, .. } => source.error_code(),
            _ => error_code::LOAD_ERROR,
        }
    }
}

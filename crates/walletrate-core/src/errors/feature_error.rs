//! Feature document authoring errors.

use super::error_code::{self, ErrorCode};
use crate::features::Variant;

/// A wallet document that cannot be used. These are data-authoring bugs and
/// must be fixed in the document, never coerced.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    #[error("Malformed {format} document: {message}")]
    Malformed {
        format: &'static str,
        message: String,
    },

    #[error("Invalid wallet id {0:?}: must be kebab-case")]
    InvalidWalletId(String),

    #[error("Wallet {0} has an empty display name")]
    MissingDisplayName(String),

    #[error("Wallet {wallet} declares variant {variant} more than once")]
    DuplicateVariant { wallet: String, variant: Variant },

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),
}

impl ErrorCode for FeatureError {
    fn error_code(&self) -> &'static str {
        error_code::FEATURE_ERROR
    }
}

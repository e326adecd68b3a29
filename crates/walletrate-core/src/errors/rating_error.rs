//! Errors raised while rating a wallet.

use super::error_code::{self, ErrorCode};
use crate::features::Variant;

/// Rating failures. All of these are programmer or authoring errors;
/// missing data is expressed as an `Unrated` evaluation instead.
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("Wallet {wallet} is missing the `{section}` feature section required by {attribute}")]
    MissingFeatureSection {
        wallet: String,
        section: &'static str,
        attribute: &'static str,
    },

    #[error("Unknown attribute group: {0}")]
    UnknownGroup(String),

    #[error("Unknown attribute {attribute} in group {group}")]
    UnknownAttribute { group: String, attribute: String },

    #[error("Wallet {wallet} has no {variant} variant")]
    UndeclaredVariant { wallet: String, variant: Variant },

    #[error("Wallet {0} declares no variants")]
    NoVariants(String),
}

impl ErrorCode for RatingError {
    fn error_code(&self) -> &'static str {
        error_code::RATING_ERROR
    }
}

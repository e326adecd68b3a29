//! The `Attribute` trait: one rated criterion.

use walletrate_core::errors::RatingError;
use walletrate_core::features::HardwareFeatures;
use walletrate_core::{Evaluation, RatingScale, Variant, WalletDocument};

/// A single rated criterion.
///
/// `evaluate` must be pure and total over well-formed documents: unknown
/// feature values produce an `Unrated` evaluation, never an error. The only
/// error is a required feature section missing from the document.
pub trait Attribute: Send + Sync {
    /// lowerCamelCase id, unique within the owning group.
    fn id(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    /// The question this attribute answers, shown above the rating.
    fn question(&self) -> &'static str;

    fn rating_scale(&self) -> RatingScale;

    /// Variants this attribute does not apply to.
    fn exempt_variants(&self) -> &'static [Variant] {
        &[]
    }

    fn evaluate(&self, wallet: &WalletDocument) -> Result<Evaluation, RatingError>;
}

/// The `hardware` section, or the authoring error naming who needed it.
pub(crate) fn require_hardware<'w>(
    wallet: &'w WalletDocument,
    attribute: &'static str,
) -> Result<&'w HardwareFeatures, RatingError> {
    wallet
        .features
        .hardware
        .as_ref()
        .ok_or_else(|| RatingError::MissingFeatureSection {
            wallet: wallet.metadata.id.clone(),
            section: "hardware",
            attribute,
        })
}

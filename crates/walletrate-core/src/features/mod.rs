//! Feature documents: the raw data attributes are evaluated against.

pub mod document;
pub mod ecosystem;
pub mod privacy;
pub mod security;
pub mod sovereignty;
pub mod support;
pub mod transparency;
pub mod variant;

pub use document::{WalletDocument, WalletFeatures, WalletMetadata, WalletUrls};
pub use ecosystem::*;
pub use privacy::*;
pub use security::*;
pub use sovereignty::*;
pub use support::Support;
pub use transparency::*;
pub use variant::Variant;

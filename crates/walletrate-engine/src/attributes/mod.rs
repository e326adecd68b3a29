//! The built-in rating taxonomy.

pub mod ecosystem;
pub mod hardware;
pub mod privacy;
pub mod security;
pub mod self_sovereignty;
pub mod transparency;

use walletrate_core::errors::SchemaError;

use crate::tree::{AttributeGroup, AttributeTree};

/// Built-in groups in display order.
pub fn default_groups() -> Vec<AttributeGroup> {
    vec![
        security::group(),
        hardware::group(),
        privacy::group(),
        self_sovereignty::group(),
        transparency::group(),
        ecosystem::group(),
    ]
}

/// The built-in attribute tree. Build once at startup and share.
pub fn default_tree() -> Result<AttributeTree, SchemaError> {
    AttributeTree::new(default_groups())
}

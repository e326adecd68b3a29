//! Serializable description of an attribute tree, for `walletrate schema`
//! and for presentation layers that render questions and scales.

use serde::Serialize;
use walletrate_core::{RatingScale, Variant};

use crate::tree::AttributeTree;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeSchema {
    pub id: &'static str,
    pub display_name: &'static str,
    pub question: &'static str,
    pub scale: RatingScale,
    pub exempt_variants: &'static [Variant],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSchema {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub exempt_variants: &'static [Variant],
    pub attributes: Vec<AttributeSchema>,
}

/// Every group and attribute in declared order, exempt ones included.
pub fn describe(tree: &AttributeTree) -> Vec<GroupSchema> {
    tree.groups()
        .iter()
        .map(|group| GroupSchema {
            id: group.id(),
            display_name: group.display_name(),
            description: group.description(),
            exempt_variants: group.exempt_variants(),
            attributes: group
                .attributes()
                .map(|a| AttributeSchema {
                    id: a.id(),
                    display_name: a.display_name(),
                    question: a.question(),
                    scale: a.rating_scale(),
                    exempt_variants: a.exempt_variants(),
                })
                .collect(),
        })
        .collect()
}

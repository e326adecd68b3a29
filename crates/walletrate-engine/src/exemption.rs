//! Exemption resolution.
//!
//! Exempt nodes are skipped entirely: their evaluation functions never run,
//! and the aggregator records a synthesized `Exempt` evaluation instead. A
//! group exemption covers every attribute in the group.

use walletrate_core::{Evaluation, Variant};

use crate::attribute::Attribute;
use crate::tree::AttributeGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    Applicable,
    Exempt(ExemptionSource),
}

/// Which node carried the exemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExemptionSource {
    Group(&'static str),
    Attribute(&'static str),
}

pub fn resolve_group(group: &AttributeGroup, variant: Variant) -> Applicability {
    if group.exempt_variants().contains(&variant) {
        Applicability::Exempt(ExemptionSource::Group(group.id()))
    } else {
        Applicability::Applicable
    }
}

/// Group exemption wins over anything the attribute declares.
pub fn resolve_attribute(
    group: &AttributeGroup,
    attribute: &dyn Attribute,
    variant: Variant,
) -> Applicability {
    match resolve_group(group, variant) {
        Applicability::Applicable if attribute.exempt_variants().contains(&variant) => {
            Applicability::Exempt(ExemptionSource::Attribute(attribute.id()))
        }
        other => other,
    }
}

/// The evaluation recorded for an exempt attribute.
pub fn exempt_evaluation(source: ExemptionSource, variant: Variant) -> Evaluation {
    match source {
        ExemptionSource::Group(group) => Evaluation::exempt(format!(
            "The {group} category does not apply to {variant} wallets."
        )),
        ExemptionSource::Attribute(_) => {
            Evaluation::exempt(format!("This attribute does not apply to {variant} wallets."))
        }
    }
}

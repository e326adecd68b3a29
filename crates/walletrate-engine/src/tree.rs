//! Attribute groups and the attribute tree.

use rustc_hash::FxHashMap;
use walletrate_core::errors::{RatingError, SchemaError};
use walletrate_core::Variant;

use crate::attribute::Attribute;
use crate::exemption::{self, Applicability};

/// A named, ordered collection of attributes.
pub struct AttributeGroup {
    id: &'static str,
    display_name: &'static str,
    description: &'static str,
    exempt_variants: &'static [Variant],
    attributes: Vec<Box<dyn Attribute>>,
}

impl AttributeGroup {
    pub fn new(
        id: &'static str,
        display_name: &'static str,
        description: &'static str,
        attributes: Vec<Box<dyn Attribute>>,
    ) -> Self {
        Self {
            id,
            display_name,
            description,
            exempt_variants: &[],
            attributes,
        }
    }

    /// Mark the whole group as not applicable to `variants`.
    pub fn exempt_for(mut self, variants: &'static [Variant]) -> Self {
        self.exempt_variants = variants;
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn exempt_variants(&self) -> &'static [Variant] {
        self.exempt_variants
    }

    /// Attributes in declared order.
    pub fn attributes(&self) -> impl Iterator<Item = &dyn Attribute> + '_ {
        self.attributes.iter().map(|a| a.as_ref())
    }

    pub fn attribute(&self, id: &str) -> Option<&dyn Attribute> {
        self.attributes().find(|a| a.id() == id)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl std::fmt::Debug for AttributeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeGroup")
            .field("id", &self.id)
            .field(
                "attributes",
                &self.attributes().map(|a| a.id()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Result of mapping one group's applicable attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedGroup<T> {
    pub group_id: &'static str,
    pub items: Vec<T>,
}

/// The full rating taxonomy. Immutable once built.
#[derive(Debug)]
pub struct AttributeTree {
    groups: Vec<AttributeGroup>,
    index: FxHashMap<&'static str, usize>,
}

impl AttributeTree {
    /// Build a tree, validating ids and group contents.
    pub fn new(groups: Vec<AttributeGroup>) -> Result<Self, SchemaError> {
        let mut index = FxHashMap::default();
        for (position, group) in groups.iter().enumerate() {
            if !is_lower_camel_case(group.id) {
                return Err(SchemaError::InvalidId(group.id.to_string()));
            }
            if group.is_empty() {
                return Err(SchemaError::EmptyGroup(group.id.to_string()));
            }
            if index.insert(group.id, position).is_some() {
                return Err(SchemaError::DuplicateGroup(group.id.to_string()));
            }

            let mut seen: Vec<&str> = Vec::with_capacity(group.len());
            for attribute in group.attributes() {
                let id = attribute.id();
                if !is_lower_camel_case(id) {
                    return Err(SchemaError::InvalidId(id.to_string()));
                }
                if seen.contains(&id) {
                    return Err(SchemaError::DuplicateAttribute {
                        group: group.id.to_string(),
                        attribute: id.to_string(),
                    });
                }
                seen.push(id);
            }
        }
        Ok(Self { groups, index })
    }

    /// Groups in declared order.
    pub fn groups(&self) -> &[AttributeGroup] {
        &self.groups
    }

    /// Lookup for callers holding untrusted ids (e.g. a routed page).
    pub fn get_group(&self, id: &str) -> Option<&AttributeGroup> {
        self.index.get(id).map(|&i| &self.groups[i])
    }

    /// Lookup for compile-time-known ids; a miss is a programmer error.
    pub fn group(&self, id: &str) -> Result<&AttributeGroup, RatingError> {
        self.get_group(id)
            .ok_or_else(|| RatingError::UnknownGroup(id.to_string()))
    }

    pub fn attribute(&self, group_id: &str, attribute_id: &str) -> Result<&dyn Attribute, RatingError> {
        self.group(group_id)?
            .attribute(attribute_id)
            .ok_or_else(|| RatingError::UnknownAttribute {
                group: group_id.to_string(),
                attribute: attribute_id.to_string(),
            })
    }

    pub fn attribute_count(&self) -> usize {
        self.groups.iter().map(AttributeGroup::len).sum()
    }

    /// Map every group applicable to `variant`, in declared order.
    pub fn map_groups<T>(&self, variant: Variant, mut f: impl FnMut(&AttributeGroup) -> T) -> Vec<T> {
        self.groups
            .iter()
            .filter(|g| exemption::resolve_group(g, variant) == Applicability::Applicable)
            .map(|g| f(g))
            .collect()
    }

    /// Map every attribute applicable to `variant`, keeping group nesting.
    /// Groups left with no applicable attributes are omitted.
    pub fn map_attributes<T>(
        &self,
        variant: Variant,
        mut f: impl FnMut(&AttributeGroup, &dyn Attribute) -> T,
    ) -> Vec<MappedGroup<T>> {
        let mut mapped = Vec::new();
        for group in &self.groups {
            let items: Vec<T> = group
                .attributes()
                .filter(|a| {
                    exemption::resolve_attribute(group, *a, variant) == Applicability::Applicable
                })
                .map(|a| f(group, a))
                .collect();
            if !items.is_empty() {
                mapped.push(MappedGroup {
                    group_id: group.id,
                    items,
                });
            }
        }
        mapped
    }

    /// Like `map_attributes`, flattened into one list.
    pub fn flat_map_attributes<T>(
        &self,
        variant: Variant,
        f: impl FnMut(&AttributeGroup, &dyn Attribute) -> T,
    ) -> Vec<T> {
        self.map_attributes(variant, f)
            .into_iter()
            .flat_map(|g| g.items)
            .collect()
    }
}

/// `securityAudits`-style ids: ASCII, lowercase first letter, no separators.
fn is_lower_camel_case(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_camel_case_rules() {
        assert!(is_lower_camel_case("security"));
        assert!(is_lower_camel_case("hardwareWalletSupport"));
        assert!(is_lower_camel_case("erc4337"));
        assert!(!is_lower_camel_case("Security"));
        assert!(!is_lower_camel_case("self_sovereignty"));
        assert!(!is_lower_camel_case("scam-alerts"));
        assert!(!is_lower_camel_case(""));
        assert!(!is_lower_camel_case("4337"));
    }
}

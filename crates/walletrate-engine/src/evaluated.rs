//! The evaluated tree: the attribute tree with each attribute replaced by
//! its evaluation for one wallet variant.

use serde::Serialize;
use walletrate_core::{Evaluation, Rating};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedAttribute {
    pub id: &'static str,
    pub display_name: &'static str,
    pub evaluation: Evaluation,
}

impl EvaluatedAttribute {
    pub fn rating(&self) -> Rating {
        self.evaluation.rating
    }

    pub fn is_exempt(&self) -> bool {
        self.evaluation.rating == Rating::Exempt
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedGroup {
    pub id: &'static str,
    pub display_name: &'static str,
    /// The whole group was exempt for the rated variant.
    pub exempt: bool,
    pub attributes: Vec<EvaluatedAttribute>,
}

impl EvaluatedGroup {
    pub fn attribute(&self, id: &str) -> Option<&EvaluatedAttribute> {
        self.attributes.iter().find(|a| a.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EvaluatedTree {
    pub groups: Vec<EvaluatedGroup>,
}

impl EvaluatedTree {
    pub fn group(&self, id: &str) -> Option<&EvaluatedGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn evaluation(&self, group_id: &str, attribute_id: &str) -> Option<&Evaluation> {
        self.group(group_id)?
            .attribute(attribute_id)
            .map(|a| &a.evaluation)
    }

    /// Every attribute with its group, in declared order.
    pub fn iter_attributes(&self) -> impl Iterator<Item = (&EvaluatedGroup, &EvaluatedAttribute)> {
        self.groups
            .iter()
            .flat_map(|g| g.attributes.iter().map(move |a| (g, a)))
    }

    /// Build a new tree with every non-exempt evaluation replaced by `f`'s
    /// result. Exempt entries are carried over unchanged; `self` is untouched.
    pub fn map_evaluations(
        &self,
        mut f: impl FnMut(&EvaluatedGroup, &EvaluatedAttribute) -> Evaluation,
    ) -> EvaluatedTree {
        let groups = self
            .groups
            .iter()
            .map(|group| EvaluatedGroup {
                id: group.id,
                display_name: group.display_name,
                exempt: group.exempt,
                attributes: group
                    .attributes
                    .iter()
                    .map(|attribute| EvaluatedAttribute {
                        id: attribute.id,
                        display_name: attribute.display_name,
                        evaluation: if attribute.is_exempt() {
                            attribute.evaluation.clone()
                        } else {
                            f(group, attribute)
                        },
                    })
                    .collect(),
            })
            .collect();
        EvaluatedTree { groups }
    }
}

//! Rated wallets: the output handed to presentation.

use std::cmp::Ordering;

use serde::Serialize;
use walletrate_core::features::{WalletFeatures, WalletMetadata};
use walletrate_core::{Evaluation, Variant};

use crate::aggregate::AggregateScore;
use crate::evaluated::EvaluatedTree;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupScore {
    pub group_id: &'static str,
    #[serde(flatten)]
    pub score: AggregateScore,
}

/// A wallet variant's features plus its evaluated tree and scores.
/// Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedWallet {
    pub metadata: WalletMetadata,
    pub variant: Variant,
    pub features: WalletFeatures,
    pub tree: EvaluatedTree,
    /// Group scores in the tree's declared order.
    pub group_scores: Vec<GroupScore>,
    pub overall: AggregateScore,
}

impl RatedWallet {
    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn group_score(&self, group_id: &str) -> Option<&AggregateScore> {
        self.group_scores
            .iter()
            .find(|g| g.group_id == group_id)
            .map(|g| &g.score)
    }

    pub fn evaluation(&self, group_id: &str, attribute_id: &str) -> Option<&Evaluation> {
        self.tree.evaluation(group_id, attribute_id)
    }

    /// Ranking order: rated wallets by descending overall score, then
    /// wallets with nothing rated; ties broken by id.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        match (self.overall.value(), other.overall.value()) {
            (Some(a), Some(b)) => b.total_cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| self.metadata.id.cmp(&other.metadata.id))
    }
}

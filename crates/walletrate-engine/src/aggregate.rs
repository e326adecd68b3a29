//! Aggregator: evaluates the tree for a wallet variant and rolls ratings up
//! into group and overall scores.

use std::sync::Arc;

use serde::Serialize;
use walletrate_core::config::ScoringConfig;
use walletrate_core::errors::RatingError;
use walletrate_core::{rate_span, Rating, Variant, WalletDocument};

use crate::evaluated::{EvaluatedAttribute, EvaluatedGroup, EvaluatedTree};
use crate::exemption::{self, Applicability};
use crate::rated::{GroupScore, RatedWallet};
use crate::tree::AttributeTree;

/// How many nodes landed on each rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingCounts {
    pub pass: usize,
    pub partial: usize,
    pub fail: usize,
    pub exempt: usize,
    pub unrated: usize,
}

impl RatingCounts {
    pub fn record(&mut self, rating: Rating) {
        match rating {
            Rating::Pass => self.pass += 1,
            Rating::Partial => self.partial += 1,
            Rating::Fail => self.fail += 1,
            Rating::Exempt => self.exempt += 1,
            Rating::Unrated => self.unrated += 1,
        }
    }

    /// Nodes that contribute to a score.
    pub fn rated(&self) -> usize {
        self.pass + self.partial + self.fail
    }

    fn add(&mut self, other: &RatingCounts) {
        self.pass += other.pass;
        self.partial += other.partial;
        self.fail += other.fail;
        self.exempt += other.exempt;
        self.unrated += other.unrated;
    }
}

/// A mean over rated entries.
///
/// When nothing was rated, `score` is 0.0 and `no_rated_attributes` is set;
/// that 0.0 is a sentinel, not a failing grade. Use [`AggregateScore::value`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateScore {
    pub score: f64,
    pub no_rated_attributes: bool,
    pub counts: RatingCounts,
}

impl AggregateScore {
    /// Mean of `values`, summed in iteration order.
    fn mean(values: impl IntoIterator<Item = f64>, counts: RatingCounts) -> Self {
        let (sum, n) = values
            .into_iter()
            .fold((0.0_f64, 0_usize), |(sum, n), v| (sum + v, n + 1));
        if n == 0 {
            Self {
                score: 0.0,
                no_rated_attributes: true,
                counts,
            }
        } else {
            Self {
                score: sum / n as f64,
                no_rated_attributes: false,
                counts,
            }
        }
    }

    /// The score, or `None` if nothing was rated.
    pub fn value(&self) -> Option<f64> {
        (!self.no_rated_attributes).then_some(self.score)
    }
}

/// Scores computed from an evaluated tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeScores {
    pub groups: Vec<GroupScore>,
    pub overall: AggregateScore,
}

/// Rates wallets against an explicitly provided attribute tree.
pub struct Aggregator {
    tree: Arc<AttributeTree>,
    scoring: ScoringConfig,
}

impl Aggregator {
    pub fn new(tree: Arc<AttributeTree>, scoring: ScoringConfig) -> Self {
        Self { tree, scoring }
    }

    /// Aggregator with the default PASS=1.0, PARTIAL=0.5, FAIL=0.0 values.
    pub fn with_default_scoring(tree: Arc<AttributeTree>) -> Self {
        Self::new(tree, ScoringConfig::default())
    }

    pub fn tree(&self) -> &AttributeTree {
        &self.tree
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Evaluate every attribute for `variant`. Exempt nodes are not evaluated.
    pub fn evaluate_tree(
        &self,
        wallet: &WalletDocument,
        variant: Variant,
    ) -> Result<EvaluatedTree, RatingError> {
        let mut groups = Vec::with_capacity(self.tree.groups().len());
        for group in self.tree.groups() {
            let group_exempt = exemption::resolve_group(group, variant) != Applicability::Applicable;
            let mut attributes = Vec::with_capacity(group.len());
            for attribute in group.attributes() {
                let evaluation = match exemption::resolve_attribute(group, attribute, variant) {
                    Applicability::Exempt(source) => exemption::exempt_evaluation(source, variant),
                    Applicability::Applicable => attribute.evaluate(wallet)?,
                };
                tracing::debug!(
                    group = group.id(),
                    attribute = attribute.id(),
                    rating = %evaluation.rating,
                    "attribute evaluated"
                );
                attributes.push(EvaluatedAttribute {
                    id: attribute.id(),
                    display_name: attribute.display_name(),
                    evaluation,
                });
            }
            groups.push(EvaluatedGroup {
                id: group.id(),
                display_name: group.display_name(),
                exempt: group_exempt,
                attributes,
            });
        }
        Ok(EvaluatedTree { groups })
    }

    /// Mean of the group's scored ratings.
    pub fn score_group(&self, group: &EvaluatedGroup) -> AggregateScore {
        let mut counts = RatingCounts::default();
        for attribute in &group.attributes {
            counts.record(attribute.rating());
        }
        AggregateScore::mean(
            group
                .attributes
                .iter()
                .filter_map(|a| self.scoring.value_of(a.rating())),
            counts,
        )
    }

    /// Group scores plus the overall mean of groups that rated anything.
    pub fn score_tree(&self, tree: &EvaluatedTree) -> TreeScores {
        let groups: Vec<GroupScore> = tree
            .groups
            .iter()
            .map(|g| GroupScore {
                group_id: g.id,
                score: self.score_group(g),
            })
            .collect();

        let mut counts = RatingCounts::default();
        for g in &groups {
            counts.add(&g.score.counts);
        }
        let overall = AggregateScore::mean(groups.iter().filter_map(|g| g.score.value()), counts);
        TreeScores { groups, overall }
    }

    /// Rate one declared variant of a wallet.
    pub fn rate_wallet(
        &self,
        wallet: &WalletDocument,
        variant: Variant,
    ) -> Result<RatedWallet, RatingError> {
        let span = rate_span!(wallet.id(), variant);
        let _guard = span.enter();

        if !wallet.has_variant(variant) {
            return Err(RatingError::UndeclaredVariant {
                wallet: wallet.metadata.id.clone(),
                variant,
            });
        }

        let tree = self.evaluate_tree(wallet, variant)?;
        let TreeScores { groups, overall } = self.score_tree(&tree);

        if overall.no_rated_attributes {
            tracing::warn!("wallet has no rated attributes");
        } else {
            tracing::debug!(score = overall.score, "wallet rated");
        }

        Ok(RatedWallet {
            metadata: wallet.metadata.clone(),
            variant,
            features: wallet.features.clone(),
            tree,
            group_scores: groups,
            overall,
        })
    }

    /// Rate the wallet's first declared variant.
    pub fn rate_primary(&self, wallet: &WalletDocument) -> Result<RatedWallet, RatingError> {
        let variant = wallet
            .primary_variant()
            .ok_or_else(|| RatingError::NoVariants(wallet.metadata.id.clone()))?;
        self.rate_wallet(wallet, variant)
    }

    /// Rate every declared variant, in declared order.
    pub fn rate_all_variants(&self, wallet: &WalletDocument) -> Result<Vec<RatedWallet>, RatingError> {
        if wallet.variants.is_empty() {
            return Err(RatingError::NoVariants(wallet.metadata.id.clone()));
        }
        wallet
            .variants
            .iter()
            .map(|&variant| self.rate_wallet(wallet, variant))
            .collect()
    }

    /// Rate each wallet's primary variant and rank the results.
    pub fn rate_catalog(&self, wallets: &[WalletDocument]) -> Result<Vec<RatedWallet>, RatingError> {
        let mut rated = wallets
            .iter()
            .map(|w| self.rate_primary(w))
            .collect::<Result<Vec<_>, _>>()?;
        rated.sort_by(RatedWallet::rank_cmp);
        tracing::info!(wallets = rated.len(), "catalog rated");
        Ok(rated)
    }

    /// Like `rate_catalog`, but rates `variant` for wallets that declare it
    /// and skips the rest.
    pub fn rate_catalog_variant(
        &self,
        wallets: &[WalletDocument],
        variant: Variant,
    ) -> Result<Vec<RatedWallet>, RatingError> {
        let mut rated = wallets
            .iter()
            .filter(|w| w.has_variant(variant))
            .map(|w| self.rate_wallet(w, variant))
            .collect::<Result<Vec<_>, _>>()?;
        rated.sort_by(RatedWallet::rank_cmp);
        Ok(rated)
    }
}

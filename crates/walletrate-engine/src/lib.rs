//! Wallet rating engine: the attribute tree, evaluation with exemption,
//! score aggregation, catalog loading, and reporters.

pub mod aggregate;
pub mod attribute;
pub mod attributes;
pub mod evaluated;
pub mod exemption;
pub mod loader;
pub mod rated;
pub mod reporters;
pub mod schema;
pub mod tree;

pub use aggregate::{AggregateScore, Aggregator, RatingCounts, TreeScores};
pub use attribute::Attribute;
pub use attributes::default_tree;
pub use evaluated::{EvaluatedAttribute, EvaluatedGroup, EvaluatedTree};
pub use rated::{GroupScore, RatedWallet};
pub use schema::{describe, AttributeSchema, GroupSchema};
pub use tree::{AttributeGroup, AttributeTree, MappedGroup};

//! Core types for the wallet rating engine.
//!
//! Feature documents, ratings and evaluations, errors, configuration and
//! tracing setup. Nothing in here evaluates attributes; see `walletrate-engine`.

pub mod config;
pub mod errors;
pub mod features;
pub mod rating;
pub mod tracing_setup;

pub use features::{Support, Variant, WalletDocument};
pub use rating::{Evaluation, Rating, RatingScale};

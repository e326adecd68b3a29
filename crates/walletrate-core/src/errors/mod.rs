//! Error handling for walletrate.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod feature_error;
pub mod load_error;
pub mod rating_error;
pub mod report_error;
pub mod schema_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use feature_error::FeatureError;
pub use load_error::LoadError;
pub use rating_error::RatingError;
pub use report_error::ReportError;
pub use schema_error::SchemaError;

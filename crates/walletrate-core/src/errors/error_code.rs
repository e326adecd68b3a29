//! Stable error codes surfaced to the CLI and reporters.

pub const FEATURE_ERROR: &str = "FEATURE_ERROR";
pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const RATING_ERROR: &str = "RATING_ERROR";
pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";

/// Maps an error to a stable string code.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;

    /// `[CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

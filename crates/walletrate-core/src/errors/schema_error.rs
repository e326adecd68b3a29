//! Attribute tree construction errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Duplicate attribute group id: {0}")]
    DuplicateGroup(String),

    #[error("Duplicate attribute id {attribute} in group {group}")]
    DuplicateAttribute { group: String, attribute: String },

    #[error("Invalid id {0:?}: must be lowerCamelCase")]
    InvalidId(String),

    #[error("Attribute group {0} has no attributes")]
    EmptyGroup(String),
}

impl ErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_ERROR
    }
}

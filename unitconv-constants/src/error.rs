//! Errors surfaced by constant lookup

use thiserror::Error;
use unitconv_core::codes;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstantError {
    #[error("unknown constant: {0}")]
    UnknownConstant(String),

    #[error("unknown group: {0}")]
    UnknownGroup(String),
}

impl ConstantError {
    pub fn code(&self) -> &'static str {
        match self {
            ConstantError::UnknownConstant(_) => codes::UNKNOWN_CONSTANT,
            ConstantError::UnknownGroup(_) => codes::UNKNOWN_GROUP,
        }
    }
}

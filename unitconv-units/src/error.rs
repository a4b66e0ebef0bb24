//! Errors surfaced by unit lookup and conversion

use thiserror::Error;
use unitconv_core::{codes, AmountError};

/// Per-query failure; never fatal to the process
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("cannot convert between: {from} ({from_category}) and {to} ({to_category})")]
    IncompatibleCategories {
        from: String,
        to: String,
        from_category: String,
        to_category: String,
    },

    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error("converting {amount} {from} to {to} leaves the representable range")]
    ResultOutOfRange { amount: f64, from: String, to: String },
}

impl ConversionError {
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            ConversionError::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
            ConversionError::IncompatibleCategories { .. } => codes::INCOMPATIBLE_CATEGORIES,
            ConversionError::Amount(e) => e.code(),
            ConversionError::ResultOutOfRange { .. } => codes::RESULT_OUT_OF_RANGE,
        }
    }
}

//! Structured errors shared by the catalogs
//!
//! Load-time errors (`CatalogError`) are fatal: a catalog that fails to load
//! is never handed out. Amount errors are per-query and recoverable.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    // Catalog load
    pub const TABLE_UNREADABLE: &str = "TABLE_UNREADABLE";
    pub const MALFORMED_RECORD: &str = "MALFORMED_RECORD";
    pub const DUPLICATE_SYMBOL: &str = "DUPLICATE_SYMBOL";
    pub const DUPLICATE_NAME: &str = "DUPLICATE_NAME";
    pub const INCONSISTENT_CATEGORY: &str = "INCONSISTENT_CATEGORY";
    // Lookup
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_GROUP: &str = "UNKNOWN_GROUP";
    pub const UNKNOWN_CONSTANT: &str = "UNKNOWN_CONSTANT";
    // Conversion
    pub const INCOMPATIBLE_CATEGORIES: &str = "INCOMPATIBLE_CATEGORIES";
    pub const INVALID_AMOUNT: &str = "INVALID_AMOUNT";
    pub const AMOUNT_OUT_OF_RANGE: &str = "AMOUNT_OUT_OF_RANGE";
    pub const RESULT_OUT_OF_RANGE: &str = "RESULT_OUT_OF_RANGE";
    // History
    pub const HISTORY_WRITE_FAILURE: &str = "HISTORY_WRITE_FAILURE";
    pub const HISTORY_READ_FAILURE: &str = "HISTORY_READ_FAILURE";
}

/// A catalog source could not be turned into a consistent catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("line {line}: malformed record: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("line {line}: symbol '{symbol}' is already used by '{existing}'")]
    DuplicateSymbol {
        line: usize,
        symbol: String,
        existing: String,
    },

    #[error("line {line}: name '{name}' is already defined")]
    DuplicateName { line: usize, name: String },

    #[error("category '{category}': {reason}")]
    InconsistentCategory { category: String, reason: String },
}

impl CatalogError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        CatalogError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::MalformedRecord { .. } => codes::MALFORMED_RECORD,
            CatalogError::DuplicateSymbol { .. } => codes::DUPLICATE_SYMBOL,
            CatalogError::DuplicateName { .. } => codes::DUPLICATE_NAME,
            CatalogError::InconsistentCategory { .. } => codes::INCONSISTENT_CATEGORY,
        }
    }
}

/// The conversion amount could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("'{0}' is not a valid number")]
    InvalidAmount(String),

    #[error("'{0}' is too large or too small")]
    AmountOutOfRange(String),
}

impl AmountError {
    pub fn code(&self) -> &'static str {
        match self {
            AmountError::InvalidAmount(_) => codes::INVALID_AMOUNT,
            AmountError::AmountOutOfRange(_) => codes::AMOUNT_OUT_OF_RANGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_codes() {
        assert_eq!(CatalogError::malformed(3, "x").code(), codes::MALFORMED_RECORD);
        let dup = CatalogError::DuplicateSymbol {
            line: 4,
            symbol: "m".into(),
            existing: "Meter".into(),
        };
        assert_eq!(dup.code(), codes::DUPLICATE_SYMBOL);
        assert_eq!(dup.to_string(), "line 4: symbol 'm' is already used by 'Meter'");
    }

    #[test]
    fn test_amount_error_carries_token() {
        let err = AmountError::InvalidAmount("ten".into());
        assert_eq!(err.code(), codes::INVALID_AMOUNT);
        assert!(err.to_string().contains("ten"));
    }
}

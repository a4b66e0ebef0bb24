//! Errors surfaced by the facade

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use unitconv_constants::ConstantError;
use unitconv_core::CatalogError;
use unitconv_units::ConversionError;

use crate::HistoryError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {table} table {}: {source}", path.display())]
    ReadTable {
        table: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error("{table} table: {source}")]
    LoadTable {
        table: &'static str,
        source: CatalogError,
    },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Constant(#[from] ConstantError),

    #[error(transparent)]
    History(#[from] HistoryError),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::ReadTable { .. } => unitconv_core::codes::TABLE_UNREADABLE,
            Error::LoadTable { source, .. } => source.code(),
            Error::Conversion(e) => e.code(),
            Error::Constant(e) => e.code(),
            Error::History(e) => e.code(),
        }
    }

    /// Load-time errors stop the program before any query runs
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ReadTable { .. } | Error::LoadTable { .. })
    }
}

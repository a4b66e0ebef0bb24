//! Unitconv Core - Fundamental types
//!
//! This crate provides the pieces shared by every catalog:
//! - `RecordLayout`: fixed-width column description and line splitter
//! - `Record`: trait implemented by every catalog entry, plus `load_records`
//! - `LookupIndex`: exact-symbol / case-insensitive-name lookup
//! - `parse_amount`: numeric parsing of the conversion amount
//! - `CatalogError` / `AmountError`: structured errors with machine-readable codes

mod amount;
mod error;
mod index;
mod layout;

pub use amount::parse_amount;
pub use error::{codes, AmountError, CatalogError};
pub use index::{fold_case, LookupIndex};
pub use layout::{load_records, Column, Record, RecordLayout};

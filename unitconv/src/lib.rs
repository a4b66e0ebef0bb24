//! Unitconv - Unit conversion and constant lookup
//!
//! Loads the unit and constant catalogs once, then answers queries against
//! them. Catalogs are immutable after load and shared behind `Arc`, so a
//! `Unitconv` can be cloned into long-running callers without locking.

mod error;
mod history;

pub use error::Error;
pub use history::{HistoryEntry, HistoryError, HistoryLog};

pub use unitconv_constants::{Constant, ConstantCatalog, ConstantError, EMBEDDED_CONSTANTS};
pub use unitconv_core::{codes, parse_amount, AmountError, CatalogError};
pub use unitconv_units::{
    Conversion, ConversionEngine, ConversionError, TemperatureScale, Unit, UnitCatalog, DISPLAY_PRECISION,
    EMBEDDED_UNITS,
};

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Where a catalog table is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableSource {
    /// The table compiled into the binary
    #[default]
    Embedded,
    File(PathBuf),
}

impl TableSource {
    fn read(&self, table: &'static str, embedded: &'static str) -> Result<Cow<'static, str>, Error> {
        match self {
            TableSource::Embedded => Ok(Cow::Borrowed(embedded)),
            TableSource::File(path) => {
                info!(table, path = %path.display(), "loading table from file");
                fs::read_to_string(path)
                    .map(Cow::Owned)
                    .map_err(|source| Error::ReadTable {
                        table,
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}

/// Main unitconv engine
#[derive(Debug, Clone)]
pub struct Unitconv {
    units: Arc<UnitCatalog>,
    constants: Arc<ConstantCatalog>,
    history: Option<HistoryLog>,
}

impl Unitconv {
    pub fn new(units: UnitCatalog, constants: ConstantCatalog) -> Self {
        Self {
            units: Arc::new(units),
            constants: Arc::new(constants),
            history: None,
        }
    }

    pub fn with_embedded_tables() -> Result<Self, Error> {
        Self::load(&TableSource::Embedded, &TableSource::Embedded)
    }

    /// Load both catalogs. Either one failing aborts the load.
    pub fn load(units: &TableSource, constants: &TableSource) -> Result<Self, Error> {
        let unit_text = units.read("unit", EMBEDDED_UNITS)?;
        let units = UnitCatalog::parse(&unit_text).map_err(|source| Error::LoadTable { table: "unit", source })?;

        let constant_text = constants.read("constant", EMBEDDED_CONSTANTS)?;
        let constants = ConstantCatalog::parse(&constant_text)
            .map_err(|source| Error::LoadTable { table: "constant", source })?;

        Ok(Self::new(units, constants))
    }

    pub fn with_history(mut self, log: HistoryLog) -> Self {
        self.history = Some(log);
        self
    }

    pub fn units(&self) -> &UnitCatalog {
        &self.units
    }

    pub fn constants(&self) -> &ConstantCatalog {
        &self.constants
    }

    pub fn history(&self) -> Option<&HistoryLog> {
        self.history.as_ref()
    }

    pub fn engine(&self) -> ConversionEngine<'_> {
        ConversionEngine::new(&self.units)
    }

    /// Convert without touching the history log
    pub fn convert(&self, amount: &str, from: &str, to: &str) -> Result<Conversion<'_>, ConversionError> {
        self.engine().convert_str(amount, from, to)
    }

    /// Convert, then append the result to the history log if one is set.
    /// A history failure is logged and does not affect the result.
    pub fn convert_and_record(&self, amount: &str, from: &str, to: &str) -> Result<Conversion<'_>, ConversionError> {
        let conversion = self.convert(amount, from, to)?;

        if let Some(log) = &self.history {
            if let Err(e) = log.record(from, to, &conversion) {
                warn!(code = e.code(), error = %e, "conversion history not updated");
            }
        }

        Ok(conversion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unitconv() -> Unitconv {
        Unitconv::with_embedded_tables().unwrap()
    }

    #[test]
    fn test_documented_conversions() {
        let uc = unitconv();
        assert_eq!(uc.convert("10", "m", "ft").unwrap().to_string(), "32.8084");
        assert_eq!(uc.convert("1", "kg", "lb").unwrap().to_string(), "2.2046");
        assert_eq!(uc.convert("100", "C", "F").unwrap().to_string(), "212.0000");
    }

    #[test]
    fn test_errors_keep_their_kind() {
        let uc = unitconv();
        let err = Error::from(uc.convert("10", "m", "g").unwrap_err());
        assert_eq!(err.code(), codes::INCOMPATIBLE_CATEGORIES);
        assert!(!err.is_fatal());

        let err = Error::from(uc.constants().value_of("tachyon").unwrap_err());
        assert_eq!(err.code(), codes::UNKNOWN_CONSTANT);
        assert!(err.to_string().contains("tachyon"));
    }

    #[test]
    fn test_constants_are_reachable() {
        let uc = unitconv();
        assert_eq!(uc.constants().value_of("PI").unwrap(), "3.141592653589793");
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let units = dir.path().join("units.dat");
        let constants = dir.path().join("constants.dat");
        fs::write(
            &units,
            format!("{:<12}{:<20}{:<8}{:<15}{}\n", "LENGTH", "Meter", "m", "Meter", "1"),
        )
        .unwrap();
        fs::write(
            &constants,
            format!("{:<16}{:<32}{:<12}{:<24}{}\n", "MATHEMATICS", "Pi", "pi", "3.14", "-"),
        )
        .unwrap();

        let uc = Unitconv::load(&TableSource::File(units), &TableSource::File(constants)).unwrap();
        assert_eq!(uc.units().len(), 1);
        assert_eq!(uc.constants().value_of("pi").unwrap(), "3.14");
    }

    #[test]
    fn test_malformed_table_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let units = dir.path().join("units.dat");
        fs::write(&units, format!("{:<12}{:<20}{:<8}{}\n", "LENGTH", "Meter", "m", "Meter")).unwrap();

        let err = Unitconv::load(&TableSource::File(units), &TableSource::Embedded).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.code(), codes::MALFORMED_RECORD);
    }

    #[test]
    fn test_missing_table_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = Unitconv::load(&TableSource::Embedded, &TableSource::File(dir.path().join("nope.dat")))
            .unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.code(), codes::TABLE_UNREADABLE);
    }

    #[test]
    fn test_convert_and_record_appends_history() {
        let dir = tempfile::tempdir().unwrap();
        let uc = unitconv().with_history(HistoryLog::at(dir.path().join("history.log")));

        uc.convert_and_record("10", "m", "ft").unwrap();
        uc.convert_and_record("1", "kg", "lb").unwrap();
        assert!(uc.convert_and_record("1", "m", "kg").is_err());

        let entries = uc.history().unwrap().entries().unwrap();
        assert_eq!(entries.iter().map(|e| e.seq).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_history_failure_does_not_fail_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let uc = unitconv().with_history(HistoryLog::at(dir.path()));

        let conversion = uc.convert_and_record("100", "C", "F").unwrap();
        assert_eq!(conversion.value, 212.0);
    }
}

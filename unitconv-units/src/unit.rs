//! Unit representation with conversion factors

use serde::{Deserialize, Serialize};
use std::fmt;
use unitconv_core::{CatalogError, Column, Record, RecordLayout};

use crate::TemperatureScale;

/// Category whose units convert through `TemperatureScale`
pub const TEMPERATURE_CATEGORY: &str = "TEMPERATURE";

/// Column layout of the unit table
pub const UNIT_LAYOUT: RecordLayout = RecordLayout::new(&[
    Column::new("category", 0, 12),
    Column::new("name", 12, 20),
    Column::new("symbol", 32, 8),
    Column::new("base unit", 40, 15),
    Column::new("conversion factor", 55, 20),
]);

/// A convertible unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Display name (e.g., "Kilometer"), matched case-insensitively
    pub name: String,
    /// Short alias (e.g., "km"), matched exactly
    pub symbol: String,
    /// Grouping key (e.g., "LENGTH")
    pub category: String,
    /// Reference unit of the category (e.g., "Meter")
    pub base_unit: String,
    /// value_in_base = value_in_unit * conversion_factor
    pub conversion_factor: f64,
    /// Set only for units of the temperature category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<TemperatureScale>,
}

impl Unit {
    /// Create a proportional unit
    pub fn new(name: &str, symbol: &str, category: &str, base_unit: &str, conversion_factor: f64) -> Self {
        Unit {
            name: name.to_string(),
            symbol: symbol.to_string(),
            category: category.to_string(),
            base_unit: base_unit.to_string(),
            conversion_factor,
            scale: None,
        }
    }

    /// Whether this unit is the reference unit of its category
    pub fn is_base(&self) -> bool {
        self.name == self.base_unit
    }

    pub fn is_temperature(&self) -> bool {
        self.scale.is_some()
    }

    /// Whether both units share a base unit (and can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.base_unit == other.base_unit
    }

    /// Express a value of this unit in the base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.conversion_factor
    }

    /// Express a base-unit value in this unit
    pub fn from_base(&self, value: f64) -> f64 {
        value / self.conversion_factor
    }

    /// Category match under the catalog's ASCII case folding
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

impl Record for Unit {
    const LAYOUT: RecordLayout = UNIT_LAYOUT;

    fn from_fields(line: usize, fields: &[&str]) -> Result<Self, CatalogError> {
        let (category, name, symbol, base_unit, factor_text) =
            (fields[0], fields[1], fields[2], fields[3], fields[4]);

        let factor: f64 = factor_text
            .parse()
            .ok()
            .filter(|f: &f64| f.is_finite())
            .ok_or_else(|| {
                CatalogError::malformed(
                    line,
                    format!("conversion factor '{}' is not a decimal number", factor_text),
                )
            })?;

        if category.eq_ignore_ascii_case(TEMPERATURE_CATEGORY) {
            let scale = TemperatureScale::from_symbol(symbol).ok_or_else(|| {
                CatalogError::malformed(
                    line,
                    format!("temperature unit '{}' must use symbol C, F or K", symbol),
                )
            })?;
            if factor < 0.0 {
                return Err(CatalogError::malformed(
                    line,
                    format!("conversion factor '{}' is negative", factor_text),
                ));
            }
            let mut unit = Unit::new(name, symbol, category, base_unit, factor);
            unit.scale = Some(scale);
            return Ok(unit);
        }

        if factor <= 0.0 {
            return Err(CatalogError::malformed(
                line,
                format!("conversion factor '{}' must be greater than zero", factor_text),
            ));
        }

        Ok(Unit::new(name, symbol, category, base_unit, factor))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new("Meter", "m", "LENGTH", "Meter", 1.0)
    }

    fn kilometer() -> Unit {
        Unit::new("Kilometer", "km", "LENGTH", "Meter", 1000.0)
    }

    fn second() -> Unit {
        Unit::new("Second", "s", "TIME", "Second", 1.0)
    }

    #[test]
    fn test_base_unit() {
        assert!(meter().is_base());
        assert!(!kilometer().is_base());
    }

    #[test]
    fn test_compatible_units() {
        assert!(meter().is_compatible(&kilometer()));
        assert!(!meter().is_compatible(&second()));
    }

    #[test]
    fn test_to_and_from_base() {
        let km = kilometer();
        assert_eq!(km.to_base(5.0), 5000.0);
        assert_eq!(km.from_base(5000.0), 5.0);
    }

    #[test]
    fn test_from_fields() {
        let unit = Unit::from_fields(1, &["LENGTH", "Foot", "ft", "Meter", "0.3048"]).unwrap();
        assert_eq!(unit, Unit::new("Foot", "ft", "LENGTH", "Meter", 0.3048));
        assert!(!unit.is_temperature());
    }

    #[test]
    fn test_from_fields_rejects_bad_factor() {
        for factor in ["abc", "0", "-2", "inf", "NaN"] {
            let err = Unit::from_fields(9, &["LENGTH", "Foot", "ft", "Meter", factor]).unwrap_err();
            assert!(
                matches!(err, CatalogError::MalformedRecord { line: 9, .. }),
                "factor {:?} gave {:?}",
                factor,
                err
            );
        }
    }

    #[test]
    fn test_from_fields_temperature() {
        let c = Unit::from_fields(1, &["TEMPERATURE", "Celsius", "C", "Kelvin", "0"]).unwrap();
        assert_eq!(c.scale, Some(TemperatureScale::Celsius));
        assert!(c.is_temperature() && !c.is_base());

        let k = Unit::from_fields(2, &["TEMPERATURE", "Kelvin", "K", "Kelvin", "1"]).unwrap();
        assert!(k.is_base());
        assert_eq!(k.scale, Some(TemperatureScale::Kelvin));

        let bad = Unit::from_fields(2, &["Temperature", "Rankine", "R", "Kelvin", "0.5556"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(kilometer().to_string(), "Kilometer (km)");
    }
}

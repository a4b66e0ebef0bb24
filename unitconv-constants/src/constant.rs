//! Constant representation

use serde::{Deserialize, Serialize};
use std::fmt;
use unitconv_core::{CatalogError, Column, Record, RecordLayout};

/// Column layout of the constant table
pub const CONSTANT_LAYOUT: RecordLayout = RecordLayout::new(&[
    Column::new("group", 0, 16),
    Column::new("name", 16, 32),
    Column::new("symbol", 48, 12),
    Column::new("value", 60, 24),
    Column::new("unit", 84, 20),
]);

/// Marker used in the unit column of dimensionless constants
pub const DIMENSIONLESS: &str = "-";

/// A named constant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constant {
    /// Subject area (e.g., "PHYSICS")
    pub group: String,
    pub name: String,
    pub symbol: String,
    /// Literal decimal text, as authored
    pub value: String,
    /// Free-text dimensional annotation, "-" if dimensionless
    pub unit: String,
}

impl Constant {
    pub fn is_dimensionless(&self) -> bool {
        self.unit == DIMENSIONLESS
    }

    /// Group match under the catalog's ASCII case folding
    pub fn in_group(&self, group: &str) -> bool {
        self.group.eq_ignore_ascii_case(group)
    }
}

impl Record for Constant {
    const LAYOUT: RecordLayout = CONSTANT_LAYOUT;

    fn from_fields(line: usize, fields: &[&str]) -> Result<Self, CatalogError> {
        let value = fields[3];
        if !value.parse::<f64>().map_or(false, |v| v.is_finite()) {
            return Err(CatalogError::malformed(
                line,
                format!("value '{}' is not a decimal number", value),
            ));
        }

        Ok(Constant {
            group: fields[0].to_string(),
            name: fields[1].to_string(),
            symbol: fields[2].to_string(),
            value: value.to_string(),
            unit: fields[4].to_string(),
        })
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.name, self.symbol, self.value)?;
        if !self.is_dimensionless() {
            write!(f, "\t{}", self.unit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_keeps_literal() {
        let g = Constant::from_fields(
            1,
            &["PHYSICS", "Gravitational constant", "G", "6.67430e-11", "m^3/(kg*s^2)"],
        )
        .unwrap();
        assert_eq!(g.value, "6.67430e-11");
        assert!(!g.is_dimensionless());
    }

    #[test]
    fn test_from_fields_rejects_non_numeric_value() {
        let err = Constant::from_fields(4, &["MATHEMATICS", "Pi", "pi", "3.14.15", "-"]).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord { line: 4, .. }));
    }

    #[test]
    fn test_display() {
        let pi = Constant::from_fields(1, &["MATHEMATICS", "Pi", "pi", "3.141592653589793", "-"]).unwrap();
        assert!(pi.is_dimensionless());
        assert_eq!(pi.to_string(), "Pi\tpi\t3.141592653589793");

        let c = Constant::from_fields(1, &["PHYSICS", "Speed of light", "c", "299792458", "m/s"]).unwrap();
        assert_eq!(c.to_string(), "Speed of light\tc\t299792458\tm/s");
    }
}

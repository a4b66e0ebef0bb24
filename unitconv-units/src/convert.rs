//! Conversion engine
//!
//! Proportional units convert through their shared base unit:
//! `result = amount * from.factor / to.factor`. Temperature units take the
//! affine path in `TemperatureScale`.

use serde::Serialize;
use std::fmt;
use tracing::debug;
use unitconv_core::{parse_amount, AmountError};

use crate::{ConversionError, Unit, UnitCatalog};

/// Decimal places used when a conversion is displayed
pub const DISPLAY_PRECISION: usize = 4;

/// Outcome of one conversion; `value` keeps full precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion<'a> {
    pub amount: f64,
    pub from: &'a Unit,
    pub to: &'a Unit,
    pub value: f64,
}

impl Conversion<'_> {
    /// Render the value with `precision` decimal places
    pub fn format_with(&self, precision: usize) -> String {
        format!("{:.*}", precision, self.value)
    }
}

impl fmt::Display for Conversion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", DISPLAY_PRECISION, self.value)
    }
}

/// Converts amounts between units of one catalog
#[derive(Debug, Clone, Copy)]
pub struct ConversionEngine<'a> {
    catalog: &'a UnitCatalog,
}

impl<'a> ConversionEngine<'a> {
    pub fn new(catalog: &'a UnitCatalog) -> Self {
        Self { catalog }
    }

    /// Parse `amount` and convert it
    pub fn convert_str(&self, amount: &str, from: &str, to: &str) -> Result<Conversion<'a>, ConversionError> {
        let amount = parse_amount(amount)?;
        self.convert(amount, from, to)
    }

    /// Convert `amount` from the unit named by `from` to the one named by `to`
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<Conversion<'a>, ConversionError> {
        if amount.is_nan() {
            return Err(AmountError::InvalidAmount(amount.to_string()).into());
        }
        if amount.is_infinite() {
            return Err(AmountError::AmountOutOfRange(amount.to_string()).into());
        }

        let from_unit = self.catalog.resolve(from)?;
        let to_unit = self.catalog.resolve(to)?;

        let value = match (from_unit.scale, to_unit.scale) {
            (Some(from_scale), Some(to_scale)) => from_scale.convert(amount, to_scale),
            _ => {
                if !from_unit.is_compatible(to_unit) {
                    return Err(ConversionError::IncompatibleCategories {
                        from: from.to_string(),
                        to: to.to_string(),
                        from_category: from_unit.category.clone(),
                        to_category: to_unit.category.clone(),
                    });
                }
                to_unit.from_base(from_unit.to_base(amount))
            }
        };

        if !value.is_finite() {
            return Err(ConversionError::ResultOutOfRange {
                amount,
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        debug!(amount, from = %from_unit.symbol, to = %to_unit.symbol, value, "converted");

        Ok(Conversion {
            amount,
            from: from_unit,
            to: to_unit,
            value,
        })
    }
}

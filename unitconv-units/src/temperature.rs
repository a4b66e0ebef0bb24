//! Temperature scales
//!
//! Temperature conversion is affine, not proportional, so it never goes
//! through the factor chain. Only units whose scale was identified at load
//! time reach these formulas.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Identify a scale by its table symbol (`C`, `F`, `K`)
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "C" => Some(TemperatureScale::Celsius),
            "F" => Some(TemperatureScale::Fahrenheit),
            "K" => Some(TemperatureScale::Kelvin),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "C",
            TemperatureScale::Fahrenheit => "F",
            TemperatureScale::Kelvin => "K",
        }
    }

    /// Convert a temperature reading on this scale to `target`
    pub fn convert(self, value: f64, target: TemperatureScale) -> f64 {
        use TemperatureScale::*;

        match (self, target) {
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
            (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
            (Kelvin, Celsius) => value - 273.15,
            (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
            (Kelvin, Fahrenheit) => value * 9.0 / 5.0 - 459.67,
            (Celsius, Kelvin) => value + 273.15,
            (Fahrenheit, Kelvin) => (value + 459.67) * 5.0 / 9.0,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

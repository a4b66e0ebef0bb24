//! Unitconv Units - Unit catalog and conversion
//!
//! Units are read from a fixed-width table and grouped into categories.
//! Every unit in a category names the same base unit and carries a factor
//! such that `value_in_base = value_in_unit * factor`.
//!
//! Categories in the embedded table:
//! - Length (nm, mm, cm, m, km, in, ft, yd, fur, mi, lea, nmi)
//! - Mass (mg, g, kg, t, oz, lb, st)
//! - Volume (mL, cL, L, floz, gal)
//! - Data (b, B, KB, MB, GB, TB, PB)
//! - Time (ns, ms, s, min, h, d, wk, yr)
//! - Energy (J, cal, kcal, Wh, kWh, BTU, thm, quad)
//! - Pressure (Pa, kPa, bar, atm, Torr, psi)
//! - Angle (rad, deg, grad, arcmin, arcsec)
//! - Temperature (C, F, K) - affine, converted by dedicated formulas

mod catalog;
mod convert;
mod error;
mod temperature;
mod unit;

pub use catalog::UnitCatalog;
pub use convert::{Conversion, ConversionEngine, DISPLAY_PRECISION};
pub use error::ConversionError;
pub use temperature::TemperatureScale;
pub use unit::{Unit, TEMPERATURE_CATEGORY, UNIT_LAYOUT};

/// Unit table compiled into the crate
pub const EMBEDDED_UNITS: &str = include_str!("../data/units.dat");

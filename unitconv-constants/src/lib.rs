//! Unitconv Constants - Named constants with their literal values
//!
//! Values are stored exactly as written in the table (including scientific
//! notation such as `6.67430e-11`) and are never re-parsed for display.
//!
//! Groups in the embedded table:
//! - MATHEMATICS (pi, tau, e, phi, sqrt2, gamma)
//! - PHYSICS (c, G, h, hbar, q, m_e, m_p, eps0, g0, alpha)
//! - CHEMISTRY (N_A, k, R, F, atm)

mod catalog;
mod constant;
mod error;

pub use catalog::ConstantCatalog;
pub use constant::{Constant, CONSTANT_LAYOUT};
pub use error::ConstantError;

/// Constant table compiled into the crate
pub const EMBEDDED_CONSTANTS: &str = include_str!("../data/constants.dat");

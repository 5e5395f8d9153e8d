//! # Physical Constants
//!
//! Shared table of the constants the formula catalog reads. Values are kept at
//! the precision the calculator has always shown, so results stay comparable
//! with hand calculations from textbook tables.

/// Universal gravitational constant (N·m²/kg²)
pub const G: f64 = 6.674e-11;

/// Coulomb constant k = 1/(4πε₀) (N·m²/C²)
pub const COULOMB_K: f64 = 8.99e9;

/// Molar gas constant (J/(mol·K))
pub const R_GAS: f64 = 8.314;

/// Planck constant (J·s)
pub const H_PLANCK: f64 = 6.626e-34;

/// Reduced Planck constant ħ (J·s)
pub const H_BAR: f64 = 1.055e-34;

/// Speed of light in vacuum (m/s)
pub const C_LIGHT: f64 = 3e8;

/// Electron rest mass (kg)
pub const M_ELECTRON: f64 = 9.109e-31;

/// Elementary charge (C). Also the J-per-eV factor.
pub const E_CHARGE: f64 = 1.602e-19;

/// Vacuum permittivity (F/m)
pub const EPSILON_0: f64 = 8.854e-12;

/// Rydberg constant (1/m)
pub const RYDBERG: f64 = 1.097e7;

/// Wien displacement constant (m·K)
pub const WIEN_B: f64 = 2.898e-3;

/// Atomic mass unit (kg)
pub const U_TO_KG: f64 = 1.66054e-27;

/// Hydrogen ground-state binding energy (eV)
pub const BOHR_GROUND_EV: f64 = 13.6;

/// Standard temperature offset between °C and K
pub const CELSIUS_OFFSET: f64 = 273.15;

//! # Unit Conversion
//!
//! Bidirectional mapping between the display units a user picks and the
//! implicit SI base unit every formula computes in.
//!
//! Most units are a fixed linear multiplier (`cm` is `0.01` m). Angles are
//! stored in radians, percentages as fractions, and `°C` is the only affine
//! conversion (offset by 273.15 to kelvin).
//!
//! Two flavors of conversion are offered:
//!
//! - [`to_base`] / [`from_base`] are lenient: an unrecognized unit string is
//!   treated as scale factor 1 and a warning is logged.
//! - [`convert_to_base`] / [`convert_from_base`] are strict: an unknown unit or
//!   a non-finite result is a [`CalcError::ConversionError`]. The calculation
//!   pipeline uses these.
//!
//! ## Example
//!
//! ```rust
//! use physcalc_core::units::{from_base, to_base};
//!
//! assert_eq!(to_base(150.0, "cm"), 1.5);
//! assert_eq!(to_base(25.0, "°C"), 298.15);
//! assert_eq!(from_base(298.15, "°C"), 25.0);
//!
//! // Unknown units pass through unscaled
//! assert_eq!(to_base(7.0, "furlongs"), 7.0);
//! ```

use std::collections::HashMap;
use std::f64::consts::PI;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::constants::{CELSIUS_OFFSET, E_CHARGE, U_TO_KG};
use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Conversion Rules
// ============================================================================

/// How a display unit maps onto its base unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "factor")]
pub enum Conversion {
    /// Already the base unit (`m`, `N`, `""`, `rad`, ...)
    Identity,
    /// Linear multiplier: `base = value * factor`
    Scale(f64),
    /// Degrees Celsius to kelvin
    Celsius,
}

impl Conversion {
    /// Convert a display value into the base unit.
    ///
    /// Non-finite input yields NaN.
    pub fn to_base(self, value: f64) -> f64 {
        if !value.is_finite() {
            return f64::NAN;
        }
        match self {
            Conversion::Identity => value,
            Conversion::Scale(factor) => value * factor,
            Conversion::Celsius => value + CELSIUS_OFFSET,
        }
    }

    /// Convert a base-unit value back into the display unit.
    ///
    /// Non-finite input yields NaN.
    pub fn from_base(self, value: f64) -> f64 {
        if !value.is_finite() {
            return f64::NAN;
        }
        match self {
            Conversion::Identity => value,
            Conversion::Scale(factor) => value / factor,
            Conversion::Celsius => value - CELSIUS_OFFSET,
        }
    }

    /// True for conversions with an offset, where the inverse law only holds
    /// up to rounding of the offset.
    pub fn is_affine(self) -> bool {
        matches!(self, Conversion::Celsius)
    }
}

// ============================================================================
// Unit Table
// ============================================================================

/// Base units used by the catalog. Each converts to itself.
const BASE_UNITS: &[&str] = &[
    "", "m", "kg", "s", "m/s", "m/s²", "N", "J", "W", "kg·m/s", "N·s", "rad", "rad/s", "N/m", "Hz",
    "kg/m", "Pa", "m³", "mol", "K", "J/kg⋅K", "V", "A", "Ω", "Ω⋅m", "m²", "C", "N/C", "V/m", "F",
    "T", "H", "A/s", "D", "s⁻¹", "Bq", "m⁻³", "m⁻¹", "W/m²K⁴", "T·m/A", "Wb", "dB", "W/m²",
];

/// Scaled units as (unit, factor to base).
const SCALED_UNITS: &[(&str, f64)] = &[
    // Length
    ("cm", 0.01),
    ("mm", 0.001),
    ("km", 1000.0),
    ("μm", 1e-6),
    ("nm", 1e-9),
    ("pm", 1e-12),
    ("AU", 1.496e11),
    // Mass
    ("g", 0.001),
    ("ton", 1000.0),
    ("u", U_TO_KG),
    // Time
    ("ms", 0.001),
    ("min", 60.0),
    ("h", 3600.0),
    ("days", 86400.0),
    ("years", 31_557_600.0),
    // Speed and acceleration
    ("km/h", 1.0 / 3.6),
    ("km/s", 1000.0),
    ("cm/s", 0.01),
    ("cm/s²", 0.01),
    // Force and energy
    ("kN", 1000.0),
    ("dyne", 1e-5),
    ("kJ", 1000.0),
    ("MJ", 1e6),
    ("cal", 4.184),
    ("eV", E_CHARGE),
    ("MeV", 1.602e-13),
    ("GeV", 1.602e-10),
    // Power
    ("kW", 1000.0),
    ("MW", 1e6),
    // Frequency
    ("kHz", 1000.0),
    ("MHz", 1e6),
    ("THz", 1e12),
    // Electrical
    ("mV", 0.001),
    ("kV", 1000.0),
    ("mA", 0.001),
    ("μA", 1e-6),
    ("kΩ", 1000.0),
    ("MΩ", 1e6),
    ("μC", 1e-6),
    ("nC", 1e-9),
    ("μF", 1e-6),
    ("nF", 1e-9),
    ("pF", 1e-12),
    ("mH", 0.001),
    ("mT", 0.001),
    // Area and volume
    ("cm²", 1e-4),
    ("L", 0.001),
    // Pressure
    ("atm", 101_325.0),
    ("bar", 1e5),
    ("mmHg", 133.322),
    // Activity
    ("Ci", 3.7e10),
    // Angles, ratios and angular velocity
    ("°", PI / 180.0),
    ("%", 0.01),
    ("rpm", PI / 30.0),
];

static UNIT_TABLE: Lazy<UnitTable> = Lazy::new(UnitTable::build);

/// Registry of every known display unit.
#[derive(Debug)]
pub struct UnitTable {
    conversions: HashMap<&'static str, Conversion>,
}

impl UnitTable {
    fn build() -> Self {
        let mut conversions = HashMap::with_capacity(BASE_UNITS.len() + SCALED_UNITS.len() + 1);
        for unit in BASE_UNITS {
            conversions.insert(*unit, Conversion::Identity);
        }
        for (unit, factor) in SCALED_UNITS {
            conversions.insert(*unit, Conversion::Scale(*factor));
        }
        conversions.insert("°C", Conversion::Celsius);
        UnitTable { conversions }
    }

    /// The process-wide table
    pub fn global() -> &'static UnitTable {
        &UNIT_TABLE
    }

    /// Look up the conversion rule for a unit string.
    pub fn lookup(&self, unit: &str) -> Option<Conversion> {
        self.conversions.get(unit).copied()
    }

    /// True if the unit string is registered
    pub fn contains(&self, unit: &str) -> bool {
        self.conversions.contains_key(unit)
    }

    /// All registered unit strings, sorted
    pub fn units(&self) -> Vec<&'static str> {
        let mut units: Vec<_> = self.conversions.keys().copied().collect();
        units.sort_unstable();
        units
    }

    fn lenient(&self, unit: &str) -> Conversion {
        self.lookup(unit).unwrap_or_else(|| {
            tracing::warn!(unit, "unknown unit, treating as scale factor 1");
            Conversion::Identity
        })
    }
}

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a display value to the base unit.
///
/// Unknown units are treated as factor 1. Non-finite input returns NaN.
pub fn to_base(value: f64, unit: &str) -> f64 {
    UnitTable::global().lenient(unit).to_base(value)
}

/// Convert a base-unit value to the display unit.
///
/// Unknown units are treated as factor 1. Non-finite input returns NaN.
pub fn from_base(value: f64, unit: &str) -> f64 {
    UnitTable::global().lenient(unit).from_base(value)
}

/// Strictly convert the value of variable `symbol` from `unit` to base.
///
/// # Errors
///
/// `ConversionError` when the unit is unknown or the result is not finite.
pub fn convert_to_base(symbol: &str, value: f64, unit: &str) -> CalcResult<f64> {
    let conversion = UnitTable::global()
        .lookup(unit)
        .ok_or_else(|| CalcError::conversion_error(symbol, unit, "unknown unit"))?;
    finite_or(conversion.to_base(value), symbol, unit)
}

/// Strictly convert a base-unit value of variable `symbol` into `unit`.
///
/// # Errors
///
/// `ConversionError` when the unit is unknown or the result is not finite.
pub fn convert_from_base(symbol: &str, value: f64, unit: &str) -> CalcResult<f64> {
    let conversion = UnitTable::global()
        .lookup(unit)
        .ok_or_else(|| CalcError::conversion_error(symbol, unit, "unknown unit"))?;
    finite_or(conversion.from_base(value), symbol, unit)
}

fn finite_or(value: f64, symbol: &str, unit: &str) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::conversion_error(symbol, unit, "result is not a finite number"))
    }
}

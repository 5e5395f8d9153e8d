//! # Result Formatting
//!
//! Renders a display-unit value the way the calculator shows results: fixed
//! decimals for everyday magnitudes, scientific notation with Unicode
//! superscript exponents for very large or very small ones.
//!
//! ## Example
//!
//! ```rust
//! use physcalc_core::format::format_scientific;
//!
//! assert_eq!(format_scientific(6.0, "N"), "6.000 N");
//! assert_eq!(format_scientific(1.5e6, "m"), "1.50 × 10⁶ m");
//! assert_eq!(format_scientific(2.5e-5, "s"), "2.50 × 10⁻⁵ s");
//! assert_eq!(format_scientific(0.0, "m"), "0 m");
//! ```

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Magnitudes at or above this switch to scientific notation
pub const SCIENTIFIC_UPPER: f64 = 1e6;

/// Magnitudes below this (and non-zero) switch to scientific notation
pub const SCIENTIFIC_LOWER: f64 = 1e-3;

/// Format a number without its unit.
///
/// Rules, by magnitude:
/// - non-finite: `"Error"`
/// - zero: `"0"`
/// - `>= 1e6` or `< 1e-3`: mantissa with 2 decimals, `" × 10"`, superscript exponent
/// - `>= 1000`: 1 decimal
/// - `>= 1`: 3 decimals
/// - otherwise: 4 decimals
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "Error".to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 {
        "0".to_string()
    } else if magnitude >= SCIENTIFIC_UPPER || magnitude < SCIENTIFIC_LOWER {
        let exponent = magnitude.log10().floor() as i32;
        // Scale in two steps; 10^324 alone overflows for subnormal values.
        let half = -exponent / 2;
        let mantissa = value * 10f64.powi(half) * 10f64.powi(-exponent - half);
        format!("{:.2} × 10{}", mantissa, superscript(exponent))
    } else if magnitude >= 1000.0 {
        format!("{:.1}", value)
    } else if magnitude >= 1.0 {
        format!("{:.3}", value)
    } else {
        format!("{:.4}", value)
    }
}

/// Format a value followed by its unit (omitted when empty).
///
/// `"Error"` is never followed by a unit.
pub fn format_scientific(value: f64, unit: &str) -> String {
    let formatted = format_value(value);
    if unit.is_empty() || !value.is_finite() {
        formatted
    } else {
        format!("{} {}", formatted, unit)
    }
}

/// Render an integer exponent as Unicode superscript, e.g. `-12` as `⁻¹²`.
pub fn superscript(exponent: i32) -> String {
    let mut out = String::new();
    if exponent < 0 {
        out.push('⁻');
    }
    for digit in exponent.unsigned_abs().to_string().bytes() {
        out.push(SUPERSCRIPT_DIGITS[usize::from(digit - b'0')]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_decimal_bands() {
        assert_eq!(format_value(6.0), "6.000");
        assert_eq!(format_value(1234.56), "1234.6");
        assert_eq!(format_value(0.25), "0.2500");
        assert_eq!(format_value(-12.3456), "-12.346");
        assert_eq!(format_value(999_999.0), "999999.0");
    }

    #[test]
    fn test_scientific_bands() {
        assert_eq!(format_value(1.5e6), "1.50 × 10⁶");
        assert_eq!(format_value(-3.2e-19), "-3.20 × 10⁻¹⁹");
        assert_eq!(format_value(0.000999), "9.99 × 10⁻⁴");
        assert_eq!(format_value(6.674e-11), "6.67 × 10⁻¹¹");
    }

    #[test]
    fn test_extreme_magnitudes() {
        assert_eq!(format_scientific(5e-324, "m"), "4.94 × 10⁻³²⁴ m");
        assert_eq!(format_value(f64::MAX), "1.80 × 10³⁰⁸");
    }

    #[test]
    fn test_zero_and_errors() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_scientific(0.0, "m"), "0 m");
        assert_eq!(format_scientific(f64::NAN, "m"), "Error");
        assert_eq!(format_scientific(f64::INFINITY, ""), "Error");
    }

    #[test]
    fn test_unit_suffix() {
        assert_eq!(format_scientific(2.0, ""), "2.000");
        assert_eq!(format_scientific(2.0, "kg"), "2.000 kg");
    }

    #[test]
    fn test_superscript() {
        assert_eq!(superscript(0), "⁰");
        assert_eq!(superscript(23), "²³");
        assert_eq!(superscript(-10), "⁻¹⁰");
    }
}

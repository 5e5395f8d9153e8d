//! # Calculation Pipeline
//!
//! One calculation, end to end:
//!
//! 1. parse each raw input string as a finite number
//! 2. convert it from its display unit to the base unit
//! 3. solve the formula for the target variable
//! 4. convert the result to the target's default display unit
//! 5. format it for display
//!
//! The first failure aborts the calculation; there are no partial results.
//!
//! ## Example
//!
//! ```rust
//! use physcalc_core::calculation::{calculate, CalculationInput, RawInput};
//!
//! let input = CalculationInput {
//!     formula: "Newton's Second Law (F = ma)".to_string(),
//!     target: "F".to_string(),
//!     inputs: vec![RawInput::new("m", "2", "kg"), RawInput::new("a", "3", "m/s²")],
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.display_value, "6.000 N");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::format_scientific;
use crate::formulas::{self, BaseValues, Formula};
use crate::units::{convert_from_base, convert_to_base};

// ============================================================================
// Input / Output Types
// ============================================================================

/// One user-entered value: the raw text and the display unit it is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub symbol: String,
    pub value: String,
    pub unit: String,
}

impl RawInput {
    pub fn new(symbol: impl Into<String>, value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            value: value.into(),
            unit: unit.into(),
        }
    }
}

/// A complete, serializable calculation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Exact formula name
    pub formula: String,
    /// Symbol to solve for
    pub target: String,
    pub inputs: Vec<RawInput>,
}

/// Result of a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedResult {
    /// Symbol that was solved for
    pub target: String,
    /// Result in the display unit
    pub value: f64,
    /// Result in the base unit, before display conversion
    pub base_value: f64,
    /// Display unit (`""` for dimensionless)
    pub unit: String,
    /// Formatted text including the unit, e.g. "6.000 N"
    pub display_value: String,
}

impl fmt::Display for FormattedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_value)
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Parse a raw input string as a finite number.
///
/// Surrounding whitespace is ignored. Anything else that is not a complete
/// number, including "inf" and "NaN", is rejected.
pub fn parse_value(symbol: &str, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::input_error(symbol, raw, "value is missing"));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(CalcError::input_error(symbol, raw, "value must be finite")),
        Err(_) => Err(CalcError::input_error(symbol, raw, "not a number")),
    }
}

/// Run the full pipeline for `formula`, solving for `target`.
///
/// Inputs naming the target are ignored. Inputs for symbols the formula does
/// not declare are rejected with `UnknownVariable`, a symbol given twice with
/// `InputError`, and a unit outside the variable's allowed units with
/// `ConversionError`.
pub fn compute(formula: &Formula, target: &str, inputs: &[RawInput]) -> CalcResult<FormattedResult> {
    let target_var = formula
        .variable(target)
        .ok_or_else(|| CalcError::unknown_variable(formula.name, target))?;

    let mut values = BaseValues::new();
    for input in inputs {
        if input.symbol == target {
            continue;
        }
        let variable = formula
            .variable(&input.symbol)
            .ok_or_else(|| CalcError::unknown_variable(formula.name, &input.symbol))?;
        if values.contains(&input.symbol) {
            return Err(CalcError::input_error(&input.symbol, &input.value, "value given more than once"));
        }
        let value = parse_value(&input.symbol, &input.value)?;
        if !variable.units.contains(&input.unit.as_str()) {
            return Err(CalcError::conversion_error(
                &input.symbol,
                &input.unit,
                "unit not allowed for this variable",
            ));
        }
        let base = convert_to_base(&input.symbol, value, &input.unit)?;
        tracing::debug!(symbol = %input.symbol, value, unit = %input.unit, base, "input converted");
        values.insert(input.symbol.clone(), base);
    }

    let base_value = formula.solve(target, &values)?;
    tracing::debug!(formula = formula.name, target, base_value, "solved");

    let unit = target_var.default_unit;
    let value = convert_from_base(target, base_value, unit).map_err(|_| {
        CalcError::conversion_error(target, unit, "Error converting result to display unit")
    })?;

    Ok(FormattedResult {
        target: target.to_string(),
        value,
        base_value,
        unit: unit.to_string(),
        display_value: format_scientific(value, unit),
    })
}

/// Resolve the formula by name, then run [`compute`].
///
/// # Errors
///
/// `UnknownFormula` when no formula has that exact name, otherwise anything
/// [`compute`] returns.
pub fn calculate(input: &CalculationInput) -> CalcResult<FormattedResult> {
    let formula =
        formulas::find_by_name(&input.formula).ok_or_else(|| CalcError::unknown_formula(&input.formula))?;
    compute(formula, &input.target, &input.inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn newton() -> &'static Formula {
        formulas::find_by_name("Newton's Second Law (F = ma)").unwrap()
    }

    #[test]
    fn test_newton_end_to_end() {
        let inputs = [RawInput::new("m", "2", "kg"), RawInput::new("a", "3", "m/s²")];
        let result = compute(newton(), "F", &inputs).unwrap();
        assert_eq!(result.value, 6.0);
        assert_eq!(result.unit, "N");
        assert_eq!(result.to_string(), "6.000 N");
    }

    #[test]
    fn test_display_unit_conversion() {
        // 500 g at 4 m/s²; result shown in N
        let inputs = [RawInput::new("m", "500", "g"), RawInput::new("a", "4", "m/s²")];
        let result = compute(newton(), "F", &inputs).unwrap();
        assert!((result.value - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_result_in_non_base_default_unit() {
        let lens = formulas::find_by_name("Lens Formula (1/f = 1/u + 1/v)").unwrap();
        let inputs = [RawInput::new("u", "0.3", "m"), RawInput::new("v", "60", "cm")];
        let result = compute(lens, "f", &inputs).unwrap();
        assert_eq!(result.unit, "cm");
        assert!((result.value - 20.0).abs() < 1e-9);
        assert!((result.base_value - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_unparseable_input() {
        let inputs = [RawInput::new("m", "abc", "kg"), RawInput::new("a", "3", "m/s²")];
        let err = compute(newton(), "F", &inputs).unwrap_err();
        assert_eq!(err.error_code(), "INPUT_ERROR");
        assert_eq!(err.offending_symbol(), Some("m"));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("x", "  2.5 ").unwrap(), 2.5);
        assert_eq!(parse_value("x", "1e3").unwrap(), 1000.0);
        assert!(parse_value("x", "").is_err());
        assert!(parse_value("x", "inf").is_err());
        assert!(parse_value("x", "NaN").is_err());
        assert!(parse_value("x", "12abc").is_err());
    }

    #[test]
    fn test_missing_input() {
        let inputs = [RawInput::new("m", "2", "kg")];
        let err = compute(newton(), "F", &inputs).unwrap_err();
        assert_eq!(err, CalcError::missing_input("a"));
    }

    #[test]
    fn test_unknown_unit_is_conversion_error() {
        let inputs = [RawInput::new("m", "2", "slug"), RawInput::new("a", "3", "m/s²")];
        let err = compute(newton(), "F", &inputs).unwrap_err();
        assert!(matches!(err, CalcError::ConversionError { ref unit, .. } if unit == "slug"));
    }

    #[test]
    fn test_unit_must_be_allowed_for_variable() {
        // ΔT is an interval; °C would add 273.15
        let heat = formulas::find_by_name("Heat Capacity (Q = mcΔT)").unwrap();
        let inputs = [
            RawInput::new("m", "1", "kg"),
            RawInput::new("c", "4184", "J/kg⋅K"),
            RawInput::new("ΔT", "10", "°C"),
        ];
        let err = compute(heat, "Q", &inputs).unwrap_err();
        assert!(matches!(err, CalcError::ConversionError { ref symbol, ref unit, .. }
            if symbol == "ΔT" && unit == "°C"));

        let inputs = [
            RawInput::new("m", "1", "kg"),
            RawInput::new("c", "4184", "J/kg⋅K"),
            RawInput::new("ΔT", "10", "K"),
        ];
        assert_eq!(compute(heat, "Q", &inputs).unwrap().display_value, "41840.0 J");

        // Registered, but not a mass unit
        let inputs = [RawInput::new("m", "2", "km"), RawInput::new("a", "3", "m/s²")];
        let err = compute(newton(), "F", &inputs).unwrap_err();
        assert_eq!(err.error_code(), "CONVERSION_ERROR");
        assert_eq!(err.offending_symbol(), Some("m"));
    }

    #[test]
    fn test_duplicate_input_rejected() {
        let inputs = [
            RawInput::new("m", "2", "kg"),
            RawInput::new("m", "5", "kg"),
            RawInput::new("a", "3", "m/s²"),
        ];
        let err = compute(newton(), "F", &inputs).unwrap_err();
        assert_eq!(err.error_code(), "INPUT_ERROR");
        assert_eq!(err.offending_symbol(), Some("m"));
    }

    #[test]
    fn test_display_conversion_overflow() {
        // f = 3e306 m is finite in base units but not in cm
        let lens = formulas::find_by_name("Lens Formula (1/f = 1/u + 1/v)").unwrap();
        let inputs = [RawInput::new("u", "1e306", "m"), RawInput::new("v", "-1.5e306", "m")];
        let err = compute(lens, "f", &inputs).unwrap_err();
        assert!(matches!(err, CalcError::ConversionError { ref symbol, ref unit, .. }
            if symbol == "f" && unit == "cm"));
    }

    #[test]
    fn test_input_for_undeclared_symbol() {
        let inputs = [RawInput::new("q", "2", "C")];
        let err = compute(newton(), "F", &inputs).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_VARIABLE");
    }

    #[test]
    fn test_target_input_is_ignored() {
        let inputs = [
            RawInput::new("F", "not even a number", "N"),
            RawInput::new("m", "2", "kg"),
            RawInput::new("a", "3", "m/s²"),
        ];
        assert_eq!(compute(newton(), "F", &inputs).unwrap().value, 6.0);
    }

    #[test]
    fn test_domain_error_passes_through() {
        let range = formulas::find_by_name("Projectile Range (R = u²sin2θ/g)").unwrap();
        let inputs = [
            RawInput::new("R", "1000", "m"),
            RawInput::new("u", "10", "m/s"),
            RawInput::new("g", "9.8", "m/s²"),
        ];
        let err = compute(range, "θ", &inputs).unwrap_err();
        assert_eq!(err.to_string(), "Impossible range - reduce distance or increase velocity");
    }

    #[test]
    fn test_calculate_unknown_formula() {
        let input = CalculationInput {
            formula: "Perpetual Motion (E = ∞)".to_string(),
            target: "E".to_string(),
            inputs: Vec::new(),
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "UNKNOWN_FORMULA");
    }

    #[test]
    fn test_request_json_round_trip() {
        let json = r#"{"formula":"Weight (W = mg)","target":"W","inputs":[
            {"symbol":"m","value":"10","unit":"kg"},
            {"symbol":"g","value":"9.8","unit":"m/s²"}]}"#;
        let input: CalculationInput = serde_json::from_str(json).unwrap();
        let result = calculate(&input).unwrap();
        assert_eq!(result.display_value, "98.000 N");
    }
}

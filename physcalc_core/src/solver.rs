//! # Solve Dispatcher
//!
//! Routes a solve request to the closed-form branch a formula registered for
//! the target variable, and enforces the contract around it:
//!
//! - the target must be declared (`UnknownVariable`) and have a branch
//!   (`UnsupportedTarget`)
//! - every other variable must have a value (`InputError`)
//! - a non-finite result is a `CalculationError`
//!
//! Branches signal impossible inputs themselves through the guard helpers in
//! this module, which produce `DomainError`s with the message shown to the user.

use crate::errors::{CalcError, CalcResult};
use crate::formulas::{BaseValues, Formula};

/// Reason attached to `CalculationError` when a branch yields NaN or infinity
pub const NON_FINITE_RESULT: &str = "Calculation resulted in invalid value (NaN or Infinity)";

/// Generic message for negative radicands and out-of-range inverse trig
pub const NO_REAL_SOLUTION: &str = "No real solution";

/// Solve `formula` for `target` given base-unit values for the other
/// variables. The result is in the target's base unit.
///
/// Values supplied for the target itself are ignored by every branch.
///
/// # Errors
///
/// See the module documentation.
pub fn solve(formula: &Formula, target: &str, values: &BaseValues) -> CalcResult<f64> {
    if formula.variable(target).is_none() {
        return Err(CalcError::unknown_variable(formula.name, target));
    }
    let branch = formula
        .branch_for(target)
        .ok_or_else(|| CalcError::unsupported_target(formula.name, target))?;

    if let Some(missing) = formula.symbols().find(|s| *s != target && !values.contains(s)) {
        return Err(CalcError::missing_input(missing));
    }

    let result = branch(values)?;
    if !result.is_finite() {
        tracing::debug!(formula = formula.name, target, result, "non-finite solve result");
        return Err(CalcError::calculation_error(formula.name, NON_FINITE_RESULT));
    }
    Ok(result)
}

// ============================================================================
// Domain Guards
// ============================================================================

/// Square root of a value that must be non-negative.
pub(crate) fn real_sqrt(radicand: f64, message: &str) -> CalcResult<f64> {
    if radicand < 0.0 {
        return Err(CalcError::domain(message));
    }
    Ok(radicand.sqrt())
}

/// Arcsine of a value that must lie in [-1, 1].
pub(crate) fn real_asin(ratio: f64, message: &str) -> CalcResult<f64> {
    if !(-1.0..=1.0).contains(&ratio) {
        return Err(CalcError::domain(message));
    }
    Ok(ratio.asin())
}

/// Arccosine of a value that must lie in [-1, 1].
pub(crate) fn real_acos(ratio: f64, message: &str) -> CalcResult<f64> {
    if !(-1.0..=1.0).contains(&ratio) {
        return Err(CalcError::domain(message));
    }
    Ok(ratio.acos())
}

/// A computed divisor (typically a trig term) that must not vanish.
pub(crate) fn nonzero(divisor: f64, message: &str) -> CalcResult<f64> {
    if divisor.abs() < 1e-10 {
        return Err(CalcError::domain(message));
    }
    Ok(divisor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::find_by_name;

    #[test]
    fn test_solve_newton() {
        let formula = find_by_name("Newton's Second Law (F = ma)").unwrap();
        let values = BaseValues::from([("m", 2.0), ("a", 3.0)]);
        assert_eq!(solve(formula, "F", &values).unwrap(), 6.0);
    }

    #[test]
    fn test_unknown_variable() {
        let formula = find_by_name("Newton's Second Law (F = ma)").unwrap();
        let err = solve(formula, "x", &BaseValues::new()).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_VARIABLE");
    }

    #[test]
    fn test_missing_input() {
        let formula = find_by_name("Newton's Second Law (F = ma)").unwrap();
        let err = solve(formula, "F", &BaseValues::from([("m", 2.0)])).unwrap_err();
        assert_eq!(err, CalcError::missing_input("a"));
    }

    #[test]
    fn test_target_value_is_ignored() {
        let formula = find_by_name("Newton's Second Law (F = ma)").unwrap();
        let values = BaseValues::from([("F", 100.0), ("m", 2.0), ("a", 3.0)]);
        assert_eq!(solve(formula, "F", &values).unwrap(), 6.0);
    }

    #[test]
    fn test_division_by_zero_is_calculation_error() {
        let formula = find_by_name("Newton's Second Law (F = ma)").unwrap();
        let values = BaseValues::from([("F", 6.0), ("a", 0.0)]);
        let err = solve(formula, "m", &values).unwrap_err();
        assert_eq!(err, CalcError::calculation_error(formula.name, NON_FINITE_RESULT));
    }

    #[test]
    fn test_negative_discriminant() {
        let formula = find_by_name("Second Equation of Motion (s = ut + ½at²)").unwrap();
        let values = BaseValues::from([("u", 1.0), ("a", -1.0), ("s", 10.0)]);
        let err = solve(formula, "t", &values).unwrap_err();
        assert_eq!(err.to_string(), "No real solution");
    }

    #[test]
    fn test_guards() {
        assert_eq!(real_sqrt(4.0, "x").unwrap(), 2.0);
        assert!(real_sqrt(-1e-12, "x").is_err());
        assert!(real_asin(1.0000001, "x").is_err());
        assert!(real_acos(-1.5, "x").is_err());
        assert!(nonzero(1e-12, "x").is_err());
        assert_eq!(nonzero(-0.5, "x").unwrap(), -0.5);
    }
}

//! # Error Types
//!
//! Structured error types for physcalc_core. Every failure in the calculation
//! pipeline aborts the current calculation and surfaces exactly one of these;
//! nothing here is fatal to the process.
//!
//! ## Example
//!
//! ```rust
//! use physcalc_core::errors::{CalcError, CalcResult};
//!
//! fn parse_mass(raw: &str) -> CalcResult<f64> {
//!     raw.trim()
//!         .parse::<f64>()
//!         .ok()
//!         .filter(|v| v.is_finite())
//!         .ok_or_else(|| CalcError::input_error("m", raw, "not a finite number"))
//! }
//!
//! assert!(parse_mass("2.5").is_ok());
//! assert_eq!(parse_mass("abc").unwrap_err().error_code(), "INPUT_ERROR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for physcalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and persistence operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A raw input field is missing or not a finite number
    #[error("Please enter a valid number for {symbol} ('{value}'): {reason}")]
    InputError {
        symbol: String,
        value: String,
        reason: String,
    },

    /// A unit conversion produced a non-finite value or the unit is unknown
    #[error("Invalid conversion for {symbol} with unit '{unit}': {reason}")]
    ConversionError {
        symbol: String,
        unit: String,
        reason: String,
    },

    /// The inputs have no physically or mathematically valid solution
    #[error("{message}")]
    DomainError { message: String },

    /// The solve produced a non-finite value
    #[error("Calculation error in {formula}: {reason}")]
    CalculationError { formula: String, reason: String },

    /// No formula in the catalog has this name
    #[error("Formula not found: {name}")]
    UnknownFormula { name: String },

    /// The formula declares no variable with this symbol
    #[error("Formula '{formula}' has no variable '{symbol}'")]
    UnknownVariable { formula: String, symbol: String },

    /// The variable is declared but the formula cannot be solved for it
    #[error("Formula '{formula}' cannot be solved for '{symbol}'")]
    UnsupportedTarget { formula: String, symbol: String },

    /// The favorites list is at capacity
    #[error("You can only have {max} favorites. Please remove one first.")]
    FavoritesFull { max: usize },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InputError
    pub fn input_error(symbol: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InputError {
            symbol: symbol.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InputError for a variable that was not supplied
    pub fn missing_input(symbol: impl Into<String>) -> Self {
        CalcError::input_error(symbol, "", "value is missing")
    }

    /// Create a ConversionError
    pub fn conversion_error(symbol: impl Into<String>, unit: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConversionError {
            symbol: symbol.into(),
            unit: unit.into(),
            reason: reason.into(),
        }
    }

    /// Create a DomainError
    pub fn domain(message: impl Into<String>) -> Self {
        CalcError::DomainError {
            message: message.into(),
        }
    }

    /// Create a CalculationError
    pub fn calculation_error(formula: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationError {
            formula: formula.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_formula(name: impl Into<String>) -> Self {
        CalcError::UnknownFormula { name: name.into() }
    }

    pub fn unknown_variable(formula: impl Into<String>, symbol: impl Into<String>) -> Self {
        CalcError::UnknownVariable {
            formula: formula.into(),
            symbol: symbol.into(),
        }
    }

    pub fn unsupported_target(formula: impl Into<String>, symbol: impl Into<String>) -> Self {
        CalcError::UnsupportedTarget {
            formula: formula.into(),
            symbol: symbol.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// The variable symbol a presentation layer should highlight, if any
    pub fn offending_symbol(&self) -> Option<&str> {
        match self {
            CalcError::InputError { symbol, .. } | CalcError::ConversionError { symbol, .. } => Some(symbol),
            _ => None,
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InputError { .. } => "INPUT_ERROR",
            CalcError::ConversionError { .. } => "CONVERSION_ERROR",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::CalculationError { .. } => "CALCULATION_ERROR",
            CalcError::UnknownFormula { .. } => "UNKNOWN_FORMULA",
            CalcError::UnknownVariable { .. } => "UNKNOWN_VARIABLE",
            CalcError::UnsupportedTarget { .. } => "UNSUPPORTED_TARGET",
            CalcError::FavoritesFull { .. } => "FAVORITES_FULL",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::input_error("m", "abc", "not a finite number");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InputError\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_input("t").error_code(), "INPUT_ERROR");
        assert_eq!(CalcError::domain("No real solution").error_code(), "DOMAIN_ERROR");
        assert_eq!(CalcError::FavoritesFull { max: 5 }.error_code(), "FAVORITES_FULL");
    }

    #[test]
    fn test_domain_error_displays_verbatim() {
        let error = CalcError::domain("No real solution");
        assert_eq!(error.to_string(), "No real solution");
    }

    #[test]
    fn test_offending_symbol() {
        assert_eq!(CalcError::missing_input("u").offending_symbol(), Some("u"));
        assert_eq!(CalcError::conversion_error("m", "kg", "overflow").offending_symbol(), Some("m"));
        assert_eq!(CalcError::domain("x").offending_symbol(), None);
    }
}

//! # physcalc_core - Physics Formula Calculator Engine
//!
//! `physcalc_core` holds a catalog of closed-form physics formulas, each
//! solvable for any one of its variables given the others. Inputs arrive in
//! display units, are converted to SI base units, solved, and converted back to
//! the target's default unit for display.
//!
//! ## Design Philosophy
//!
//! - **Stateless core**: the catalog is immutable and every solve is a pure function
//! - **Explicit failure**: every error is a typed [`CalcError`], never NaN or a sentinel
//! - **JSON-friendly**: requests, results, errors and favorites are all serde types
//!
//! ## Quick Start
//!
//! ```rust
//! use physcalc_core::calculation::{compute, RawInput};
//! use physcalc_core::formulas::find_by_name;
//!
//! let formula = find_by_name("Kinetic Energy (KE = ½mv²)").unwrap();
//! let inputs = [RawInput::new("m", "2", "kg"), RawInput::new("v", "3", "m/s")];
//!
//! let result = compute(formula, "KE", &inputs).unwrap();
//! assert_eq!(result.display_value, "9.000 J");
//! ```
//!
//! ## Modules
//!
//! - [`formulas`] - Formula records and the static catalog
//! - [`solver`] - Solve dispatcher and domain guards
//! - [`calculation`] - Parse, convert, solve, convert back, format
//! - [`units`] - Display-unit to base-unit conversion table
//! - [`format`] - Result formatting
//! - [`constants`] - Physical constants shared by the catalog
//! - [`session`] - Favorites and history
//! - [`store`] - Favorites file with atomic saves and locking
//! - [`errors`] - Structured error types

pub mod calculation;
pub mod constants;
pub mod errors;
pub mod format;
pub mod formulas;
pub mod session;
pub mod solver;
#[cfg(not(target_arch = "wasm32"))]
pub mod store;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculation::{calculate, compute, CalculationInput, FormattedResult, RawInput};
pub use errors::{CalcError, CalcResult};
pub use formulas::{BaseValues, Category, Formula, Variable};
pub use session::{Favorites, History};
#[cfg(not(target_arch = "wasm32"))]
pub use store::{FavoritesStore, StoreLock};

//! # Formula Catalog
//!
//! Data model for physics formulas and the static catalog built from it.
//!
//! A [`Formula`] declares its variables (symbol, display name, allowed units,
//! default unit) and one closed-form branch per variable it can be solved for.
//! Branches receive every value already converted to base units and return the
//! target in base units.
//!
//! ## Example
//!
//! ```rust
//! use physcalc_core::formulas::{self, BaseValues, Category};
//!
//! let newton = formulas::find_by_name("Newton's Second Law (F = ma)").unwrap();
//! assert_eq!(newton.category, Category::Forces);
//!
//! let values = BaseValues::from([("m", 2.0), ("a", 3.0)]);
//! assert_eq!(newton.solve("F", &values).unwrap(), 6.0);
//! ```

mod catalog;
mod circuits;
mod electromagnetism;
mod fields_radiation;
mod mechanics;
mod optics_modern;
mod waves_thermo;

pub use catalog::{filter, find_by_name, group_by_category, list, reference_markdown, search};

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Categories
// ============================================================================

/// Grouping label for formulas.
///
/// Serialized as the display name so stored favorites stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Kinematics,
    #[serde(rename = "Projectile Motion")]
    ProjectileMotion,
    Forces,
    #[serde(rename = "Work-Energy")]
    WorkEnergy,
    Momentum,
    #[serde(rename = "Circular Motion")]
    CircularMotion,
    Gravitation,
    #[serde(rename = "SHM & Oscillations")]
    Oscillations,
    Waves,
    Thermodynamics,
    Electricity,
    Magnetism,
    Optics,
    #[serde(rename = "Modern Physics")]
    ModernPhysics,
    #[serde(rename = "Nuclear Physics")]
    NuclearPhysics,
}

impl Category {
    /// Every category, in the order they first appear in the catalog
    pub const ALL: [Category; 15] = [
        Category::Kinematics,
        Category::ProjectileMotion,
        Category::Forces,
        Category::WorkEnergy,
        Category::Momentum,
        Category::CircularMotion,
        Category::Gravitation,
        Category::Oscillations,
        Category::Waves,
        Category::Thermodynamics,
        Category::Electricity,
        Category::Magnetism,
        Category::Optics,
        Category::ModernPhysics,
        Category::NuclearPhysics,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Kinematics => "Kinematics",
            Category::ProjectileMotion => "Projectile Motion",
            Category::Forces => "Forces",
            Category::WorkEnergy => "Work-Energy",
            Category::Momentum => "Momentum",
            Category::CircularMotion => "Circular Motion",
            Category::Gravitation => "Gravitation",
            Category::Oscillations => "SHM & Oscillations",
            Category::Waves => "Waves",
            Category::Thermodynamics => "Thermodynamics",
            Category::Electricity => "Electricity",
            Category::Magnetism => "Magnetism",
            Category::Optics => "Optics",
            Category::ModernPhysics => "Modern Physics",
            Category::NuclearPhysics => "Nuclear Physics",
        }
    }

    /// Parse a display name back into a category (exact match)
    pub fn from_display_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.display_name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Variables
// ============================================================================

/// A quantity in a formula.
///
/// An empty unit string (`""`) marks a dimensionless quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    /// Symbol, unique within its formula (e.g. "v", "θ", "f_prime")
    pub symbol: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Display units the user may pick, in presentation order
    pub units: &'static [&'static str],
    /// Unit results are shown in; always one of `units`
    #[serde(rename = "defaultUnit")]
    pub default_unit: &'static str,
}

impl Variable {
    pub const fn new(
        symbol: &'static str,
        name: &'static str,
        units: &'static [&'static str],
        default_unit: &'static str,
    ) -> Self {
        Self {
            symbol,
            name,
            units,
            default_unit,
        }
    }
}

// ============================================================================
// Base Values
// ============================================================================

/// Variable values keyed by symbol, all in base units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseValues(HashMap<String, f64>);

impl BaseValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, returning the previous one
    pub fn insert(&mut self, symbol: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(symbol.into(), value)
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.0.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(symbol, value)| (symbol.as_str(), *value))
    }

    /// Fetch a value that must be present.
    ///
    /// # Errors
    ///
    /// `InputError` naming the symbol when it is missing.
    pub fn require(&self, symbol: &str) -> CalcResult<f64> {
        self.get(symbol).ok_or_else(|| CalcError::missing_input(symbol))
    }

    /// Fetch several required values at once.
    ///
    /// ```rust
    /// use physcalc_core::formulas::BaseValues;
    ///
    /// let values = BaseValues::from([("u", 2.0), ("a", 3.0), ("t", 5.0)]);
    /// let [u, a, t] = values.values(["u", "a", "t"]).unwrap();
    /// assert_eq!(u + a * t, 17.0);
    /// ```
    pub fn values<const N: usize>(&self, symbols: [&str; N]) -> CalcResult<[f64; N]> {
        let mut out = [0.0; N];
        for (slot, symbol) in out.iter_mut().zip(symbols) {
            *slot = self.require(symbol)?;
        }
        Ok(out)
    }
}

impl<S: Into<String>, const N: usize> From<[(S, f64); N]> for BaseValues {
    fn from(pairs: [(S, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for BaseValues {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        BaseValues(iter.into_iter().map(|(s, v)| (s.into(), v)).collect())
    }
}

// ============================================================================
// Formulas
// ============================================================================

/// Closed-form solve for one target variable.
///
/// Reads base-unit values for the other variables and returns the target in
/// its base unit, or an error when no valid solution exists.
pub type SolveFn = fn(&BaseValues) -> CalcResult<f64>;

#[derive(Clone)]
struct Branch {
    target: &'static str,
    solve: SolveFn,
}

impl fmt::Debug for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch").field("target", &self.target).finish_non_exhaustive()
    }
}

/// A catalog entry: named equation, its variables, and one branch per solvable
/// variable.
#[derive(Debug, Clone, Serialize)]
pub struct Formula {
    /// Unique display name, including the equation text
    pub name: &'static str,
    pub category: Category,
    pub variables: Vec<Variable>,
    #[serde(skip)]
    branches: Vec<Branch>,
}

impl Formula {
    pub fn new(name: &'static str, category: Category) -> Self {
        Self {
            name,
            category,
            variables: Vec::new(),
            branches: Vec::new(),
        }
    }

    /// Declare a variable (builder style)
    pub fn var(
        mut self,
        symbol: &'static str,
        name: &'static str,
        units: &'static [&'static str],
        default_unit: &'static str,
    ) -> Self {
        self.variables.push(Variable::new(symbol, name, units, default_unit));
        self
    }

    /// Register the closed-form solve for `target` (builder style)
    pub fn branch(mut self, target: &'static str, solve: SolveFn) -> Self {
        self.branches.push(Branch { target, solve });
        self
    }

    /// Look up a declared variable by symbol
    pub fn variable(&self, symbol: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.symbol == symbol)
    }

    /// Symbols in declaration order
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variables.iter().map(|v| v.symbol)
    }

    /// Symbols this formula has a branch for, in declaration order
    pub fn solvable_targets(&self) -> Vec<&'static str> {
        self.symbols().filter(|s| self.can_solve_for(s)).collect()
    }

    pub fn can_solve_for(&self, target: &str) -> bool {
        self.branches.iter().any(|b| b.target == target)
    }

    pub(crate) fn branch_for(&self, target: &str) -> Option<SolveFn> {
        self.branches.iter().find(|b| b.target == target).map(|b| b.solve)
    }

    /// Solve for `target` from base-unit values. See [`crate::solver::solve`].
    pub fn solve(&self, target: &str, values: &BaseValues) -> CalcResult<f64> {
        crate::solver::solve(self, target, values)
    }

    /// Name with the parenthesized equation removed, e.g. "Ohm's Law"
    pub fn short_name(&self) -> &'static str {
        self.name.split('(').next().unwrap_or(self.name).trim()
    }

    /// The equation text inside the outermost parentheses of the name
    pub fn equation(&self) -> Option<&'static str> {
        let start = self.name.find('(')?;
        let end = self.name.rfind(')')?;
        (end > start).then(|| &self.name[start + 1..end])
    }

    /// Check the structural invariants of this entry.
    ///
    /// - at least one variable, symbols unique
    /// - every variable has a non-empty unit list containing its default unit
    /// - every variable has exactly one branch, and every branch targets a
    ///   declared variable
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.variables.is_empty() {
            return Err(format!("{}: no variables", self.name));
        }

        let mut seen = HashSet::new();
        for variable in &self.variables {
            if !seen.insert(variable.symbol) {
                return Err(format!("{}: duplicate symbol '{}'", self.name, variable.symbol));
            }
            if variable.units.is_empty() {
                return Err(format!("{}: '{}' has no units", self.name, variable.symbol));
            }
            if !variable.units.contains(&variable.default_unit) {
                return Err(format!(
                    "{}: default unit '{}' of '{}' is not in its unit list",
                    self.name, variable.default_unit, variable.symbol
                ));
            }
            let branches = self.branches.iter().filter(|b| b.target == variable.symbol).count();
            if branches != 1 {
                return Err(format!(
                    "{}: '{}' has {} branches, expected 1",
                    self.name, variable.symbol, branches
                ));
            }
        }

        if let Some(orphan) = self.branches.iter().find(|b| self.variable(b.target).is_none()) {
            return Err(format!("{}: branch for undeclared '{}'", self.name, orphan.target));
        }
        Ok(())
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Formula {
        Formula::new("Weight (W = mg)", Category::Forces)
            .var("W", "Weight", &["N", "kN"], "N")
            .var("m", "Mass", &["kg", "g"], "kg")
            .var("g", "Gravity", &["m/s²"], "m/s²")
            .branch("W", |x| {
                let [m, g] = x.values(["m", "g"])?;
                Ok(m * g)
            })
            .branch("m", |x| {
                let [w, g] = x.values(["W", "g"])?;
                Ok(w / g)
            })
            .branch("g", |x| {
                let [w, m] = x.values(["W", "m"])?;
                Ok(w / m)
            })
    }

    #[test]
    fn test_builder_and_lookup() {
        let formula = sample();
        assert_eq!(formula.symbols().collect::<Vec<_>>(), vec!["W", "m", "g"]);
        assert_eq!(formula.variable("m").map(|v| v.default_unit), Some("kg"));
        assert!(formula.can_solve_for("g"));
        assert!(!formula.can_solve_for("x"));
        assert!(formula.check_invariants().is_ok());
    }

    #[test]
    fn test_names() {
        let formula = sample();
        assert_eq!(formula.short_name(), "Weight");
        assert_eq!(formula.equation(), Some("W = mg"));
        assert_eq!(formula.to_string(), "Weight (W = mg)");
    }

    #[test]
    fn test_invariants_catch_missing_branch() {
        let formula = Formula::new("Broken (a = b)", Category::Forces)
            .var("a", "A", &[""], "")
            .var("b", "B", &[""], "")
            .branch("a", |x| x.require("b"));
        let err = formula.check_invariants().unwrap_err();
        assert!(err.contains("'b' has 0 branches"));
    }

    #[test]
    fn test_invariants_catch_bad_default_unit() {
        let formula = Formula::new("Broken (a = 1)", Category::Forces)
            .var("a", "A", &["m"], "cm")
            .branch("a", |_| Ok(1.0));
        assert!(formula.check_invariants().is_err());
    }

    #[test]
    fn test_base_values_missing() {
        let values = BaseValues::from([("m", 2.0)]);
        let err = values.values(["m", "g"]).unwrap_err();
        assert_eq!(err.offending_symbol(), Some("g"));
    }

    #[test]
    fn test_category_serde_uses_display_name() {
        let json = serde_json::to_string(&Category::Oscillations).unwrap();
        assert_eq!(json, "\"SHM & Oscillations\"");
        let back: Category = serde_json::from_str("\"Work-Energy\"").unwrap();
        assert_eq!(back, Category::WorkEnergy);
        assert_eq!(Category::from_display_name("Nuclear Physics"), Some(Category::NuclearPhysics));
    }
}

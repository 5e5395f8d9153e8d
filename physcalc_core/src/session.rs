//! # Session State
//!
//! Favorites and calculation history. These belong to the presentation layer:
//! the catalog, dispatcher and pipeline never read them.
//!
//! - [`Favorites`] holds up to [`MAX_FAVORITES`] formula snapshots, unique by
//!   name, and is persisted by [`crate::store`].
//! - [`History`] holds the last [`MAX_HISTORY`] result lines, newest first, for
//!   the current session only.
//!
//! ## Example
//!
//! ```rust
//! use physcalc_core::formulas::find_by_name;
//! use physcalc_core::session::Favorites;
//!
//! let mut favorites = Favorites::new();
//! let ohm = find_by_name("Ohm's Law (V = IR)").unwrap();
//!
//! assert!(favorites.add(ohm).unwrap());
//! assert!(!favorites.add(ohm).unwrap()); // already present
//! assert!(favorites.contains(ohm.name));
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::calculation::FormattedResult;
use crate::errors::{CalcError, CalcResult};
use crate::formulas::{self, Category, Formula, Variable};

/// Maximum number of favorites
pub const MAX_FAVORITES: usize = 5;

/// Maximum number of history entries kept
pub const MAX_HISTORY: usize = 10;

// ============================================================================
// Favorites
// ============================================================================

/// Stored copy of a formula variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSnapshot {
    pub symbol: String,
    pub name: String,
    pub units: Vec<String>,
    #[serde(rename = "defaultUnit")]
    pub default_unit: String,
}

impl From<&Variable> for VariableSnapshot {
    fn from(variable: &Variable) -> Self {
        Self {
            symbol: variable.symbol.to_string(),
            name: variable.name.to_string(),
            units: variable.units.iter().map(|u| u.to_string()).collect(),
            default_unit: variable.default_unit.to_string(),
        }
    }
}

/// Structural snapshot of a favorited formula. Identity is the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub name: String,
    pub category: Category,
    pub variables: Vec<VariableSnapshot>,
}

impl Favorite {
    pub fn from_formula(formula: &Formula) -> Self {
        Self {
            name: formula.name.to_string(),
            category: formula.category,
            variables: formula.variables.iter().map(VariableSnapshot::from).collect(),
        }
    }

    /// The live catalog formula this favorite refers to, if it still exists
    pub fn resolve(&self) -> Option<&'static Formula> {
        formulas::find_by_name(&self.name)
    }
}

/// Ordered favorites list, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    entries: Vec<Favorite>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries. Entries past the cap are dropped with a
    /// warning, as are repeated names.
    pub fn from_entries(entries: Vec<Favorite>) -> Self {
        let mut favorites = Favorites::new();
        for entry in entries {
            if favorites.contains(&entry.name) {
                tracing::warn!(name = %entry.name, "dropping duplicate favorite");
            } else if favorites.is_full() {
                tracing::warn!(name = %entry.name, max = MAX_FAVORITES, "dropping favorite past the limit");
            } else {
                favorites.entries.push(entry);
            }
        }
        favorites
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|f| f.name == name)
    }

    /// Add a formula.
    ///
    /// Returns `Ok(true)` when added and `Ok(false)` when it was already a
    /// favorite.
    ///
    /// # Errors
    ///
    /// `FavoritesFull` when the list already holds [`MAX_FAVORITES`] entries.
    pub fn add(&mut self, formula: &Formula) -> CalcResult<bool> {
        if self.contains(formula.name) {
            return Ok(false);
        }
        if self.is_full() {
            return Err(CalcError::FavoritesFull { max: MAX_FAVORITES });
        }
        self.entries.push(Favorite::from_formula(formula));
        Ok(true)
    }

    /// Remove by name. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|f| f.name != name);
        self.entries.len() != before
    }

    /// Remove the formula if present, add it otherwise.
    ///
    /// Returns whether the formula is a favorite afterwards.
    pub fn toggle(&mut self, formula: &Formula) -> CalcResult<bool> {
        if self.remove(formula.name) {
            Ok(false)
        } else {
            self.add(formula)
        }
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_FAVORITES
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Favorite> {
        self.entries.iter()
    }

    /// Favorites that still resolve to catalog formulas, in list order
    pub fn formulas(&self) -> Vec<&'static Formula> {
        self.entries.iter().filter_map(Favorite::resolve).collect()
    }
}

// ============================================================================
// History
// ============================================================================

/// Recent results, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result as `"<short formula name>: <target> = <result>"` and
    /// return the new entry.
    pub fn record(&mut self, formula: &Formula, result: &FormattedResult) -> &str {
        let entry = format!("{}: {} = {}", formula.short_name(), result.target, result.display_value);
        self.entries.push_front(entry);
        self.entries.truncate(MAX_HISTORY);
        self.entries.front().map(String::as_str).unwrap_or_default()
    }

    /// Up to `n` most recent entries, newest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().take(n).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{compute, RawInput};
    use crate::formulas::list;

    #[test]
    fn test_favorites_cap() {
        let mut favorites = Favorites::new();
        for formula in &list()[..MAX_FAVORITES] {
            assert!(favorites.add(formula).unwrap());
        }
        assert!(favorites.is_full());
        let err = favorites.add(&list()[MAX_FAVORITES]).unwrap_err();
        assert_eq!(err, CalcError::FavoritesFull { max: 5 });
        assert_eq!(err.to_string(), "You can only have 5 favorites. Please remove one first.");
    }

    #[test]
    fn test_duplicate_add_when_full_is_not_an_error() {
        let mut favorites = Favorites::new();
        for formula in &list()[..MAX_FAVORITES] {
            favorites.add(formula).unwrap();
        }
        assert_eq!(favorites.add(&list()[0]), Ok(false));
        assert_eq!(favorites.len(), MAX_FAVORITES);
    }

    #[test]
    fn test_toggle() {
        let mut favorites = Favorites::new();
        let formula = &list()[7];
        assert_eq!(favorites.toggle(formula), Ok(true));
        assert_eq!(favorites.toggle(formula), Ok(false));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut favorites = Favorites::new();
        for formula in &list()[..3] {
            favorites.add(formula).unwrap();
        }
        assert!(favorites.remove(list()[1].name));
        assert!(!favorites.remove(list()[1].name));
        let names: Vec<_> = favorites.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec![list()[0].name, list()[2].name]);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let formula = formulas::find_by_name("Weight (W = mg)").unwrap();
        let json = serde_json::to_value(Favorite::from_formula(formula)).unwrap();
        assert_eq!(json["name"], "Weight (W = mg)");
        assert_eq!(json["category"], "Forces");
        assert_eq!(json["variables"][0]["defaultUnit"], "N");
        assert_eq!(json["variables"][1]["units"][1], "g");
    }

    #[test]
    fn test_resolve_and_stale_entries() {
        let mut stale = Favorite::from_formula(&list()[0]);
        stale.name = "Retired Formula (x = y)".to_string();
        let favorites = Favorites::from_entries(vec![Favorite::from_formula(&list()[0]), stale]);
        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites.formulas().len(), 1);
    }

    #[test]
    fn test_from_entries_truncates() {
        let entries: Vec<Favorite> = list()[..8].iter().map(Favorite::from_formula).collect();
        let favorites = Favorites::from_entries(entries);
        assert_eq!(favorites.len(), MAX_FAVORITES);
        assert_eq!(favorites.iter().last().map(|f| f.name.as_str()), Some(list()[4].name));
    }

    #[test]
    fn test_history_format_and_order() {
        let newton = formulas::find_by_name("Newton's Second Law (F = ma)").unwrap();
        let mut history = History::new();
        for mass in 1..=12 {
            let inputs = [
                RawInput::new("m", mass.to_string(), "kg"),
                RawInput::new("a", "3", "m/s²"),
            ];
            let result = compute(newton, "F", &inputs).unwrap();
            history.record(newton, &result);
        }
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.iter().next(), Some("Newton's Second Law: F = 36.000 N"));
        assert_eq!(history.iter().last(), Some("Newton's Second Law: F = 9.000 N"));
        assert_eq!(history.recent(5).count(), 5);
        history.clear();
        assert!(history.is_empty());
    }
}

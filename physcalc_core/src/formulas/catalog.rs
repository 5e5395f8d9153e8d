//! Static formula catalog and the queries run against it.

use once_cell::sync::Lazy;

use super::{circuits, electromagnetism, fields_radiation, mechanics, optics_modern, waves_thermo};
use super::{Category, Formula};

/// Every formula, in authored order. Built once on first access.
static CATALOG: Lazy<Vec<Formula>> = Lazy::new(|| {
    let mut all = mechanics::formulas();
    all.extend(waves_thermo::formulas());
    all.extend(electromagnetism::formulas());
    all.extend(optics_modern::formulas());
    all.extend(circuits::networks());
    all.extend(fields_radiation::radiation_and_interference());
    all.extend(circuits::ac_reactance());
    all.extend(fields_radiation::fields());
    all.extend(fields_radiation::atomic_and_acoustic());
    tracing::debug!(count = all.len(), "formula catalog loaded");
    all
});

/// All formulas in stable authored order.
pub fn list() -> &'static [Formula] {
    &CATALOG
}

/// Find a formula by its exact name.
pub fn find_by_name(name: &str) -> Option<&'static Formula> {
    CATALOG.iter().find(|f| f.name == name)
}

/// Formulas matching a predicate, in catalog order.
pub fn filter(predicate: impl Fn(&Formula) -> bool) -> Vec<&'static Formula> {
    CATALOG.iter().filter(|f| predicate(*f)).collect()
}

/// Case-insensitive substring search over formula name and category.
///
/// A query that is empty after trimming returns the whole catalog.
///
/// ```rust
/// use physcalc_core::formulas::search;
///
/// let hits = search("ohm");
/// assert!(hits.iter().any(|f| f.name == "Ohm's Law (V = IR)"));
/// assert_eq!(search("   ").len(), physcalc_core::formulas::list().len());
/// ```
pub fn search(query: &str) -> Vec<&'static Formula> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return CATALOG.iter().collect();
    }
    filter(|f| {
        f.name.to_lowercase().contains(&needle)
            || f.category.display_name().to_lowercase().contains(&needle)
    })
}

/// Group formulas by category.
///
/// Groups come in order of each category's first appearance in the input;
/// formulas keep their input order within a group.
pub fn group_by_category<'a, I>(formulas: I) -> Vec<(Category, Vec<&'a Formula>)>
where
    I: IntoIterator<Item = &'a Formula>,
{
    let mut groups: Vec<(Category, Vec<&'a Formula>)> = Vec::new();
    for formula in formulas {
        match groups.iter_mut().find(|(category, _)| *category == formula.category) {
            Some((_, members)) => members.push(formula),
            None => groups.push((formula.category, vec![formula])),
        }
    }
    groups
}

/// Render the catalog as a Markdown reference page.
pub fn reference_markdown() -> String {
    let mut output = String::with_capacity(48_000);

    output.push_str(
        r#"# PhysCalc Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

Every formula in the calculator, grouped by category. Each can be solved for
any of its variables. Inputs are converted to SI base units before solving and
results are converted back to the listed default unit.

## Conventions

| Quantity | Base unit |
|----------|-----------|
| Angles | radians (degrees accepted as input) |
| Percentages | fractions (50% is 0.5) |
| Temperature | kelvin (°C accepted where listed) |
| Energy | joules (eV, MeV accepted where listed) |

---

"#,
    );

    for (category, formulas) in group_by_category(list()) {
        output.push_str(&format!("## {}\n\n", category.display_name()));

        for formula in formulas {
            output.push_str(&format!("### {}\n\n", formula.short_name()));
            if let Some(equation) = formula.equation() {
                output.push_str(&format!("**Formula:** `{}`\n\n", equation));
            }

            output.push_str("| Symbol | Description | Units | Default |\n");
            output.push_str("|--------|-------------|-------|---------|\n");
            for variable in &formula.variables {
                let units = variable
                    .units
                    .iter()
                    .map(|u| if u.is_empty() { "(dimensionless)" } else { *u })
                    .collect::<Vec<_>>()
                    .join(", ");
                let default = if variable.default_unit.is_empty() {
                    "-"
                } else {
                    variable.default_unit
                };
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    variable.symbol, variable.name, units, default
                ));
            }
            output.push('\n');
        }
    }

    output.push_str(&format!(
        "---\n\n*{} formulas in {} categories.*\n",
        list().len(),
        Category::ALL.len()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitTable;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(list().len(), 94);
    }

    #[test]
    fn test_every_formula_satisfies_invariants() {
        for formula in list() {
            if let Err(violation) = formula.check_invariants() {
                panic!("{}", violation);
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names = HashSet::new();
        for formula in list() {
            assert!(names.insert(formula.name), "duplicate name: {}", formula.name);
        }
    }

    #[test]
    fn test_every_catalog_unit_is_registered() {
        let table = UnitTable::global();
        for formula in list() {
            for variable in &formula.variables {
                for unit in variable.units {
                    assert!(table.contains(unit), "{}: unknown unit '{}'", formula.name, unit);
                }
            }
        }
    }

    #[test]
    fn test_category_first_appearance_order() {
        let order: Vec<Category> = group_by_category(list()).into_iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_catalog_order_is_stable() {
        assert_eq!(list()[0].name, "First Equation of Motion (v = u + at)");
        assert_eq!(list()[39].name, "Ohm's Law (V = IR)");
        assert_eq!(list()[93].name, "Diffraction Grating (d sinθ = mλ)");
    }

    #[test]
    fn test_find_by_name() {
        let formula = find_by_name("Weight (W = mg)").unwrap();
        assert_eq!(formula.category, Category::Forces);
        assert!(find_by_name("weight (w = mg)").is_none());
    }

    #[test]
    fn test_search_by_category() {
        let hits = search("  KINEMATICS ");
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|f| f.category == Category::Kinematics));
    }

    #[test]
    fn test_search_no_match() {
        assert!(search("quaternion").is_empty());
    }

    #[test]
    fn test_group_preserves_order_within_category() {
        let groups = group_by_category(search("power"));
        let (category, members) = &groups[0];
        assert_eq!(*category, Category::WorkEnergy);
        assert_eq!(members[0].name, "Power (P = W/t)");
        assert_eq!(members[1].name, "Power (P = F·v)");
    }

    #[test]
    fn test_reference_markdown() {
        let markdown = reference_markdown();
        assert!(markdown.starts_with("# PhysCalc Formula Reference"));
        assert!(markdown.contains("## SHM & Oscillations"));
        assert!(markdown.contains("### Newton's Second Law"));
        assert!(markdown.contains("**Formula:** `F = ma`"));
        assert!(markdown.contains("*94 formulas in 15 categories.*"));
    }
}

//! Command-line argument parsing that needs the catalog: formula lookup and
//! `symbol=value[unit]` assignments.

use physcalc_core::calculation::RawInput;
use physcalc_core::formulas::{find_by_name, search, Formula};

use crate::CliError;

/// Resolve a formula by exact name, falling back to a search that must match
/// exactly one formula.
pub fn resolve_formula(query: &str) -> Result<&'static Formula, CliError> {
    if let Some(formula) = find_by_name(query) {
        return Ok(formula);
    }
    let hits = search(query);
    match hits.as_slice() {
        [formula] => Ok(*formula),
        [] => Err(CliError::NoMatch(query.to_string())),
        _ => {
            // An exact short name ("Power" is ambiguous, "Ohm's Law" is not)
            let lowered = query.trim().to_lowercase();
            let exact: Vec<&'static Formula> = hits
                .iter()
                .copied()
                .filter(|f| f.short_name().to_lowercase() == lowered)
                .collect();
            match exact.as_slice() {
                [formula] => Ok(*formula),
                _ => Err(CliError::Ambiguous {
                    query: query.to_string(),
                    names: hits.iter().map(|f| f.name.to_string()).collect(),
                }),
            }
        }
    }
}

/// Parse `symbol=value[unit]` for `formula`.
///
/// The unit is the longest of the variable's allowed units that ends the
/// value text; without one, the variable's default unit applies. `2eV`,
/// `1e15Hz` and `36km/h` all split as expected.
pub fn parse_assignment(formula: &Formula, arg: &str) -> Result<RawInput, CliError> {
    let (symbol, rest) = arg
        .split_once('=')
        .ok_or_else(|| CliError::BadAssignment(arg.to_string()))?;
    let symbol = symbol.trim();
    let rest = rest.trim();
    let variable = formula
        .variable(symbol)
        .ok_or_else(|| CliError::UnknownSymbol {
            formula: formula.name.to_string(),
            symbol: symbol.to_string(),
            known: formula.symbols().collect::<Vec<_>>().join(", "),
        })?;

    let unit = variable
        .units
        .iter()
        .filter(|unit| !unit.is_empty() && rest.len() > unit.len() && rest.ends_with(*unit))
        .max_by_key(|unit| unit.len());

    Ok(match unit {
        Some(unit) => RawInput::new(symbol, rest[..rest.len() - unit.len()].trim(), *unit),
        None => RawInput::new(symbol, rest, variable.default_unit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_and_partial() {
        assert_eq!(resolve_formula("Weight (W = mg)").unwrap().name, "Weight (W = mg)");
        assert_eq!(resolve_formula("ohm's law").unwrap().name, "Ohm's Law (V = IR)");
        assert_eq!(resolve_formula("Kinetic").unwrap().name, "Kinetic Energy (KE = ½mv²)");
    }

    #[test]
    fn test_resolve_ambiguous_and_missing() {
        assert!(matches!(resolve_formula("Power (P"), Err(CliError::Ambiguous { .. })));
        assert!(matches!(resolve_formula("warp drive"), Err(CliError::NoMatch(_))));
    }

    #[test]
    fn test_assignment_units() {
        let formula = resolve_formula("Kinetic Energy (KE = ½mv²)").unwrap();

        let input = parse_assignment(formula, "v=36km/h").unwrap();
        assert_eq!((input.value.as_str(), input.unit.as_str()), ("36", "km/h"));

        let input = parse_assignment(formula, "KE=2eV").unwrap();
        assert_eq!((input.value.as_str(), input.unit.as_str()), ("2", "eV"));

        let input = parse_assignment(formula, "m = 500 g").unwrap();
        assert_eq!((input.value.as_str(), input.unit.as_str()), ("500", "g"));

        let input = parse_assignment(formula, "m=2").unwrap();
        assert_eq!((input.value.as_str(), input.unit.as_str()), ("2", "kg"));
    }

    #[test]
    fn test_assignment_scientific_value() {
        let formula = resolve_formula("Planck's Energy (E = hf)").unwrap();
        let input = parse_assignment(formula, "f=1e15Hz").unwrap();
        assert_eq!((input.value.as_str(), input.unit.as_str()), ("1e15", "Hz"));
        let input = parse_assignment(formula, "f=2THz").unwrap();
        assert_eq!((input.value.as_str(), input.unit.as_str()), ("2", "THz"));
    }

    #[test]
    fn test_assignment_errors() {
        let formula = resolve_formula("Weight (W = mg)").unwrap();
        assert!(matches!(parse_assignment(formula, "m10"), Err(CliError::BadAssignment(_))));
        assert!(matches!(parse_assignment(formula, "q=1C"), Err(CliError::UnknownSymbol { .. })));
    }
}

use physcalc_core::format::{format_scientific, SCIENTIFIC_LOWER, SCIENTIFIC_UPPER};
use physcalc_core::units::{from_base, to_base, UnitTable};
use proptest::prelude::*;

fn linear_units() -> Vec<&'static str> {
    let table = UnitTable::global();
    table
        .units()
        .into_iter()
        .filter(|unit| table.lookup(unit).is_some_and(|c| !c.is_affine()))
        .collect()
}

proptest! {
    #[test]
    fn linear_conversions_invert(value in -1e12_f64..1e12_f64, index in 0usize..1000) {
        let units = linear_units();
        let unit = units[index % units.len()];
        let back = from_base(to_base(value, unit), unit);
        prop_assert!((back - value).abs() <= 1e-9 * value.abs(), "{} {}: {}", value, unit, back);
    }

    #[test]
    fn celsius_is_an_exact_offset(value in -500.0_f64..5000.0_f64) {
        prop_assert_eq!(to_base(value, "°C"), value + 273.15);
        prop_assert_eq!(from_base(value, "°C"), value - 273.15);
    }

    #[test]
    fn formatted_results_carry_their_unit(value in prop::num::f64::NORMAL) {
        let formatted = format_scientific(value, "m");
        prop_assert!(formatted.ends_with(" m"));
        prop_assert!(!formatted.contains("Error"));

        let magnitude = value.abs();
        let scientific = !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude);
        prop_assert_eq!(formatted.contains(" × 10"), scientific, "{}", formatted);
    }
}

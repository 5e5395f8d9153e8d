use physcalc_core::calculation::{calculate, compute, CalculationInput, RawInput};
use physcalc_core::formulas::find_by_name;
use physcalc_core::session::{Favorites, History};
use physcalc_core::units::{from_base, to_base};
use physcalc_core::CalcError;

fn run(formula: &str, target: &str, inputs: &[(&str, &str, &str)]) -> Result<String, CalcError> {
    let input = CalculationInput {
        formula: formula.to_string(),
        target: target.to_string(),
        inputs: inputs
            .iter()
            .map(|(symbol, value, unit)| RawInput::new(*symbol, *value, *unit))
            .collect(),
    };
    calculate(&input).map(|result| result.display_value)
}

#[test]
fn newton_second_law_end_to_end() {
    let display = run("Newton's Second Law (F = ma)", "F", &[("m", "2", "kg"), ("a", "3", "m/s²")]);
    assert_eq!(display.unwrap(), "6.000 N");
}

#[test]
fn ideal_gas_with_litres_and_celsius() {
    let display = run(
        "Ideal Gas Law (PV = nRT)",
        "P",
        &[("V", "22.4", "L"), ("n", "1", "mol"), ("T", "0", "°C")],
    );
    assert_eq!(display.unwrap(), "101382.5 Pa");
}

#[test]
fn projectile_range_in_degrees() {
    let display = run(
        "Projectile Range (R = u²sin2θ/g)",
        "R",
        &[("u", "20", "m/s"), ("θ", "45", "°"), ("g", "9.8", "m/s²")],
    );
    assert_eq!(display.unwrap(), "40.816 m");
}

#[test]
fn angle_results_display_in_degrees() {
    let display = run("Critical Angle (sinθc = n₂/n₁)", "θc", &[("n1", "1.5", ""), ("n2", "1", "")]);
    assert_eq!(display.unwrap(), "41.810 °");
}

#[test]
fn efficiencies_display_as_percent() {
    let efficiency = run("Efficiency (η = W/Qh)", "η", &[("W", "30", "J"), ("Qh", "120", "J")]);
    assert_eq!(efficiency.unwrap(), "25.000 %");

    let carnot = run("Carnot Efficiency (η = 1 - Tc/Th)", "η", &[("Th", "500", "K"), ("Tc", "300", "K")]);
    assert_eq!(carnot.unwrap(), "40.000 %");
}

#[test]
fn photoelectric_in_electron_volts() {
    let display = run(
        "Photoelectric Effect (KEmax = hf - φ)",
        "KEmax",
        &[("f", "1e15", "Hz"), ("φ", "2", "eV")],
    );
    assert_eq!(display.unwrap(), "2.136 eV");
}

#[test]
fn coulomb_with_microcoulombs() {
    let display = run(
        "Coulomb's Law (F = kq₁q₂/r²)",
        "F",
        &[("q1", "2", "μC"), ("q2", "3", "μC"), ("r", "5", "cm")],
    );
    assert_eq!(display.unwrap(), "21.576 N");
}

#[test]
fn orbital_velocity_in_kilometres() {
    let display = run(
        "Orbital Velocity (v = √(GM/r))",
        "v",
        &[("M", "5.972e24", "kg"), ("r", "6771", "km")],
    );
    assert_eq!(display.unwrap(), "7672.3 m/s");
}

#[test]
fn negative_discriminant_is_domain_error() {
    let err = run(
        "Second Equation of Motion (s = ut + ½at²)",
        "t",
        &[("s", "10", "m"), ("u", "1", "m/s"), ("a", "-1", "m/s²")],
    )
    .unwrap_err();
    assert_eq!(err.error_code(), "DOMAIN_ERROR");
    assert!(err.to_string().contains("No real solution"));
}

#[test]
fn impossible_projectile_range() {
    let err = run(
        "Projectile Range (R = u²sin2θ/g)",
        "θ",
        &[("R", "1000", "m"), ("u", "10", "m/s"), ("g", "9.8", "m/s²")],
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("Impossible range"));
}

#[test]
fn missing_and_bad_inputs_name_the_variable() {
    let missing = run("Weight (W = mg)", "W", &[("m", "10", "kg")]).unwrap_err();
    assert_eq!(missing.offending_symbol(), Some("g"));

    let blank = run("Weight (W = mg)", "W", &[("m", "10", "kg"), ("g", "  ", "m/s²")]).unwrap_err();
    assert_eq!(blank.offending_symbol(), Some("g"));

    let garbage = run("Weight (W = mg)", "W", &[("m", "ten", "kg"), ("g", "9.8", "m/s²")]).unwrap_err();
    assert_eq!(garbage.error_code(), "INPUT_ERROR");
    assert_eq!(garbage.offending_symbol(), Some("m"));
}

#[test]
fn unknown_unit_fallback_and_strict_pipeline() {
    assert_eq!(to_base(12.0, "parsecs"), 12.0);
    assert_eq!(from_base(12.0, "parsecs"), 12.0);

    let err = run("Weight (W = mg)", "W", &[("m", "10", "stone"), ("g", "9.8", "m/s²")]).unwrap_err();
    assert_eq!(err.error_code(), "CONVERSION_ERROR");
}

#[test]
fn undeclared_target_is_unknown_variable() {
    let formula = find_by_name("Weight (W = mg)").unwrap();
    let err = compute(formula, "h", &[]).unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_VARIABLE");
}

#[test]
fn session_flow() {
    let ohm = find_by_name("Ohm's Law (V = IR)").unwrap();
    let mut favorites = Favorites::new();
    let mut history = History::new();

    assert!(favorites.toggle(ohm).unwrap());
    let result = compute(ohm, "V", &[RawInput::new("I", "2", "A"), RawInput::new("R", "5", "Ω")]).unwrap();
    let entry = history.record(ohm, &result).to_string();

    assert_eq!(entry, "Ohm's Law: V = 10.000 V");
    let names: Vec<_> = favorites.formulas().iter().map(|f| f.name).collect();
    assert_eq!(names, vec![ohm.name]);
}

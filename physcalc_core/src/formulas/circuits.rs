//! Resistor and capacitor networks, bridges, transformers and AC reactance.

use std::f64::consts::PI;

use super::{Category, Formula};
use crate::solver::{real_sqrt, NO_REAL_SOLUTION};

/// Two-element series and parallel combinations, Wheatstone bridge, AC
/// impedance and the ideal transformer.
pub(super) fn networks() -> Vec<Formula> {
    vec![
        Formula::new("Net Resistance in Series (R_total = R₁ + R₂ + ...)", Category::Electricity)
            .var("R_total", "Total resistance", &["Ω"], "Ω")
            .var("R1", "Resistance 1", &["Ω"], "Ω")
            .var("R2", "Resistance 2", &["Ω"], "Ω")
            .branch("R_total", |x| x.values(["R1", "R2"]).map(|[r1, r2]| r1 + r2))
            .branch("R1", |x| x.values(["R_total", "R2"]).map(|[total, r2]| total - r2))
            .branch("R2", |x| x.values(["R_total", "R1"]).map(|[total, r1]| total - r1)),
        Formula::new(
            "Net Resistance in Parallel (1/R_total = 1/R₁ + 1/R₂ + ...)",
            Category::Electricity,
        )
        .var("R_total", "Total resistance", &["Ω"], "Ω")
        .var("R1", "Resistance 1", &["Ω"], "Ω")
        .var("R2", "Resistance 2", &["Ω"], "Ω")
        .branch("R_total", |x| x.values(["R1", "R2"]).map(|[r1, r2]| reciprocal_sum(r1, r2)))
        .branch("R1", |x| x.values(["R_total", "R2"]).map(|[total, r2]| reciprocal_diff(total, r2)))
        .branch("R2", |x| x.values(["R_total", "R1"]).map(|[total, r1]| reciprocal_diff(total, r1))),
        Formula::new("Net Capacitance in Parallel (C_total = C₁ + C₂ + ...)", Category::Electricity)
            .var("C_total", "Total capacitance", &["F"], "F")
            .var("C1", "Capacitance 1", &["F"], "F")
            .var("C2", "Capacitance 2", &["F"], "F")
            .branch("C_total", |x| x.values(["C1", "C2"]).map(|[c1, c2]| c1 + c2))
            .branch("C1", |x| x.values(["C_total", "C2"]).map(|[total, c2]| total - c2))
            .branch("C2", |x| x.values(["C_total", "C1"]).map(|[total, c1]| total - c1)),
        Formula::new(
            "Net Capacitance in Series (1/C_total = 1/C₁ + 1/C₂ + ...)",
            Category::Electricity,
        )
        .var("C_total", "Total capacitance", &["F"], "F")
        .var("C1", "Capacitance 1", &["F"], "F")
        .var("C2", "Capacitance 2", &["F"], "F")
        .branch("C_total", |x| x.values(["C1", "C2"]).map(|[c1, c2]| reciprocal_sum(c1, c2)))
        .branch("C1", |x| x.values(["C_total", "C2"]).map(|[total, c2]| reciprocal_diff(total, c2)))
        .branch("C2", |x| x.values(["C_total", "C1"]).map(|[total, c1]| reciprocal_diff(total, c1))),
        Formula::new("Drift Velocity (vd = I / (nqA))", Category::Electricity)
            .var("vd", "Drift velocity", &["m/s"], "m/s")
            .var("I", "Current", &["A"], "A")
            .var("n", "Number density", &["m⁻³"], "m⁻³")
            .var("q", "Charge of electron", &["C"], "C")
            .var("A", "Area", &["m²"], "m²")
            .branch("vd", |x| x.values(["I", "n", "q", "A"]).map(|[i, n, q, a]| i / (n * q * a)))
            .branch("I", |x| x.values(["vd", "n", "q", "A"]).map(|[vd, n, q, a]| vd * n * q * a))
            .branch("n", |x| x.values(["I", "vd", "q", "A"]).map(|[i, vd, q, a]| i / (vd * q * a)))
            .branch("q", |x| x.values(["I", "vd", "n", "A"]).map(|[i, vd, n, a]| i / (vd * n * a)))
            .branch("A", |x| x.values(["I", "vd", "n", "q"]).map(|[i, vd, n, q]| i / (vd * n * q))),
        Formula::new("Wheatstone Bridge Condition (R₁/R₂ = R₃/R₄)", Category::Electricity)
            .var("R1", "Resistance 1", &["Ω"], "Ω")
            .var("R2", "Resistance 2", &["Ω"], "Ω")
            .var("R3", "Resistance 3", &["Ω"], "Ω")
            .var("R4", "Resistance 4", &["Ω"], "Ω")
            .branch("R1", |x| x.values(["R2", "R3", "R4"]).map(|[r2, r3, r4]| r3 * r2 / r4))
            .branch("R2", |x| x.values(["R1", "R3", "R4"]).map(|[r1, r3, r4]| r4 * r1 / r3))
            .branch("R3", |x| x.values(["R1", "R2", "R4"]).map(|[r1, r2, r4]| r1 * r4 / r2))
            .branch("R4", |x| x.values(["R1", "R2", "R3"]).map(|[r1, r2, r3]| r2 * r3 / r1)),
        // The XL and XC branches assume the circuit is inductive (XL > XC).
        Formula::new("AC Circuit Impedance (Z = √(R² + (XL - XC)²))", Category::Electricity)
            .var("Z", "Impedance", &["Ω"], "Ω")
            .var("R", "Resistance", &["Ω"], "Ω")
            .var("XL", "Inductive reactance", &["Ω"], "Ω")
            .var("XC", "Capacitive reactance", &["Ω"], "Ω")
            .branch("Z", |x| x.values(["R", "XL", "XC"]).map(|[r, xl, xc]| r.hypot(xl - xc)))
            .branch("R", |x| {
                let [z, xl, xc] = x.values(["Z", "XL", "XC"])?;
                real_sqrt(z * z - (xl - xc).powi(2), NO_REAL_SOLUTION)
            })
            .branch("XL", |x| {
                let [z, r, xc] = x.values(["Z", "R", "XC"])?;
                Ok(xc + real_sqrt(z * z - r * r, NO_REAL_SOLUTION)?)
            })
            .branch("XC", |x| {
                let [z, r, xl] = x.values(["Z", "R", "XL"])?;
                Ok(xl - real_sqrt(z * z - r * r, NO_REAL_SOLUTION)?)
            }),
        Formula::new("Transformer Equation (Vp/Vs = Np/Ns)", Category::Electricity)
            .var("Vp", "Primary voltage", &["V"], "V")
            .var("Vs", "Secondary voltage", &["V"], "V")
            .var("Np", "Primary turns", &[""], "")
            .var("Ns", "Secondary turns", &[""], "")
            .branch("Vp", |x| x.values(["Vs", "Np", "Ns"]).map(|[vs, np, ns]| vs * np / ns))
            .branch("Vs", |x| x.values(["Vp", "Np", "Ns"]).map(|[vp, np, ns]| vp * ns / np))
            .branch("Np", |x| x.values(["Vp", "Vs", "Ns"]).map(|[vp, vs, ns]| vp * ns / vs))
            .branch("Ns", |x| x.values(["Vp", "Vs", "Np"]).map(|[vp, vs, np]| vs * np / vp)),
    ]
}

/// LC resonance and the two reactances.
pub(super) fn ac_reactance() -> Vec<Formula> {
    vec![
        Formula::new("AC Resonance Frequency (f₀ = 1 / (2π√(LC)))", Category::Electricity)
            .var("f0", "Resonance frequency", &["Hz"], "Hz")
            .var("L", "Inductance", &["H"], "H")
            .var("C", "Capacitance", &["F"], "F")
            .branch("f0", |x| {
                let [l, c] = x.values(["L", "C"])?;
                Ok(1.0 / (2.0 * PI * real_sqrt(l * c, NO_REAL_SOLUTION)?))
            })
            .branch("L", |x| x.values(["f0", "C"]).map(|[f0, c]| 1.0 / ((2.0 * PI * f0).powi(2) * c)))
            .branch("C", |x| x.values(["f0", "L"]).map(|[f0, l]| 1.0 / ((2.0 * PI * f0).powi(2) * l))),
        Formula::new("Inductive Reactance (XL = 2πfL)", Category::Electricity)
            .var("XL", "Inductive reactance", &["Ω"], "Ω")
            .var("f", "Frequency", &["Hz"], "Hz")
            .var("L", "Inductance", &["H"], "H")
            .branch("XL", |x| x.values(["f", "L"]).map(|[f, l]| 2.0 * PI * f * l))
            .branch("f", |x| x.values(["XL", "L"]).map(|[xl, l]| xl / (2.0 * PI * l)))
            .branch("L", |x| x.values(["XL", "f"]).map(|[xl, f]| xl / (2.0 * PI * f))),
        Formula::new("Capacitive Reactance (XC = 1 / (2πfC))", Category::Electricity)
            .var("XC", "Capacitive reactance", &["Ω"], "Ω")
            .var("f", "Frequency", &["Hz"], "Hz")
            .var("C", "Capacitance", &["F"], "F")
            .branch("XC", |x| x.values(["f", "C"]).map(|[f, c]| 1.0 / (2.0 * PI * f * c)))
            .branch("f", |x| x.values(["XC", "C"]).map(|[xc, c]| 1.0 / (2.0 * PI * xc * c)))
            .branch("C", |x| x.values(["XC", "f"]).map(|[xc, f]| 1.0 / (2.0 * PI * f * xc))),
    ]
}

fn reciprocal_sum(a: f64, b: f64) -> f64 {
    1.0 / (1.0 / a + 1.0 / b)
}

/// Solve 1/total = 1/known + 1/x for x.
fn reciprocal_diff(total: f64, known: f64) -> f64 {
    1.0 / (1.0 / total - 1.0 / known)
}

//! Waves and thermodynamics.
//!
//! Efficiencies compute as fractions; the `%` unit scales them for display.

use super::{Category, Formula};
use crate::constants::R_GAS;
use crate::solver::{real_sqrt, NO_REAL_SOLUTION};

pub(super) fn formulas() -> Vec<Formula> {
    let mut all = waves();
    all.extend(thermodynamics());
    all
}

fn waves() -> Vec<Formula> {
    vec![
        Formula::new("Wave Equation (v = fλ)", Category::Waves)
            .var("v", "Wave speed", &["m/s"], "m/s")
            .var("f", "Frequency", &["Hz", "kHz", "MHz"], "Hz")
            .var("λ", "Wavelength", &["m", "cm", "mm"], "m")
            .branch("v", |x| x.values(["f", "λ"]).map(|[f, lambda]| f * lambda))
            .branch("f", |x| x.values(["v", "λ"]).map(|[v, lambda]| v / lambda))
            .branch("λ", |x| x.values(["v", "f"]).map(|[v, f]| v / f)),
        Formula::new("Wave on String (v = √(T/μ))", Category::Waves)
            .var("v", "Wave speed", &["m/s"], "m/s")
            .var("T", "Tension", &["N"], "N")
            .var("μ", "Linear mass density", &["kg/m"], "kg/m")
            .branch("v", |x| {
                let [t, mu] = x.values(["T", "μ"])?;
                real_sqrt(t / mu, NO_REAL_SOLUTION)
            })
            .branch("T", |x| x.values(["v", "μ"]).map(|[v, mu]| v * v * mu))
            .branch("μ", |x| x.values(["v", "T"]).map(|[v, t]| t / (v * v))),
        // Observer moving toward the source and source moving toward the
        // observer are both positive.
        Formula::new("Doppler Effect (f' = f(v±vo)/(v±vs))", Category::Waves)
            .var("f_prime", "Observed frequency", &["Hz"], "Hz")
            .var("f", "Source frequency", &["Hz"], "Hz")
            .var("v", "Wave speed", &["m/s"], "m/s")
            .var("vo", "Observer velocity", &["m/s"], "m/s")
            .var("vs", "Source velocity", &["m/s"], "m/s")
            .branch("f_prime", |x| {
                x.values(["f", "v", "vo", "vs"]).map(|[f, v, vo, vs]| f * (v + vo) / (v - vs))
            })
            .branch("f", |x| {
                x.values(["f_prime", "v", "vo", "vs"])
                    .map(|[fp, v, vo, vs]| fp * (v - vs) / (v + vo))
            })
            .branch("v", |x| {
                x.values(["f_prime", "f", "vo", "vs"])
                    .map(|[fp, f, vo, vs]| (fp * vs + f * vo) / (fp - f))
            })
            .branch("vo", |x| {
                x.values(["f_prime", "f", "v", "vs"])
                    .map(|[fp, f, v, vs]| fp / f * (v - vs) - v)
            })
            .branch("vs", |x| {
                x.values(["f_prime", "f", "v", "vo"])
                    .map(|[fp, f, v, vo]| v - f * (v + vo) / fp)
            }),
    ]
}

fn thermodynamics() -> Vec<Formula> {
    vec![
        Formula::new("Ideal Gas Law (PV = nRT)", Category::Thermodynamics)
            .var("P", "Pressure", &["Pa", "atm", "bar", "mmHg"], "Pa")
            .var("V", "Volume", &["m³", "L"], "m³")
            .var("n", "Amount of gas", &["mol"], "mol")
            .var("T", "Temperature", &["K", "°C"], "K")
            .branch("P", |x| x.values(["V", "n", "T"]).map(|[v, n, t]| n * R_GAS * t / v))
            .branch("V", |x| x.values(["P", "n", "T"]).map(|[p, n, t]| n * R_GAS * t / p))
            .branch("n", |x| x.values(["P", "V", "T"]).map(|[p, v, t]| p * v / (R_GAS * t)))
            .branch("T", |x| x.values(["P", "V", "n"]).map(|[p, v, n]| p * v / (n * R_GAS))),
        // ΔT is an interval, so the affine °C conversion does not apply.
        Formula::new("Heat Capacity (Q = mcΔT)", Category::Thermodynamics)
            .var("Q", "Heat", &["J", "cal", "kJ"], "J")
            .var("m", "Mass", &["kg", "g"], "kg")
            .var("c", "Specific heat", &["J/kg⋅K"], "J/kg⋅K")
            .var("ΔT", "Temperature change", &["K"], "K")
            .branch("Q", |x| x.values(["m", "c", "ΔT"]).map(|[m, c, dt]| m * c * dt))
            .branch("m", |x| x.values(["Q", "c", "ΔT"]).map(|[q, c, dt]| q / (c * dt)))
            .branch("c", |x| x.values(["Q", "m", "ΔT"]).map(|[q, m, dt]| q / (m * dt)))
            .branch("ΔT", |x| x.values(["Q", "m", "c"]).map(|[q, m, c]| q / (m * c))),
        Formula::new("First Law of Thermodynamics (ΔU = Q - W)", Category::Thermodynamics)
            .var("ΔU", "Change in internal energy", &["J"], "J")
            .var("Q", "Heat added", &["J"], "J")
            .var("W", "Work done by system", &["J"], "J")
            .branch("ΔU", |x| x.values(["Q", "W"]).map(|[q, w]| q - w))
            .branch("Q", |x| x.values(["ΔU", "W"]).map(|[du, w]| du + w))
            .branch("W", |x| x.values(["Q", "ΔU"]).map(|[q, du]| q - du)),
        Formula::new("Efficiency (η = W/Qh)", Category::Thermodynamics)
            .var("η", "Efficiency", &["%", ""], "%")
            .var("W", "Work output", &["J"], "J")
            .var("Qh", "Heat input", &["J"], "J")
            .branch("η", |x| x.values(["W", "Qh"]).map(|[w, qh]| w / qh))
            .branch("W", |x| x.values(["η", "Qh"]).map(|[eta, qh]| eta * qh))
            .branch("Qh", |x| x.values(["W", "η"]).map(|[w, eta]| w / eta)),
        Formula::new("Carnot Efficiency (η = 1 - Tc/Th)", Category::Thermodynamics)
            .var("η", "Carnot efficiency", &["%"], "%")
            .var("Th", "Hot reservoir temp", &["K"], "K")
            .var("Tc", "Cold reservoir temp", &["K"], "K")
            .branch("η", |x| x.values(["Th", "Tc"]).map(|[th, tc]| 1.0 - tc / th))
            .branch("Th", |x| x.values(["η", "Tc"]).map(|[eta, tc]| tc / (1.0 - eta)))
            .branch("Tc", |x| x.values(["η", "Th"]).map(|[eta, th]| th * (1.0 - eta))),
    ]
}

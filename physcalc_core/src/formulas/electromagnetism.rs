//! Electrostatics, DC power and magnetic force.

use super::{Category, Formula};
use crate::constants::COULOMB_K;
use crate::solver::{real_sqrt, NO_REAL_SOLUTION};

pub(super) fn formulas() -> Vec<Formula> {
    let mut all = electricity();
    all.extend(magnetism());
    all
}

fn electricity() -> Vec<Formula> {
    vec![
        Formula::new("Ohm's Law (V = IR)", Category::Electricity)
            .var("V", "Voltage", &["V", "mV", "kV"], "V")
            .var("I", "Current", &["A", "mA", "μA"], "A")
            .var("R", "Resistance", &["Ω", "kΩ", "MΩ"], "Ω")
            .branch("V", |x| x.values(["I", "R"]).map(|[i, r]| i * r))
            .branch("I", |x| x.values(["V", "R"]).map(|[v, r]| v / r))
            .branch("R", |x| x.values(["V", "I"]).map(|[v, i]| v / i)),
        Formula::new("Electric Power (P = VI)", Category::Electricity)
            .var("P", "Power", &["W", "kW", "MW"], "W")
            .var("V", "Voltage", &["V"], "V")
            .var("I", "Current", &["A"], "A")
            .branch("P", |x| x.values(["V", "I"]).map(|[v, i]| v * i))
            .branch("V", |x| x.values(["P", "I"]).map(|[p, i]| p / i))
            .branch("I", |x| x.values(["P", "V"]).map(|[p, v]| p / v)),
        Formula::new("Electric Power (P = I²R)", Category::Electricity)
            .var("P", "Power", &["W", "kW"], "W")
            .var("I", "Current", &["A", "mA"], "A")
            .var("R", "Resistance", &["Ω", "kΩ"], "Ω")
            .branch("P", |x| x.values(["I", "R"]).map(|[i, r]| i * i * r))
            .branch("I", |x| {
                let [p, r] = x.values(["P", "R"])?;
                real_sqrt(p / r, NO_REAL_SOLUTION)
            })
            .branch("R", |x| x.values(["P", "I"]).map(|[p, i]| p / (i * i))),
        Formula::new("Electric Power (P = V²/R)", Category::Electricity)
            .var("P", "Power", &["W", "kW"], "W")
            .var("V", "Voltage", &["V"], "V")
            .var("R", "Resistance", &["Ω", "kΩ"], "Ω")
            .branch("P", |x| x.values(["V", "R"]).map(|[v, r]| v * v / r))
            .branch("V", |x| {
                let [p, r] = x.values(["P", "R"])?;
                real_sqrt(p * r, NO_REAL_SOLUTION)
            })
            .branch("R", |x| x.values(["P", "V"]).map(|[p, v]| v * v / p)),
        Formula::new("Resistivity (R = ρL/A)", Category::Electricity)
            .var("R", "Resistance", &["Ω"], "Ω")
            .var("ρ", "Resistivity", &["Ω⋅m"], "Ω⋅m")
            .var("L", "Length", &["m", "cm"], "m")
            .var("A", "Cross-sectional area", &["m²", "cm²"], "m²")
            .branch("R", |x| x.values(["ρ", "L", "A"]).map(|[rho, l, a]| rho * l / a))
            .branch("ρ", |x| x.values(["R", "L", "A"]).map(|[r, l, a]| r * a / l))
            .branch("L", |x| x.values(["R", "ρ", "A"]).map(|[r, rho, a]| r * a / rho))
            .branch("A", |x| x.values(["R", "ρ", "L"]).map(|[r, rho, l]| rho * l / r)),
        Formula::new("Coulomb's Law (F = kq₁q₂/r²)", Category::Electricity)
            .var("F", "Electric force", &["N"], "N")
            .var("q1", "Charge 1", &["C", "μC", "nC"], "C")
            .var("q2", "Charge 2", &["C", "μC", "nC"], "C")
            .var("r", "Distance", &["m", "cm"], "m")
            .branch("F", |x| {
                x.values(["q1", "q2", "r"]).map(|[q1, q2, r]| COULOMB_K * q1 * q2 / (r * r))
            })
            .branch("q1", |x| {
                x.values(["F", "q2", "r"]).map(|[f, q2, r]| f * r * r / (COULOMB_K * q2))
            })
            .branch("q2", |x| {
                x.values(["F", "q1", "r"]).map(|[f, q1, r]| f * r * r / (COULOMB_K * q1))
            })
            .branch("r", |x| {
                let [f, q1, q2] = x.values(["F", "q1", "q2"])?;
                real_sqrt(COULOMB_K * q1 * q2 / f, NO_REAL_SOLUTION)
            }),
        Formula::new("Electric Field (E = F/q)", Category::Electricity)
            .var("E", "Electric field", &["N/C", "V/m"], "N/C")
            .var("F", "Force", &["N"], "N")
            .var("q", "Test charge", &["C", "μC"], "C")
            .branch("E", |x| x.values(["F", "q"]).map(|[f, q]| f / q))
            .branch("F", |x| x.values(["E", "q"]).map(|[e, q]| e * q))
            .branch("q", |x| x.values(["F", "E"]).map(|[f, e]| f / e)),
        Formula::new("Electric Potential (V = W/q)", Category::Electricity)
            .var("V", "Electric potential", &["V"], "V")
            .var("W", "Work done", &["J"], "J")
            .var("q", "Charge", &["C"], "C")
            .branch("V", |x| x.values(["W", "q"]).map(|[w, q]| w / q))
            .branch("W", |x| x.values(["V", "q"]).map(|[v, q]| v * q))
            .branch("q", |x| x.values(["W", "V"]).map(|[w, v]| w / v)),
        Formula::new("Capacitance (C = Q/V)", Category::Electricity)
            .var("C", "Capacitance", &["F", "μF", "nF", "pF"], "F")
            .var("Q", "Charge", &["C", "μC"], "C")
            .var("V", "Voltage", &["V"], "V")
            .branch("C", |x| x.values(["Q", "V"]).map(|[q, v]| q / v))
            .branch("Q", |x| x.values(["C", "V"]).map(|[c, v]| c * v))
            .branch("V", |x| x.values(["Q", "C"]).map(|[q, c]| q / c)),
        Formula::new("Energy in Capacitor (U = ½CV²)", Category::Electricity)
            .var("U", "Energy stored", &["J"], "J")
            .var("C", "Capacitance", &["F", "μF"], "F")
            .var("V", "Voltage", &["V"], "V")
            .branch("U", |x| x.values(["C", "V"]).map(|[c, v]| 0.5 * c * v * v))
            .branch("C", |x| x.values(["U", "V"]).map(|[u, v]| 2.0 * u / (v * v)))
            .branch("V", |x| {
                let [u, c] = x.values(["U", "C"])?;
                real_sqrt(2.0 * u / c, NO_REAL_SOLUTION)
            }),
    ]
}

fn magnetism() -> Vec<Formula> {
    vec![
        Formula::new("Magnetic Force (F = BIL)", Category::Magnetism)
            .var("F", "Magnetic force", &["N"], "N")
            .var("B", "Magnetic field", &["T", "mT"], "T")
            .var("I", "Current", &["A"], "A")
            .var("L", "Length", &["m", "cm"], "m")
            .branch("F", |x| x.values(["B", "I", "L"]).map(|[b, i, l]| b * i * l))
            .branch("B", |x| x.values(["F", "I", "L"]).map(|[f, i, l]| f / (i * l)))
            .branch("I", |x| x.values(["F", "B", "L"]).map(|[f, b, l]| f / (b * l)))
            .branch("L", |x| x.values(["F", "B", "I"]).map(|[f, b, i]| f / (b * i))),
        Formula::new("Lorentz Force (F = qvB)", Category::Magnetism)
            .var("F", "Magnetic force", &["N"], "N")
            .var("q", "Charge", &["C"], "C")
            .var("v", "Velocity", &["m/s"], "m/s")
            .var("B", "Magnetic field", &["T"], "T")
            .branch("F", |x| x.values(["q", "v", "B"]).map(|[q, v, b]| q * v * b))
            .branch("q", |x| x.values(["F", "v", "B"]).map(|[f, v, b]| f / (v * b)))
            .branch("v", |x| x.values(["F", "q", "B"]).map(|[f, q, b]| f / (q * b)))
            .branch("B", |x| x.values(["F", "q", "v"]).map(|[f, q, v]| f / (q * v))),
        Formula::new("EMF (ε = BLv)", Category::Magnetism)
            .var("ε", "EMF", &["V"], "V")
            .var("B", "Magnetic field", &["T"], "T")
            .var("L", "Length", &["m"], "m")
            .var("v", "Velocity", &["m/s"], "m/s")
            .branch("ε", |x| x.values(["B", "L", "v"]).map(|[b, l, v]| b * l * v))
            .branch("B", |x| x.values(["ε", "L", "v"]).map(|[emf, l, v]| emf / (l * v)))
            .branch("L", |x| x.values(["ε", "B", "v"]).map(|[emf, b, v]| emf / (b * v)))
            .branch("v", |x| x.values(["ε", "B", "L"]).map(|[emf, b, l]| emf / (b * l))),
        // Magnitude of the back EMF.
        Formula::new("Self Inductance (ε = -L(dI/dt))", Category::Magnetism)
            .var("ε", "Back EMF", &["V"], "V")
            .var("L", "Inductance", &["H", "mH"], "H")
            .var("dI_dt", "Rate of current change", &["A/s"], "A/s")
            .branch("ε", |x| x.values(["L", "dI_dt"]).map(|[l, rate]| l * rate))
            .branch("L", |x| x.values(["ε", "dI_dt"]).map(|[emf, rate]| emf / rate))
            .branch("dI_dt", |x| x.values(["ε", "L"]).map(|[emf, l]| emf / l)),
    ]
}

//! Thermal radiation, interference, magnetic fields from currents, the Bohr
//! atom and a few acoustic and nuclear relations.

use std::f64::consts::PI;

use super::{Category, Formula};
use crate::constants::{BOHR_GROUND_EV, EPSILON_0, E_CHARGE, H_BAR, M_ELECTRON, WIEN_B};
use crate::solver::{real_asin, real_sqrt, NO_REAL_SOLUTION};

/// Hydrogen ground-state energy in joules (negative: bound state)
const BOHR_GROUND_J: f64 = -BOHR_GROUND_EV * E_CHARGE;

pub(super) fn radiation_and_interference() -> Vec<Formula> {
    vec![
        Formula::new("Stefan–Boltzmann Law (P = σAeT⁴)", Category::Thermodynamics)
            .var("P", "Radiated power", &["W"], "W")
            .var("σ", "Stefan–Boltzmann constant", &["W/m²K⁴"], "W/m²K⁴")
            .var("A", "Surface area", &["m²"], "m²")
            .var("e", "Emissivity", &[""], "")
            .var("T", "Temperature", &["K"], "K")
            .branch("P", |x| {
                x.values(["σ", "A", "e", "T"]).map(|[sigma, a, e, t]| sigma * a * e * t.powi(4))
            })
            .branch("σ", |x| x.values(["P", "A", "e", "T"]).map(|[p, a, e, t]| p / (a * e * t.powi(4))))
            .branch("A", |x| {
                x.values(["P", "σ", "e", "T"]).map(|[p, sigma, e, t]| p / (sigma * e * t.powi(4)))
            })
            .branch("e", |x| {
                x.values(["P", "σ", "A", "T"]).map(|[p, sigma, a, t]| p / (sigma * a * t.powi(4)))
            })
            .branch("T", |x| {
                x.values(["P", "σ", "A", "e"]).map(|[p, sigma, a, e]| (p / (sigma * a * e)).powf(0.25))
            }),
        Formula::new("Wien's Displacement Law (λ_max T = b)", Category::Thermodynamics)
            .var("λ_max", "Peak wavelength", &["m"], "m")
            .var("T", "Temperature", &["K"], "K")
            .branch("λ_max", |x| x.require("T").map(|t| WIEN_B / t))
            .branch("T", |x| x.require("λ_max").map(|peak| WIEN_B / peak)),
        // f₁ is taken as the higher of the two frequencies.
        Formula::new("Beats Frequency (f_beats = |f₁ - f₂|)", Category::Waves)
            .var("f_beats", "Beats frequency", &["Hz"], "Hz")
            .var("f1", "Frequency 1", &["Hz"], "Hz")
            .var("f2", "Frequency 2", &["Hz"], "Hz")
            .branch("f_beats", |x| x.values(["f1", "f2"]).map(|[f1, f2]| (f1 - f2).abs()))
            .branch("f1", |x| x.values(["f_beats", "f2"]).map(|[beats, f2]| beats + f2))
            .branch("f2", |x| x.values(["f_beats", "f1"]).map(|[beats, f1]| f1 - beats)),
        Formula::new("Young's Double Slit (y = λD/d)", Category::Optics)
            .var("y", "Fringe width", &["m"], "m")
            .var("λ", "Wavelength", &["m"], "m")
            .var("D", "Screen distance", &["m"], "m")
            .var("d", "Slit separation", &["m"], "m")
            .branch("y", |x| x.values(["λ", "D", "d"]).map(|[lambda, big_d, d]| lambda * big_d / d))
            .branch("λ", |x| x.values(["y", "D", "d"]).map(|[y, big_d, d]| y * d / big_d))
            .branch("D", |x| x.values(["y", "λ", "d"]).map(|[y, lambda, d]| y * d / lambda))
            .branch("d", |x| x.values(["y", "λ", "D"]).map(|[y, lambda, big_d]| lambda * big_d / y)),
    ]
}

pub(super) fn fields() -> Vec<Formula> {
    vec![
        Formula::new("Biot–Savart Law (B = μ₀I / (2πr))", Category::Magnetism)
            .var("B", "Magnetic field", &["T"], "T")
            .var("μ0", "Permeability of free space", &["T·m/A"], "T·m/A")
            .var("I", "Current", &["A"], "A")
            .var("r", "Distance", &["m"], "m")
            .branch("B", |x| x.values(["μ0", "I", "r"]).map(|[mu0, i, r]| mu0 * i / (2.0 * PI * r)))
            .branch("μ0", |x| x.values(["B", "I", "r"]).map(|[b, i, r]| 2.0 * PI * r * b / i))
            .branch("I", |x| x.values(["B", "μ0", "r"]).map(|[b, mu0, r]| 2.0 * PI * r * b / mu0))
            .branch("r", |x| x.values(["B", "μ0", "I"]).map(|[b, mu0, i]| mu0 * i / (2.0 * PI * b))),
        Formula::new("Ampere's Law (B = μ₀nI)", Category::Magnetism)
            .var("B", "Magnetic field", &["T"], "T")
            .var("μ0", "Permeability of free space", &["T·m/A"], "T·m/A")
            .var("n", "Turns per unit length", &["m⁻¹"], "m⁻¹")
            .var("I", "Current", &["A"], "A")
            .branch("B", |x| x.values(["μ0", "n", "I"]).map(|[mu0, n, i]| mu0 * n * i))
            .branch("μ0", |x| x.values(["B", "n", "I"]).map(|[b, n, i]| b / (n * i)))
            .branch("n", |x| x.values(["B", "μ0", "I"]).map(|[b, mu0, i]| b / (mu0 * i)))
            .branch("I", |x| x.values(["B", "μ0", "n"]).map(|[b, mu0, n]| b / (mu0 * n))),
        Formula::new("Faraday's Law (ε = -dΦ/dt)", Category::Magnetism)
            .var("ε", "EMF", &["V"], "V")
            .var("dΦ", "Change in magnetic flux", &["Wb"], "Wb")
            .var("dt", "Change in time", &["s"], "s")
            .branch("ε", |x| x.values(["dΦ", "dt"]).map(|[flux, dt]| -flux / dt))
            .branch("dΦ", |x| x.values(["ε", "dt"]).map(|[emf, dt]| -emf * dt))
            .branch("dt", |x| x.values(["ε", "dΦ"]).map(|[emf, flux]| -flux / emf)),
    ]
}

pub(super) fn atomic_and_acoustic() -> Vec<Formula> {
    vec![
        // Built from constants only; solving for a₀ needs no inputs.
        Formula::new("Bohr Radius (a₀ = 4πε₀ħ² / (me²))", Category::ModernPhysics)
            .var("a0", "Bohr radius", &["m"], "m")
            .branch("a0", |_| {
                Ok(4.0 * PI * EPSILON_0 * H_BAR * H_BAR / (M_ELECTRON * E_CHARGE * E_CHARGE))
            }),
        Formula::new("Bohr Energy Levels (En = -13.6 eV / n²)", Category::ModernPhysics)
            .var("En", "Energy", &["eV"], "eV")
            .var("n", "Principal quantum number", &[""], "")
            .branch("En", |x| x.require("n").map(|n| BOHR_GROUND_J / (n * n)))
            .branch("n", |x| {
                let energy = x.require("En")?;
                real_sqrt(BOHR_GROUND_J / energy, NO_REAL_SOLUTION)
            }),
        Formula::new("Nuclear Radius (R = R₀A^(1/3))", Category::NuclearPhysics)
            .var("R", "Nuclear radius", &["m"], "m")
            .var("R0", "Constant (1.2e-15 m)", &["m"], "m")
            .var("A", "Mass number", &[""], "")
            .branch("R", |x| x.values(["R0", "A"]).map(|[r0, a]| r0 * a.cbrt()))
            .branch("R0", |x| x.values(["R", "A"]).map(|[r, a]| r / a.cbrt()))
            .branch("A", |x| x.values(["R", "R0"]).map(|[r, r0]| (r / r0).powi(3))),
        Formula::new("Intensity Level (β = 10 log₁₀(I/I₀))", Category::Waves)
            .var("β", "Intensity level", &["dB"], "dB")
            .var("I", "Intensity", &["W/m²"], "W/m²")
            .var("I0", "Reference intensity", &["W/m²"], "W/m²")
            .branch("β", |x| x.values(["I", "I0"]).map(|[i, i0]| 10.0 * (i / i0).log10()))
            .branch("I", |x| x.values(["β", "I0"]).map(|[beta, i0]| i0 * 10f64.powf(beta / 10.0)))
            .branch("I0", |x| x.values(["β", "I"]).map(|[beta, i]| i / 10f64.powf(beta / 10.0))),
        Formula::new("Diffraction Grating (d sinθ = mλ)", Category::Optics)
            .var("d", "Grating spacing", &["m"], "m")
            .var("θ", "Diffraction angle", &["°"], "°")
            .var("m", "Order", &[""], "")
            .var("λ", "Wavelength", &["m"], "m")
            .branch("d", |x| x.values(["θ", "m", "λ"]).map(|[theta, m, lambda]| m * lambda / theta.sin()))
            .branch("θ", |x| {
                let [d, m, lambda] = x.values(["d", "m", "λ"])?;
                real_asin(m * lambda / d, "No such diffraction order - mλ exceeds d")
            })
            .branch("m", |x| x.values(["d", "θ", "λ"]).map(|[d, theta, lambda]| d * theta.sin() / lambda))
            .branch("λ", |x| x.values(["d", "θ", "m"]).map(|[d, theta, m]| d * theta.sin() / m)),
    ]
}

//! Geometric optics, quantum and nuclear physics.

use std::f64::consts::LN_2;

use super::{Category, Formula};
use crate::constants::{C_LIGHT, H_PLANCK, M_ELECTRON, RYDBERG};
use crate::solver::{nonzero, real_acos, real_asin, real_sqrt, NO_REAL_SOLUTION};

/// Compton wavelength of the electron, h / (mₑc), about 2.43 pm
const COMPTON_WAVELENGTH: f64 = H_PLANCK / (M_ELECTRON * C_LIGHT);

pub(super) fn formulas() -> Vec<Formula> {
    let mut all = optics();
    all.extend(modern_physics());
    all.extend(nuclear_physics());
    all
}

/// Thin lens and mirror share the Gaussian form 1/f = 1/u + 1/v.
fn gaussian_optics(name: &'static str) -> Formula {
    Formula::new(name, Category::Optics)
        .var("f", "Focal length", &["m", "cm"], "cm")
        .var("u", "Object distance", &["m", "cm"], "cm")
        .var("v", "Image distance", &["m", "cm"], "cm")
        .branch("f", |x| x.values(["u", "v"]).map(|[u, v]| 1.0 / (1.0 / u + 1.0 / v)))
        .branch("u", |x| x.values(["f", "v"]).map(|[f, v]| 1.0 / (1.0 / f - 1.0 / v)))
        .branch("v", |x| x.values(["f", "u"]).map(|[f, u]| 1.0 / (1.0 / f - 1.0 / u)))
}

fn optics() -> Vec<Formula> {
    vec![
        gaussian_optics("Lens Formula (1/f = 1/u + 1/v)"),
        gaussian_optics("Mirror Formula (1/f = 1/u + 1/v)"),
        Formula::new("Magnification (m = v/u)", Category::Optics)
            .var("m", "Magnification", &[""], "")
            .var("v", "Image distance", &["cm"], "cm")
            .var("u", "Object distance", &["cm"], "cm")
            .branch("m", |x| x.values(["v", "u"]).map(|[v, u]| v / u))
            .branch("v", |x| x.values(["m", "u"]).map(|[m, u]| m * u))
            .branch("u", |x| x.values(["v", "m"]).map(|[v, m]| v / m)),
        Formula::new("Refractive Index (n = c/v)", Category::Optics)
            .var("n", "Refractive index", &[""], "")
            .var("c", "Speed of light", &["m/s"], "m/s")
            .var("v", "Speed in medium", &["m/s"], "m/s")
            .branch("n", |x| x.values(["c", "v"]).map(|[c, v]| c / v))
            .branch("c", |x| x.values(["n", "v"]).map(|[n, v]| n * v))
            .branch("v", |x| x.values(["c", "n"]).map(|[c, n]| c / n)),
        Formula::new("Snell's Law (n₁sinθ₁ = n₂sinθ₂)", Category::Optics)
            .var("n1", "Refractive index 1", &[""], "")
            .var("θ1", "Angle 1", &["°", "rad"], "°")
            .var("n2", "Refractive index 2", &[""], "")
            .var("θ2", "Angle 2", &["°", "rad"], "°")
            .branch("n1", |x| {
                let [theta1, n2, theta2] = x.values(["θ1", "n2", "θ2"])?;
                Ok(n2 * theta2.sin() / nonzero(theta1.sin(), "Invalid angle")?)
            })
            .branch("θ1", |x| {
                let [n1, n2, theta2] = x.values(["n1", "n2", "θ2"])?;
                real_asin(n2 * theta2.sin() / n1, NO_REAL_SOLUTION)
            })
            .branch("n2", |x| {
                let [n1, theta1, theta2] = x.values(["n1", "θ1", "θ2"])?;
                Ok(n1 * theta1.sin() / nonzero(theta2.sin(), "Invalid angle")?)
            })
            .branch("θ2", |x| {
                let [n1, theta1, n2] = x.values(["n1", "θ1", "n2"])?;
                real_asin(n1 * theta1.sin() / n2, NO_REAL_SOLUTION)
            }),
        Formula::new("Critical Angle (sinθc = n₂/n₁)", Category::Optics)
            .var("θc", "Critical angle", &["°", "rad"], "°")
            .var("n1", "Denser medium index", &[""], "")
            .var("n2", "Rarer medium index", &[""], "")
            .branch("θc", |x| {
                let [n1, n2] = x.values(["n1", "n2"])?;
                real_asin(n2 / n1, "No critical angle - n₂ must not exceed n₁")
            })
            .branch("n1", |x| {
                let [theta_c, n2] = x.values(["θc", "n2"])?;
                Ok(n2 / nonzero(theta_c.sin(), "Invalid angle")?)
            })
            .branch("n2", |x| x.values(["θc", "n1"]).map(|[theta_c, n1]| n1 * theta_c.sin())),
        Formula::new("Lens Maker's Formula (1/f = (n-1)(1/R₁ - 1/R₂))", Category::Optics)
            .var("f", "Focal length", &["m", "cm"], "cm")
            .var("n", "Refractive index", &[""], "")
            .var("R1", "Radius of curvature 1", &["m", "cm"], "cm")
            .var("R2", "Radius of curvature 2", &["m", "cm"], "cm")
            .branch("f", |x| {
                x.values(["n", "R1", "R2"])
                    .map(|[n, r1, r2]| 1.0 / ((n - 1.0) * (1.0 / r1 - 1.0 / r2)))
            })
            .branch("n", |x| {
                x.values(["f", "R1", "R2"]).map(|[f, r1, r2]| (1.0 / f) / (1.0 / r1 - 1.0 / r2) + 1.0)
            })
            .branch("R1", |x| {
                x.values(["f", "n", "R2"])
                    .map(|[f, n, r2]| 1.0 / ((1.0 / f) / (n - 1.0) + 1.0 / r2))
            })
            .branch("R2", |x| {
                x.values(["f", "n", "R1"])
                    .map(|[f, n, r1]| 1.0 / (1.0 / r1 - (1.0 / f) / (n - 1.0)))
            }),
        Formula::new("Power of Lens (P = 1/f)", Category::Optics)
            .var("P", "Power", &["D"], "D")
            .var("f", "Focal length", &["m", "cm"], "m")
            .branch("P", |x| x.require("f").map(|f| 1.0 / f))
            .branch("f", |x| x.require("P").map(|p| 1.0 / p)),
    ]
}

fn modern_physics() -> Vec<Formula> {
    vec![
        Formula::new("Photoelectric Effect (KEmax = hf - φ)", Category::ModernPhysics)
            .var("KEmax", "Maximum kinetic energy", &["J", "eV"], "eV")
            .var("f", "Frequency", &["Hz", "THz"], "Hz")
            .var("φ", "Work function", &["J", "eV"], "eV")
            .branch("KEmax", |x| x.values(["f", "φ"]).map(|[f, phi]| H_PLANCK * f - phi))
            .branch("f", |x| x.values(["KEmax", "φ"]).map(|[ke, phi]| (ke + phi) / H_PLANCK))
            .branch("φ", |x| x.values(["KEmax", "f"]).map(|[ke, f]| H_PLANCK * f - ke)),
        Formula::new("De Broglie Wavelength (λ = h/p)", Category::ModernPhysics)
            .var("λ", "Wavelength", &["m", "nm", "pm"], "m")
            .var("m", "Mass", &["kg", "u"], "kg")
            .var("v", "Velocity", &["m/s"], "m/s")
            .branch("λ", |x| x.values(["m", "v"]).map(|[m, v]| H_PLANCK / (m * v)))
            .branch("m", |x| x.values(["λ", "v"]).map(|[lambda, v]| H_PLANCK / (lambda * v)))
            .branch("v", |x| x.values(["λ", "m"]).map(|[lambda, m]| H_PLANCK / (lambda * m))),
        Formula::new("Mass-Energy Equivalence (E = mc²)", Category::ModernPhysics)
            .var("E", "Energy", &["J", "MeV", "GeV"], "J")
            .var("m", "Mass", &["kg", "u"], "kg")
            .branch("E", |x| x.require("m").map(|m| m * C_LIGHT * C_LIGHT))
            .branch("m", |x| x.require("E").map(|e| e / (C_LIGHT * C_LIGHT))),
        Formula::new("Planck's Energy (E = hf)", Category::ModernPhysics)
            .var("E", "Energy", &["J", "eV"], "J")
            .var("f", "Frequency", &["Hz", "THz"], "Hz")
            .branch("E", |x| x.require("f").map(|f| H_PLANCK * f))
            .branch("f", |x| x.require("E").map(|e| e / H_PLANCK)),
        Formula::new("Compton Scattering (Δλ = h/mec(1-cosθ))", Category::ModernPhysics)
            .var("Δλ", "Wavelength shift", &["m", "pm"], "pm")
            .var("θ", "Scattering angle", &["°", "rad"], "°")
            .branch("Δλ", |x| x.require("θ").map(|theta| COMPTON_WAVELENGTH * (1.0 - theta.cos())))
            .branch("θ", |x| {
                let shift = x.require("Δλ")?;
                real_acos(1.0 - shift / COMPTON_WAVELENGTH, NO_REAL_SOLUTION)
            }),
        Formula::new("Rydberg Formula (1/λ = R(1/n₁² - 1/n₂²))", Category::ModernPhysics)
            .var("λ", "Wavelength", &["m", "nm"], "nm")
            .var("n1", "Lower energy level", &[""], "")
            .var("n2", "Higher energy level", &[""], "")
            .branch("λ", |x| {
                x.values(["n1", "n2"])
                    .map(|[n1, n2]| 1.0 / (RYDBERG * (1.0 / (n1 * n1) - 1.0 / (n2 * n2))))
            })
            .branch("n1", |x| {
                let [lambda, n2] = x.values(["λ", "n2"])?;
                real_sqrt(1.0 / (1.0 / (RYDBERG * lambda) + 1.0 / (n2 * n2)), NO_REAL_SOLUTION)
            })
            .branch("n2", |x| {
                let [lambda, n1] = x.values(["λ", "n1"])?;
                real_sqrt(1.0 / (1.0 / (n1 * n1) - 1.0 / (RYDBERG * lambda)), NO_REAL_SOLUTION)
            }),
    ]
}

fn nuclear_physics() -> Vec<Formula> {
    vec![
        Formula::new("Radioactive Decay (N = N₀e^(-λt))", Category::NuclearPhysics)
            .var("N", "Final amount", &[""], "")
            .var("N0", "Initial amount", &[""], "")
            .var("λ", "Decay constant", &["s⁻¹"], "s⁻¹")
            .var("t", "Time", &["s", "years"], "s")
            .branch("N", |x| x.values(["N0", "λ", "t"]).map(|[n0, lambda, t]| n0 * (-lambda * t).exp()))
            .branch("N0", |x| x.values(["N", "λ", "t"]).map(|[n, lambda, t]| n / (-lambda * t).exp()))
            .branch("λ", |x| x.values(["N", "N0", "t"]).map(|[n, n0, t]| -(n / n0).ln() / t))
            .branch("t", |x| x.values(["N", "N0", "λ"]).map(|[n, n0, lambda]| -(n / n0).ln() / lambda)),
        Formula::new("Half-life (t₁/₂ = ln(2)/λ)", Category::NuclearPhysics)
            .var("t_half", "Half-life", &["s", "years"], "s")
            .var("λ", "Decay constant", &["s⁻¹"], "s⁻¹")
            .branch("t_half", |x| x.require("λ").map(|lambda| LN_2 / lambda))
            .branch("λ", |x| x.require("t_half").map(|t_half| LN_2 / t_half)),
        Formula::new("Activity (A = λN)", Category::NuclearPhysics)
            .var("A", "Activity", &["Bq", "Ci"], "Bq")
            .var("λ", "Decay constant", &["s⁻¹"], "s⁻¹")
            .var("N", "Number of nuclei", &[""], "")
            .branch("A", |x| x.values(["λ", "N"]).map(|[lambda, n]| lambda * n))
            .branch("λ", |x| x.values(["A", "N"]).map(|[a, n]| a / n))
            .branch("N", |x| x.values(["A", "λ"]).map(|[a, lambda]| a / lambda)),
        Formula::new("Binding Energy (BE = Δmc²)", Category::NuclearPhysics)
            .var("BE", "Binding energy", &["J", "MeV"], "MeV")
            .var("Δm", "Mass defect", &["kg", "u"], "u")
            .branch("BE", |x| x.require("Δm").map(|dm| dm * C_LIGHT * C_LIGHT))
            .branch("Δm", |x| x.require("BE").map(|be| be / (C_LIGHT * C_LIGHT))),
    ]
}

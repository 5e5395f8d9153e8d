//! Kinematics, projectiles, forces, energy, momentum, circular motion,
//! gravitation and oscillations.

use std::f64::consts::PI;

use super::{Category, Formula};
use crate::constants::G;
use crate::errors::CalcError;
use crate::solver::{nonzero, real_acos, real_asin, real_sqrt, NO_REAL_SOLUTION};

pub(super) fn formulas() -> Vec<Formula> {
    let mut all = kinematics();
    all.extend(projectile_motion());
    all.extend(forces_and_energy());
    all.extend(momentum_and_circular());
    all.extend(gravitation());
    all.extend(oscillations());
    all
}

// ============================================================================
// Kinematics
// ============================================================================

fn kinematics() -> Vec<Formula> {
    vec![
        Formula::new("First Equation of Motion (v = u + at)", Category::Kinematics)
            .var("v", "Final velocity", &["m/s", "km/h", "cm/s"], "m/s")
            .var("u", "Initial velocity", &["m/s", "km/h", "cm/s"], "m/s")
            .var("a", "Acceleration", &["m/s²", "cm/s²"], "m/s²")
            .var("t", "Time", &["s", "min", "ms"], "s")
            .branch("v", |x| x.values(["u", "a", "t"]).map(|[u, a, t]| u + a * t))
            .branch("u", |x| x.values(["v", "a", "t"]).map(|[v, a, t]| v - a * t))
            .branch("a", |x| x.values(["v", "u", "t"]).map(|[v, u, t]| (v - u) / t))
            .branch("t", |x| x.values(["v", "u", "a"]).map(|[v, u, a]| (v - u) / a)),
        Formula::new("Second Equation of Motion (s = ut + ½at²)", Category::Kinematics)
            .var("s", "Displacement", &["m", "cm", "km"], "m")
            .var("u", "Initial velocity", &["m/s", "km/h"], "m/s")
            .var("t", "Time", &["s", "min"], "s")
            .var("a", "Acceleration", &["m/s²"], "m/s²")
            .branch("s", |x| x.values(["u", "t", "a"]).map(|[u, t, a]| u * t + 0.5 * a * t * t))
            .branch("u", |x| x.values(["s", "t", "a"]).map(|[s, t, a]| (s - 0.5 * a * t * t) / t))
            .branch("a", |x| x.values(["s", "u", "t"]).map(|[s, u, t]| 2.0 * (s - u * t) / (t * t)))
            .branch("t", |x| {
                let [s, u, a] = x.values(["s", "u", "a"])?;
                let root = real_sqrt(u * u + 2.0 * a * s, NO_REAL_SOLUTION)?;
                Ok((-u + root) / a)
            }),
        Formula::new("Third Equation of Motion (v² = u² + 2as)", Category::Kinematics)
            .var("v", "Final velocity", &["m/s", "km/h"], "m/s")
            .var("u", "Initial velocity", &["m/s", "km/h"], "m/s")
            .var("a", "Acceleration", &["m/s²"], "m/s²")
            .var("s", "Displacement", &["m", "cm"], "m")
            .branch("v", |x| {
                let [u, a, s] = x.values(["u", "a", "s"])?;
                real_sqrt(u * u + 2.0 * a * s, NO_REAL_SOLUTION)
            })
            .branch("u", |x| {
                let [v, a, s] = x.values(["v", "a", "s"])?;
                real_sqrt(v * v - 2.0 * a * s, NO_REAL_SOLUTION)
            })
            .branch("a", |x| x.values(["v", "u", "s"]).map(|[v, u, s]| (v * v - u * u) / (2.0 * s)))
            .branch("s", |x| x.values(["v", "u", "a"]).map(|[v, u, a]| (v * v - u * u) / (2.0 * a))),
    ]
}

// ============================================================================
// Projectile Motion
// ============================================================================

// Angles arrive in radians; the unit table converts degrees on the way in.
fn projectile_motion() -> Vec<Formula> {
    vec![
        Formula::new("Projectile Range (R = u²sin2θ/g)", Category::ProjectileMotion)
            .var("R", "Range", &["m", "cm", "km"], "m")
            .var("u", "Initial velocity", &["m/s"], "m/s")
            .var("θ", "Angle", &["°", "rad"], "°")
            .var("g", "Gravity", &["m/s²"], "m/s²")
            .branch("R", |x| {
                x.values(["u", "θ", "g"]).map(|[u, theta, g]| u * u * (2.0 * theta).sin() / g)
            })
            .branch("u", |x| {
                let [range, theta, g] = x.values(["R", "θ", "g"])?;
                let sin2 = nonzero((2.0 * theta).sin(), "Invalid angle - too close to 0° or 90°")?;
                real_sqrt(range * g / sin2, NO_REAL_SOLUTION)
            })
            .branch("θ", |x| {
                let [range, u, g] = x.values(["R", "u", "g"])?;
                let arg = range * g / (u * u);
                if arg > 1.0 {
                    return Err(CalcError::domain(
                        "Impossible range - reduce distance or increase velocity",
                    ));
                }
                if arg < 0.0 {
                    return Err(CalcError::domain("Invalid parameters"));
                }
                Ok(arg.asin() / 2.0)
            })
            .branch("g", |x| {
                let [range, u, theta] = x.values(["R", "u", "θ"])?;
                let sin2 = nonzero((2.0 * theta).sin(), "Invalid angle")?;
                Ok(u * u * sin2 / range)
            }),
        Formula::new("Maximum Height (H = u²(sin²θ))/2g)", Category::ProjectileMotion)
            .var("H", "Max height", &["m", "cm"], "m")
            .var("u", "Initial velocity", &["m/s"], "m/s")
            .var("θ", "Angle", &["°", "rad"], "°")
            .var("g", "Gravity", &["m/s²"], "m/s²")
            .branch("H", |x| {
                x.values(["u", "θ", "g"]).map(|[u, theta, g]| u * u * theta.sin().powi(2) / (2.0 * g))
            })
            .branch("u", |x| {
                let [h, theta, g] = x.values(["H", "θ", "g"])?;
                let sin = nonzero(theta.sin(), "Invalid angle")?;
                real_sqrt(2.0 * g * h / (sin * sin), NO_REAL_SOLUTION)
            })
            .branch("θ", |x| {
                let [h, u, g] = x.values(["H", "u", "g"])?;
                let ratio = real_sqrt(2.0 * g * h, NO_REAL_SOLUTION)? / u;
                if ratio > 1.0 {
                    return Err(CalcError::domain(
                        "Impossible height - reduce height or increase velocity",
                    ));
                }
                real_asin(ratio, "Invalid parameters")
            })
            .branch("g", |x| {
                x.values(["H", "u", "θ"]).map(|[h, u, theta]| u * u * theta.sin().powi(2) / (2.0 * h))
            }),
        Formula::new("Time of Flight (T = 2u(sinθ))/g)", Category::ProjectileMotion)
            .var("T", "Time of flight", &["s"], "s")
            .var("u", "Initial velocity", &["m/s"], "m/s")
            .var("θ", "Angle", &["°", "rad"], "°")
            .var("g", "Gravity", &["m/s²"], "m/s²")
            .branch("T", |x| x.values(["u", "θ", "g"]).map(|[u, theta, g]| 2.0 * u * theta.sin() / g))
            .branch("u", |x| {
                let [t, theta, g] = x.values(["T", "θ", "g"])?;
                let sin = nonzero(theta.sin(), "Invalid angle")?;
                Ok(t * g / (2.0 * sin))
            })
            .branch("θ", |x| {
                let [t, u, g] = x.values(["T", "u", "g"])?;
                let ratio = t * g / (2.0 * u);
                if ratio > 1.0 {
                    return Err(CalcError::domain("Impossible time - check parameters"));
                }
                real_asin(ratio, "Invalid parameters")
            })
            .branch("g", |x| x.values(["T", "u", "θ"]).map(|[t, u, theta]| 2.0 * u * theta.sin() / t)),
    ]
}

// ============================================================================
// Forces, Work and Energy
// ============================================================================

fn forces_and_energy() -> Vec<Formula> {
    vec![
        Formula::new("Newton's Second Law (F = ma)", Category::Forces)
            .var("F", "Force", &["N", "dyne", "kN"], "N")
            .var("m", "Mass", &["kg", "g", "ton"], "kg")
            .var("a", "Acceleration", &["m/s²", "cm/s²"], "m/s²")
            .branch("F", |x| x.values(["m", "a"]).map(|[m, a]| m * a))
            .branch("m", |x| x.values(["F", "a"]).map(|[f, a]| f / a))
            .branch("a", |x| x.values(["F", "m"]).map(|[f, m]| f / m)),
        Formula::new("Weight (W = mg)", Category::Forces)
            .var("W", "Weight", &["N", "kN"], "N")
            .var("m", "Mass", &["kg", "g"], "kg")
            .var("g", "Gravity", &["m/s²"], "m/s²")
            .branch("W", |x| x.values(["m", "g"]).map(|[m, g]| m * g))
            .branch("m", |x| x.values(["W", "g"]).map(|[w, g]| w / g))
            .branch("g", |x| x.values(["W", "m"]).map(|[w, m]| w / m)),
        Formula::new("Friction Force (f = μN)", Category::Forces)
            .var("f", "Friction force", &["N"], "N")
            .var("μ", "Coefficient of friction", &[""], "")
            .var("N", "Normal force", &["N"], "N")
            .branch("f", |x| x.values(["μ", "N"]).map(|[mu, n]| mu * n))
            .branch("μ", |x| x.values(["f", "N"]).map(|[f, n]| f / n))
            .branch("N", |x| x.values(["f", "μ"]).map(|[f, mu]| f / mu)),
        Formula::new("Work Done (W = F·s·cosθ)", Category::WorkEnergy)
            .var("W", "Work", &["J", "kJ", "MJ"], "J")
            .var("F", "Force", &["N", "kN"], "N")
            .var("s", "Displacement", &["m", "cm", "km"], "m")
            .var("θ", "Angle", &["°", "rad"], "°")
            .branch("W", |x| x.values(["F", "s", "θ"]).map(|[f, s, theta]| f * s * theta.cos()))
            .branch("F", |x| {
                let [w, s, theta] = x.values(["W", "s", "θ"])?;
                Ok(w / (s * nonzero(theta.cos(), "Invalid angle")?))
            })
            .branch("s", |x| {
                let [w, f, theta] = x.values(["W", "F", "θ"])?;
                Ok(w / (f * nonzero(theta.cos(), "Invalid angle")?))
            })
            .branch("θ", |x| {
                let [w, f, s] = x.values(["W", "F", "s"])?;
                real_acos(w / (f * s), NO_REAL_SOLUTION)
            }),
        Formula::new("Kinetic Energy (KE = ½mv²)", Category::WorkEnergy)
            .var("KE", "Kinetic energy", &["J", "kJ", "eV"], "J")
            .var("m", "Mass", &["kg", "g"], "kg")
            .var("v", "Velocity", &["m/s", "km/h"], "m/s")
            .branch("KE", |x| x.values(["m", "v"]).map(|[m, v]| 0.5 * m * v * v))
            .branch("m", |x| x.values(["KE", "v"]).map(|[ke, v]| 2.0 * ke / (v * v)))
            .branch("v", |x| {
                let [ke, m] = x.values(["KE", "m"])?;
                real_sqrt(2.0 * ke / m, NO_REAL_SOLUTION)
            }),
        Formula::new("Potential Energy (PE = mgh)", Category::WorkEnergy)
            .var("PE", "Potential energy", &["J", "kJ"], "J")
            .var("m", "Mass", &["kg", "g"], "kg")
            .var("g", "Gravity", &["m/s²"], "m/s²")
            .var("h", "Height", &["m", "cm"], "m")
            .branch("PE", |x| x.values(["m", "g", "h"]).map(|[m, g, h]| m * g * h))
            .branch("m", |x| x.values(["PE", "g", "h"]).map(|[pe, g, h]| pe / (g * h)))
            .branch("g", |x| x.values(["PE", "m", "h"]).map(|[pe, m, h]| pe / (m * h)))
            .branch("h", |x| x.values(["PE", "m", "g"]).map(|[pe, m, g]| pe / (m * g))),
        Formula::new("Power (P = W/t)", Category::WorkEnergy)
            .var("P", "Power", &["W", "kW", "MW"], "W")
            .var("W", "Work", &["J", "kJ"], "J")
            .var("t", "Time", &["s", "min", "h"], "s")
            .branch("P", |x| x.values(["W", "t"]).map(|[w, t]| w / t))
            .branch("W", |x| x.values(["P", "t"]).map(|[p, t]| p * t))
            .branch("t", |x| x.values(["W", "P"]).map(|[w, p]| w / p)),
        Formula::new("Power (P = F·v)", Category::WorkEnergy)
            .var("P", "Power", &["W", "kW", "MW"], "W")
            .var("F", "Force", &["N", "kN"], "N")
            .var("v", "Velocity", &["m/s"], "m/s")
            .branch("P", |x| x.values(["F", "v"]).map(|[f, v]| f * v))
            .branch("F", |x| x.values(["P", "v"]).map(|[p, v]| p / v))
            .branch("v", |x| x.values(["P", "F"]).map(|[p, f]| p / f)),
    ]
}

// ============================================================================
// Momentum and Circular Motion
// ============================================================================

fn momentum_and_circular() -> Vec<Formula> {
    vec![
        Formula::new("Linear Momentum (p = mv)", Category::Momentum)
            .var("p", "Momentum", &["kg·m/s", "N·s"], "kg·m/s")
            .var("m", "Mass", &["kg", "g"], "kg")
            .var("v", "Velocity", &["m/s"], "m/s")
            .branch("p", |x| x.values(["m", "v"]).map(|[m, v]| m * v))
            .branch("m", |x| x.values(["p", "v"]).map(|[p, v]| p / v))
            .branch("v", |x| x.values(["p", "m"]).map(|[p, m]| p / m)),
        Formula::new("Impulse (J = FΔt)", Category::Momentum)
            .var("J", "Impulse", &["N·s", "kg·m/s"], "N·s")
            .var("F", "Force", &["N"], "N")
            .var("Δt", "Time interval", &["s", "ms"], "s")
            .branch("J", |x| x.values(["F", "Δt"]).map(|[f, dt]| f * dt))
            .branch("F", |x| x.values(["J", "Δt"]).map(|[j, dt]| j / dt))
            .branch("Δt", |x| x.values(["J", "F"]).map(|[j, f]| j / f)),
        Formula::new("Impulse-Momentum (J = Δp)", Category::Momentum)
            .var("J", "Impulse", &["N·s"], "N·s")
            .var("Δp", "Change in momentum", &["kg·m/s"], "kg·m/s")
            .branch("J", |x| x.require("Δp"))
            .branch("Δp", |x| x.require("J")),
        Formula::new("Centripetal Force (Fc = mv²/r)", Category::CircularMotion)
            .var("Fc", "Centripetal force", &["N"], "N")
            .var("m", "Mass", &["kg", "g"], "kg")
            .var("v", "Speed", &["m/s"], "m/s")
            .var("r", "Radius", &["m", "cm"], "m")
            .branch("Fc", |x| x.values(["m", "v", "r"]).map(|[m, v, r]| m * v * v / r))
            .branch("m", |x| x.values(["Fc", "v", "r"]).map(|[fc, v, r]| fc * r / (v * v)))
            .branch("v", |x| {
                let [fc, m, r] = x.values(["Fc", "m", "r"])?;
                real_sqrt(fc * r / m, NO_REAL_SOLUTION)
            })
            .branch("r", |x| x.values(["Fc", "m", "v"]).map(|[fc, m, v]| m * v * v / fc)),
        Formula::new("Centripetal Acceleration (ac = v²/r)", Category::CircularMotion)
            .var("ac", "Centripetal acceleration", &["m/s²"], "m/s²")
            .var("v", "Speed", &["m/s"], "m/s")
            .var("r", "Radius", &["m", "cm"], "m")
            .branch("ac", |x| x.values(["v", "r"]).map(|[v, r]| v * v / r))
            .branch("v", |x| {
                let [ac, r] = x.values(["ac", "r"])?;
                real_sqrt(ac * r, NO_REAL_SOLUTION)
            })
            .branch("r", |x| x.values(["ac", "v"]).map(|[ac, v]| v * v / ac)),
        Formula::new("Angular Velocity (ω = v/r)", Category::CircularMotion)
            .var("ω", "Angular velocity", &["rad/s", "rpm"], "rad/s")
            .var("v", "Linear speed", &["m/s"], "m/s")
            .var("r", "Radius", &["m", "cm"], "m")
            .branch("ω", |x| x.values(["v", "r"]).map(|[v, r]| v / r))
            .branch("v", |x| x.values(["ω", "r"]).map(|[omega, r]| omega * r))
            .branch("r", |x| x.values(["v", "ω"]).map(|[v, omega]| v / omega)),
        Formula::new("Angular Displacement (θ = ωt)", Category::CircularMotion)
            .var("θ", "Angular displacement", &["rad", "°"], "rad")
            .var("ω", "Angular velocity", &["rad/s"], "rad/s")
            .var("t", "Time", &["s"], "s")
            .branch("θ", |x| x.values(["ω", "t"]).map(|[omega, t]| omega * t))
            .branch("ω", |x| x.values(["θ", "t"]).map(|[theta, t]| theta / t))
            .branch("t", |x| x.values(["θ", "ω"]).map(|[theta, omega]| theta / omega)),
    ]
}

// ============================================================================
// Gravitation
// ============================================================================

fn gravitation() -> Vec<Formula> {
    vec![
        Formula::new("Universal Gravitation (F = Gm₁m₂/r²)", Category::Gravitation)
            .var("F", "Gravitational force", &["N"], "N")
            .var("m1", "Mass 1", &["kg"], "kg")
            .var("m2", "Mass 2", &["kg"], "kg")
            .var("r", "Distance", &["m", "km"], "m")
            .branch("F", |x| x.values(["m1", "m2", "r"]).map(|[m1, m2, r]| G * m1 * m2 / (r * r)))
            .branch("m1", |x| x.values(["F", "m2", "r"]).map(|[f, m2, r]| f * r * r / (G * m2)))
            .branch("m2", |x| x.values(["F", "m1", "r"]).map(|[f, m1, r]| f * r * r / (G * m1)))
            .branch("r", |x| {
                let [f, m1, m2] = x.values(["F", "m1", "m2"])?;
                real_sqrt(G * m1 * m2 / f, NO_REAL_SOLUTION)
            }),
        Formula::new("Gravitational Field (g = GM/r²)", Category::Gravitation)
            .var("g", "Gravitational field", &["m/s²"], "m/s²")
            .var("M", "Mass", &["kg"], "kg")
            .var("r", "Distance", &["m", "km"], "m")
            .branch("g", |x| x.values(["M", "r"]).map(|[m, r]| G * m / (r * r)))
            .branch("M", |x| x.values(["g", "r"]).map(|[g, r]| g * r * r / G))
            .branch("r", |x| {
                let [g, m] = x.values(["g", "M"])?;
                real_sqrt(G * m / g, NO_REAL_SOLUTION)
            }),
        Formula::new("Orbital Velocity (v = √(GM/r))", Category::Gravitation)
            .var("v", "Orbital velocity", &["m/s", "km/s"], "m/s")
            .var("M", "Central mass", &["kg"], "kg")
            .var("r", "Orbital radius", &["m", "km"], "m")
            .branch("v", |x| {
                let [m, r] = x.values(["M", "r"])?;
                real_sqrt(G * m / r, NO_REAL_SOLUTION)
            })
            .branch("M", |x| x.values(["v", "r"]).map(|[v, r]| v * v * r / G))
            .branch("r", |x| x.values(["v", "M"]).map(|[v, m]| G * m / (v * v))),
        Formula::new("Escape Velocity (ve = √(2GM/r))", Category::Gravitation)
            .var("ve", "Escape velocity", &["m/s", "km/s"], "m/s")
            .var("M", "Planet mass", &["kg"], "kg")
            .var("r", "Planet radius", &["m", "km"], "m")
            .branch("ve", |x| {
                let [m, r] = x.values(["M", "r"])?;
                real_sqrt(2.0 * G * m / r, NO_REAL_SOLUTION)
            })
            .branch("M", |x| x.values(["ve", "r"]).map(|[ve, r]| ve * ve * r / (2.0 * G)))
            .branch("r", |x| x.values(["ve", "M"]).map(|[ve, m]| 2.0 * G * m / (ve * ve))),
        Formula::new("Kepler's Third Law (T² = 4π²r³/GM)", Category::Gravitation)
            .var("T", "Orbital period", &["s", "years", "days"], "s")
            .var("r", "Orbital radius", &["m", "km", "AU"], "m")
            .var("M", "Central mass", &["kg"], "kg")
            .branch("T", |x| {
                let [r, m] = x.values(["r", "M"])?;
                real_sqrt(4.0 * PI * PI * r.powi(3) / (G * m), NO_REAL_SOLUTION)
            })
            .branch("r", |x| {
                x.values(["T", "M"]).map(|[t, m]| (G * m * t * t / (4.0 * PI * PI)).cbrt())
            })
            .branch("M", |x| x.values(["T", "r"]).map(|[t, r]| 4.0 * PI * PI * r.powi(3) / (G * t * t))),
    ]
}

// ============================================================================
// SHM & Oscillations
// ============================================================================

fn oscillations() -> Vec<Formula> {
    vec![
        Formula::new("Simple Harmonic Motion (T = 2π√(m/k))", Category::Oscillations)
            .var("T", "Time period", &["s"], "s")
            .var("m", "Mass", &["kg", "g"], "kg")
            .var("k", "Spring constant", &["N/m"], "N/m")
            .branch("T", |x| {
                let [m, k] = x.values(["m", "k"])?;
                Ok(2.0 * PI * real_sqrt(m / k, NO_REAL_SOLUTION)?)
            })
            .branch("m", |x| x.values(["T", "k"]).map(|[t, k]| k * (t / (2.0 * PI)).powi(2)))
            .branch("k", |x| x.values(["T", "m"]).map(|[t, m]| m * (2.0 * PI / t).powi(2))),
        Formula::new("Simple Pendulum (T = 2π√(L/g))", Category::Oscillations)
            .var("T", "Time period", &["s"], "s")
            .var("L", "Length", &["m", "cm"], "m")
            .var("g", "Gravity", &["m/s²"], "m/s²")
            .branch("T", |x| {
                let [l, g] = x.values(["L", "g"])?;
                Ok(2.0 * PI * real_sqrt(l / g, NO_REAL_SOLUTION)?)
            })
            .branch("L", |x| x.values(["T", "g"]).map(|[t, g]| g * (t / (2.0 * PI)).powi(2)))
            .branch("g", |x| x.values(["T", "L"]).map(|[t, l]| l * (2.0 * PI / t).powi(2))),
        // Magnitude form: the restoring sign is implied by the name.
        Formula::new("Hooke's Law (F = -kx)", Category::Oscillations)
            .var("F", "Restoring force", &["N"], "N")
            .var("k", "Spring constant", &["N/m"], "N/m")
            .var("x", "Displacement", &["m", "cm"], "m")
            .branch("F", |x| x.values(["k", "x"]).map(|[k, d]| k * d))
            .branch("k", |x| x.values(["F", "x"]).map(|[f, d]| f / d))
            .branch("x", |x| x.values(["F", "k"]).map(|[f, k]| f / k)),
        Formula::new("SHM Displacement (x = A sin(ωt + φ))", Category::Oscillations)
            .var("x", "Displacement", &["m", "cm"], "m")
            .var("A", "Amplitude", &["m", "cm"], "m")
            .var("ω", "Angular frequency", &["rad/s"], "rad/s")
            .var("t", "Time", &["s"], "s")
            .var("φ", "Phase constant", &["rad", "°"], "rad")
            .branch("x", |x| {
                x.values(["A", "ω", "t", "φ"])
                    .map(|[a, omega, t, phi]| a * (omega * t + phi).sin())
            })
            .branch("A", |x| {
                let [d, omega, t, phi] = x.values(["x", "ω", "t", "φ"])?;
                Ok(d / nonzero((omega * t + phi).sin(), "Invalid phase - sine term is zero")?)
            })
            .branch("ω", |x| {
                let [d, a, t, phi] = x.values(["x", "A", "t", "φ"])?;
                Ok((real_asin(d / a, "Displacement cannot exceed amplitude")? - phi) / t)
            })
            .branch("t", |x| {
                let [d, a, omega, phi] = x.values(["x", "A", "ω", "φ"])?;
                Ok((real_asin(d / a, "Displacement cannot exceed amplitude")? - phi) / omega)
            })
            .branch("φ", |x| {
                let [d, a, omega, t] = x.values(["x", "A", "ω", "t"])?;
                Ok(real_asin(d / a, "Displacement cannot exceed amplitude")? - omega * t)
            }),
        Formula::new("Angular Frequency (ω = 2π/T)", Category::Oscillations)
            .var("ω", "Angular frequency", &["rad/s"], "rad/s")
            .var("T", "Time period", &["s"], "s")
            .branch("ω", |x| x.require("T").map(|t| 2.0 * PI / t))
            .branch("T", |x| x.require("ω").map(|omega| 2.0 * PI / omega)),
    ]
}

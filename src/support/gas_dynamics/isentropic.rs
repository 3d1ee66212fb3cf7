//! Isentropic flow relations.
//!
//! With `k = 1 + (γ−1)/2·M²`:
//!
//! - `T/Tt = k⁻¹`
//! - `P/Pt = k^(−γ/(γ−1))`
//! - `ρ/ρt = k^(−1/(γ−1))`
//! - `f_M = A*/A = M·((γ+1)/(2k))^((γ+1)/(2(γ−1)))`
//!
//! The area–Mach relation is carried in its reciprocal form `f_M`, which is
//! finite everywhere: `f_M(0) = 0`, it rises to its maximum `f_M(1) = 1` at
//! the sonic point and decays toward zero as `M → ∞`. Each value in `(0, 1)`
//! therefore has exactly one subsonic and one supersonic Mach number. The
//! conventional `A/A* = 1/f_M` is infinite at `M = 0`. At extreme Mach
//! numbers the ratios underflow to zero; see [`isentropic_ratios`].

use super::{GasDynamicsError, check_gamma, check_mach};

/// Static-to-stagnation ratios at a Mach number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsentropicRatios {
    /// `T/Tt`.
    pub temperature: f64,

    /// `P/Pt`.
    pub pressure: f64,

    /// `ρ/ρt`.
    pub density: f64,

    /// `A/A*`, infinite at `M = 0`.
    pub area: f64,

    /// `f_M = A*/A`.
    pub area_mach: f64,
}

/// Computes the isentropic ratios at `mach`.
///
/// Every finite Mach number is accepted, but the ratios fall off as powers of
/// `M` and underflow to `0.0` well before `f64` runs out of range: with
/// `γ = 1.4`, `P/Pt` reaches zero near `M ≈ 1e47` and `f_M` near `M ≈ 1e55`.
/// Past that point `area` is infinite and the ratios carry no information.
///
/// # Errors
///
/// Returns [`GasDynamicsError::Domain`] if `mach` is negative or non-finite,
/// or if `gamma ≤ 1`.
pub fn isentropic_ratios(mach: f64, gamma: f64) -> Result<IsentropicRatios, GasDynamicsError> {
    check_gamma(gamma)?;
    check_mach(mach)?;

    let k = stagnation_factor(mach, gamma);
    let area_mach = area_mach_unchecked(mach, gamma);

    Ok(IsentropicRatios {
        temperature: k.recip(),
        pressure: k.powf(-gamma / (gamma - 1.0)),
        density: k.powf(-1.0 / (gamma - 1.0)),
        area: area_mach.recip(),
        area_mach,
    })
}

/// Computes the area–Mach relation `f_M = A*/A`.
///
/// # Errors
///
/// Returns [`GasDynamicsError::Domain`] if `mach` is negative or non-finite,
/// or if `gamma ≤ 1`.
pub fn area_mach_relation(mach: f64, gamma: f64) -> Result<f64, GasDynamicsError> {
    check_gamma(gamma)?;
    check_mach(mach)?;
    Ok(area_mach_unchecked(mach, gamma))
}

/// `T/Tt` without validation.
pub(crate) fn temperature_ratio_unchecked(mach: f64, gamma: f64) -> f64 {
    stagnation_factor(mach, gamma).recip()
}

/// `P/Pt` without validation.
pub(crate) fn pressure_ratio_unchecked(mach: f64, gamma: f64) -> f64 {
    stagnation_factor(mach, gamma).powf(-gamma / (gamma - 1.0))
}

/// `f_M` without validation.
///
/// The numerator `(γ+1)/2` is written as the sonic stagnation factor so the
/// base of the power is exactly one at `M = 1`, giving `f_M(1) = 1` exactly.
/// Rounding near the sonic point is clamped to that maximum.
pub(crate) fn area_mach_unchecked(mach: f64, gamma: f64) -> f64 {
    let exponent = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    let base = stagnation_factor(1.0, gamma) / stagnation_factor(mach, gamma);
    (mach * base.powf(exponent)).min(1.0)
}

/// `1 + (γ−1)/2·M²`
fn stagnation_factor(mach: f64, gamma: f64) -> f64 {
    1.0 + 0.5 * (gamma - 1.0) * mach * mach
}

//! Inverse of the area–Mach relation.
//!
//! `f_M = A*/A` maps every Mach number to `[0, 1]` and every value in
//! `(0, 1)` back to two Mach numbers, one on each side of `M = 1`. The inverse
//! therefore takes the branch to solve on as an argument, and the root solve
//! is restricted to that branch's interval from the start:
//!
//! - [`FlowRegime::Subsonic`]: `M ∈ [0, 1]`
//! - [`FlowRegime::Supersonic`]: `M ∈ [1, M_max]`, with `M_max` grown until
//!   it brackets the root
//!
//! A value above one has no root on either branch (the passage would have to
//! be smaller than the sonic throat, so the flow is choked). A value of zero
//! is reached at `M = 0` on the subsonic branch and never on the supersonic
//! branch.

use super::{
    FlowRegime, GasDynamicsError, check_gamma,
    isentropic::area_mach_unchecked,
    root::{RootConfig, solve_bracketed},
};

/// Largest supersonic Mach number searched before giving up.
const MAX_SUPERSONIC_MACH: f64 = 1e12;

/// Values within this distance above one are treated as exactly sonic.
const SONIC_TOLERANCE: f64 = 1e-12;

/// Returns the Mach number on `branch` whose area–Mach value is `f_m`.
///
/// Uses the default [`RootConfig`].
///
/// # Errors
///
/// See [`mach_from_area_mach_relation_with`].
pub fn mach_from_area_mach_relation(
    f_m: f64,
    gamma: f64,
    branch: FlowRegime,
) -> Result<f64, GasDynamicsError> {
    mach_from_area_mach_relation_with(f_m, gamma, branch, &RootConfig::default())
}

/// Returns the Mach number on `branch` whose area–Mach value is `f_m`.
///
/// A value of exactly one (the sonic point) returns `M = 1` on either branch.
///
/// # Errors
///
/// - [`GasDynamicsError::Domain`] if `gamma ≤ 1` or `f_m` is negative or non-finite.
/// - [`GasDynamicsError::NoRoot`] if `f_m > 1`, or if `f_m = 0` on the
///   supersonic branch.
/// - [`GasDynamicsError::Solver`] if bisection fails to converge.
pub fn mach_from_area_mach_relation_with(
    f_m: f64,
    gamma: f64,
    branch: FlowRegime,
    config: &RootConfig,
) -> Result<f64, GasDynamicsError> {
    check_gamma(gamma)?;

    if !f_m.is_finite() || f_m < 0.0 {
        return Err(GasDynamicsError::domain(format!(
            "area-Mach value must be finite and non-negative: f_M={f_m}"
        )));
    }

    if f_m > 1.0 + SONIC_TOLERANCE {
        return Err(GasDynamicsError::NoRoot {
            f_m,
            branch,
            reason: "value exceeds the sonic maximum of 1, flow is choked",
        });
    }

    if f_m >= 1.0 {
        return Ok(1.0);
    }

    let f = |mach: f64| area_mach_unchecked(mach, gamma);

    match branch {
        FlowRegime::Subsonic => {
            if f_m == 0.0 {
                return Ok(0.0);
            }
            solve_bracketed(f, f_m, f_m, [0.0, 1.0], config, "subsonic area-Mach inversion")
        }
        FlowRegime::Supersonic => {
            if f_m == 0.0 {
                return Err(GasDynamicsError::NoRoot {
                    f_m,
                    branch,
                    reason: "the supersonic branch only reaches zero as M tends to infinity",
                });
            }

            let mut upper = 2.0;
            while f(upper) > f_m {
                upper *= 2.0;
                if upper > MAX_SUPERSONIC_MACH {
                    return Err(GasDynamicsError::NoRoot {
                        f_m,
                        branch,
                        reason: "root lies beyond the supported Mach range",
                    });
                }
            }

            solve_bracketed(f, f_m, f_m, [1.0, upper], config, "supersonic area-Mach inversion")
        }
    }
}

//! Normal and oblique shock relations.
//!
//! An oblique shock at angle `β` to an upstream flow of Mach `M1` acts on
//! the normal component `Mn1 = M1·sin β` exactly like a normal shock, while
//! the tangential component passes through unchanged. The flow is turned by
//! the deflection (wedge) angle `θ`, related to `β` by
//!
//! `tan θ = 2·cot β·(M1²·sin²β − 1) / (M1²·(γ + cos 2β) + 2)`.
//!
//! For a given `M1`, `θ` rises from zero at the Mach angle `μ = asin(1/M1)`
//! to a maximum `θ_max` at `β_max`, then falls back to zero at `β = 90°`
//! (the normal shock). Shock angles between `μ` and `β_max` form the weak
//! attached branch. A wedge steeper than `θ_max` cannot hold an attached
//! shock, and the shock detaches.

use std::f64::consts::FRAC_PI_2;

use uom::si::{angle::radian, f64::Angle};

use super::{
    GasDynamicsError, check_gamma,
    root::{RootConfig, solve_bracketed},
};

/// Slack on the 90° upper limit for angles converted from degrees.
const ANGLE_TOLERANCE: f64 = 1e-12;

/// Largest mismatch, in radians, between a given wedge angle and the
/// deflection the θ–β–M relation assigns to the given shock angle.
const DEFLECTION_TOLERANCE: f64 = 1e-6;

/// Jump conditions across a shock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockJump {
    /// Downstream Mach number `M2`.
    pub mach: f64,

    /// Static pressure ratio `P2/P1`.
    pub pressure_ratio: f64,

    /// Static temperature ratio `T2/T1`.
    pub temperature_ratio: f64,

    /// Density ratio `ρ2/ρ1`.
    pub density_ratio: f64,

    /// Stagnation pressure ratio `Pt2/Pt1`, below one for any real shock.
    pub stagnation_pressure_ratio: f64,
}

/// Computes the jump across a normal shock.
///
/// # Errors
///
/// Returns [`GasDynamicsError::Domain`] if `gamma ≤ 1` or `mach` is not a
/// finite value above one.
pub fn normal_shock(mach: f64, gamma: f64) -> Result<ShockJump, GasDynamicsError> {
    check_gamma(gamma)?;
    check_supersonic(mach)?;

    let normal = NormalJump::new(mach, gamma);
    let mach_normal = normal.mach_normal;
    Ok(normal.into_jump(mach_normal))
}

/// Computes the jump across an oblique shock.
///
/// `wedge_angle` is the flow deflection `θ` and `shock_angle` the wave
/// angle `β`, both measured from the upstream flow direction.
///
/// # Errors
///
/// - [`GasDynamicsError::Domain`] if `gamma ≤ 1`, `mach ≤ 1`, the wedge angle
///   is negative, the shock angle does not exceed the Mach angle, or the wedge
///   angle differs from the θ–β–M deflection of the shock angle by more than
///   `1e-6` rad.
/// - [`GasDynamicsError::DetachedShock`] if the shock angle exceeds the maximum
///   attached-shock angle or the wedge angle exceeds the maximum deflection.
pub fn oblique_shock(
    mach: f64,
    gamma: f64,
    wedge_angle: Angle,
    shock_angle: Angle,
) -> Result<ShockJump, GasDynamicsError> {
    check_gamma(gamma)?;
    check_supersonic(mach)?;

    let theta = wedge_angle.get::<radian>();
    let beta = shock_angle.get::<radian>();

    if !theta.is_finite() || theta < 0.0 {
        return Err(GasDynamicsError::domain(format!(
            "wedge angle must be finite and non-negative: theta={theta} rad"
        )));
    }

    let mu = (1.0 / mach).asin();
    if !beta.is_finite() || beta <= mu {
        return Err(GasDynamicsError::domain(format!(
            "shock angle must exceed the Mach angle: beta={beta} rad, mu={mu} rad at M1={mach}"
        )));
    }

    let beta_max = max_shock_angle_unchecked(mach, gamma);
    if beta > beta_max {
        return Err(GasDynamicsError::DetachedShock {
            mach,
            context: format!(
                "shock angle {beta} rad exceeds the maximum attached angle {beta_max} rad"
            ),
        });
    }

    let theta_max = deflection_unchecked(mach, gamma, beta_max);
    if theta > theta_max {
        return Err(GasDynamicsError::DetachedShock {
            mach,
            context: format!(
                "wedge angle {theta} rad exceeds the maximum deflection {theta_max} rad"
            ),
        });
    }

    let deflection = deflection_unchecked(mach, gamma, beta);
    if (theta - deflection).abs() > DEFLECTION_TOLERANCE {
        return Err(GasDynamicsError::domain(format!(
            "wedge angle {theta} rad does not match the deflection {deflection} rad \
             of a shock at {beta} rad"
        )));
    }

    if beta <= theta {
        return Err(GasDynamicsError::domain(format!(
            "shock angle must exceed the wedge angle: beta={beta} rad, theta={theta} rad"
        )));
    }

    let normal = NormalJump::new(mach * beta.sin(), gamma);
    let mach_normal = normal.mach_normal;
    Ok(normal.into_jump(mach_normal / (beta - theta).sin()))
}

/// Returns the Mach angle `μ = asin(1/M)`.
///
/// # Errors
///
/// Returns [`GasDynamicsError::Domain`] unless `mach` is finite and at least one.
pub fn mach_angle(mach: f64) -> Result<Angle, GasDynamicsError> {
    if !mach.is_finite() || mach < 1.0 {
        return Err(GasDynamicsError::domain(format!(
            "Mach angle requires M >= 1: M={mach}"
        )));
    }
    Ok(Angle::new::<radian>((1.0 / mach).asin()))
}

/// Returns the shock angle `β_max` at which the deflection is greatest.
///
/// # Errors
///
/// Returns [`GasDynamicsError::Domain`] if `gamma ≤ 1` or `mach ≤ 1`.
pub fn max_shock_angle(mach: f64, gamma: f64) -> Result<Angle, GasDynamicsError> {
    check_gamma(gamma)?;
    check_supersonic(mach)?;
    Ok(Angle::new::<radian>(max_shock_angle_unchecked(mach, gamma)))
}

/// Returns the largest wedge angle that holds an attached shock.
///
/// # Errors
///
/// Returns [`GasDynamicsError::Domain`] if `gamma ≤ 1` or `mach ≤ 1`.
pub fn max_deflection_angle(mach: f64, gamma: f64) -> Result<Angle, GasDynamicsError> {
    check_gamma(gamma)?;
    check_supersonic(mach)?;
    let beta_max = max_shock_angle_unchecked(mach, gamma);
    Ok(Angle::new::<radian>(deflection_unchecked(
        mach, gamma, beta_max,
    )))
}

/// Returns the deflection `θ` produced by a shock at `shock_angle` (θ–β–M relation).
///
/// # Errors
///
/// Returns [`GasDynamicsError::Domain`] if `gamma ≤ 1`, `mach ≤ 1`, or the
/// shock angle lies outside `[μ, 90°]`.
pub fn deflection_angle(
    mach: f64,
    gamma: f64,
    shock_angle: Angle,
) -> Result<Angle, GasDynamicsError> {
    check_gamma(gamma)?;
    check_supersonic(mach)?;

    let beta = shock_angle.get::<radian>();
    let mu = (1.0 / mach).asin();
    if !beta.is_finite() || beta < mu || beta > FRAC_PI_2 + ANGLE_TOLERANCE {
        return Err(GasDynamicsError::domain(format!(
            "shock angle must lie between the Mach angle and 90 degrees: beta={beta} rad"
        )));
    }

    Ok(Angle::new::<radian>(deflection_unchecked(mach, gamma, beta)))
}

/// Returns the weak attached shock angle for a wedge of `wedge_angle`.
///
/// A zero wedge returns the Mach angle (an infinitely weak wave).
///
/// # Errors
///
/// - [`GasDynamicsError::Domain`] if `gamma ≤ 1`, `mach ≤ 1`, or the wedge angle
///   is negative.
/// - [`GasDynamicsError::DetachedShock`] if the wedge exceeds the maximum deflection.
/// - [`GasDynamicsError::Solver`] if bisection fails to converge.
pub fn weak_shock_angle(
    mach: f64,
    gamma: f64,
    wedge_angle: Angle,
    config: &RootConfig,
) -> Result<Angle, GasDynamicsError> {
    check_gamma(gamma)?;
    check_supersonic(mach)?;

    let theta = wedge_angle.get::<radian>();
    if !theta.is_finite() || theta < 0.0 {
        return Err(GasDynamicsError::domain(format!(
            "wedge angle must be finite and non-negative: theta={theta} rad"
        )));
    }

    let mu = (1.0 / mach).asin();
    if theta == 0.0 {
        return Ok(Angle::new::<radian>(mu));
    }

    let beta_max = max_shock_angle_unchecked(mach, gamma);
    let theta_max = deflection_unchecked(mach, gamma, beta_max);
    if theta > theta_max {
        return Err(GasDynamicsError::DetachedShock {
            mach,
            context: format!(
                "wedge angle {theta} rad exceeds the maximum deflection {theta_max} rad"
            ),
        });
    }

    let beta = solve_bracketed(
        |beta| deflection_unchecked(mach, gamma, beta),
        theta,
        1.0,
        [mu, beta_max],
        config,
        "weak oblique shock angle",
    )?;

    Ok(Angle::new::<radian>(beta))
}

fn check_supersonic(mach: f64) -> Result<(), GasDynamicsError> {
    if mach.is_finite() && mach > 1.0 {
        Ok(())
    } else {
        Err(GasDynamicsError::domain(format!(
            "shock relations require supersonic upstream flow: M1={mach}"
        )))
    }
}

/// `β_max` from `sin²β_max = [(γ+1)M² − 4 + √((γ+1)((γ+1)M⁴ + 8(γ−1)M² + 16))] / (4γM²)`.
fn max_shock_angle_unchecked(mach: f64, gamma: f64) -> f64 {
    let m2 = mach * mach;
    let root =
        ((gamma + 1.0) * ((gamma + 1.0) * m2 * m2 + 8.0 * (gamma - 1.0) * m2 + 16.0)).sqrt();
    let sin2 = ((gamma + 1.0) * m2 - 4.0 + root) / (4.0 * gamma * m2);
    sin2.sqrt().asin()
}

fn deflection_unchecked(mach: f64, gamma: f64, beta: f64) -> f64 {
    let m2 = mach * mach;
    let numerator = 2.0 * (m2 * beta.sin().powi(2) - 1.0) / beta.tan();
    let denominator = m2 * (gamma + (2.0 * beta).cos()) + 2.0;
    (numerator / denominator).atan()
}

/// Normal-shock jump on the normal Mach component.
struct NormalJump {
    mach_normal: f64,
    pressure_ratio: f64,
    density_ratio: f64,
    stagnation_pressure_ratio: f64,
}

impl NormalJump {
    fn new(mn1: f64, gamma: f64) -> Self {
        let mn1_sq = mn1 * mn1;
        let gm1 = gamma - 1.0;
        let gp1 = gamma + 1.0;

        let mn2_sq = (1.0 + 0.5 * gm1 * mn1_sq) / (gamma * mn1_sq - 0.5 * gm1);
        let pressure_ratio = 1.0 + 2.0 * gamma / gp1 * (mn1_sq - 1.0);
        let density_ratio = gp1 * mn1_sq / (gm1 * mn1_sq + 2.0);
        let stagnation_pressure_ratio = density_ratio.powf(gamma / gm1)
            * (gp1 / (2.0 * gamma * mn1_sq - gm1)).powf(1.0 / gm1);

        Self {
            mach_normal: mn2_sq.sqrt(),
            pressure_ratio,
            density_ratio,
            stagnation_pressure_ratio,
        }
    }

    fn into_jump(self, mach: f64) -> ShockJump {
        ShockJump {
            mach,
            pressure_ratio: self.pressure_ratio,
            temperature_ratio: self.pressure_ratio / self.density_ratio,
            density_ratio: self.density_ratio,
            stagnation_pressure_ratio: self.stagnation_pressure_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::angle::degree;

    fn deg(value: f64) -> Angle {
        Angle::new::<degree>(value)
    }

    #[test]
    fn normal_shock_at_mach_2() {
        let jump = normal_shock(2.0, 1.4).unwrap();

        assert_relative_eq!(jump.mach, 0.5774, epsilon = 1e-4);
        assert_relative_eq!(jump.pressure_ratio, 4.5, epsilon = 1e-12);
        assert_relative_eq!(jump.density_ratio, 2.6667, epsilon = 1e-4);
        assert_relative_eq!(jump.temperature_ratio, 1.6875, epsilon = 1e-4);
        assert_relative_eq!(jump.stagnation_pressure_ratio, 0.7209, epsilon = 1e-4);
    }

    #[test]
    fn oblique_shock_chart_values_for_15_degree_wedge_at_mach_2() {
        let beta = weak_shock_angle(2.0, 1.4, deg(15.0), &RootConfig::default()).unwrap();
        assert_relative_eq!(beta.get::<degree>(), 45.34, epsilon = 1e-2);

        let jump = oblique_shock(2.0, 1.4, deg(15.0), beta).unwrap();
        assert_relative_eq!(jump.mach, 1.4457, epsilon = 1e-2);
        assert_relative_eq!(jump.pressure_ratio, 2.1947, epsilon = 1e-2);
        assert_relative_eq!(jump.temperature_ratio, 1.2694, epsilon = 1e-2);
        assert_relative_eq!(jump.stagnation_pressure_ratio, 0.9524, epsilon = 1e-2);
    }

    #[test]
    fn maximum_deflection_at_mach_2() {
        assert_relative_eq!(
            max_shock_angle(2.0, 1.4).unwrap().get::<degree>(),
            64.67,
            epsilon = 1e-2
        );
        assert_relative_eq!(
            max_deflection_angle(2.0, 1.4).unwrap().get::<degree>(),
            22.97,
            epsilon = 1e-2
        );
    }

    #[test]
    fn deflection_vanishes_at_mach_angle_and_normal_shock() {
        let mu = mach_angle(2.0).unwrap();
        assert_relative_eq!(mu.get::<degree>(), 30.0, epsilon = 1e-10);
        assert_relative_eq!(
            deflection_angle(2.0, 1.4, mu).unwrap().get::<radian>(),
            0.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            deflection_angle(2.0, 1.4, deg(90.0)).unwrap().get::<radian>(),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_wedge_gives_mach_wave() {
        let beta = weak_shock_angle(3.0, 1.4, deg(0.0), &RootConfig::default()).unwrap();
        assert_relative_eq!(beta.get::<radian>(), (1.0_f64 / 3.0).asin());
    }

    #[test]
    fn subsonic_upstream_is_out_of_domain() {
        assert!(matches!(
            oblique_shock(0.9, 1.4, deg(5.0), deg(60.0)),
            Err(GasDynamicsError::Domain { .. })
        ));
        assert!(matches!(
            normal_shock(1.0, 1.4),
            Err(GasDynamicsError::Domain { .. })
        ));
    }

    #[test]
    fn shock_angle_below_mach_angle_is_out_of_domain() {
        assert!(matches!(
            oblique_shock(2.0, 1.4, deg(0.0), deg(25.0)),
            Err(GasDynamicsError::Domain { .. })
        ));
    }

    #[test]
    fn inconsistent_angle_pair_is_out_of_domain() {
        // A 35° shock at M1 = 2 turns the flow by about 5.75°, not 20°.
        assert!(matches!(
            oblique_shock(2.0, 1.4, deg(20.0), deg(35.0)),
            Err(GasDynamicsError::Domain { .. })
        ));

        let theta = deflection_angle(2.0, 1.4, deg(35.0)).unwrap();
        assert_relative_eq!(theta.get::<degree>(), 5.75, epsilon = 1e-2);

        let jump = oblique_shock(2.0, 1.4, theta, deg(35.0)).unwrap();
        assert!(jump.mach < 2.0);
    }

    #[test]
    fn detached_shock_is_reported() {
        assert!(matches!(
            oblique_shock(2.0, 1.4, deg(10.0), deg(70.0)),
            Err(GasDynamicsError::DetachedShock { .. })
        ));
        assert!(matches!(
            weak_shock_angle(2.0, 1.4, deg(25.0), &RootConfig::default()),
            Err(GasDynamicsError::DetachedShock { .. })
        ));
    }

    #[test]
    fn shocks_lose_stagnation_pressure() {
        for mach in [1.1, 1.5, 2.0, 4.0, 8.0] {
            let jump = normal_shock(mach, 1.4).unwrap();
            assert!(jump.stagnation_pressure_ratio < 1.0);
            assert!(jump.mach < 1.0);
        }
    }
}

//! One-dimensional gas dynamics relations for a calorically perfect gas.
//!
//! - [`isentropic`]: stagnation-to-static ratios and the area–Mach relation
//! - [`area_mach`]: the inverse area–Mach relation, restricted to one branch
//! - [`shock`]: normal and oblique shock jump conditions
//!
//! All functions are pure and validate their inputs, returning a
//! [`GasDynamicsError`] instead of a meaningless number.

mod error;
mod regime;
mod root;

pub mod area_mach;
pub mod isentropic;
pub mod shock;

pub use area_mach::{mach_from_area_mach_relation, mach_from_area_mach_relation_with};
pub use error::GasDynamicsError;
pub use isentropic::{IsentropicRatios, area_mach_relation, isentropic_ratios};
pub use regime::FlowRegime;
pub use root::RootConfig;
pub use shock::{
    ShockJump, deflection_angle, mach_angle, max_deflection_angle, max_shock_angle, normal_shock,
    oblique_shock, weak_shock_angle,
};

use crate::support::constraint::{AboveUnity, Constraint, ConstraintError};

/// Checks that the ratio of specific heats exceeds one.
fn check_gamma(gamma: f64) -> Result<(), GasDynamicsError> {
    AboveUnity::check(&gamma).map_err(|err| {
        let reason = match err {
            ConstraintError::NotANumber => "is not a number",
            _ => "must exceed 1",
        };
        GasDynamicsError::domain(format!("ratio of specific heats {reason}: gamma={gamma}"))
    })
}

/// Checks that a Mach number is finite and non-negative.
fn check_mach(mach: f64) -> Result<(), GasDynamicsError> {
    if mach.is_finite() && mach >= 0.0 {
        Ok(())
    } else {
        Err(GasDynamicsError::domain(format!(
            "Mach number must be finite and non-negative: M={mach}"
        )))
    }
}

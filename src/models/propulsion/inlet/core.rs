//! Engine-face state of an inlet for a batch of operating conditions.
//!
//! Each element is classified from its freestream Mach number and capture
//! stream-tube area, then carried to the engine face either isentropically
//! (subsonic) or through a shock at the capture plane followed by isentropic
//! flow (supersonic). Elements are independent and may be solved in any
//! order; with the `rayon` feature they are solved in parallel.

mod config;
mod element;
mod error;
mod input;
mod results;
mod solve;

#[cfg(test)]
mod test_support;

pub use config::{SolveConfig, SolveMode};
pub use element::classify;
pub use error::{InletError, InputError, SolveInletError};
pub use input::{Batched, FreestreamState, InletGeometry, ShockGeometry};
pub use results::{ElementOutcome, ElementStatus, EngineFaceState, FlowState, InletSolution};

use crate::support::thermo::GasProperties;

/// Solves the engine-face state of every batch element.
///
/// Scalar inputs broadcast against array inputs, and every array must have
/// the same length.
///
/// In [`SolveMode::Batch`] a failed element holds NaN in every output field
/// and its reason in [`InletSolution::status`]; the call itself succeeds.
///
/// # Errors
///
/// Returns [`SolveInletError::Input`] if the array inputs differ in length.
/// In [`SolveMode::Strict`], returns [`SolveInletError::Element`] for the
/// lowest-index element that failed.
pub fn solve_inlet(
    freestream: &FreestreamState,
    geometry: &InletGeometry,
    gas: &GasProperties,
    config: &SolveConfig,
) -> Result<InletSolution, SolveInletError> {
    solve::solve(freestream, geometry, gas, config)
}

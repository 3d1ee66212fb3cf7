use thiserror::Error;

use crate::support::{
    constraint::ConstraintError, gas_dynamics::GasDynamicsError, units::SpecificEnthalpy,
};

/// Errors in the batch inputs as a whole, detected before any element is solved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Two array inputs have different lengths.
    #[error(
        "batch length mismatch: {field} has {found} elements but {reference} has {expected}"
    )]
    LengthMismatch {
        field: &'static str,
        found: usize,
        reference: &'static str,
        expected: usize,
    },

    /// A duct area violates its constraint.
    #[error("invalid {field}: {source}")]
    Area {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },
}

/// Why a single batch element failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InletError {
    /// A gas dynamics relation rejected the element.
    #[error(transparent)]
    GasDynamics(#[from] GasDynamicsError),

    /// The engine-face static enthalpy exceeds the stagnation enthalpy.
    #[error("energy balance violated: h={static_enthalpy:?} exceeds h_t={stagnation_enthalpy:?}")]
    EnergyBalance {
        static_enthalpy: SpecificEnthalpy,
        stagnation_enthalpy: SpecificEnthalpy,
    },
}

/// Errors returned by an inlet solve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveInletError {
    /// The batch inputs are inconsistent.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// An element failed in [`SolveMode::Strict`](super::SolveMode::Strict).
    ///
    /// `index` is the lowest failing element.
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: InletError,
    },
}

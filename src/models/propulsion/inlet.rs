//! Inlet models.
//!
//! [`PitotInlet`] is the [`Model`] adapter over the batch solver in [`core`].

pub mod core;

pub use self::core::{
    Batched, ElementOutcome, ElementStatus, EngineFaceState, FlowState, FreestreamState,
    InletError, InletGeometry, InletSolution, InputError, ShockGeometry, SolveConfig, SolveMode,
    SolveInletError, classify, solve_inlet,
};

use twine_core::Model;

use crate::support::thermo::GasProperties;

/// An inlet of fixed geometry and gas, driven by freestream conditions.
///
/// The default [`ShockGeometry::Normal`] models a pitot inlet. Other shock
/// geometries turn it into an external-compression ramp inlet.
#[derive(Debug, Clone, PartialEq)]
pub struct PitotInlet {
    pub geometry: InletGeometry,
    pub gas: GasProperties,
    pub config: SolveConfig,
}

impl PitotInlet {
    /// Creates an inlet with the default [`SolveConfig`].
    #[must_use]
    pub fn new(geometry: InletGeometry, gas: GasProperties) -> Self {
        Self {
            geometry,
            gas,
            config: SolveConfig::default(),
        }
    }
}

impl Model for PitotInlet {
    type Input = FreestreamState;
    type Output = InletSolution;
    type Error = SolveInletError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve_inlet(input, &self.geometry, &self.gas, &self.config)
    }
}

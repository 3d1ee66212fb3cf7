use thiserror::Error;
use uom::si::f64::SpecificHeatCapacity;

use crate::support::units::SpecificGasConstant;

/// Errors that may occur when constructing [`GasProperties`](super::GasProperties).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GasPropertiesError {
    /// The ratio of specific heats is not greater than one.
    #[error("ratio of specific heats must exceed 1: gamma={gamma}")]
    Gamma { gamma: f64 },

    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: SpecificGasConstant },

    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },

    #[error("non-physical heat capacities: cv = cp - R must be > 0; cp={cp:?}, R={r:?}")]
    NonPhysicalCv {
        r: SpecificGasConstant,
        cp: SpecificHeatCapacity,
    },
}

//! Perfect-gas property definitions.
//!
//! The gas dynamics relations assume a calorically perfect gas: an ideal gas
//! equation of state with constant `cp`, `cv` and ratio of specific heats.
//! [`GasProperties`] is the validated, immutable bundle of those constants
//! supplied to each evaluation.

mod error;

pub mod fluid;
pub mod model;

pub use error::GasPropertiesError;
pub use model::{GasProperties, PerfectGasFluid, PerfectGasParameters};

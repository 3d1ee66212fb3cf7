//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities. This module adds the
//! few quantities and helpers the gas dynamics code needs that [`uom`] lacks.
//!
//! ## Enthalpy from absolute temperature
//!
//! A calorically perfect gas referenced to absolute zero has `h = cp·T`.
//! [`uom`] won't multiply a [`ThermodynamicTemperature`] by a heat capacity
//! (see [`AboveAbsoluteZero`]), so the temperature is first expressed as an
//! interval above 0 K:
//!
//! ```
//! use uom::si::{
//!     available_energy::joule_per_kilogram,
//!     f64::{SpecificHeatCapacity, ThermodynamicTemperature},
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//! use twine_inlets::support::units::{AboveAbsoluteZero, SpecificEnthalpy};
//!
//! let cp = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0);
//! let t = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let h: SpecificEnthalpy = cp * t.above_absolute_zero();
//! assert!((h.get::<joule_per_kilogram>() - 301_500.0).abs() < 1e-9);
//! ```
//!
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature

mod absolute_temperature;
mod quantities;

pub use absolute_temperature::AboveAbsoluteZero;
pub use quantities::{SpecificEnthalpy, SpecificGasConstant};

//! # Twine Inlets
//!
//! Compressible-flow inlet models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! The crate computes the state at an inlet's engine face from freestream
//! conditions and duct geometry, for a batch of operating points, assuming a
//! calorically perfect gas in quasi-steady one-dimensional flow.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Gas dynamics relations and the numeric and thermodynamic
//!   utilities the models are built on.
//!
//! ## Example
//!
//! ```
//! use twine_inlets::{
//!     models::propulsion::inlet::{
//!         Batched, FreestreamState, InletGeometry, SolveConfig, solve_inlet,
//!     },
//!     support::thermo::{GasProperties, fluid::Air},
//! };
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, Pressure, ThermodynamicTemperature},
//!     pressure::kilopascal,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let freestream = FreestreamState::new(
//!     Batched::Array(vec![0.3, 2.0]),
//!     Batched::Scalar(Pressure::new::<kilopascal>(100.0)),
//!     Batched::Scalar(ThermodynamicTemperature::new::<kelvin>(300.0)),
//!     Batched::Array(vec![
//!         Pressure::new::<kilopascal>(94.0),
//!         Pressure::new::<kilopascal>(12.8),
//!     ]),
//! );
//! let geometry = InletGeometry::new(
//!     Batched::Array(vec![
//!         Area::new::<square_meter>(0.5),
//!         Area::new::<square_meter>(1.0),
//!     ]),
//!     Area::new::<square_meter>(0.5),
//!     Area::new::<square_meter>(0.5),
//! )
//! .unwrap();
//! let gas = GasProperties::of::<Air>().unwrap();
//!
//! let solution = solve_inlet(&freestream, &geometry, &gas, &SolveConfig::default()).unwrap();
//! assert!(solution.all_solved());
//! assert!(solution.state.stagnation_pressure[1] < solution.state.stagnation_pressure[0]);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models or outside this crate.

pub mod models;
pub mod support;

//! Canonical fluid identifiers.
//!
//! A fluid type names a substance and supplies its perfect-gas constants
//! through [`PerfectGasFluid`](crate::support::thermo::PerfectGasFluid).

mod air;

pub use air::Air;

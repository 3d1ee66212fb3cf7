use uom::si::{
    f64::{Area, Pressure, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    gas_dynamics::GasDynamicsError,
};

use super::{Batched, InletGeometry};

/// Upstream flow conditions for a batch of operating points.
#[derive(Debug, Clone, PartialEq)]
pub struct FreestreamState {
    /// Freestream Mach number `M0`.
    pub mach: Batched<f64>,

    /// Freestream stagnation pressure `Pt0`.
    pub stagnation_pressure: Batched<Pressure>,

    /// Freestream stagnation temperature `Tt0`.
    pub stagnation_temperature: Batched<ThermodynamicTemperature>,

    /// Freestream static pressure `P0`.
    pub static_pressure: Batched<Pressure>,
}

impl FreestreamState {
    /// Creates a freestream state from its four fields.
    #[must_use]
    pub fn new(
        mach: Batched<f64>,
        stagnation_pressure: Batched<Pressure>,
        stagnation_temperature: Batched<ThermodynamicTemperature>,
        static_pressure: Batched<Pressure>,
    ) -> Self {
        Self {
            mach,
            stagnation_pressure,
            stagnation_temperature,
            static_pressure,
        }
    }

    /// Gathers the inputs of element `index`.
    pub(crate) fn element(&self, index: usize, geometry: &InletGeometry) -> ElementInput {
        ElementInput {
            mach: self.mach.at(index),
            stagnation_pressure: self.stagnation_pressure.at(index),
            stagnation_temperature: self.stagnation_temperature.at(index),
            static_pressure: self.static_pressure.at(index),
            stream_tube_area: geometry.stream_tube_area.at(index),
        }
    }
}

/// The scalar inputs of one batch element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ElementInput {
    pub(crate) mach: f64,
    pub(crate) stagnation_pressure: Pressure,
    pub(crate) stagnation_temperature: ThermodynamicTemperature,
    pub(crate) static_pressure: Pressure,
    pub(crate) stream_tube_area: Area,
}

impl ElementInput {
    /// Checks the physical preconditions of one element.
    ///
    /// # Errors
    ///
    /// Returns [`GasDynamicsError::Domain`] naming the first violated precondition.
    pub(crate) fn validate(&self) -> Result<(), GasDynamicsError> {
        let Self {
            mach,
            stagnation_pressure: pt,
            stagnation_temperature: tt,
            static_pressure: p,
            stream_tube_area: a0,
        } = *self;

        if !mach.is_finite() || mach < 0.0 {
            return Err(GasDynamicsError::domain(format!(
                "freestream Mach number must be finite and non-negative: M0={mach}"
            )));
        }

        if !pt.is_finite() || StrictlyPositive::check(&pt).is_err() {
            return Err(GasDynamicsError::domain(format!(
                "stagnation pressure must be finite and positive: Pt={pt:?}"
            )));
        }

        if !tt.is_finite() || tt.get::<kelvin>() <= 0.0 {
            return Err(GasDynamicsError::domain(format!(
                "stagnation temperature must be finite and positive: Tt={tt:?}"
            )));
        }

        if !p.is_finite() || StrictlyPositive::check(&p).is_err() {
            return Err(GasDynamicsError::domain(format!(
                "static pressure must be finite and positive: P={p:?}"
            )));
        }

        if p > pt {
            return Err(GasDynamicsError::domain(format!(
                "static pressure exceeds stagnation pressure: P={p:?}, Pt={pt:?}"
            )));
        }

        if !a0.is_finite() || NonNegative::check(&a0).is_err() {
            return Err(GasDynamicsError::domain(format!(
                "stream-tube area must be finite and non-negative: A0={a0:?}"
            )));
        }

        Ok(())
    }
}

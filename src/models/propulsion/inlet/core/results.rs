//! Results of an inlet batch solve.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, MassRate, Pressure, ThermodynamicTemperature, Velocity},
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    gas_dynamics::{FlowRegime, ShockJump},
    units::SpecificEnthalpy,
};

use super::InletError;

/// Engine-face flow state of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineFaceState {
    pub stagnation_temperature: ThermodynamicTemperature,
    pub stagnation_pressure: Pressure,
    pub stagnation_enthalpy: SpecificEnthalpy,
    pub mach: f64,
    pub static_temperature: ThermodynamicTemperature,
    pub static_pressure: Pressure,
    pub static_enthalpy: SpecificEnthalpy,
    pub density: MassDensity,
    pub velocity: Velocity,
    pub mass_flow: MassRate,
}

impl EngineFaceState {
    /// The placeholder stored for a failed element.
    #[must_use]
    pub fn nan() -> Self {
        Self {
            stagnation_temperature: ThermodynamicTemperature::new::<kelvin>(f64::NAN),
            stagnation_pressure: Pressure::new::<pascal>(f64::NAN),
            stagnation_enthalpy: SpecificEnthalpy::new::<joule_per_kilogram>(f64::NAN),
            mach: f64::NAN,
            static_temperature: ThermodynamicTemperature::new::<kelvin>(f64::NAN),
            static_pressure: Pressure::new::<pascal>(f64::NAN),
            static_enthalpy: SpecificEnthalpy::new::<joule_per_kilogram>(f64::NAN),
            density: MassDensity::new::<kilogram_per_cubic_meter>(f64::NAN),
            velocity: Velocity::new::<meter_per_second>(f64::NAN),
            mass_flow: MassRate::new::<kilogram_per_second>(f64::NAN),
        }
    }
}

/// Engine-face flow state of a batch, one entry per element in every field.
///
/// Failed elements hold NaN in every field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowState {
    pub stagnation_temperature: Vec<ThermodynamicTemperature>,
    pub stagnation_pressure: Vec<Pressure>,
    pub stagnation_enthalpy: Vec<SpecificEnthalpy>,
    pub mach: Vec<f64>,
    pub static_temperature: Vec<ThermodynamicTemperature>,
    pub static_pressure: Vec<Pressure>,
    pub static_enthalpy: Vec<SpecificEnthalpy>,
    pub density: Vec<MassDensity>,
    pub velocity: Vec<Velocity>,
    pub mass_flow: Vec<MassRate>,
}

impl FlowState {
    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mach.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mach.is_empty()
    }

    /// Returns the state of element `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<EngineFaceState> {
        Some(EngineFaceState {
            stagnation_temperature: *self.stagnation_temperature.get(index)?,
            stagnation_pressure: *self.stagnation_pressure.get(index)?,
            stagnation_enthalpy: *self.stagnation_enthalpy.get(index)?,
            mach: *self.mach.get(index)?,
            static_temperature: *self.static_temperature.get(index)?,
            static_pressure: *self.static_pressure.get(index)?,
            static_enthalpy: *self.static_enthalpy.get(index)?,
            density: *self.density.get(index)?,
            velocity: *self.velocity.get(index)?,
            mass_flow: *self.mass_flow.get(index)?,
        })
    }

    fn push(&mut self, state: EngineFaceState) {
        self.stagnation_temperature.push(state.stagnation_temperature);
        self.stagnation_pressure.push(state.stagnation_pressure);
        self.stagnation_enthalpy.push(state.stagnation_enthalpy);
        self.mach.push(state.mach);
        self.static_temperature.push(state.static_temperature);
        self.static_pressure.push(state.static_pressure);
        self.static_enthalpy.push(state.static_enthalpy);
        self.density.push(state.density);
        self.velocity.push(state.velocity);
        self.mass_flow.push(state.mass_flow);
    }
}

impl Extend<EngineFaceState> for FlowState {
    fn extend<I: IntoIterator<Item = EngineFaceState>>(&mut self, iter: I) {
        for state in iter {
            self.push(state);
        }
    }
}

impl FromIterator<EngineFaceState> for FlowState {
    fn from_iter<I: IntoIterator<Item = EngineFaceState>>(iter: I) -> Self {
        let mut flow = Self::default();
        flow.extend(iter);
        flow
    }
}

/// How a solved element reached the engine face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementOutcome {
    /// Classification from `f_M0 · A0 / A_engineface`.
    pub regime: FlowRegime,

    /// Branch the engine-face Mach number was solved on.
    ///
    /// Always subsonic for a subsonic element. For a supersonic element it
    /// follows the post-shock Mach number.
    pub engine_face_branch: FlowRegime,

    /// The effective area–Mach value used for classification.
    pub area_mach_ratio: f64,

    /// The shock jump, for supersonic elements.
    pub shock: Option<ShockJump>,
}

/// Per-element result status.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementStatus {
    Solved(ElementOutcome),
    Failed(InletError),
}

impl ElementStatus {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// Returns the element's classification, if it was solved.
    #[must_use]
    pub fn regime(&self) -> Option<FlowRegime> {
        match self {
            Self::Solved(outcome) => Some(outcome.regime),
            Self::Failed(_) => None,
        }
    }

    /// Returns the failure reason, if the element failed.
    #[must_use]
    pub fn error(&self) -> Option<&InletError> {
        match self {
            Self::Solved(_) => None,
            Self::Failed(err) => Some(err),
        }
    }
}

/// Engine-face states and per-element statuses of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct InletSolution {
    pub state: FlowState,
    pub status: Vec<ElementStatus>,
}

impl InletSolution {
    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.status.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
    }

    /// Iterates over the failed elements and their errors, in index order.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &InletError)> {
        self.status
            .iter()
            .enumerate()
            .filter_map(|(index, status)| status.error().map(|err| (index, err)))
    }

    /// Returns `true` if every element was solved.
    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.status.iter().all(ElementStatus::is_solved)
    }
}

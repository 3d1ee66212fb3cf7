//! Calorically perfect gas constants.
//!
//! [`GasProperties`] bundles the ratio of specific heats, the specific heat at
//! constant pressure and the specific gas constant used by one evaluation of
//! the gas dynamics relations.
//!
//! # Assumptions
//!
//! - Ideal gas equation of state: `p = ρ·R·T`
//! - Calorically perfect: `cp`, `cv` and `gamma` do not vary with temperature
//! - Enthalpy is referenced to absolute zero: `h = cp·T`
//!
//! The three constants are accepted as given. A caller supplying `gamma`
//! independently of `cp` and `R` is responsible for their consistency;
//! [`GasProperties::from_parameters`] derives `gamma = cp / (cp − R)` instead.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{AboveUnity, Constrained, Constraint, StrictlyPositive},
    thermo::GasPropertiesError,
    units::{AboveAbsoluteZero, SpecificEnthalpy, SpecificGasConstant},
};

use super::ideal_gas_eos;

/// Constant parameters describing a perfect gas.
///
/// These values are typically provided by a fluid's [`PerfectGasFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGasParameters {
    pub gas_constant: SpecificGasConstant,
    pub cp: SpecificHeatCapacity,
}

impl PerfectGasParameters {
    #[must_use]
    pub fn new(gas_constant: SpecificGasConstant, cp: SpecificHeatCapacity) -> Self {
        Self { gas_constant, cp }
    }
}

/// Fluid constants for a perfect gas.
pub trait PerfectGasFluid {
    /// Returns the constant parameters of this fluid.
    fn parameters() -> PerfectGasParameters;
}

/// Validated gas properties for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    gamma: Constrained<f64, AboveUnity>,
    cp: SpecificHeatCapacity,
    r: SpecificGasConstant,
}

impl GasProperties {
    /// Creates gas properties from explicit constants.
    ///
    /// # Errors
    ///
    /// Returns [`GasPropertiesError`] if `gamma ≤ 1` or `cp`/`R` are not
    /// strictly positive.
    pub fn new(
        gamma: f64,
        cp: SpecificHeatCapacity,
        gas_constant: SpecificGasConstant,
    ) -> Result<Self, GasPropertiesError> {
        let gamma = AboveUnity::new(gamma).map_err(|_| GasPropertiesError::Gamma { gamma })?;

        if StrictlyPositive::check(&cp.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(GasPropertiesError::Cp { cp });
        }

        if StrictlyPositive::check(&gas_constant.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(GasPropertiesError::GasConstant { r: gas_constant });
        }

        Ok(Self {
            gamma,
            cp,
            r: gas_constant,
        })
    }

    /// Creates gas properties from `cp` and `R`, with `gamma = cp / (cp − R)`.
    ///
    /// # Errors
    ///
    /// Returns [`GasPropertiesError`] if a constant is invalid or `cv = cp − R`
    /// is not strictly positive.
    pub fn from_parameters(parameters: PerfectGasParameters) -> Result<Self, GasPropertiesError> {
        let PerfectGasParameters { gas_constant, cp } = parameters;

        if StrictlyPositive::check(&gas_constant.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(GasPropertiesError::GasConstant { r: gas_constant });
        }

        let cp_si = cp.get::<joule_per_kilogram_kelvin>();
        let cv_si = cp_si - gas_constant.get::<joule_per_kilogram_kelvin>();
        if StrictlyPositive::check(&cv_si).is_err() {
            return Err(GasPropertiesError::NonPhysicalCv {
                r: gas_constant,
                cp,
            });
        }

        Self::new(cp_si / cv_si, cp, gas_constant)
    }

    /// Creates gas properties from the constants of `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`GasPropertiesError`] if the fluid's constants are non-physical.
    pub fn of<Fluid: PerfectGasFluid>() -> Result<Self, GasPropertiesError> {
        Self::from_parameters(Fluid::parameters())
    }

    /// Ratio of specific heats, always greater than one.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma.get()
    }

    /// Specific heat at constant pressure.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        self.cp
    }

    /// Specific gas constant.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        self.r
    }

    /// Computes enthalpy with `h = cp·T`.
    #[must_use]
    pub fn enthalpy(&self, temperature: ThermodynamicTemperature) -> SpecificEnthalpy {
        self.cp * temperature.above_absolute_zero()
    }

    /// Computes density with `ρ = p / (R·T)`.
    #[must_use]
    pub fn density(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> MassDensity {
        ideal_gas_eos::density(temperature, pressure, self.r)
    }

    /// Computes the speed of sound with `a = √(γ·R·T)`.
    #[must_use]
    pub fn speed_of_sound(&self, temperature: ThermodynamicTemperature) -> Velocity {
        let r_t: SpecificEnthalpy = self.r * temperature.above_absolute_zero();
        Velocity::new::<meter_per_second>(
            (self.gamma() * r_t.get::<joule_per_kilogram>()).sqrt(),
        )
    }
}

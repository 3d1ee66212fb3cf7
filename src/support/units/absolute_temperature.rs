use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait expressing an absolute temperature as an interval above 0 K.
///
/// [`uom`] keeps [`ThermodynamicTemperature`] (a point on a scale) distinct
/// from [`TemperatureInterval`] (a difference), and only the latter combines
/// with heat capacities. Enthalpies referenced to absolute zero need the
/// temperature as an interval.
///
/// See [#380](https://github.com/iliekturtles/uom/issues/380) for background.
pub trait AboveAbsoluteZero {
    /// Returns `self − 0 K` as a temperature interval.
    fn above_absolute_zero(self) -> TemperatureInterval;
}

impl AboveAbsoluteZero for ThermodynamicTemperature {
    fn above_absolute_zero(self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(self.get::<abs_kelvin>())
    }
}

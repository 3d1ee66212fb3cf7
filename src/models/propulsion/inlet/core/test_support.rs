use uom::si::{
    area::square_meter,
    f64::{Area, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    pressure::kilopascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    gas_dynamics::isentropic_ratios,
    thermo::GasProperties,
    units::SpecificGasConstant,
};

use super::{Batched, FreestreamState, InletGeometry};

/// Air with `gamma = 1.4` exactly.
pub(super) fn air() -> GasProperties {
    GasProperties::new(
        1.4,
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0),
    )
    .unwrap()
}

/// A scalar freestream at `mach` with `Pt = 100 kPa` and `Tt = 300 K`.
///
/// The static pressure is the isentropic value for `mach`.
pub(super) fn freestream(mach: f64) -> FreestreamState {
    let stagnation_pressure = Pressure::new::<kilopascal>(100.0);
    let pressure_ratio = isentropic_ratios(mach, 1.4).unwrap().pressure;

    FreestreamState {
        mach: Batched::Scalar(mach),
        stagnation_pressure: Batched::Scalar(stagnation_pressure),
        stagnation_temperature: Batched::Scalar(ThermodynamicTemperature::new::<kelvin>(300.0)),
        static_pressure: Batched::Scalar(stagnation_pressure * pressure_ratio),
    }
}

/// A pitot geometry with scalar `A0`, in square meters.
pub(super) fn geometry(stream_tube: f64, capture: f64, engine_face: f64) -> InletGeometry {
    InletGeometry::new(
        Batched::Scalar(Area::new::<square_meter>(stream_tube)),
        Area::new::<square_meter>(capture),
        Area::new::<square_meter>(engine_face),
    )
    .unwrap()
}

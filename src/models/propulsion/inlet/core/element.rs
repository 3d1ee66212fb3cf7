//! Solves one batch element.
//!
//! Each element moves through the same stages:
//!
//! 1. Validate the element's inputs.
//! 2. Classify it from `f_M0 · A0 / A_engineface`.
//! 3. Take the subsonic or supersonic path to an engine-face Mach number and
//!    stagnation pressure.
//! 4. Assemble the engine-face state from the isentropic ratios.
//!
//! Any stage may fail with an [`InletError`], which ends the element.

use std::cmp::Ordering;

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassRate, Pressure, ThermodynamicTemperature, Velocity},
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    gas_dynamics::{
        FlowRegime, ShockJump, area_mach_relation,
        isentropic::{pressure_ratio_unchecked, temperature_ratio_unchecked},
        mach_from_area_mach_relation_with,
    },
    thermo::GasProperties,
};

use super::{
    ElementOutcome, EngineFaceState, InletError, InletGeometry, SolveConfig, input::ElementInput,
};

/// The engine-face Mach number and stagnation pressure reached by one path.
#[derive(Debug, Clone, Copy)]
struct Path {
    mach: f64,
    stagnation_pressure: Pressure,
    engine_face_branch: FlowRegime,
    shock: Option<ShockJump>,
}

/// Solves element `index`.
pub(super) fn solve_element(
    index: usize,
    input: &ElementInput,
    geometry: &InletGeometry,
    gas: &GasProperties,
    config: &SolveConfig,
) -> Result<(EngineFaceState, ElementOutcome), InletError> {
    input.validate()?;

    let gamma = gas.gamma();
    let area_mach_ratio = area_mach_relation(input.mach, gamma)?
        * geometry.engine_face_ratio(input.stream_tube_area);
    let regime = classify(area_mach_ratio);

    log::debug!(
        "element {index}: {regime} (M0={}, f_M0·A0/AE={area_mach_ratio})",
        input.mach
    );

    let path = match regime {
        FlowRegime::Subsonic => subsonic(input, area_mach_ratio, gamma, config)?,
        FlowRegime::Supersonic => supersonic(index, input, geometry, gamma, config)?,
    };

    let state = assemble(input, &path, geometry, gas)?;

    Ok((
        state,
        ElementOutcome {
            regime,
            engine_face_branch: path.engine_face_branch,
            area_mach_ratio,
            shock: path.shock,
        },
    ))
}

/// Classifies an element from its effective area–Mach value.
///
/// A value of one or less can be reached isentropically from the freestream
/// without choking, so the element is subsonic.
#[must_use]
pub fn classify(area_mach_ratio: f64) -> FlowRegime {
    if area_mach_ratio <= 1.0 {
        FlowRegime::Subsonic
    } else {
        FlowRegime::Supersonic
    }
}

/// Isentropic diffusion from the freestream to the engine face.
fn subsonic(
    input: &ElementInput,
    area_mach_ratio: f64,
    gamma: f64,
    config: &SolveConfig,
) -> Result<Path, InletError> {
    let mach = mach_from_area_mach_relation_with(
        area_mach_ratio,
        gamma,
        FlowRegime::Subsonic,
        &config.root,
    )?;

    Ok(Path {
        mach,
        stagnation_pressure: input.stagnation_pressure,
        engine_face_branch: FlowRegime::Subsonic,
        shock: None,
    })
}

/// A shock at the capture plane, then isentropic flow to the engine face.
///
/// The branch for the engine-face solve is chosen from the post-shock Mach
/// number, not from the freestream classification.
fn supersonic(
    index: usize,
    input: &ElementInput,
    geometry: &InletGeometry,
    gamma: f64,
    config: &SolveConfig,
) -> Result<Path, InletError> {
    let shock = geometry.shock.jump(input.mach, gamma, &config.root)?;

    let capture_ratio = geometry.engine_face_ratio(geometry.capture_area.into_inner());
    let area_mach_ratio = area_mach_relation(shock.mach, gamma)? * capture_ratio;

    let branch = FlowRegime::of_mach(shock.mach);

    log::debug!(
        "element {index}: post-shock M1={} (Pt2/Pt1={}), solving the {branch} branch",
        shock.mach,
        shock.stagnation_pressure_ratio
    );

    let mach = mach_from_area_mach_relation_with(area_mach_ratio, gamma, branch, &config.root)?;

    Ok(Path {
        mach,
        stagnation_pressure: input.stagnation_pressure * shock.stagnation_pressure_ratio,
        engine_face_branch: branch,
        shock: Some(shock),
    })
}

/// Builds the engine-face state from the path's Mach number and stagnation pressure.
fn assemble(
    input: &ElementInput,
    path: &Path,
    geometry: &InletGeometry,
    gas: &GasProperties,
) -> Result<EngineFaceState, InletError> {
    let gamma = gas.gamma();
    let stagnation_temperature = input.stagnation_temperature;

    let static_temperature = ThermodynamicTemperature::new::<kelvin>(
        stagnation_temperature.get::<kelvin>() * temperature_ratio_unchecked(path.mach, gamma),
    );
    let stagnation_enthalpy = gas.enthalpy(stagnation_temperature);
    let static_enthalpy = gas.enthalpy(static_temperature);

    // A NaN enthalpy cannot be shown to satisfy the balance either.
    if !matches!(
        static_enthalpy.partial_cmp(&stagnation_enthalpy),
        Some(Ordering::Less | Ordering::Equal)
    ) {
        return Err(InletError::EnergyBalance {
            static_enthalpy,
            stagnation_enthalpy,
        });
    }

    let kinetic = (stagnation_enthalpy - static_enthalpy).get::<joule_per_kilogram>();
    let velocity = Velocity::new::<meter_per_second>((2.0 * kinetic).sqrt());

    let static_pressure = path.stagnation_pressure * pressure_ratio_unchecked(path.mach, gamma);
    let density = gas.density(static_temperature, static_pressure);
    let mass_flow: MassRate = density * velocity * geometry.engine_face_area.into_inner();

    Ok(EngineFaceState {
        stagnation_temperature,
        stagnation_pressure: path.stagnation_pressure,
        stagnation_enthalpy,
        mach: path.mach,
        static_temperature,
        static_pressure,
        static_enthalpy,
        density,
        velocity,
        mass_flow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::kilopascal;

    use crate::{
        models::propulsion::inlet::core::test_support::{air, freestream, geometry},
        support::{gas_dynamics::GasDynamicsError, thermo::fluid::Air},
    };

    fn input(mach: f64) -> ElementInput {
        freestream(mach).element(0, &geometry(1.0, 1.0, 1.0))
    }

    #[test]
    fn classification_boundary_is_subsonic() {
        assert_eq!(classify(0.0), FlowRegime::Subsonic);
        assert_eq!(classify(1.0), FlowRegime::Subsonic);
        assert_eq!(classify(1.0 + 1e-9), FlowRegime::Supersonic);
    }

    #[test]
    fn sonic_engine_face() {
        // f_M0 · A0/AE = 1 exactly: M0 = 1 through a constant-area duct.
        let (state, outcome) = solve_element(
            0,
            &input(1.0),
            &geometry(1.0, 1.0, 1.0),
            &air(),
            &SolveConfig::default(),
        )
        .unwrap();

        assert_eq!(outcome.regime, FlowRegime::Subsonic);
        assert_eq!(state.mach, 1.0);
        assert_relative_eq!(
            state.static_temperature.get::<kelvin>(),
            300.0 / 1.2,
            max_relative = 1e-12
        );
    }

    #[test]
    fn velocity_matches_mach_times_speed_of_sound() {
        // cp, R and gamma must be consistent for v = M·a to hold exactly.
        let gas = GasProperties::of::<Air>().unwrap();
        let (state, _) = solve_element(
            0,
            &input(0.6),
            &geometry(1.0, 1.0, 1.0),
            &gas,
            &SolveConfig::default(),
        )
        .unwrap();

        let speed_of_sound = gas.speed_of_sound(state.static_temperature);
        assert_relative_eq!(
            state.velocity.get::<meter_per_second>(),
            state.mach * speed_of_sound.get::<meter_per_second>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn unverifiable_energy_balance_is_an_error() {
        let path = Path {
            mach: f64::NAN,
            stagnation_pressure: Pressure::new::<kilopascal>(100.0),
            engine_face_branch: FlowRegime::Subsonic,
            shock: None,
        };

        let result = assemble(&input(0.5), &path, &geometry(1.0, 1.0, 1.0), &air());
        assert!(matches!(result, Err(InletError::EnergyBalance { .. })));
    }

    #[test]
    fn subsonic_freestream_cannot_be_shocked() {
        // M0 = 0.9 into a stream tube 1.5x the engine face classifies as
        // supersonic, but a shock needs M0 > 1.
        let geometry = geometry(1.5, 1.0, 1.0);
        let result = solve_element(
            0,
            &freestream(0.9).element(0, &geometry),
            &geometry,
            &air(),
            &SolveConfig::default(),
        );
        assert!(matches!(
            result,
            Err(InletError::GasDynamics(GasDynamicsError::Domain { .. }))
        ));
    }
}

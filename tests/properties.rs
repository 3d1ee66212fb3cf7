//! Property-based tests for the gas dynamics relations and the inlet solver.

use proptest::prelude::*;
use twine_inlets::{
    models::propulsion::inlet::{
        Batched, ElementStatus, FreestreamState, InletGeometry, SolveConfig, classify, solve_inlet,
    },
    support::{
        gas_dynamics::{
            FlowRegime, RootConfig, area_mach_relation, isentropic_ratios,
            mach_from_area_mach_relation, max_deflection_angle, oblique_shock, weak_shock_angle,
        },
        thermo::GasProperties,
        units::SpecificGasConstant,
    },
};
use uom::si::{
    area::square_meter,
    f64::{Area, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    pressure::kilopascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

fn gas(gamma: f64) -> GasProperties {
    GasProperties::new(
        gamma,
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0),
    )
    .unwrap()
}

fn relative_error(actual: f64, expected: f64) -> f64 {
    (actual - expected).abs() / expected.abs().max(1e-300)
}

// ── Isentropic relations ─────────────────────────────────────────────

proptest! {
    /// Static-to-stagnation ratios lie in (0, 1] and f_M in [0, 1].
    #[test]
    fn isentropic_ratios_are_bounded(mach in 1e-6f64..10.0, gamma in 1.05f64..1.8) {
        let ratios = isentropic_ratios(mach, gamma).unwrap();

        for ratio in [ratios.temperature, ratios.pressure, ratios.density] {
            prop_assert!(ratio > 0.0 && ratio <= 1.0, "ratio {} at M={}", ratio, mach);
        }
        prop_assert!(ratios.area_mach > 0.0 && ratios.area_mach <= 1.0);
        prop_assert!(ratios.area >= 1.0);
    }

    /// Inverting f_M on the subsonic branch recovers a subsonic Mach number.
    #[test]
    fn subsonic_roundtrip(mach in 1e-12f64..0.98, gamma in 1.1f64..1.67) {
        let f_m = area_mach_relation(mach, gamma).unwrap();
        let solved = mach_from_area_mach_relation(f_m, gamma, FlowRegime::Subsonic).unwrap();

        prop_assert!(relative_error(solved, mach) < 1e-6, "M={} solved={}", mach, solved);
    }

    /// Inverting f_M on the supersonic branch recovers a supersonic Mach number.
    #[test]
    fn supersonic_roundtrip(mach in 1.02f64..10.0, gamma in 1.1f64..1.67) {
        let f_m = area_mach_relation(mach, gamma).unwrap();
        let solved = mach_from_area_mach_relation(f_m, gamma, FlowRegime::Supersonic).unwrap();

        prop_assert!(relative_error(solved, mach) < 1e-6, "M={} solved={}", mach, solved);
    }

    /// Each value strictly between 0 and 1 has one root on each side of M = 1.
    #[test]
    fn branches_are_exclusive(f_m in 0.01f64..0.99, gamma in 1.1f64..1.67) {
        let sub = mach_from_area_mach_relation(f_m, gamma, FlowRegime::Subsonic).unwrap();
        let sup = mach_from_area_mach_relation(f_m, gamma, FlowRegime::Supersonic).unwrap();

        prop_assert!(sub < 1.0);
        prop_assert!(sup > 1.0);
        prop_assert!(relative_error(area_mach_relation(sub, gamma).unwrap(), f_m) < 1e-9);
        prop_assert!(relative_error(area_mach_relation(sup, gamma).unwrap(), f_m) < 1e-9);
    }
}

// ── Shock relations ──────────────────────────────────────────────────

proptest! {
    /// Every attached oblique shock loses stagnation pressure and slows the flow.
    #[test]
    fn attached_shock_is_dissipative(
        mach in 1.2f64..6.0,
        gamma in 1.1f64..1.67,
        fraction in 0.1f64..0.9,
    ) {
        let wedge_angle = max_deflection_angle(mach, gamma).unwrap() * fraction;
        let shock_angle = weak_shock_angle(mach, gamma, wedge_angle, &RootConfig::default())
            .unwrap();
        let jump = oblique_shock(mach, gamma, wedge_angle, shock_angle).unwrap();

        prop_assert!(jump.stagnation_pressure_ratio < 1.0);
        prop_assert!(jump.stagnation_pressure_ratio > 0.0);
        prop_assert!(jump.mach < mach);
        prop_assert!(jump.pressure_ratio > 1.0);
    }
}

// ── Inlet solver ─────────────────────────────────────────────────────

fn freestream(mach: Vec<f64>, gamma: f64) -> FreestreamState {
    let stagnation_pressure = Pressure::new::<kilopascal>(100.0);
    let static_pressure = mach
        .iter()
        .map(|&m| stagnation_pressure * isentropic_ratios(m, gamma).unwrap().pressure)
        .collect();

    FreestreamState::new(
        Batched::Array(mach),
        Batched::Scalar(stagnation_pressure),
        Batched::Scalar(ThermodynamicTemperature::new::<kelvin>(300.0)),
        Batched::Array(static_pressure),
    )
}

fn geometry(stream_tube: Vec<f64>) -> InletGeometry {
    InletGeometry::new(
        Batched::Array(
            stream_tube
                .into_iter()
                .map(Area::new::<square_meter>)
                .collect(),
        ),
        Area::new::<square_meter>(1.0),
        Area::new::<square_meter>(1.0),
    )
    .unwrap()
}

proptest! {
    /// A subsonic element's engine-face state classifies as subsonic again.
    #[test]
    fn subsonic_classification_is_idempotent(
        elements in prop::collection::vec((0.0f64..3.0, 0.0f64..2.0), 1..16),
        gamma in 1.2f64..1.6,
    ) {
        let (mach, stream_tube): (Vec<f64>, Vec<f64>) = elements.into_iter().unzip();
        let gas = gas(gamma);
        let config = SolveConfig::default();

        let solution = solve_inlet(
            &freestream(mach, gamma),
            &geometry(stream_tube),
            &gas,
            &config,
        )
        .unwrap();

        for (index, status) in solution.status.iter().enumerate() {
            let ElementStatus::Solved(outcome) = status else { continue };
            if outcome.regime != FlowRegime::Subsonic {
                continue;
            }

            let engine_face_mach = solution.state.mach[index];
            prop_assert!(engine_face_mach <= 1.0);

            // Re-run the engine-face state through a constant-area duct.
            let f_m = area_mach_relation(engine_face_mach, gamma).unwrap();
            prop_assert_eq!(classify(f_m), FlowRegime::Subsonic);

            let rerun = solve_inlet(
                &freestream(vec![engine_face_mach], gamma),
                &geometry(vec![1.0]),
                &gas,
                &config,
            )
            .unwrap();

            prop_assert_eq!(rerun.status[0].regime(), Some(FlowRegime::Subsonic));
            prop_assert!(
                (rerun.state.mach[0] - engine_face_mach).abs() <= 1e-6 * engine_face_mach.max(1e-6)
            );
        }
    }

    /// Batch results do not depend on the other elements in the batch.
    #[test]
    fn elements_are_independent(
        elements in prop::collection::vec((0.0f64..3.0, 0.0f64..2.0), 2..8),
    ) {
        let (mach, stream_tube): (Vec<f64>, Vec<f64>) = elements.into_iter().unzip();
        let gas = gas(1.4);
        let config = SolveConfig::default();

        let batch = solve_inlet(
            &freestream(mach.clone(), 1.4),
            &geometry(stream_tube.clone()),
            &gas,
            &config,
        )
        .unwrap();

        for index in 0..mach.len() {
            let single = solve_inlet(
                &freestream(vec![mach[index]], 1.4),
                &geometry(vec![stream_tube[index]]),
                &gas,
                &config,
            )
            .unwrap();

            prop_assert_eq!(&single.status[0], &batch.status[index]);
            let (a, b) = (single.state.mach[0], batch.state.mach[index]);
            prop_assert!(a == b || (a.is_nan() && b.is_nan()));
        }
    }
}

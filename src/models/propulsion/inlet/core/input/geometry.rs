use uom::si::{
    f64::{Angle, Area},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    gas_dynamics::{
        GasDynamicsError, RootConfig, ShockJump, normal_shock, oblique_shock, weak_shock_angle,
    },
};

use super::{super::InputError, Batched};

/// Duct areas and the shock system standing at the capture plane.
#[derive(Debug, Clone, PartialEq)]
pub struct InletGeometry {
    /// Freestream stream-tube area `A0` captured by the inlet, zero or greater.
    pub stream_tube_area: Batched<Area>,

    /// Capture (highlight) area `A_capture`.
    pub capture_area: Constrained<Area, StrictlyPositive>,

    /// Engine-face area `A_engineface`.
    pub engine_face_area: Constrained<Area, StrictlyPositive>,

    /// Shock applied to supersonic elements.
    pub shock: ShockGeometry,
}

impl InletGeometry {
    /// Creates a pitot inlet geometry with a normal shock.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Area`] if the capture or engine-face area is not
    /// strictly positive.
    pub fn new(
        stream_tube_area: Batched<Area>,
        capture_area: Area,
        engine_face_area: Area,
    ) -> Result<Self, InputError> {
        let capture_area = StrictlyPositive::new(capture_area).map_err(|source| {
            InputError::Area {
                field: "capture_area",
                source,
            }
        })?;
        let engine_face_area = StrictlyPositive::new(engine_face_area).map_err(|source| {
            InputError::Area {
                field: "engine_face_area",
                source,
            }
        })?;

        Ok(Self {
            stream_tube_area,
            capture_area,
            engine_face_area,
            shock: ShockGeometry::Normal,
        })
    }

    /// Replaces the shock geometry.
    #[must_use]
    pub fn with_shock(self, shock: ShockGeometry) -> Self {
        Self { shock, ..self }
    }

    /// Returns `area / A_engineface`.
    pub(crate) fn engine_face_ratio(&self, area: Area) -> f64 {
        (area / self.engine_face_area.into_inner()).get::<ratio>()
    }
}

/// The shock a supersonic element passes through before entering the duct.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ShockGeometry {
    /// A normal shock, as in front of a pitot inlet.
    #[default]
    Normal,

    /// The weak attached oblique shock off a wedge or ramp.
    ///
    /// The shock angle is solved per element from the θ–β–M relation.
    Wedge { angle: Angle },

    /// An oblique shock with both angles given.
    ///
    /// The angles must satisfy the θ–β–M relation at the upstream Mach number;
    /// a mismatched pair is rejected as out of domain.
    Fixed { wedge_angle: Angle, shock_angle: Angle },
}

impl ShockGeometry {
    /// Computes the jump for upstream Mach number `mach`.
    pub(crate) fn jump(
        &self,
        mach: f64,
        gamma: f64,
        config: &RootConfig,
    ) -> Result<ShockJump, GasDynamicsError> {
        match *self {
            Self::Normal => normal_shock(mach, gamma),
            Self::Wedge { angle } => {
                let shock_angle = weak_shock_angle(mach, gamma, angle, config)?;
                oblique_shock(mach, gamma, angle, shock_angle)
            }
            Self::Fixed {
                wedge_angle,
                shock_angle,
            } => oblique_shock(mach, gamma, wedge_angle, shock_angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angle::degree, area::square_meter};

    use crate::support::constraint::ConstraintError;

    fn area(value: f64) -> Area {
        Area::new::<square_meter>(value)
    }

    #[test]
    fn rejects_non_positive_duct_areas() {
        assert_eq!(
            InletGeometry::new(Batched::Scalar(area(1.0)), area(0.0), area(1.0)),
            Err(InputError::Area {
                field: "capture_area",
                source: ConstraintError::Zero,
            })
        );
        assert!(matches!(
            InletGeometry::new(Batched::Scalar(area(1.0)), area(1.0), area(-2.0)),
            Err(InputError::Area {
                field: "engine_face_area",
                ..
            })
        ));
    }

    #[test]
    fn engine_face_ratio() {
        let geometry =
            InletGeometry::new(Batched::Scalar(area(1.0)), area(1.5), area(0.5)).unwrap();
        assert_relative_eq!(geometry.engine_face_ratio(area(1.5)), 3.0);
    }

    #[test]
    fn wedge_and_fixed_shocks_agree() {
        let config = RootConfig::default();
        let angle = Angle::new::<degree>(15.0);
        let shock_angle = weak_shock_angle(2.0, 1.4, angle, &config).unwrap();

        let wedge = ShockGeometry::Wedge { angle }.jump(2.0, 1.4, &config).unwrap();
        let fixed = ShockGeometry::Fixed {
            wedge_angle: angle,
            shock_angle,
        }
        .jump(2.0, 1.4, &config)
        .unwrap();

        assert_eq!(wedge, fixed);

        let normal = ShockGeometry::Normal.jump(2.0, 1.4, &config).unwrap();
        assert!(wedge.stagnation_pressure_ratio > normal.stagnation_pressure_ratio);
    }
}

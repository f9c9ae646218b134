//! Tube profile construction

use shared::{DimensionError, TubeSpec};

use crate::csg::Solid;

/// How far the cavity box extends past each open end so the boolean never
/// leaves coplanar end skins.
const CAVITY_OVERSHOOT: f64 = 0.01;

/// Build the hollow tube solid for a profile: an outer centered box minus the
/// inner cavity box, open along the length axis (Z).
///
/// The profile is validated first; degenerate or inverted hollows are
/// rejected before any geometry is constructed.
pub fn tube_solid(spec: &TubeSpec) -> Result<Solid, DimensionError> {
    spec.validate()?;

    let outer = Solid::centered_box(spec.width(), spec.height(), spec.length);
    let cavity = Solid::centered_box(
        spec.inner_width(),
        spec.inner_height(),
        spec.length + 2.0 * CAVITY_OVERSHOOT,
    );

    Ok(outer.subtract(&cavity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TubeKind;

    fn rect_spec(w: f64, h: f64, len: f64, t: f64) -> TubeSpec {
        TubeSpec {
            kind: TubeKind::Rectangular {
                width: w,
                height: h,
            },
            length: len,
            thickness: t,
        }
    }

    #[test]
    fn test_volume_is_outer_minus_inner() {
        let spec = rect_spec(1.0, 1.0, 3.0, 0.1);
        let solid = tube_solid(&spec).unwrap();
        let expected = 1.0 * 1.0 * 3.0 - 0.8 * 0.8 * 3.0;
        assert!(
            (solid.volume() - expected).abs() < 1e-3,
            "volume {} vs expected {}",
            solid.volume(),
            expected
        );
    }

    #[test]
    fn test_square_volume() {
        let spec = TubeSpec {
            kind: TubeKind::Square { size: 2.0 },
            length: 5.0,
            thickness: 0.25,
        };
        let solid = tube_solid(&spec).unwrap();
        let expected = 2.0 * 2.0 * 5.0 - 1.5 * 1.5 * 5.0;
        assert!((solid.volume() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_bounds_match_extents() {
        let spec = rect_spec(1.0, 2.0, 3.0, 0.2);
        let solid = tube_solid(&spec).unwrap();
        let (min, max) = solid.bounds().unwrap();
        assert!((max[0] - min[0] - 1.0).abs() < 1e-4);
        assert!((max[1] - min[1] - 2.0).abs() < 1e-4);
        assert!((max[2] - min[2] - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_spec_rejected() {
        let spec = rect_spec(1.0, 1.0, 3.0, 0.5);
        assert!(matches!(
            tube_solid(&spec),
            Err(DimensionError::ThicknessTooLarge { .. })
        ));
        let spec = rect_spec(-1.0, 1.0, 3.0, 0.1);
        assert!(matches!(
            tube_solid(&spec),
            Err(DimensionError::NonPositive { what: "width" })
        ));
    }
}

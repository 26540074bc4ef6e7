//! # Discs and Rings
//!
//! Flat annular sectors in a frame's ground plane. A disc is a ring whose
//! inner radius is zero; the collapsed centre row is dropped by the lattice.

use config::constants::FULL_TURN_RADIANS_TOLERANCE;
use glam::DVec2;
use std::f64::consts::TAU;

use super::lattice::build_lattice;
use super::uv::PlanarUv;
use crate::math::{fraction, mix, Frame};
use crate::mesh::Mesh;

/// Number of lattice columns for an arc of `from..to` radians when a full
/// turn uses `sides` columns. Never zero.
pub fn arc_steps(sides: u32, from: f64, to: f64) -> u32 {
    let steps = (sides as f64 * (to - from).abs() / TAU).round();
    (steps as u32).max(1)
}

/// True when `from..to` covers less than a full turn.
///
/// Any measurable gap counts as partial so the cut faces close it.
pub fn is_partial_arc(from: f64, to: f64) -> bool {
    (to - from).abs() < TAU - FULL_TURN_RADIANS_TOLERANCE
}

/// Geometry of one flat annular sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSector {
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Height along `up` at which the sector lies
    pub z: f64,
    /// Start angle in radians, measured from `right` towards `forward`
    pub from: f64,
    pub to: f64,
    /// Columns around the arc
    pub steps: u32,
    /// Rows from inner to outer radius
    pub segments: u32,
}

/// Builds a flat annular sector facing `up`, or `-up` when flipped.
///
/// Rim samples go through [`Frame::ring_point`], the same formula the
/// cylinder builders use, so a cap and its wall share exact positions.
pub fn build_ring(mesh: &mut Mesh, frame: &Frame, ring: &RingSector, uv: &PlanarUv, flip: bool) {
    let RingSector {
        inner_radius,
        outer_radius,
        z,
        from,
        to,
        steps,
        segments,
    } = *ring;

    // Angle × radius runs clockwise seen from up, hence the inversion
    build_lattice(mesh, steps, segments, !flip, |i, j| {
        let angle = mix(from, to, fraction(i, steps));
        let radius = mix(inner_radius, outer_radius, fraction(j, segments));
        let local = DVec2::new(radius * angle.cos(), radius * angle.sin());
        (frame.ring_point(radius, angle, z), uv.at(local))
    });
}

/// Builds a full or partial disc of `radius` at height `z`.
#[allow(clippy::too_many_arguments)]
pub fn build_circle(
    mesh: &mut Mesh,
    frame: &Frame,
    radius: f64,
    z: f64,
    from: f64,
    to: f64,
    steps: u32,
    segments: u32,
    uv: &PlanarUv,
    flip: bool,
) {
    let ring = RingSector {
        inner_radius: 0.0,
        outer_radius: radius,
        z,
        from,
        to,
        steps,
        segments,
    };
    build_ring(mesh, frame, &ring, uv, flip);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::uv::UvSettings;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn planar(radius: f64) -> PlanarUv {
        UvSettings::default().planar(DVec2::splat(-radius), DVec2::splat(2.0 * radius))
    }

    #[test]
    fn test_arc_steps() {
        assert_eq!(arc_steps(24, 0.0, TAU), 24);
        assert_eq!(arc_steps(24, 0.0, PI), 12);
        assert_eq!(arc_steps(24, 0.0, 0.01), 1);
        assert!(is_partial_arc(0.0, PI));
        assert!(!is_partial_arc(0.0, TAU));
        assert!(!is_partial_arc(0.0, 360f64.to_radians()));
        assert!(is_partial_arc(0.0, 359.9999f64.to_radians()));
    }

    #[test]
    fn test_disc_fan_counts() {
        let mut mesh = Mesh::new();
        build_circle(&mut mesh, &Frame::default(), 1.0, 0.0, 0.0, TAU, 16, 1, &planar(1.0), false);
        assert_eq!(mesh.triangle_count(), 16);
        assert!(mesh.validate());
        let polygon_area = 0.5 * 16.0 * (TAU / 16.0).sin();
        assert_relative_eq!(mesh.surface_area(), polygon_area, epsilon = 1e-12);
    }

    #[test]
    fn test_disc_faces_up() {
        let mut mesh = Mesh::new();
        build_circle(&mut mesh, &Frame::default(), 2.0, 1.0, 0.0, TAU, 12, 3, &planar(2.0), false);
        mesh.finalize();
        for n in mesh.normals().unwrap() {
            assert_relative_eq!(n.z, 1.0, epsilon = 1e-9);
        }
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.z, 1.0);
        assert_eq!(max.z, 1.0);
    }

    #[test]
    fn test_ring_area() {
        let mut mesh = Mesh::new();
        let ring = RingSector {
            inner_radius: 1.0,
            outer_radius: 2.0,
            z: 0.0,
            from: 0.0,
            to: TAU,
            steps: 256,
            segments: 2,
        };
        build_ring(&mut mesh, &Frame::default(), &ring, &planar(2.0), true);
        assert!(mesh.validate());
        assert_relative_eq!(mesh.surface_area(), 3.0 * PI, epsilon = 1e-2);
        mesh.finalize();
        assert!(mesh.normals().unwrap().iter().all(|n| n.z < -0.99));
    }

    #[test]
    fn test_sector_spans_angle_range() {
        let mut mesh = Mesh::new();
        build_circle(&mut mesh, &Frame::default(), 1.0, 0.0, 0.0, PI / 2.0, 6, 1, &planar(1.0), false);
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(min.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(max.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(max.y, 1.0, epsilon = 1e-12);
    }
}

//! # Fillets
//!
//! Rounded edges and corners: quarter-cylinder strips along an edge and
//! sphere octants where three edges meet. A single arc segment turns either
//! into a flat bevel.

use glam::DVec3;
use std::f64::consts::FRAC_PI_2;

use super::lattice::build_lattice;
use super::uv::UvRect;
use crate::math::{arc_direction, fraction, mix};
use crate::mesh::Mesh;

/// A quarter cylinder of `radius` around the segment `start → start + axis`.
///
/// The arc runs from `from_dir` to `to_dir`, which must be perpendicular
/// unit vectors, both perpendicular to `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStrip {
    pub start: DVec3,
    pub axis: DVec3,
    pub from_dir: DVec3,
    pub to_dir: DVec3,
    pub radius: f64,
    pub length_segments: u32,
    pub arc_segments: u32,
}

/// Builds an [`ArcStrip`] facing away from its axis unless flipped.
pub fn build_arc_strip(mesh: &mut Mesh, strip: &ArcStrip, uv: &UvRect, flip: bool) {
    let ArcStrip {
        start,
        axis,
        from_dir,
        to_dir,
        radius,
        length_segments,
        arc_segments,
    } = *strip;

    // ∂s × ∂t at the arc start is axis × to_dir
    let inward = axis.cross(to_dir).dot(from_dir) < 0.0;
    build_lattice(mesh, length_segments, arc_segments, inward ^ flip, |i, j| {
        let s = fraction(i, length_segments);
        let t = fraction(j, arc_segments);
        let angle = mix(0.0, FRAC_PI_2, t);
        (
            start + axis * s + arc_direction(from_dir, to_dir, angle) * radius,
            uv.at(s, t),
        )
    });
}

/// Builds the sphere octant of `radius` around `centre` spanned by the
/// orthonormal directions `a`, `b`, `c`. Faces outward unless flipped.
///
/// The lattice runs around `c` from `a` to `b` and down from the pole `c`
/// to the `a`/`b` equator, so the first row collapses onto the pole.
#[allow(clippy::too_many_arguments)]
pub fn build_sphere_corner(
    mesh: &mut Mesh,
    centre: DVec3,
    a: DVec3,
    b: DVec3,
    c: DVec3,
    radius: f64,
    segments: u32,
    uv: &UvRect,
    flip: bool,
) {
    // ∂θ × ∂φ on the equator is -(b × c), inward for a right-handed triple
    let inward = a.dot(b.cross(c)) > 0.0;
    build_lattice(mesh, segments, segments, inward ^ flip, |i, j| {
        let s = fraction(i, segments);
        let t = fraction(j, segments);
        let theta = mix(0.0, FRAC_PI_2, s);
        let phi = mix(0.0, FRAC_PI_2, t);
        let dir = arc_direction(c, arc_direction(a, b, theta), phi);
        (centre + dir * radius, uv.at(s, t))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::uv::UvSettings;
    use approx::assert_relative_eq;
    use glam::DVec2;
    use std::f64::consts::PI;

    fn uv() -> UvRect {
        UvSettings::default().rect(DVec2::ONE)
    }

    fn assert_outward(mesh: &Mesh, away_from: impl Fn(DVec3) -> DVec3) {
        for tri in mesh.triangles() {
            let [p, q, r] = tri.map(|i| mesh.vertex(i));
            let centroid = (p + q + r) / 3.0;
            let n = (q - p).cross(r - p);
            assert!(n.dot(centroid - away_from(centroid)) > 0.0);
        }
    }

    #[test]
    fn test_arc_strip_faces_outward_for_either_handedness() {
        for (from_dir, to_dir) in [(DVec3::X, DVec3::Y), (DVec3::Y, DVec3::X)] {
            let strip = ArcStrip {
                start: DVec3::ZERO,
                axis: DVec3::new(0.0, 0.0, 3.0),
                from_dir,
                to_dir,
                radius: 1.0,
                length_segments: 2,
                arc_segments: 4,
            };
            let mut mesh = Mesh::new();
            build_arc_strip(&mut mesh, &strip, &uv(), false);
            assert!(mesh.validate());
            assert_outward(&mesh, |p| DVec3::new(0.0, 0.0, p.z));
        }
    }

    #[test]
    fn test_arc_strip_area() {
        let strip = ArcStrip {
            start: DVec3::ZERO,
            axis: DVec3::new(0.0, 0.0, 2.0),
            from_dir: DVec3::X,
            to_dir: DVec3::Y,
            radius: 1.0,
            length_segments: 1,
            arc_segments: 64,
        };
        let mut mesh = Mesh::new();
        build_arc_strip(&mut mesh, &strip, &uv(), false);
        assert_relative_eq!(mesh.surface_area(), PI, max_relative = 1e-3);
    }

    #[test]
    fn test_single_segment_is_bevel() {
        let strip = ArcStrip {
            start: DVec3::ZERO,
            axis: DVec3::Z,
            from_dir: DVec3::X,
            to_dir: DVec3::Y,
            radius: 1.0,
            length_segments: 1,
            arc_segments: 1,
        };
        let mut mesh = Mesh::new();
        build_arc_strip(&mut mesh, &strip, &uv(), false);
        assert_eq!(mesh.triangle_count(), 2);
        assert_relative_eq!(mesh.surface_area(), 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_corner_outward_and_area() {
        let triples = [
            (DVec3::X, DVec3::Y, DVec3::Z),
            (DVec3::Y, DVec3::X, DVec3::Z),
            (DVec3::NEG_X, DVec3::Y, DVec3::NEG_Z),
        ];
        for (a, b, c) in triples {
            let mut mesh = Mesh::new();
            build_sphere_corner(&mut mesh, DVec3::ZERO, a, b, c, 1.0, 24, &uv(), false);
            assert!(mesh.validate());
            assert_outward(&mesh, |_| DVec3::ZERO);
            assert_relative_eq!(mesh.surface_area(), PI / 2.0, max_relative = 1e-2);
        }
    }

    #[test]
    fn test_flat_corner_is_one_triangle() {
        let mut mesh = Mesh::new();
        build_sphere_corner(&mut mesh, DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z, 1.0, 1, &uv(), false);
        assert_eq!(mesh.triangle_count(), 1);
    }
}

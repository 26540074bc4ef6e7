//! # Planar Quads
//!
//! Subdivided rectangles in a frame's ground plane, and arbitrary bilinear
//! quads given by their four corners.

use glam::{DVec2, DVec3};

use super::lattice::build_lattice;
use super::uv::UvRect;
use crate::math::{fraction, mix, Frame};
use crate::mesh::Mesh;

/// Builds a `width × length` rectangle centred on the frame origin, lying in
/// the right/forward plane and facing `up` (or `-up` when flipped).
///
/// # Example
///
/// ```rust
/// use primitive_mesh::builders::plane::build_plane;
/// use primitive_mesh::builders::uv::UvSettings;
/// use primitive_mesh::math::Frame;
/// use primitive_mesh::Mesh;
/// use glam::DVec2;
///
/// let mut mesh = Mesh::new();
/// let uv = UvSettings::default().rect(DVec2::new(2.0, 2.0));
/// build_plane(&mut mesh, &Frame::default(), 2.0, 2.0, 1, 1, &uv, false);
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn build_plane(
    mesh: &mut Mesh,
    frame: &Frame,
    width: f64,
    length: f64,
    width_segments: u32,
    length_segments: u32,
    uv: &UvRect,
    flip: bool,
) {
    let (hw, hl) = (width / 2.0, length / 2.0);
    build_lattice(mesh, width_segments, length_segments, flip, |i, j| {
        let s = fraction(i, width_segments);
        let t = fraction(j, length_segments);
        (
            frame.point(mix(-hw, hw, s), mix(-hl, hl, t), 0.0),
            uv.at(s, t),
        )
    });
}

/// Builds a bilinear quad through `corners = [p00, p10, p11, p01]`, turned
/// so that its normal points into the half-space of `facing`.
///
/// Corners are used as given, so an edge shared with a neighbouring piece
/// matches exactly when both pieces are handed the same points. One edge
/// may collapse; the quad then degrades to a triangle.
pub fn build_quad(
    mesh: &mut Mesh,
    corners: [DVec3; 4],
    cols: u32,
    rows: u32,
    facing: DVec3,
    uv: &UvRect,
) {
    let [p00, p10, p11, p01] = corners;
    // Diagonals stay well-defined when a single edge collapses
    let natural = (p11 - p00).cross(p01 - p10);
    let flip = natural.dot(facing) < 0.0;

    build_lattice(mesh, cols, rows, flip, |i, j| {
        let s = fraction(i, cols);
        let t = fraction(j, rows);
        let bottom = p00 * (1.0 - s) + p10 * s;
        let top = p01 * (1.0 - s) + p11 * s;
        (bottom * (1.0 - t) + top * t, uv.at(s, t))
    });
}

/// Local 2D bounds helper for planar UVs of centred rectangles.
pub(crate) fn centred_bounds(width: f64, length: f64) -> (DVec2, DVec2) {
    (
        DVec2::new(-width / 2.0, -length / 2.0),
        DVec2::new(width, length),
    )
}

//! # Flat Faces
//!
//! Triangles and trapezoids in a frame's ground plane, subdivided as
//! lattices and textured by planar projection.

use glam::DVec2;

use super::lattice::build_lattice;
use super::uv::PlanarUv;
use crate::math::{fraction, mix2, Frame};
use crate::mesh::Mesh;

/// Builds a triangle with base `a → b` and tip `apex`, given in local
/// right/forward coordinates.
///
/// The lattice runs `cols` steps along the base and `rows` steps towards
/// the apex, where the last row collapses. The face points along `up`
/// when `a → b → apex` is counter-clockwise.
#[allow(clippy::too_many_arguments)]
pub fn build_triangle(
    mesh: &mut Mesh,
    frame: &Frame,
    a: DVec2,
    b: DVec2,
    apex: DVec2,
    cols: u32,
    rows: u32,
    uv: &PlanarUv,
    flip: bool,
) {
    build_lattice(mesh, cols, rows, flip, |i, j| {
        let base = mix2(a, b, fraction(i, cols));
        let p = mix2(base, apex, fraction(j, rows));
        (frame.point(p.x, p.y, 0.0), uv.at(p))
    });
}

/// Builds a trapezoid centred on the frame origin with parallel edges
/// along `right`: `bottom_width` at `-length / 2` and `top_width` at
/// `+length / 2`. Faces `up` unless flipped.
#[allow(clippy::too_many_arguments)]
pub fn build_trapezoid(
    mesh: &mut Mesh,
    frame: &Frame,
    bottom_width: f64,
    top_width: f64,
    length: f64,
    cols: u32,
    rows: u32,
    uv: &PlanarUv,
    flip: bool,
) {
    let (hb, ht, hl) = (bottom_width / 2.0, top_width / 2.0, length / 2.0);
    build_lattice(mesh, cols, rows, flip, |i, j| {
        let s = fraction(i, cols);
        let bottom = mix2(DVec2::new(-hb, -hl), DVec2::new(hb, -hl), s);
        let top = mix2(DVec2::new(-ht, hl), DVec2::new(ht, hl), s);
        let p = mix2(bottom, top, fraction(j, rows));
        (frame.point(p.x, p.y, 0.0), uv.at(p))
    });
}

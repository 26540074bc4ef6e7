//! # Polygons and Prisms
//!
//! Arbitrary simple outlines: triangulated flat faces and straight
//! extrusions. Winding of the outline is detected, not assumed.

use config::constants::EPSILON;
use glam::{DVec2, DVec3};
use tracing::warn;

use super::rect_ring::{build_wall, polyline_length};
use super::uv::{PlanarUv, UvSettings};
use crate::math::{signed_area, Frame};
use crate::mesh::Mesh;
use crate::triangulate::triangulate;

/// Triangulates a simple outline and places it with `place`.
///
/// The front face points along `∂place/∂x × ∂place/∂y` whichever way the
/// outline winds; `flip` reverses it. A stalled triangulation keeps its
/// partial triangles and logs a warning.
///
/// Returns the number of triangles added.
pub fn build_polygon<P>(mesh: &mut Mesh, points: &[DVec2], place: P, uv: &PlanarUv, flip: bool) -> usize
where
    P: Fn(DVec2) -> DVec3,
{
    if points.len() < 3 {
        return 0;
    }

    let clockwise = signed_area(points) < 0.0;
    let indices = match triangulate(points, clockwise) {
        Ok(indices) => indices,
        Err(err) => {
            warn!(points = points.len(), %err, "polygon face incomplete");
            err.partial_indices().to_vec()
        }
    };

    let base = mesh.vertex_count() as u32;
    for &p in points {
        mesh.add_vertex(place(p), uv.at(p));
    }

    // Triangulator output winds against the outline
    let reverse = !clockwise ^ flip;
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (base + tri[0], base + tri[1], base + tri[2]);
        if reverse {
            mesh.add_triangle(a, c, b);
        } else {
            mesh.add_triangle(a, b, c);
        }
    }
    indices.len() / 3
}

/// Drops consecutive duplicates (including the closing pair) so the
/// triangulator never sees zero-length edges.
pub fn clean_outline(points: &[DVec2]) -> Vec<DVec2> {
    let mut cleaned: Vec<DVec2> = points.to_vec();
    cleaned.dedup_by(|a, b| a.distance(*b) < EPSILON);
    while cleaned.len() > 1 {
        match (cleaned.first(), cleaned.last()) {
            (Some(first), Some(last)) if first.distance(*last) < EPSILON => {
                cleaned.pop();
            }
            _ => break,
        }
    }
    cleaned
}

/// Extrudes an outline along `up` from `z0` to `z1`: bottom face, top face
/// and one wall per edge. Faces outward unless flipped.
///
/// With `z0 == z1` only a single upward face is emitted.
pub fn build_prism(mesh: &mut Mesh, frame: &Frame, points: &[DVec2], z0: f64, z1: f64, uv: &UvSettings, flip: bool) {
    let outline = clean_outline(points);
    if outline.len() < 3 {
        return;
    }

    let (min, max) = outline
        .iter()
        .fold((DVec2::splat(f64::MAX), DVec2::splat(f64::MIN)), |(lo, hi), p| {
            (lo.min(*p), hi.max(*p))
        });
    let planar = uv.planar(min, max - min);

    build_polygon(mesh, &outline, |p| frame.point(p.x, p.y, z1), &planar, flip);
    if (z1 - z0).abs() < EPSILON {
        return;
    }
    build_polygon(mesh, &outline, |p| frame.point(p.x, p.y, z0), &planar, !flip);

    let mut closed = outline.clone();
    closed.push(outline[0]);
    // Wall lattice faces outward for counter-clockwise outlines
    let clockwise = signed_area(&outline) < 0.0;
    let wall_uv = uv.rect(DVec2::new(polyline_length(&closed), (z1 - z0).abs()));
    build_wall(mesh, frame, &closed, z0, z1, 1, &wall_uv, clockwise ^ flip);
}

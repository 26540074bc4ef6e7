//! # Lattice
//!
//! The one grid primitive every surface builder funnels through. A sampler
//! maps integer grid coordinates to a position and UV; the lattice emits
//! `(cols + 1) × (rows + 1)` vertices and two triangles per cell.
//!
//! Collapsed rows and columns (disc centres, cone apexes, zero-radius
//! corners) are handled by dropping any triangle with two coincident
//! corners, so callers never special-case poles.

use config::constants::DEGENERATE_EDGE_EPSILON;
use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

/// Emits a `cols × rows` grid of quads.
///
/// `sample(i, j)` is called for `i ∈ 0..=cols`, `j ∈ 0..=rows`. With
/// `flip == false` each triangle faces along `∂i × ∂j`; `flip` reverses
/// every triangle.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use primitive_mesh::builders::lattice::build_lattice;
/// use primitive_mesh::Mesh;
///
/// let mut mesh = Mesh::new();
/// build_lattice(&mut mesh, 2, 1, false, |i, j| {
///     (DVec3::new(i as f64, j as f64, 0.0), DVec2::ZERO)
/// });
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangle_count(), 4);
/// ```
pub fn build_lattice<F>(mesh: &mut Mesh, cols: u32, rows: u32, flip: bool, mut sample: F)
where
    F: FnMut(u32, u32) -> (DVec3, DVec2),
{
    if cols == 0 || rows == 0 {
        return;
    }

    let base = mesh.vertex_count() as u32;
    for j in 0..=rows {
        for i in 0..=cols {
            let (position, uv) = sample(i, j);
            mesh.add_vertex(position, uv);
        }
    }

    let stride = cols + 1;
    for j in 0..rows {
        for i in 0..cols {
            let a = base + j * stride + i;
            let b = a + 1;
            let d = a + stride;
            let c = d + 1;
            emit(mesh, [a, b, c], flip);
            emit(mesh, [a, c, d], flip);
        }
    }
}

/// Adds one triangle unless two of its corners coincide.
fn emit(mesh: &mut Mesh, [a, b, c]: [u32; 3], flip: bool) {
    let (pa, pb, pc) = (mesh.vertex(a), mesh.vertex(b), mesh.vertex(c));
    if pa.distance(pb) < DEGENERATE_EDGE_EPSILON
        || pb.distance(pc) < DEGENERATE_EDGE_EPSILON
        || pc.distance(pa) < DEGENERATE_EDGE_EPSILON
    {
        return;
    }
    if flip {
        mesh.add_triangle(a, c, b);
    } else {
        mesh.add_triangle(a, b, c);
    }
}

//! # Primitive Mesh
//!
//! Procedural mesh generation for parametric primitives. A [`ShapeParams`]
//! describes one shape (dimensions, segment counts, slice angles, fillets)
//! plus its placement; [`generate`] turns it into a [`Mesh`] of positions,
//! UVs, triangle indices and normals ready for upload.
//!
//! ## Architecture
//!
//! ```text
//! ShapeParams → clamp → Frame → shape recipe → builders → Mesh → finalize
//! ```
//!
//! - **math**: 2D/3D helpers and the local [`Frame`]
//! - **triangulate**: ear clipping for simple polygons
//! - **builders**: planes, discs, rings, cylinders, tori, fillets, boxes
//! - **shapes**: twenty parametric recipes built from the builders
//!
//! ## Usage
//!
//! ```rust
//! use primitive_mesh::{generate, Shape, ShapeParams, TubeParams};
//!
//! let params = ShapeParams::new(Shape::Tube(TubeParams::default()));
//! let mesh = generate(&params);
//! assert!(mesh.validate());
//! assert!(mesh.normals().is_some());
//! ```

pub mod builders;
pub mod error;
pub mod math;
pub mod mesh;
pub mod shapes;
pub mod triangulate;

pub use builders::{BoxFaces, BoxSegments, UvSettings};
pub use error::MeshError;
pub use math::Frame;
pub use mesh::Mesh;
pub use shapes::{
    ArrowParams, BoxParams, ChamferBoxParams, ChamferCylinderParams, CircleParams, ConeParams,
    CylinderParams, PlaneParams, PlateParams, PolygonParams, RectTubeParams, RectTubeRParams,
    RingParams, Shape, ShapeKind, ShapeParams, Slice, SpiralStairParams, StairParams,
    TorusParams, TrapezoidParams, TrayParams, TriangleParams, TubeParams,
};
pub use triangulate::triangulate;

use rayon::prelude::*;
use tracing::{debug, warn};

/// Generates the mesh for one shape.
///
/// Never fails: parameters are clamped into range, and a degenerate
/// orientation yields an empty mesh (with a warning).
pub fn generate(params: &ShapeParams) -> Mesh {
    let mut mesh = Mesh::new();
    generate_into(&mut mesh, params);
    mesh
}

/// Clears `mesh` and refills it with the shape, reusing its allocations.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{generate_into, Mesh, ShapeKind, ShapeParams};
///
/// let mut mesh = Mesh::new();
/// generate_into(&mut mesh, &ShapeParams::new(ShapeKind::Box.default_shape()));
/// assert_eq!(mesh.triangle_count(), 12);
///
/// generate_into(&mut mesh, &ShapeParams::new(ShapeKind::Plane.default_shape()));
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
pub fn generate_into(mesh: &mut Mesh, params: &ShapeParams) {
    mesh.clear();
    let kind = params.shape.kind();

    let frame = match params.frame() {
        Ok(frame) => frame,
        Err(e) => {
            warn!(%kind, error = %e, "cannot orient shape, emitting nothing");
            return;
        }
    };

    let shape = params.shape.clamped();
    if shape != params.shape {
        debug!(%kind, "parameters clamped into range");
    }

    shape.build(mesh, &frame, &params.uv, params.flip_normals);
    mesh.finalize();

    debug!(
        %kind,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "shape generated"
    );
}

/// Generates independent shapes in parallel, one mesh per input, in order.
pub fn generate_batch(params: &[ShapeParams]) -> Vec<Mesh> {
    params.par_iter().map(generate).collect()
}

//! # Surface Builders
//!
//! Stateless functions that append one surface piece each to a [`Mesh`].
//! Shapes are assembled from several calls; pieces never share vertices,
//! so seams stay hard and edges that must meet are computed from the same
//! formula on both sides.
//!
//! ## Conventions
//!
//! - Positions are given in a [`Frame`](crate::math::Frame): `x` along
//!   `right`, `y` along `forward`, `z` along `up`.
//! - Front faces wind counter-clockwise; every builder documents its
//!   natural facing and takes a `flip` flag that reverses it.
//! - Curved pieces go through [`lattice::build_lattice`], which drops
//!   triangles whose corners collapse (poles, apexes, zero radii).
//!
//! [`Mesh`]: crate::mesh::Mesh

pub mod box_faces;
pub mod circle;
pub mod cylinder;
pub mod fillet;
pub mod flat;
pub mod lattice;
pub mod plane;
pub mod polygon;
pub mod rect_ring;
pub mod torus;
pub mod uv;

pub use box_faces::{build_box, BoxFaces, BoxSegments};
pub use circle::{arc_steps, build_circle, build_ring, RingSector};
pub use cylinder::{build_cylinder_surface, build_solid_cylinder, CylinderSpec, Sweep};
pub use fillet::{build_arc_strip, build_sphere_corner, ArcStrip};
pub use flat::{build_trapezoid, build_triangle};
pub use plane::{build_plane, build_quad};
pub use polygon::{build_polygon, build_prism};
pub use rect_ring::{build_rect_walls, build_rounded_rect_ring, build_wall, RoundedRect};
pub use torus::{build_torus, build_torus_caps, TorusSpec};
pub use uv::{PlanarUv, UvAxis, UvRect, UvRun, UvSettings};

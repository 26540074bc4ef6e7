//! # Shape Catalogue
//!
//! One parameter struct per primitive kind, a [`Shape`] enum that carries
//! them, and [`ShapeParams`], which adds placement, texture settings and the
//! normal flip. Each kind has a recipe function that clamps nothing itself:
//! [`Shape::clamped`] normalises parameters first, then [`Shape::build`]
//! issues the builder calls.
//!
//! ## Local placement
//!
//! | Kind                         | Placement                                  |
//! |------------------------------|--------------------------------------------|
//! | Plane, Circle, Ring, ...     | centred on the origin in the ground plane  |
//! | Box, Cylinder, Plate, ...    | centred in x/y, standing on `z = 0`        |
//! | Torus                        | centred on the origin                      |
//! | Stair                        | centred in x, climbing along forward       |
//! | Polygon                      | points as given, extruded along up         |

mod boxes;
mod flat;
mod outline;
mod rect;
mod round;
mod stairs;

#[cfg(test)]
mod tests;

pub use boxes::{BoxParams, ChamferBoxParams};
pub use flat::{CircleParams, PlaneParams, RingParams, TrapezoidParams, TriangleParams};
pub use outline::{ArrowParams, PolygonParams};
pub use rect::{PlateParams, RectTubeParams, RectTubeRParams, TrayParams};
pub use round::{ChamferCylinderParams, ConeParams, CylinderParams, TorusParams, TubeParams};
pub use stairs::{SpiralStairParams, StairParams};

use config::constants::{clamp_angle_range, clamp_segments, EPSILON, MAX_DIMENSION};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::builders::circle::arc_steps;
use crate::builders::cylinder::Sweep;
use crate::builders::uv::UvSettings;
use crate::math::Frame;
use crate::mesh::Mesh;

// =============================================================================
// SHARED PARAMETERS
// =============================================================================

/// Angular sub-range in degrees, `0 ≤ from ≤ to ≤ 360`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slice {
    pub from: f64,
    pub to: f64,
}

impl Default for Slice {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 360.0,
        }
    }
}

impl Slice {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    pub fn clamped(self) -> Self {
        let (from, to) = clamp_angle_range(self.from, self.to);
        Self { from, to }
    }

    /// True when the range has no angular extent.
    pub fn is_empty(&self) -> bool {
        (self.to - self.from).abs() < EPSILON
    }

    /// Radian sweep with the share of `sides` this slice covers.
    pub fn sweep(&self, sides: u32) -> Sweep {
        let (from, to) = (self.from.to_radians(), self.to.to_radians());
        Sweep {
            from,
            to,
            steps: arc_steps(sides, from, to),
        }
    }
}

/// Clamp for thicknesses and radii that may legitimately be zero.
pub(crate) fn clamp_non_negative(value: f64, bound: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, bound.clamp(0.0, MAX_DIMENSION))
}

/// Corner arc steps: one straight bevel or the requested fillet segments.
pub(crate) fn corner_steps(segments: u32, flat_chamfer: bool) -> u32 {
    if flat_chamfer {
        1
    } else {
        clamp_segments(segments)
    }
}

// =============================================================================
// SHAPE
// =============================================================================

/// Discriminant of [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Plane,
    Circle,
    Ring,
    Triangle,
    Trapezoid,
    Box,
    ChamferBox,
    Cylinder,
    Cone,
    Tube,
    Torus,
    ChamferCylinder,
    Plate,
    Tray,
    RectTube,
    RectTubeR,
    Arrow,
    Stair,
    SpiralStair,
    Polygon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 20] = [
        ShapeKind::Plane,
        ShapeKind::Circle,
        ShapeKind::Ring,
        ShapeKind::Triangle,
        ShapeKind::Trapezoid,
        ShapeKind::Box,
        ShapeKind::ChamferBox,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Tube,
        ShapeKind::Torus,
        ShapeKind::ChamferCylinder,
        ShapeKind::Plate,
        ShapeKind::Tray,
        ShapeKind::RectTube,
        ShapeKind::RectTubeR,
        ShapeKind::Arrow,
        ShapeKind::Stair,
        ShapeKind::SpiralStair,
        ShapeKind::Polygon,
    ];

    /// Default parameters of this kind.
    pub fn default_shape(self) -> Shape {
        match self {
            ShapeKind::Plane => Shape::Plane(PlaneParams::default()),
            ShapeKind::Circle => Shape::Circle(CircleParams::default()),
            ShapeKind::Ring => Shape::Ring(RingParams::default()),
            ShapeKind::Triangle => Shape::Triangle(TriangleParams::default()),
            ShapeKind::Trapezoid => Shape::Trapezoid(TrapezoidParams::default()),
            ShapeKind::Box => Shape::Box(BoxParams::default()),
            ShapeKind::ChamferBox => Shape::ChamferBox(ChamferBoxParams::default()),
            ShapeKind::Cylinder => Shape::Cylinder(CylinderParams::default()),
            ShapeKind::Cone => Shape::Cone(ConeParams::default()),
            ShapeKind::Tube => Shape::Tube(TubeParams::default()),
            ShapeKind::Torus => Shape::Torus(TorusParams::default()),
            ShapeKind::ChamferCylinder => Shape::ChamferCylinder(ChamferCylinderParams::default()),
            ShapeKind::Plate => Shape::Plate(PlateParams::default()),
            ShapeKind::Tray => Shape::Tray(TrayParams::default()),
            ShapeKind::RectTube => Shape::RectTube(RectTubeParams::default()),
            ShapeKind::RectTubeR => Shape::RectTubeR(RectTubeRParams::default()),
            ShapeKind::Arrow => Shape::Arrow(ArrowParams::default()),
            ShapeKind::Stair => Shape::Stair(StairParams::default()),
            ShapeKind::SpiralStair => Shape::SpiralStair(SpiralStairParams::default()),
            ShapeKind::Polygon => Shape::Polygon(PolygonParams::default()),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Parameters of one primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Shape {
    Plane(PlaneParams),
    Circle(CircleParams),
    Ring(RingParams),
    Triangle(TriangleParams),
    Trapezoid(TrapezoidParams),
    Box(BoxParams),
    ChamferBox(ChamferBoxParams),
    Cylinder(CylinderParams),
    Cone(ConeParams),
    Tube(TubeParams),
    Torus(TorusParams),
    ChamferCylinder(ChamferCylinderParams),
    Plate(PlateParams),
    Tray(TrayParams),
    RectTube(RectTubeParams),
    RectTubeR(RectTubeRParams),
    Arrow(ArrowParams),
    Stair(StairParams),
    SpiralStair(SpiralStairParams),
    Polygon(PolygonParams),
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Plane(PlaneParams::default())
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Plane(_) => ShapeKind::Plane,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Ring(_) => ShapeKind::Ring,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Trapezoid(_) => ShapeKind::Trapezoid,
            Shape::Box(_) => ShapeKind::Box,
            Shape::ChamferBox(_) => ShapeKind::ChamferBox,
            Shape::Cylinder(_) => ShapeKind::Cylinder,
            Shape::Cone(_) => ShapeKind::Cone,
            Shape::Tube(_) => ShapeKind::Tube,
            Shape::Torus(_) => ShapeKind::Torus,
            Shape::ChamferCylinder(_) => ShapeKind::ChamferCylinder,
            Shape::Plate(_) => ShapeKind::Plate,
            Shape::Tray(_) => ShapeKind::Tray,
            Shape::RectTube(_) => ShapeKind::RectTube,
            Shape::RectTubeR(_) => ShapeKind::RectTubeR,
            Shape::Arrow(_) => ShapeKind::Arrow,
            Shape::Stair(_) => ShapeKind::Stair,
            Shape::SpiralStair(_) => ShapeKind::SpiralStair,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Returns a copy with every parameter forced into its valid range.
    ///
    /// Idempotent: clamping a clamped shape changes nothing.
    pub fn clamped(&self) -> Shape {
        match self {
            Shape::Plane(p) => Shape::Plane(p.clamped()),
            Shape::Circle(p) => Shape::Circle(p.clamped()),
            Shape::Ring(p) => Shape::Ring(p.clamped()),
            Shape::Triangle(p) => Shape::Triangle(p.clamped()),
            Shape::Trapezoid(p) => Shape::Trapezoid(p.clamped()),
            Shape::Box(p) => Shape::Box(p.clamped()),
            Shape::ChamferBox(p) => Shape::ChamferBox(p.clamped()),
            Shape::Cylinder(p) => Shape::Cylinder(p.clamped()),
            Shape::Cone(p) => Shape::Cone(p.clamped()),
            Shape::Tube(p) => Shape::Tube(p.clamped()),
            Shape::Torus(p) => Shape::Torus(p.clamped()),
            Shape::ChamferCylinder(p) => Shape::ChamferCylinder(p.clamped()),
            Shape::Plate(p) => Shape::Plate(p.clamped()),
            Shape::Tray(p) => Shape::Tray(p.clamped()),
            Shape::RectTube(p) => Shape::RectTube(p.clamped()),
            Shape::RectTubeR(p) => Shape::RectTubeR(p.clamped()),
            Shape::Arrow(p) => Shape::Arrow(p.clamped()),
            Shape::Stair(p) => Shape::Stair(p.clamped()),
            Shape::SpiralStair(p) => Shape::SpiralStair(p.clamped()),
            Shape::Polygon(p) => Shape::Polygon(p.clamped()),
        }
    }

    /// Appends this shape to `mesh`. Expects clamped parameters.
    pub fn build(&self, mesh: &mut Mesh, frame: &Frame, uv: &UvSettings, flip: bool) {
        match self {
            Shape::Plane(p) => flat::build_plane_shape(mesh, frame, p, uv, flip),
            Shape::Circle(p) => flat::build_circle_shape(mesh, frame, p, uv, flip),
            Shape::Ring(p) => flat::build_ring_shape(mesh, frame, p, uv, flip),
            Shape::Triangle(p) => flat::build_triangle_shape(mesh, frame, p, uv, flip),
            Shape::Trapezoid(p) => flat::build_trapezoid_shape(mesh, frame, p, uv, flip),
            Shape::Box(p) => boxes::build_box_shape(mesh, frame, p, uv, flip),
            Shape::ChamferBox(p) => boxes::build_chamfer_box(mesh, frame, p, uv, flip),
            Shape::Cylinder(p) => round::build_cylinder(mesh, frame, p, uv, flip),
            Shape::Cone(p) => round::build_cone(mesh, frame, p, uv, flip),
            Shape::Tube(p) => round::build_tube(mesh, frame, p, uv, flip),
            Shape::Torus(p) => round::build_torus_shape(mesh, frame, p, uv, flip),
            Shape::ChamferCylinder(p) => round::build_chamfer_cylinder(mesh, frame, p, uv, flip),
            Shape::Plate(p) => rect::build_plate(mesh, frame, p, uv, flip),
            Shape::Tray(p) => rect::build_tray(mesh, frame, p, uv, flip),
            Shape::RectTube(p) => rect::build_rect_tube(mesh, frame, p, uv, flip),
            Shape::RectTubeR(p) => rect::build_rect_tube_r(mesh, frame, p, uv, flip),
            Shape::Arrow(p) => outline::build_arrow(mesh, frame, p, uv, flip),
            Shape::Stair(p) => stairs::build_stair(mesh, frame, p, uv, flip),
            Shape::SpiralStair(p) => stairs::build_spiral_stair(mesh, frame, p, uv, flip),
            Shape::Polygon(p) => outline::build_polygon_shape(mesh, frame, p, uv, flip),
        }
    }
}

// =============================================================================
// SHAPE PARAMS
// =============================================================================

/// A shape together with where and how to emit it.
///
/// `forward` and `right` need not be unit length or exactly perpendicular;
/// they are orthonormalised. Up is `right × forward`. `pivot_offset` moves
/// the shape in its own local axes before placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    pub shape: Shape,
    pub origin: DVec3,
    pub forward: DVec3,
    pub right: DVec3,
    pub pivot_offset: DVec3,
    pub uv: UvSettings,
    pub flip_normals: bool,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            origin: DVec3::ZERO,
            forward: DVec3::Y,
            right: DVec3::X,
            pivot_offset: DVec3::ZERO,
            uv: UvSettings::default(),
            flip_normals: false,
        }
    }
}

impl ShapeParams {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            ..Default::default()
        }
    }

    /// Local frame of the shape, pivot offset applied.
    pub fn frame(&self) -> Result<Frame, crate::error::MeshError> {
        let frame = Frame::new(self.origin, self.forward, self.right)?;
        let pivot = self.pivot_offset;
        Ok(frame.shifted(pivot.x, pivot.y, pivot.z))
    }
}

impl From<Shape> for ShapeParams {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}

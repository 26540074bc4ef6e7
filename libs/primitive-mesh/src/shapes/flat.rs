//! Flat primitives: plane, circle, ring, triangle and trapezoid.

use config::constants::{
    clamp_dependent, clamp_dimension, clamp_segments, clamp_sides, DEFAULT_DIMENSION,
    DEFAULT_SEGMENTS, DEFAULT_SIDES, MAX_DIMENSION, MIN_DIMENSION,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::{clamp_non_negative, Slice};
use crate::builders::circle::{build_ring, RingSector};
use crate::builders::flat::{build_trapezoid, build_triangle};
use crate::builders::plane::{build_plane, centred_bounds};
use crate::builders::uv::UvSettings;
use crate::math::Frame;
use crate::mesh::Mesh;

// =============================================================================
// PARAMETERS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneParams {
    pub width: f64,
    pub length: f64,
    pub width_segments: u32,
    pub length_segments: u32,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            length: DEFAULT_DIMENSION,
            width_segments: DEFAULT_SEGMENTS,
            length_segments: DEFAULT_SEGMENTS,
        }
    }
}

impl PlaneParams {
    pub fn clamped(&self) -> Self {
        Self {
            width: clamp_dimension(self.width),
            length: clamp_dimension(self.length),
            width_segments: clamp_segments(self.width_segments),
            length_segments: clamp_segments(self.length_segments),
        }
    }
}

/// Disc or sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleParams {
    pub radius: f64,
    /// Steps around a full turn
    pub sides: u32,
    /// Rings from centre to rim
    pub segments: u32,
    pub slice: Slice,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_DIMENSION / 2.0,
            sides: DEFAULT_SIDES,
            segments: DEFAULT_SEGMENTS,
            slice: Slice::default(),
        }
    }
}

impl CircleParams {
    pub fn clamped(&self) -> Self {
        Self {
            radius: clamp_dimension(self.radius),
            sides: clamp_sides(self.sides),
            segments: clamp_segments(self.segments),
            slice: self.slice.clamped(),
        }
    }
}

/// Annulus or annular sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingParams {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub sides: u32,
    pub segments: u32,
    pub slice: Slice,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            inner_radius: DEFAULT_DIMENSION / 4.0,
            outer_radius: DEFAULT_DIMENSION / 2.0,
            sides: DEFAULT_SIDES,
            segments: DEFAULT_SEGMENTS,
            slice: Slice::default(),
        }
    }
}

impl RingParams {
    pub fn clamped(&self) -> Self {
        let outer_radius = clamp_dimension(self.outer_radius);
        Self {
            inner_radius: clamp_dependent(self.inner_radius, outer_radius - MIN_DIMENSION),
            outer_radius,
            sides: clamp_sides(self.sides),
            segments: clamp_segments(self.segments),
            slice: self.slice.clamped(),
        }
    }
}

/// Triangle with its base along `right` and apex along `forward`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleParams {
    pub width: f64,
    pub length: f64,
    /// Apex position across the base, 0 = left end, 1 = right end
    pub apex: f64,
    pub segments: u32,
}

impl Default for TriangleParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            length: DEFAULT_DIMENSION,
            apex: 0.5,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl TriangleParams {
    pub fn clamped(&self) -> Self {
        Self {
            width: clamp_dimension(self.width),
            length: clamp_dimension(self.length),
            apex: if self.apex.is_nan() {
                0.5
            } else {
                self.apex.clamp(0.0, 1.0)
            },
            segments: clamp_segments(self.segments),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrapezoidParams {
    pub bottom_width: f64,
    /// May be zero, which yields a triangle
    pub top_width: f64,
    pub length: f64,
    pub width_segments: u32,
    pub length_segments: u32,
}

impl Default for TrapezoidParams {
    fn default() -> Self {
        Self {
            bottom_width: DEFAULT_DIMENSION,
            top_width: DEFAULT_DIMENSION / 2.0,
            length: DEFAULT_DIMENSION,
            width_segments: DEFAULT_SEGMENTS,
            length_segments: DEFAULT_SEGMENTS,
        }
    }
}

impl TrapezoidParams {
    pub fn clamped(&self) -> Self {
        Self {
            bottom_width: clamp_dimension(self.bottom_width),
            top_width: clamp_non_negative(self.top_width, MAX_DIMENSION),
            length: clamp_dimension(self.length),
            width_segments: clamp_segments(self.width_segments),
            length_segments: clamp_segments(self.length_segments),
        }
    }
}

// =============================================================================
// RECIPES
// =============================================================================

pub(super) fn build_plane_shape(mesh: &mut Mesh, frame: &Frame, p: &PlaneParams, uv: &UvSettings, flip: bool) {
    let rect = uv.rect(DVec2::new(p.width, p.length));
    build_plane(
        mesh,
        frame,
        p.width,
        p.length,
        p.width_segments,
        p.length_segments,
        &rect,
        flip,
    );
}

pub(super) fn build_circle_shape(mesh: &mut Mesh, frame: &Frame, p: &CircleParams, uv: &UvSettings, flip: bool) {
    let ring = RingParams {
        inner_radius: 0.0,
        outer_radius: p.radius,
        sides: p.sides,
        segments: p.segments,
        slice: p.slice,
    };
    build_ring_shape(mesh, frame, &ring, uv, flip);
}

pub(super) fn build_ring_shape(mesh: &mut Mesh, frame: &Frame, p: &RingParams, uv: &UvSettings, flip: bool) {
    if p.slice.is_empty() {
        return;
    }
    let sweep = p.slice.sweep(p.sides);
    let r = p.outer_radius;
    let sector = RingSector {
        inner_radius: p.inner_radius,
        outer_radius: r,
        z: 0.0,
        from: sweep.from,
        to: sweep.to,
        steps: sweep.steps,
        segments: p.segments,
    };
    let planar = uv.planar(DVec2::splat(-r), DVec2::splat(2.0 * r));
    build_ring(mesh, frame, &sector, &planar, flip);
}

pub(super) fn build_triangle_shape(
    mesh: &mut Mesh,
    frame: &Frame,
    p: &TriangleParams,
    uv: &UvSettings,
    flip: bool,
) {
    let (hw, hl) = (p.width / 2.0, p.length / 2.0);
    let a = DVec2::new(-hw, -hl);
    let b = DVec2::new(hw, -hl);
    let apex = DVec2::new(-hw + p.width * p.apex, hl);
    let (min, size) = centred_bounds(p.width, p.length);
    let planar = uv.planar(min, size);
    build_triangle(mesh, frame, a, b, apex, p.segments, p.segments, &planar, flip);
}

pub(super) fn build_trapezoid_shape(
    mesh: &mut Mesh,
    frame: &Frame,
    p: &TrapezoidParams,
    uv: &UvSettings,
    flip: bool,
) {
    let (min, size) = centred_bounds(p.bottom_width.max(p.top_width), p.length);
    let planar = uv.planar(min, size);
    build_trapezoid(
        mesh,
        frame,
        p.bottom_width,
        p.top_width,
        p.length,
        p.width_segments,
        p.length_segments,
        &planar,
        flip,
    );
}

//! Rounded-rectangle solids: plate, tray and the rectangular tubes.
//!
//! All four share one layout: outlines from [`RoundedRect`], vertical walls
//! from [`build_rect_walls`] and horizontal rims or floors from
//! [`build_rounded_rect_ring`]. Outer and inner outlines keep the same
//! corner step count so rim lattices pair their points.

use config::constants::{
    clamp_dependent, clamp_dimension, clamp_segments, DEFAULT_DIMENSION, DEFAULT_FILLET_SEGMENTS,
    DEFAULT_SEGMENTS, MIN_DIMENSION,
};
use serde::{Deserialize, Serialize};

use super::{clamp_non_negative, corner_steps};
use crate::builders::rect_ring::{build_rect_walls, build_rounded_rect_ring, RoundedRect};
use crate::builders::uv::UvSettings;
use crate::math::Frame;
use crate::mesh::Mesh;

/// Largest wall that still leaves an opening in a `width × length` outline.
fn wall_bound(width: f64, length: f64) -> f64 {
    width.min(length) / 2.0 - MIN_DIMENSION
}

// =============================================================================
// PARAMETERS
// =============================================================================

/// Flat slab with rounded corners in plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateParams {
    pub width: f64,
    pub length: f64,
    pub thickness: f64,
    /// Zero gives square corners
    pub corner_radius: f64,
    pub corner_segments: u32,
    pub flat_chamfer: bool,
    /// Rings from the rim inwards on the top and bottom faces
    pub segments: u32,
    pub thickness_segments: u32,
}

impl Default for PlateParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            length: DEFAULT_DIMENSION,
            thickness: DEFAULT_DIMENSION / 10.0,
            corner_radius: DEFAULT_DIMENSION / 10.0,
            corner_segments: DEFAULT_FILLET_SEGMENTS,
            flat_chamfer: false,
            segments: DEFAULT_SEGMENTS,
            thickness_segments: DEFAULT_SEGMENTS,
        }
    }
}

impl PlateParams {
    pub fn clamped(&self) -> Self {
        let width = clamp_dimension(self.width);
        let length = clamp_dimension(self.length);
        Self {
            width,
            length,
            thickness: clamp_dimension(self.thickness),
            corner_radius: clamp_non_negative(self.corner_radius, width.min(length) / 2.0),
            corner_segments: clamp_segments(self.corner_segments),
            flat_chamfer: self.flat_chamfer,
            segments: clamp_segments(self.segments),
            thickness_segments: clamp_segments(self.thickness_segments),
        }
    }

    fn outline(&self) -> RoundedRect {
        RoundedRect::new(
            self.width,
            self.length,
            self.corner_radius,
            corner_steps(self.corner_segments, self.flat_chamfer),
        )
    }
}

/// Open-topped box: floor, four walls and a rim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayParams {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub wall_thickness: f64,
    pub bottom_thickness: f64,
    /// Outer corner radius; the inner corners shrink by the wall thickness
    pub corner_radius: f64,
    pub corner_segments: u32,
    pub flat_chamfer: bool,
    pub segments: u32,
    pub height_segments: u32,
}

impl Default for TrayParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            length: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION / 4.0,
            wall_thickness: DEFAULT_DIMENSION / 20.0,
            bottom_thickness: DEFAULT_DIMENSION / 20.0,
            corner_radius: DEFAULT_DIMENSION / 10.0,
            corner_segments: DEFAULT_FILLET_SEGMENTS,
            flat_chamfer: false,
            segments: DEFAULT_SEGMENTS,
            height_segments: DEFAULT_SEGMENTS,
        }
    }
}

impl TrayParams {
    pub fn clamped(&self) -> Self {
        let width = clamp_dimension(self.width);
        let length = clamp_dimension(self.length);
        let height = clamp_dimension(self.height);
        Self {
            width,
            length,
            height,
            wall_thickness: clamp_dependent(self.wall_thickness, wall_bound(width, length)),
            bottom_thickness: clamp_dependent(self.bottom_thickness, height - MIN_DIMENSION),
            corner_radius: clamp_non_negative(self.corner_radius, width.min(length) / 2.0),
            corner_segments: clamp_segments(self.corner_segments),
            flat_chamfer: self.flat_chamfer,
            segments: clamp_segments(self.segments),
            height_segments: clamp_segments(self.height_segments),
        }
    }
}

/// Rectangular tube with square corners, open at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectTubeParams {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub wall_thickness: f64,
    pub segments: u32,
    pub height_segments: u32,
}

impl Default for RectTubeParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            length: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            wall_thickness: DEFAULT_DIMENSION / 10.0,
            segments: DEFAULT_SEGMENTS,
            height_segments: DEFAULT_SEGMENTS,
        }
    }
}

impl RectTubeParams {
    pub fn clamped(&self) -> Self {
        let width = clamp_dimension(self.width);
        let length = clamp_dimension(self.length);
        Self {
            width,
            length,
            height: clamp_dimension(self.height),
            wall_thickness: clamp_dependent(self.wall_thickness, wall_bound(width, length)),
            segments: clamp_segments(self.segments),
            height_segments: clamp_segments(self.height_segments),
        }
    }
}

/// Rectangular tube with rounded (or bevelled) vertical edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectTubeRParams {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub wall_thickness: f64,
    pub corner_radius: f64,
    pub corner_segments: u32,
    pub flat_chamfer: bool,
    pub segments: u32,
    pub height_segments: u32,
}

impl Default for RectTubeRParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            length: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            wall_thickness: DEFAULT_DIMENSION / 10.0,
            corner_radius: DEFAULT_DIMENSION / 5.0,
            corner_segments: DEFAULT_FILLET_SEGMENTS,
            flat_chamfer: false,
            segments: DEFAULT_SEGMENTS,
            height_segments: DEFAULT_SEGMENTS,
        }
    }
}

impl RectTubeRParams {
    pub fn clamped(&self) -> Self {
        let width = clamp_dimension(self.width);
        let length = clamp_dimension(self.length);
        Self {
            width,
            length,
            height: clamp_dimension(self.height),
            wall_thickness: clamp_dependent(self.wall_thickness, wall_bound(width, length)),
            corner_radius: clamp_non_negative(self.corner_radius, width.min(length) / 2.0),
            corner_segments: clamp_segments(self.corner_segments),
            flat_chamfer: self.flat_chamfer,
            segments: clamp_segments(self.segments),
            height_segments: clamp_segments(self.height_segments),
        }
    }
}

// =============================================================================
// RECIPES
// =============================================================================

pub(super) fn build_plate(mesh: &mut Mesh, frame: &Frame, p: &PlateParams, uv: &UvSettings, flip: bool) {
    let outline = p.outline();
    let planar = uv.planar(outline.min(), outline.size());
    build_rounded_rect_ring(mesh, frame, &outline, None, p.thickness, p.segments, &planar, flip);
    build_rounded_rect_ring(mesh, frame, &outline, None, 0.0, p.segments, &planar, !flip);
    build_rect_walls(mesh, frame, &outline, 0.0, p.thickness, p.thickness_segments, uv, flip);
}

pub(super) fn build_tray(mesh: &mut Mesh, frame: &Frame, p: &TrayParams, uv: &UvSettings, flip: bool) {
    let steps = corner_steps(p.corner_segments, p.flat_chamfer);
    let outer = RoundedRect::new(p.width, p.length, p.corner_radius, steps);
    let inner = outer.inset(p.wall_thickness);
    let planar = uv.planar(outer.min(), outer.size());

    build_rect_walls(mesh, frame, &outer, 0.0, p.height, p.height_segments, uv, flip);
    build_rect_walls(mesh, frame, &inner, p.bottom_thickness, p.height, p.height_segments, uv, !flip);
    build_rounded_rect_ring(mesh, frame, &outer, Some(&inner), p.height, p.segments, &planar, flip);
    build_rounded_rect_ring(mesh, frame, &inner, None, p.bottom_thickness, p.segments, &planar, flip);
    build_rounded_rect_ring(mesh, frame, &outer, None, 0.0, p.segments, &planar, !flip);
}

pub(super) fn build_rect_tube(mesh: &mut Mesh, frame: &Frame, p: &RectTubeParams, uv: &UvSettings, flip: bool) {
    let outer = RoundedRect::new(p.width, p.length, 0.0, 1);
    build_open_tube(mesh, frame, &outer, p.wall_thickness, p.height, p.segments, p.height_segments, uv, flip);
}

pub(super) fn build_rect_tube_r(mesh: &mut Mesh, frame: &Frame, p: &RectTubeRParams, uv: &UvSettings, flip: bool) {
    let steps = corner_steps(p.corner_segments, p.flat_chamfer);
    let outer = RoundedRect::new(p.width, p.length, p.corner_radius, steps);
    build_open_tube(mesh, frame, &outer, p.wall_thickness, p.height, p.segments, p.height_segments, uv, flip);
}

/// Outer and inner walls joined by a rim at either end.
#[allow(clippy::too_many_arguments)]
fn build_open_tube(
    mesh: &mut Mesh,
    frame: &Frame,
    outer: &RoundedRect,
    wall: f64,
    height: f64,
    segments: u32,
    height_segments: u32,
    uv: &UvSettings,
    flip: bool,
) {
    let inner = outer.inset(wall);
    let planar = uv.planar(outer.min(), outer.size());

    build_rect_walls(mesh, frame, outer, 0.0, height, height_segments, uv, flip);
    build_rect_walls(mesh, frame, &inner, 0.0, height, height_segments, uv, !flip);
    build_rounded_rect_ring(mesh, frame, outer, Some(&inner), height, segments, &planar, flip);
    build_rounded_rect_ring(mesh, frame, outer, Some(&inner), 0.0, segments, &planar, !flip);
}

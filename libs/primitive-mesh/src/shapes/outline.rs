//! Outline extrusions: the arrow and the free-form polygon.

use config::constants::{clamp_dependent, clamp_dimension, DEFAULT_DIMENSION, MAX_DIMENSION, MIN_DIMENSION};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::clamp_non_negative;
use crate::builders::polygon::build_prism;
use crate::builders::uv::UvSettings;
use crate::math::Frame;
use crate::mesh::Mesh;

/// Flat arrow pointing along `forward`, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowParams {
    /// Tail to tip
    pub length: f64,
    pub head_length: f64,
    pub shaft_width: f64,
    pub head_width: f64,
    /// Zero gives a single flat face
    pub thickness: f64,
}

impl Default for ArrowParams {
    fn default() -> Self {
        Self {
            length: DEFAULT_DIMENSION,
            head_length: DEFAULT_DIMENSION * 0.4,
            shaft_width: DEFAULT_DIMENSION * 0.2,
            head_width: DEFAULT_DIMENSION * 0.5,
            thickness: DEFAULT_DIMENSION / 10.0,
        }
    }
}

impl ArrowParams {
    pub fn clamped(&self) -> Self {
        let length = clamp_dimension(self.length);
        let head_width = clamp_dimension(self.head_width);
        Self {
            length,
            head_length: clamp_dependent(self.head_length, length - 2.0 * MIN_DIMENSION),
            shaft_width: clamp_dependent(self.shaft_width, head_width - 2.0 * MIN_DIMENSION),
            head_width,
            thickness: clamp_non_negative(self.thickness, MAX_DIMENSION),
        }
    }

    /// Counter-clockwise outline starting at the tail's right corner.
    pub fn outline(&self) -> Vec<DVec2> {
        let (shaft, head) = (self.shaft_width / 2.0, self.head_width / 2.0);
        let tail = -self.length / 2.0;
        let tip = self.length / 2.0;
        let neck = tip - self.head_length;
        vec![
            DVec2::new(shaft, tail),
            DVec2::new(shaft, neck),
            DVec2::new(head, neck),
            DVec2::new(0.0, tip),
            DVec2::new(-head, neck),
            DVec2::new(-shaft, neck),
            DVec2::new(-shaft, tail),
        ]
    }
}

/// Arbitrary simple polygon in the local ground plane, optionally extruded
/// along `up`. Either winding is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonParams {
    pub points: Vec<DVec2>,
    pub thickness: f64,
}

impl Default for PolygonParams {
    fn default() -> Self {
        // L-shaped outline with one reflex corner
        let s = DEFAULT_DIMENSION / 2.0;
        Self {
            points: vec![
                DVec2::new(-s, -s),
                DVec2::new(s, -s),
                DVec2::new(s, 0.0),
                DVec2::new(0.0, 0.0),
                DVec2::new(0.0, s),
                DVec2::new(-s, s),
            ],
            thickness: 0.0,
        }
    }
}

impl PolygonParams {
    /// Drops non-finite points and clamps coordinates to the working range.
    pub fn clamped(&self) -> Self {
        let points = self
            .points
            .iter()
            .filter(|p| p.is_finite())
            .map(|p| p.clamp(DVec2::splat(-MAX_DIMENSION), DVec2::splat(MAX_DIMENSION)))
            .collect();
        Self {
            points,
            thickness: clamp_non_negative(self.thickness, MAX_DIMENSION),
        }
    }
}

pub(super) fn build_arrow(mesh: &mut Mesh, frame: &Frame, p: &ArrowParams, uv: &UvSettings, flip: bool) {
    build_prism(mesh, frame, &p.outline(), 0.0, p.thickness, uv, flip);
}

pub(super) fn build_polygon_shape(mesh: &mut Mesh, frame: &Frame, p: &PolygonParams, uv: &UvSettings, flip: bool) {
    if p.points.len() < 3 {
        debug!(points = p.points.len(), "polygon needs at least three points, skipping");
        return;
    }
    build_prism(mesh, frame, &p.points, 0.0, p.thickness, uv, flip);
}

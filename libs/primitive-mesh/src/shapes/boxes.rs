//! Boxes: the plain six-sided box and the box with rounded (or bevelled)
//! edges and corners.

use config::constants::{
    clamp_dependent, clamp_dimension, clamp_segments, DEFAULT_DIMENSION, DEFAULT_FILLET_SEGMENTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use tracing::trace;

use super::corner_steps;
use crate::builders::box_faces::{build_box, BoxFaces, BoxSegments};
use crate::builders::fillet::{build_arc_strip, build_sphere_corner, ArcStrip};
use crate::builders::plane::build_quad;
use crate::builders::uv::UvSettings;
use crate::math::Frame;
use crate::mesh::Mesh;

fn clamp_box_segments(segments: BoxSegments) -> BoxSegments {
    BoxSegments {
        width: clamp_segments(segments.width),
        length: clamp_segments(segments.length),
        height: clamp_segments(segments.height),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParams {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub segments: BoxSegments,
    pub faces: BoxFaces,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            length: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            segments: BoxSegments::ONE,
            faces: BoxFaces::ALL,
        }
    }
}

impl BoxParams {
    pub fn clamped(&self) -> Self {
        Self {
            width: clamp_dimension(self.width),
            length: clamp_dimension(self.length),
            height: clamp_dimension(self.height),
            segments: clamp_box_segments(self.segments),
            faces: self.faces,
        }
    }
}

/// Box whose twelve edges are quarter-cylinder fillets and whose eight
/// corners are sphere octants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChamferBoxParams {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    /// At most half the smallest dimension
    pub fillet: f64,
    pub segments: BoxSegments,
    pub fillet_segments: u32,
    /// Single bevel face instead of a rounded fillet
    pub flat_chamfer: bool,
}

impl Default for ChamferBoxParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            length: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            fillet: DEFAULT_DIMENSION / 10.0,
            segments: BoxSegments::ONE,
            fillet_segments: DEFAULT_FILLET_SEGMENTS,
            flat_chamfer: false,
        }
    }
}

impl ChamferBoxParams {
    pub fn clamped(&self) -> Self {
        let width = clamp_dimension(self.width);
        let length = clamp_dimension(self.length);
        let height = clamp_dimension(self.height);
        Self {
            width,
            length,
            height,
            fillet: clamp_dependent(self.fillet, width.min(length).min(height) / 2.0),
            segments: clamp_box_segments(self.segments),
            fillet_segments: clamp_segments(self.fillet_segments),
            flat_chamfer: self.flat_chamfer,
        }
    }
}

pub(super) fn build_box_shape(mesh: &mut Mesh, frame: &Frame, p: &BoxParams, uv: &UvSettings, flip: bool) {
    let (hw, hl) = (p.width / 2.0, p.length / 2.0);
    build_box(
        mesh,
        frame,
        DVec3::new(-hw, -hl, 0.0),
        DVec3::new(hw, hl, p.height),
        p.segments,
        p.faces,
        uv,
        flip,
    );
}

/// Six inset faces, twelve edge strips and eight corner octants.
///
/// Work happens in local coordinates around the box centre; `world` maps a
/// local point through the frame so every piece uses the same mapping.
pub(super) fn build_chamfer_box(
    mesh: &mut Mesh,
    frame: &Frame,
    p: &ChamferBoxParams,
    uv: &UvSettings,
    flip: bool,
) {
    let f = p.fillet;
    let half = DVec3::new(p.width, p.length, p.height) / 2.0;
    let inner = half - DVec3::splat(f);
    let centre = DVec3::new(0.0, 0.0, half.z);
    let steps = corner_steps(p.fillet_segments, p.flat_chamfer);
    let arc_length = f * FRAC_PI_2;

    let world = |v: DVec3| frame.point(v.x, v.y, v.z);
    let axes = [frame.right, frame.forward, frame.up];
    let unit = [DVec3::X, DVec3::Y, DVec3::Z];

    // Flat faces, inset by the fillet on every side
    for k in 0..3 {
        let (u, v) = ((k + 1) % 3, (k + 2) % 3);
        for sign in [1.0, -1.0] {
            let base = centre + unit[k] * sign * half[k];
            let corner = |su: f64, sv: f64| world(base + unit[u] * su * inner[u] + unit[v] * sv * inner[v]);
            let quad = [corner(-1.0, -1.0), corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0)];
            let facing = axes[k] * sign * if flip { -1.0 } else { 1.0 };
            let rect = uv.rect(DVec2::new(2.0 * inner[u], 2.0 * inner[v]));
            build_quad(mesh, quad, p.segments.along(u), p.segments.along(v), facing, &rect);
        }
    }

    // Edge strips along axis k, between the faces normal to u and v
    for k in 0..3 {
        let (u, v) = ((k + 1) % 3, (k + 2) % 3);
        for su in [1.0, -1.0] {
            for sv in [1.0, -1.0] {
                let start = centre + unit[u] * su * inner[u] + unit[v] * sv * inner[v] - unit[k] * inner[k];
                let strip = ArcStrip {
                    start: world(start),
                    axis: axes[k] * 2.0 * inner[k],
                    from_dir: axes[u] * su,
                    to_dir: axes[v] * sv,
                    radius: f,
                    length_segments: p.segments.along(k),
                    arc_segments: steps,
                };
                let rect = uv.rect(DVec2::new(2.0 * inner[k], arc_length));
                build_arc_strip(mesh, &strip, &rect, flip);
            }
        }
    }

    // Corner octants
    let rect = uv.rect(DVec2::splat(arc_length));
    for sx in [1.0, -1.0] {
        for sy in [1.0, -1.0] {
            for sz in [1.0, -1.0] {
                let local = centre + inner * DVec3::new(sx, sy, sz);
                build_sphere_corner(
                    mesh,
                    world(local),
                    axes[0] * sx,
                    axes[1] * sy,
                    axes[2] * sz,
                    f,
                    steps,
                    &rect,
                    flip,
                );
            }
        }
    }

    trace!(fillet = f, steps, "chamfer box assembled");
}

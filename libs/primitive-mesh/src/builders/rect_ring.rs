//! # Rounded Rectangles
//!
//! Outlines with filleted (or bevelled) corners, the flat rings between two
//! such outlines, and the vertical walls that extrude them.
//!
//! Walls are assembled piece by piece: four flat sides and four quarter
//! cylinders at the corners. Every piece places its samples from the same
//! outline points, so sides and corners meet exactly.

use config::constants::EPSILON;
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

use super::lattice::build_lattice;
use super::uv::{PlanarUv, UvAxis, UvRect, UvSettings};
use crate::math::{fraction, mix, mix2, Frame};
use crate::mesh::Mesh;

/// Axis-aligned rectangle centred on the frame origin with rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub half_width: f64,
    pub half_length: f64,
    /// Corner radius, at most the smaller half extent
    pub radius: f64,
    /// Arc segments per corner; `1` gives a straight bevel
    pub corner_steps: u32,
}

impl RoundedRect {
    pub fn new(width: f64, length: f64, radius: f64, corner_steps: u32) -> Self {
        let (half_width, half_length) = (width / 2.0, length / 2.0);
        Self {
            half_width,
            half_length,
            radius: radius.clamp(0.0, half_width.min(half_length)),
            corner_steps: corner_steps.max(1),
        }
    }

    /// Same corner layout shrunk by `inset` on every side.
    pub fn inset(&self, inset: f64) -> Self {
        Self {
            half_width: self.half_width - inset,
            half_length: self.half_length - inset,
            radius: (self.radius - inset).max(0.0),
            corner_steps: self.corner_steps,
        }
    }

    /// Points of corner `corner` (0 = +x+y, counter-clockwise), from its
    /// start angle to its end angle. Always `corner_steps + 1` points, even
    /// when the radius is zero.
    pub fn corner(&self, corner: u32) -> Vec<DVec2> {
        let (sx, sy) = match corner % 4 {
            0 => (1.0, 1.0),
            1 => (-1.0, 1.0),
            2 => (-1.0, -1.0),
            _ => (1.0, -1.0),
        };
        let centre = DVec2::new(
            sx * (self.half_width - self.radius),
            sy * (self.half_length - self.radius),
        );
        let start = FRAC_PI_2 * (corner % 4) as f64;
        let end = start + FRAC_PI_2;
        (0..=self.corner_steps)
            .map(|k| {
                let angle = mix(start, end, fraction(k, self.corner_steps));
                centre + DVec2::new(angle.cos(), angle.sin()) * self.radius
            })
            .collect()
    }

    /// Closed counter-clockwise outline, `4 * (corner_steps + 1)` points.
    /// The first point is not repeated at the end.
    pub fn outline(&self) -> Vec<DVec2> {
        (0..4).flat_map(|c| self.corner(c)).collect()
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.half_width, self.half_length) * 2.0
    }

    pub fn min(&self) -> DVec2 {
        -DVec2::new(self.half_width, self.half_length)
    }

    pub fn is_rounded(&self) -> bool {
        self.radius >= EPSILON
    }
}

/// Builds the flat ring between `outer` and `inner` at height `z`, or the
/// filled outline when `inner` is `None`. Faces `up` unless flipped.
///
/// Both outlines must share `corner_steps` so their points pair up.
#[allow(clippy::too_many_arguments)]
pub fn build_rounded_rect_ring(
    mesh: &mut Mesh,
    frame: &Frame,
    outer: &RoundedRect,
    inner: Option<&RoundedRect>,
    z: f64,
    segments: u32,
    uv: &PlanarUv,
    flip: bool,
) {
    let outer_points = outer.outline();
    let inner_points = match inner {
        Some(rect) => rect.outline(),
        None => vec![DVec2::ZERO; outer_points.len()],
    };
    let count = outer_points.len() as u32;

    // Outline tangent × outward radial points down
    build_lattice(mesh, count, segments, !flip, |i, j| {
        let k = (i % count) as usize;
        let p = mix2(inner_points[k], outer_points[k], fraction(j, segments));
        (frame.point(p.x, p.y, z), uv.at(p))
    });
}

/// Extrudes an open polyline vertically between `z0` and `z1`.
///
/// The natural facing is `tangent × up`, which is outward for a
/// counter-clockwise outline. `u` follows arc length along the polyline.
#[allow(clippy::too_many_arguments)]
pub fn build_wall(
    mesh: &mut Mesh,
    frame: &Frame,
    points: &[DVec2],
    z0: f64,
    z1: f64,
    rows: u32,
    uv: &UvRect,
    flip: bool,
) {
    if points.len() < 2 {
        return;
    }
    let mut distance = Vec::with_capacity(points.len());
    let mut run = 0.0;
    distance.push(0.0);
    for pair in points.windows(2) {
        run += pair[0].distance(pair[1]);
        distance.push(run);
    }
    let total = run.max(EPSILON);
    let cols = points.len() as u32 - 1;

    build_lattice(mesh, cols, rows, flip, |i, j| {
        let p = points[i as usize];
        let t = fraction(j, rows);
        (frame.point(p.x, p.y, mix(z0, z1, t)), uv.at(distance[i as usize] / total, t))
    });
}

/// Builds the side walls of a rounded rectangle between `z0` and `z1`:
/// four flat sides and, when rounded, four corner arcs. Faces outward
/// unless flipped.
#[allow(clippy::too_many_arguments)]
pub fn build_rect_walls(
    mesh: &mut Mesh,
    frame: &Frame,
    rect: &RoundedRect,
    z0: f64,
    z1: f64,
    rows: u32,
    uv: &UvSettings,
    flip: bool,
) {
    let corners: Vec<Vec<DVec2>> = (0..4).map(|c| rect.corner(c)).collect();

    let mut pieces: Vec<Vec<DVec2>> = Vec::with_capacity(8);
    for c in 0..4 {
        if rect.is_rounded() {
            pieces.push(corners[c].clone());
        }
        let end = corners[c].last().copied().unwrap_or_default();
        let next = corners[(c + 1) % 4].first().copied().unwrap_or_default();
        pieces.push(vec![end, next]);
    }

    let lengths: Vec<f64> = pieces.iter().map(|p| polyline_length(p)).collect();
    let height = (z1 - z0).abs();
    let mut run = uv.run(UvAxis::U, lengths.iter().sum());
    for (piece, length) in pieces.iter().zip(lengths) {
        let rect_uv = run.next(length, height);
        build_wall(mesh, frame, piece, z0, z1, rows, &rect_uv, flip);
    }
}

pub(crate) fn polyline_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

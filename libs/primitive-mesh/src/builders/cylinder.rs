//! # Cylinders
//!
//! Lateral surfaces of revolution and the closed solids built from them:
//! cylinders, cones and tubes with optional caps, closed ends of given
//! thickness, and cut faces when the revolution is sliced.

use glam::DVec2;

use super::circle::{build_ring, is_partial_arc, RingSector};
use super::lattice::build_lattice;
use super::polygon::{build_polygon, clean_outline};
use super::uv::{UvRect, UvSettings};
use crate::math::{fraction, mix, Frame};
use crate::mesh::Mesh;

/// Angular extent of a revolved piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Radians from `right` towards `forward`
    pub from: f64,
    pub to: f64,
    /// Lattice columns around the sweep
    pub steps: u32,
}

impl Sweep {
    pub fn full(steps: u32) -> Self {
        Self {
            from: 0.0,
            to: std::f64::consts::TAU,
            steps,
        }
    }

    pub fn angle(&self, i: u32) -> f64 {
        mix(self.from, self.to, fraction(i, self.steps))
    }

    pub fn span(&self) -> f64 {
        (self.to - self.from).abs()
    }

    pub fn is_partial(&self) -> bool {
        is_partial_arc(self.from, self.to)
    }
}

/// Builds the lateral surface between `(bottom_radius, z0)` and
/// `(top_radius, z1)`. Faces away from the axis unless flipped.
#[allow(clippy::too_many_arguments)]
pub fn build_cylinder_surface(
    mesh: &mut Mesh,
    frame: &Frame,
    bottom_radius: f64,
    top_radius: f64,
    z0: f64,
    z1: f64,
    sweep: &Sweep,
    rows: u32,
    uv: &UvRect,
    flip: bool,
) {
    build_lattice(mesh, sweep.steps, rows, flip, |i, j| {
        let s = fraction(i, sweep.steps);
        let t = fraction(j, rows);
        let radius = mix(bottom_radius, top_radius, t);
        let z = mix(z0, z1, t);
        (frame.ring_point(radius, sweep.angle(i), z), uv.at(s, t))
    });
}

/// Parameters of a closed body of revolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderSpec {
    pub bottom_radius: f64,
    pub top_radius: f64,
    /// Bore radius for tubes; `None` for a solid body
    pub inner_radius: Option<f64>,
    pub height: f64,
    pub sweep: Sweep,
    pub height_segments: u32,
    pub cap_segments: u32,
    /// Close the ends (and the cut faces of a slice)
    pub caps: bool,
    /// Closed-bottom thickness of a tube; zero leaves the bore open
    pub bottom_thickness: f64,
    pub top_thickness: f64,
}

/// Builds a cylinder, cone or tube standing on the frame origin.
///
/// Pieces: outer wall, bore wall (tubes), bottom and top caps or rims,
/// the floor and ceiling of closed tube ends, and the two cut faces of a
/// sliced body. Caps and cut faces are skipped when `caps` is false.
pub fn build_solid_cylinder(
    mesh: &mut Mesh,
    frame: &Frame,
    spec: &CylinderSpec,
    uv: &UvSettings,
    flip: bool,
) {
    let CylinderSpec {
        bottom_radius: rb,
        top_radius: rt,
        height: h,
        sweep,
        ..
    } = *spec;
    let (bottom_thickness, top_thickness) = if spec.caps {
        (spec.bottom_thickness, spec.top_thickness)
    } else {
        (0.0, 0.0)
    };

    let slant = (h * h + (rb - rt) * (rb - rt)).sqrt();
    let outer_uv = uv.rect(DVec2::new(sweep.span() * rb.max(rt), slant));
    build_cylinder_surface(mesh, frame, rb, rt, 0.0, h, &sweep, spec.height_segments, &outer_uv, flip);

    if let Some(ri) = spec.inner_radius {
        let (z0, z1) = (bottom_thickness, h - top_thickness);
        let bore_uv = uv.rect(DVec2::new(sweep.span() * ri, z1 - z0));
        build_cylinder_surface(mesh, frame, ri, ri, z0, z1, &sweep, spec.height_segments, &bore_uv, !flip);
    }

    if !spec.caps {
        return;
    }

    let end = |radius: f64, z: f64, facing_up: bool, mesh: &mut Mesh| {
        let inner = match spec.inner_radius {
            Some(ri) if (facing_up && top_thickness <= 0.0) || (!facing_up && bottom_thickness <= 0.0) => ri,
            _ => 0.0,
        };
        let ring = RingSector {
            inner_radius: inner,
            outer_radius: radius,
            z,
            from: sweep.from,
            to: sweep.to,
            steps: sweep.steps,
            segments: spec.cap_segments,
        };
        let planar = uv.planar(DVec2::splat(-radius), DVec2::splat(2.0 * radius));
        build_ring(mesh, frame, &ring, &planar, facing_up == flip);
    };
    end(rb, 0.0, false, mesh);
    end(rt, h, true, mesh);

    if let Some(ri) = spec.inner_radius {
        let planar = uv.planar(DVec2::splat(-ri), DVec2::splat(2.0 * ri));
        let disc = |z: f64| RingSector {
            inner_radius: 0.0,
            outer_radius: ri,
            z,
            from: sweep.from,
            to: sweep.to,
            steps: sweep.steps,
            segments: spec.cap_segments,
        };
        if bottom_thickness > 0.0 {
            build_ring(mesh, frame, &disc(bottom_thickness), &planar, flip);
        }
        if top_thickness > 0.0 {
            build_ring(mesh, frame, &disc(h - top_thickness), &planar, !flip);
        }
    }

    if sweep.is_partial() {
        let profile = cut_profile(spec, bottom_thickness, top_thickness);
        let size = DVec2::new(rb.max(rt), h);
        let planar = uv.planar(DVec2::ZERO, size);
        build_polygon(mesh, &profile, |q| frame.ring_point(q.x, sweep.from, q.y), &planar, flip);
        build_polygon(mesh, &profile, |q| frame.ring_point(q.x, sweep.to, q.y), &planar, !flip);
    }
}

/// Counter-clockwise cross-section in the `(radius, height)` plane.
///
/// A tube with closed ends has a C-shaped (concave) section.
fn cut_profile(spec: &CylinderSpec, bottom_thickness: f64, top_thickness: f64) -> Vec<DVec2> {
    let (rb, rt, h) = (spec.bottom_radius, spec.top_radius, spec.height);
    let mut profile = Vec::with_capacity(8);

    match spec.inner_radius {
        None => {
            profile.push(DVec2::new(0.0, 0.0));
            profile.push(DVec2::new(rb, 0.0));
            profile.push(DVec2::new(rt, h));
            profile.push(DVec2::new(0.0, h));
        }
        Some(ri) => {
            let (z0, z1) = (bottom_thickness, h - top_thickness);
            if bottom_thickness > 0.0 {
                profile.push(DVec2::new(0.0, 0.0));
            } else {
                profile.push(DVec2::new(ri, 0.0));
            }
            profile.push(DVec2::new(rb, 0.0));
            profile.push(DVec2::new(rt, h));
            if top_thickness > 0.0 {
                profile.push(DVec2::new(0.0, h));
                profile.push(DVec2::new(0.0, z1));
            }
            profile.push(DVec2::new(ri, z1));
            if bottom_thickness > 0.0 {
                profile.push(DVec2::new(ri, z0));
                profile.push(DVec2::new(0.0, z0));
            }
        }
    }

    clean_outline(&profile)
}

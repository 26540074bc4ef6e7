//! Bodies of revolution: cylinder, cone, tube, torus and the cylinder with
//! filleted rims.

use config::constants::{
    clamp_dependent, clamp_dimension, clamp_segments, clamp_sides, DEFAULT_DIMENSION,
    DEFAULT_FILLET_SEGMENTS, DEFAULT_SEGMENTS, DEFAULT_SIDES, MIN_DIMENSION,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use tracing::trace;

use super::{clamp_non_negative, corner_steps, Slice};
use crate::builders::circle::{build_ring, RingSector};
use crate::builders::cylinder::{build_cylinder_surface, build_solid_cylinder, CylinderSpec, Sweep};
use crate::builders::polygon::{build_polygon, clean_outline};
use crate::builders::torus::{build_torus, build_torus_caps, TorusSpec};
use crate::builders::uv::{UvAxis, UvSettings};
use crate::math::{fraction, mix, Frame};
use crate::mesh::Mesh;

// =============================================================================
// PARAMETERS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    pub radius: f64,
    pub height: f64,
    pub sides: u32,
    pub height_segments: u32,
    pub cap_segments: u32,
    pub slice: Slice,
    pub caps: bool,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_DIMENSION / 2.0,
            height: DEFAULT_DIMENSION,
            sides: DEFAULT_SIDES,
            height_segments: DEFAULT_SEGMENTS,
            cap_segments: DEFAULT_SEGMENTS,
            slice: Slice::default(),
            caps: true,
        }
    }
}

impl CylinderParams {
    pub fn clamped(&self) -> Self {
        Self {
            radius: clamp_dimension(self.radius),
            height: clamp_dimension(self.height),
            sides: clamp_sides(self.sides),
            height_segments: clamp_segments(self.height_segments),
            cap_segments: clamp_segments(self.cap_segments),
            slice: self.slice.clamped(),
            caps: self.caps,
        }
    }
}

/// Cone or frustum; a zero top radius closes to an apex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    pub bottom_radius: f64,
    pub top_radius: f64,
    pub height: f64,
    pub sides: u32,
    pub height_segments: u32,
    pub cap_segments: u32,
    pub slice: Slice,
    pub caps: bool,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            bottom_radius: DEFAULT_DIMENSION / 2.0,
            top_radius: 0.0,
            height: DEFAULT_DIMENSION,
            sides: DEFAULT_SIDES,
            height_segments: DEFAULT_SEGMENTS,
            cap_segments: DEFAULT_SEGMENTS,
            slice: Slice::default(),
            caps: true,
        }
    }
}

impl ConeParams {
    pub fn clamped(&self) -> Self {
        Self {
            bottom_radius: clamp_dimension(self.bottom_radius),
            top_radius: clamp_non_negative(self.top_radius, f64::MAX),
            height: clamp_dimension(self.height),
            sides: clamp_sides(self.sides),
            height_segments: clamp_segments(self.height_segments),
            cap_segments: clamp_segments(self.cap_segments),
            slice: self.slice.clamped(),
            caps: self.caps,
        }
    }
}

/// Hollow cylinder, optionally closed at either end by a slab of the given
/// thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TubeParams {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub height: f64,
    pub sides: u32,
    pub height_segments: u32,
    pub cap_segments: u32,
    pub slice: Slice,
    pub caps: bool,
    pub bottom_thickness: f64,
    pub top_thickness: f64,
}

impl Default for TubeParams {
    fn default() -> Self {
        Self {
            outer_radius: DEFAULT_DIMENSION / 2.0,
            inner_radius: DEFAULT_DIMENSION / 4.0,
            height: DEFAULT_DIMENSION,
            sides: DEFAULT_SIDES,
            height_segments: DEFAULT_SEGMENTS,
            cap_segments: DEFAULT_SEGMENTS,
            slice: Slice::default(),
            caps: true,
            bottom_thickness: 0.0,
            top_thickness: 0.0,
        }
    }
}

impl TubeParams {
    pub fn clamped(&self) -> Self {
        let outer_radius = clamp_dimension(self.outer_radius);
        let height = clamp_dimension(self.height);
        let slab_bound = height / 2.0 - MIN_DIMENSION;
        Self {
            outer_radius,
            inner_radius: clamp_dependent(self.inner_radius, outer_radius - MIN_DIMENSION),
            height,
            sides: clamp_sides(self.sides),
            height_segments: clamp_segments(self.height_segments),
            cap_segments: clamp_segments(self.cap_segments),
            slice: self.slice.clamped(),
            caps: self.caps,
            bottom_thickness: clamp_non_negative(self.bottom_thickness, slab_bound),
            top_thickness: clamp_non_negative(self.top_thickness, slab_bound),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusParams {
    pub major_radius: f64,
    /// At most the major radius
    pub minor_radius: f64,
    pub major_sides: u32,
    pub minor_sides: u32,
    /// Sweep around the axis
    pub major_slice: Slice,
    /// Sweep of the cross-section, measured from the outer equator upwards
    pub minor_slice: Slice,
    /// Disc caps on the ends of a partial major sweep
    pub caps: bool,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            major_radius: DEFAULT_DIMENSION / 2.0,
            minor_radius: DEFAULT_DIMENSION / 8.0,
            major_sides: DEFAULT_SIDES,
            minor_sides: DEFAULT_SIDES / 2,
            major_slice: Slice::default(),
            minor_slice: Slice::default(),
            caps: true,
        }
    }
}

impl TorusParams {
    pub fn clamped(&self) -> Self {
        let major_radius = clamp_dimension(self.major_radius);
        Self {
            major_radius,
            minor_radius: clamp_dependent(self.minor_radius, major_radius),
            major_sides: clamp_sides(self.major_sides),
            minor_sides: clamp_sides(self.minor_sides),
            major_slice: self.major_slice.clamped(),
            minor_slice: self.minor_slice.clamped(),
            caps: self.caps,
        }
    }
}

/// Cylinder whose top and bottom rims are rounded by a quarter-torus fillet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChamferCylinderParams {
    pub radius: f64,
    pub height: f64,
    /// At most the radius and half the height
    pub fillet: f64,
    pub sides: u32,
    pub height_segments: u32,
    pub fillet_segments: u32,
    pub cap_segments: u32,
    pub flat_chamfer: bool,
    pub slice: Slice,
}

impl Default for ChamferCylinderParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_DIMENSION / 2.0,
            height: DEFAULT_DIMENSION,
            fillet: DEFAULT_DIMENSION / 10.0,
            sides: DEFAULT_SIDES,
            height_segments: DEFAULT_SEGMENTS,
            fillet_segments: DEFAULT_FILLET_SEGMENTS,
            cap_segments: DEFAULT_SEGMENTS,
            flat_chamfer: false,
            slice: Slice::default(),
        }
    }
}

impl ChamferCylinderParams {
    pub fn clamped(&self) -> Self {
        let radius = clamp_dimension(self.radius);
        let height = clamp_dimension(self.height);
        Self {
            radius,
            height,
            fillet: clamp_dependent(self.fillet, radius.min(height / 2.0)),
            sides: clamp_sides(self.sides),
            height_segments: clamp_segments(self.height_segments),
            fillet_segments: clamp_segments(self.fillet_segments),
            cap_segments: clamp_segments(self.cap_segments),
            flat_chamfer: self.flat_chamfer,
            slice: self.slice.clamped(),
        }
    }
}

// =============================================================================
// RECIPES
// =============================================================================

pub(super) fn build_cylinder(mesh: &mut Mesh, frame: &Frame, p: &CylinderParams, uv: &UvSettings, flip: bool) {
    let cone = ConeParams {
        bottom_radius: p.radius,
        top_radius: p.radius,
        height: p.height,
        sides: p.sides,
        height_segments: p.height_segments,
        cap_segments: p.cap_segments,
        slice: p.slice,
        caps: p.caps,
    };
    build_cone(mesh, frame, &cone, uv, flip);
}

pub(super) fn build_cone(mesh: &mut Mesh, frame: &Frame, p: &ConeParams, uv: &UvSettings, flip: bool) {
    if p.slice.is_empty() {
        return;
    }
    let spec = CylinderSpec {
        bottom_radius: p.bottom_radius,
        top_radius: p.top_radius,
        inner_radius: None,
        height: p.height,
        sweep: p.slice.sweep(p.sides),
        height_segments: p.height_segments,
        cap_segments: p.cap_segments,
        caps: p.caps,
        bottom_thickness: 0.0,
        top_thickness: 0.0,
    };
    build_solid_cylinder(mesh, frame, &spec, uv, flip);
}

pub(super) fn build_tube(mesh: &mut Mesh, frame: &Frame, p: &TubeParams, uv: &UvSettings, flip: bool) {
    if p.slice.is_empty() {
        return;
    }
    let spec = CylinderSpec {
        bottom_radius: p.outer_radius,
        top_radius: p.outer_radius,
        inner_radius: Some(p.inner_radius),
        height: p.height,
        sweep: p.slice.sweep(p.sides),
        height_segments: p.height_segments,
        cap_segments: p.cap_segments,
        caps: p.caps,
        bottom_thickness: p.bottom_thickness,
        top_thickness: p.top_thickness,
    };
    build_solid_cylinder(mesh, frame, &spec, uv, flip);
}

pub(super) fn build_torus_shape(mesh: &mut Mesh, frame: &Frame, p: &TorusParams, uv: &UvSettings, flip: bool) {
    if p.major_slice.is_empty() || p.minor_slice.is_empty() {
        return;
    }
    let spec = TorusSpec {
        major_radius: p.major_radius,
        minor_radius: p.minor_radius,
        z: 0.0,
        major: p.major_slice.sweep(p.major_sides),
        minor: p.minor_slice.sweep(p.minor_sides),
    };
    let extent = DVec2::new(
        spec.major.span() * (p.major_radius + p.minor_radius),
        spec.minor.span() * p.minor_radius,
    );
    build_torus(mesh, frame, &spec, &uv.rect(extent), flip);

    if p.caps && spec.major.is_partial() && !spec.minor.is_partial() {
        let r = p.minor_radius;
        let planar = uv.planar(DVec2::splat(-r), DVec2::splat(2.0 * r));
        build_torus_caps(mesh, frame, &spec, &planar, flip);
    }
}

/// Caps, two quarter-torus fillets and the straight band between them.
///
/// The band radius is `major + fillet`, the value the torus formula yields
/// at its equator, so fillets and band share their seam vertices.
pub(super) fn build_chamfer_cylinder(
    mesh: &mut Mesh,
    frame: &Frame,
    p: &ChamferCylinderParams,
    uv: &UvSettings,
    flip: bool,
) {
    if p.slice.is_empty() {
        return;
    }
    let f = p.fillet;
    let h = p.height;
    let major = p.radius - f;
    let band_radius = major + f;
    let sweep = p.slice.sweep(p.sides);
    let steps = corner_steps(p.fillet_segments, p.flat_chamfer);

    let fillet = |z: f64, from: f64, to: f64| TorusSpec {
        major_radius: major,
        minor_radius: f,
        z,
        major: sweep,
        minor: Sweep { from, to, steps },
    };
    let bottom = fillet(f, -FRAC_PI_2, 0.0);
    let top = fillet(h - f, 0.0, FRAC_PI_2);

    // Lateral profile: fillet, band, fillet, textured as one run along V
    let arc = f * FRAC_PI_2;
    let band = h - 2.0 * f;
    let circumference = sweep.span() * p.radius;
    let mut run = uv.run(UvAxis::V, 2.0 * arc + band);

    build_torus(mesh, frame, &bottom, &run.next(arc, circumference), flip);
    let band_uv = run.next(band, circumference);
    build_cylinder_surface(mesh, frame, band_radius, band_radius, f, h - f, &sweep, p.height_segments, &band_uv, flip);
    build_torus(mesh, frame, &top, &run.next(arc, circumference), flip);

    let planar = uv.planar(DVec2::splat(-p.radius), DVec2::splat(2.0 * p.radius));
    for (z, cap_flip) in [(0.0, !flip), (h, flip)] {
        let cap = RingSector {
            inner_radius: 0.0,
            outer_radius: major,
            z,
            from: sweep.from,
            to: sweep.to,
            steps: sweep.steps,
            segments: p.cap_segments,
        };
        build_ring(mesh, frame, &cap, &planar, cap_flip);
    }

    if sweep.is_partial() {
        let profile = chamfer_profile(major, f, h, steps);
        let planar = uv.planar(DVec2::ZERO, DVec2::new(p.radius, h));
        build_polygon(mesh, &profile, |q| frame.ring_point(q.x, sweep.from, q.y), &planar, flip);
        build_polygon(mesh, &profile, |q| frame.ring_point(q.x, sweep.to, q.y), &planar, !flip);
    }

    trace!(fillet = f, steps, "chamfer cylinder assembled");
}

/// Counter-clockwise `(radius, height)` cross-section of a chamfer cylinder.
fn chamfer_profile(major: f64, f: f64, h: f64, steps: u32) -> Vec<DVec2> {
    let arc = |centre_z: f64, from: f64, to: f64| {
        (0..=steps).map(move |k| {
            let angle = mix(from, to, fraction(k, steps));
            DVec2::new(major + f * angle.cos(), centre_z + f * angle.sin())
        })
    };

    let mut profile = vec![DVec2::new(0.0, 0.0), DVec2::new(major, 0.0)];
    profile.extend(arc(f, -FRAC_PI_2, 0.0));
    profile.extend(arc(h - f, 0.0, FRAC_PI_2));
    profile.push(DVec2::new(major, h));
    profile.push(DVec2::new(0.0, h));
    clean_outline(&profile)
}

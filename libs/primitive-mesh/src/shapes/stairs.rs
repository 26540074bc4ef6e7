//! Straight and spiral staircases, assembled one step at a time.

use config::constants::{
    clamp_dimension, clamp_segments, clamp_sides, clamp_steps, DEFAULT_DIMENSION,
    DEFAULT_SEGMENTS, DEFAULT_SIDES, EPSILON, FULL_TURN_DEGREES, MIN_DIMENSION,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::clamp_non_negative;
use crate::builders::box_faces::{build_box, BoxFaces, BoxSegments};
use crate::builders::circle::arc_steps;
use crate::builders::cylinder::{build_solid_cylinder, CylinderSpec, Sweep};
use crate::builders::plane::build_quad;
use crate::builders::uv::UvSettings;
use crate::math::Frame;
use crate::mesh::Mesh;

/// Straight flight climbing along `forward`, centred across `right`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StairParams {
    pub steps: u32,
    pub width: f64,
    pub step_depth: f64,
    pub step_height: f64,
    pub width_segments: u32,
}

impl Default for StairParams {
    fn default() -> Self {
        Self {
            steps: 4,
            width: DEFAULT_DIMENSION,
            step_depth: DEFAULT_DIMENSION / 4.0,
            step_height: DEFAULT_DIMENSION / 5.0,
            width_segments: DEFAULT_SEGMENTS,
        }
    }
}

impl StairParams {
    pub fn clamped(&self) -> Self {
        Self {
            steps: clamp_steps(self.steps),
            width: clamp_dimension(self.width),
            step_depth: clamp_dimension(self.step_depth),
            step_height: clamp_dimension(self.step_height),
            width_segments: clamp_segments(self.width_segments),
        }
    }
}

/// Steps winding counter-clockwise around `up`, each a sector of a tube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralStairParams {
    pub steps: u32,
    /// Zero lets the steps meet at the axis
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub step_height: f64,
    /// Degrees turned per step
    pub step_angle: f64,
    /// Sides of a full turn
    pub sides: u32,
    /// Central column from the floor to the top of the last step
    pub column: bool,
}

impl Default for SpiralStairParams {
    fn default() -> Self {
        Self {
            steps: 12,
            inner_radius: DEFAULT_DIMENSION / 10.0,
            outer_radius: DEFAULT_DIMENSION,
            step_height: DEFAULT_DIMENSION / 5.0,
            step_angle: 30.0,
            sides: DEFAULT_SIDES,
            column: true,
        }
    }
}

impl SpiralStairParams {
    pub fn clamped(&self) -> Self {
        let outer_radius = clamp_dimension(self.outer_radius);
        let step_angle = if self.step_angle.is_nan() {
            FULL_TURN_DEGREES / 12.0
        } else {
            self.step_angle.clamp(1.0, FULL_TURN_DEGREES)
        };
        Self {
            steps: clamp_steps(self.steps),
            inner_radius: clamp_non_negative(self.inner_radius, outer_radius - MIN_DIMENSION),
            outer_radius,
            step_height: clamp_dimension(self.step_height),
            step_angle,
            sides: clamp_sides(self.sides),
            column: self.column,
        }
    }
}

pub(super) fn build_stair(mesh: &mut Mesh, frame: &Frame, p: &StairParams, uv: &UvSettings, flip: bool) {
    let hw = p.width / 2.0;
    let (d, h) = (p.step_depth, p.step_height);
    let segments = BoxSegments {
        width: p.width_segments,
        ..BoxSegments::ONE
    };
    let riser_uv = uv.rect(DVec2::new(p.width, h));
    let facing = frame.forward * if flip { 1.0 } else { -1.0 };

    for i in 0..p.steps {
        let y0 = d * i as f64;
        let y1 = d * (i + 1) as f64;
        let (z0, z1) = (h * i as f64, h * (i + 1) as f64);

        // Solid column under the tread; the face hidden behind the next
        // step is culled
        let faces = BoxFaces {
            front: false,
            back: i + 1 == p.steps,
            ..BoxFaces::ALL
        };
        build_box(
            mesh,
            frame,
            DVec3::new(-hw, y0, 0.0),
            DVec3::new(hw, y1, z1),
            segments,
            faces,
            uv,
            flip,
        );

        // The riser covers only the part of the front above the previous tread
        let riser = [
            frame.point(-hw, y0, z0),
            frame.point(hw, y0, z0),
            frame.point(hw, y0, z1),
            frame.point(-hw, y0, z1),
        ];
        build_quad(mesh, riser, p.width_segments, 1, facing, &riser_uv);
    }
}

pub(super) fn build_spiral_stair(mesh: &mut Mesh, frame: &Frame, p: &SpiralStairParams, uv: &UvSettings, flip: bool) {
    let h = p.step_height;
    let angle = p.step_angle.to_radians();
    let inner_radius = (p.inner_radius >= EPSILON).then_some(p.inner_radius);

    for i in 0..p.steps {
        let from = angle * i as f64;
        let to = angle * (i + 1) as f64;
        let spec = CylinderSpec {
            bottom_radius: p.outer_radius,
            top_radius: p.outer_radius,
            inner_radius,
            height: h,
            sweep: Sweep {
                from,
                to,
                steps: arc_steps(p.sides, from, to),
            },
            height_segments: 1,
            cap_segments: 1,
            caps: true,
            bottom_thickness: 0.0,
            top_thickness: 0.0,
        };
        build_solid_cylinder(mesh, &frame.shifted(0.0, 0.0, h * i as f64), &spec, uv, flip);
    }

    if p.column && inner_radius.is_some() {
        let column = CylinderSpec {
            bottom_radius: p.inner_radius,
            top_radius: p.inner_radius,
            inner_radius: None,
            height: h * p.steps as f64,
            sweep: Sweep::full(p.sides),
            height_segments: p.steps,
            cap_segments: 1,
            caps: true,
            bottom_thickness: 0.0,
            top_thickness: 0.0,
        };
        build_solid_cylinder(mesh, frame, &column, uv, flip);
    }

    trace!(steps = p.steps, "spiral stair assembled");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_angle_clamped() {
        let p = SpiralStairParams {
            step_angle: 720.0,
            ..Default::default()
        };
        assert_eq!(p.clamped().step_angle, FULL_TURN_DEGREES);
        let p = SpiralStairParams {
            step_angle: f64::NAN,
            ..Default::default()
        };
        assert_eq!(p.clamped().step_angle, 30.0);
    }

    #[test]
    fn test_zero_steps_clamped_to_one() {
        let p = StairParams {
            steps: 0,
            ..Default::default()
        };
        assert_eq!(p.clamped().steps, 1);
    }
}

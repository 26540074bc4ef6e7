//! # Torus
//!
//! Surfaces swept by a circular cross-section around the frame's `up` axis.
//! Both the sweep around the axis and the cross-section itself may be
//! partial; a partial sweep of a full cross-section gets disc end caps.

use glam::{DVec2, DVec3};

use super::cylinder::Sweep;
use super::lattice::build_lattice;
use super::polygon::build_polygon;
use super::uv::{PlanarUv, UvRect};
use crate::math::{fraction, Frame};
use crate::mesh::Mesh;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusSpec {
    /// Distance from the axis to the cross-section centre
    pub major_radius: f64,
    pub minor_radius: f64,
    /// Height of the cross-section centre along `up`
    pub z: f64,
    /// Sweep around the `up` axis
    pub major: Sweep,
    /// Sweep of the cross-section, measured from the outward radial
    /// towards `up`
    pub minor: Sweep,
}

impl TorusSpec {
    /// Cross-section offset `(radial, up)` at minor angle `angle`.
    fn section(&self, angle: f64) -> DVec2 {
        DVec2::new(self.minor_radius * angle.cos(), self.minor_radius * angle.sin())
    }

    /// World position of cross-section offset `q` at major angle `angle`.
    fn place(&self, frame: &Frame, angle: f64, q: DVec2) -> DVec3 {
        frame.ring_point(self.major_radius + q.x, angle, self.z + q.y)
    }
}

/// Builds the swept surface. Faces away from the cross-section centre
/// unless flipped.
pub fn build_torus(mesh: &mut Mesh, frame: &Frame, spec: &TorusSpec, uv: &UvRect, flip: bool) {
    build_lattice(mesh, spec.major.steps, spec.minor.steps, flip, |i, j| {
        let q = spec.section(spec.minor.angle(j));
        (
            spec.place(frame, spec.major.angle(i), q),
            uv.at(fraction(i, spec.major.steps), fraction(j, spec.minor.steps)),
        )
    });
}

/// Closes the two ends of a partial sweep with cross-section discs.
///
/// Only meaningful when the cross-section is a full circle.
pub fn build_torus_caps(mesh: &mut Mesh, frame: &Frame, spec: &TorusSpec, uv: &PlanarUv, flip: bool) {
    let outline: Vec<DVec2> = (0..spec.minor.steps)
        .map(|j| spec.section(spec.minor.angle(j)))
        .collect();
    let (from, to) = (spec.major.from, spec.major.to);
    build_polygon(mesh, &outline, |q| spec.place(frame, from, q), uv, flip);
    build_polygon(mesh, &outline, |q| spec.place(frame, to, q), uv, !flip);
}

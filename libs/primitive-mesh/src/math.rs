//! # Geometry Kernel
//!
//! Pure 2D/3D helpers shared by the triangulator and the surface builders:
//! orientation and containment tests, oriented angles, circular indexing and
//! the local reference [`Frame`] every builder places its samples in.
//!
//! All functions are side-effect free; the only guarded failure mode is a
//! near-zero length, handled with [`EPSILON`].

use config::constants::EPSILON;
use glam::{DVec2, DVec3};
use robust::{orient2d, Coord};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::MeshError;

// =============================================================================
// 2D PREDICATES
// =============================================================================

/// Returns true when `p1 -> p2 -> p3` winds clockwise.
///
/// Uses the exact sign of the orientation determinant. Colinear and
/// coincident triples (determinant zero) count as clockwise.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use primitive_mesh::math::is_triangle_clockwise;
///
/// let (a, b, c) = (DVec2::ZERO, DVec2::X, DVec2::Y);
/// assert!(!is_triangle_clockwise(a, b, c));
/// assert!(is_triangle_clockwise(a, c, b));
/// ```
pub fn is_triangle_clockwise(p1: DVec2, p2: DVec2, p3: DVec2) -> bool {
    let determinant = orient2d(
        Coord { x: p1.x, y: p1.y },
        Coord { x: p2.x, y: p2.y },
        Coord { x: p3.x, y: p3.y },
    );
    determinant <= 0.0
}

/// Barycentric point-in-triangle test.
///
/// With `include_border` the acceptance window is widened by [`EPSILON`] so
/// points on an edge or corner count as inside; without it the window is
/// narrowed by the same amount so they count as outside. Zero-area triangles
/// contain nothing.
pub fn is_point_in_triangle(p1: DVec2, p2: DVec2, p3: DVec2, p: DVec2, include_border: bool) -> bool {
    let denominator = (p2.y - p3.y) * (p1.x - p3.x) + (p3.x - p2.x) * (p1.y - p3.y);
    if denominator.abs() < EPSILON * EPSILON {
        return false;
    }

    let a = ((p2.y - p3.y) * (p.x - p3.x) + (p3.x - p2.x) * (p.y - p3.y)) / denominator;
    let b = ((p3.y - p1.y) * (p.x - p3.x) + (p1.x - p3.x) * (p.y - p3.y)) / denominator;
    let c = 1.0 - a - b;

    if include_border {
        a >= -EPSILON && b >= -EPSILON && c >= -EPSILON
    } else {
        a > EPSILON && b > EPSILON && c > EPSILON
    }
}

/// Unsigned angle between two vectors, in `[0, π]`.
///
/// Either vector being (near) zero yields 0.
pub fn angle_between(a: DVec2, b: DVec2) -> f64 {
    let a = a.normalize_or_zero();
    let b = b.normalize_or_zero();
    if a == DVec2::ZERO || b == DVec2::ZERO {
        return 0.0;
    }
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// Counter-clockwise angle from `from` to `to`, in `[0, 2π)`.
///
/// The sign of the 2D cross product picks between the `acos` result and its
/// complement.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use primitive_mesh::math::angle_from_to_ccw;
/// use std::f64::consts::FRAC_PI_2;
///
/// assert!((angle_from_to_ccw(DVec2::X, DVec2::Y) - FRAC_PI_2).abs() < 1e-12);
/// assert!((angle_from_to_ccw(DVec2::Y, DVec2::X) - 3.0 * FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn angle_from_to_ccw(from: DVec2, to: DVec2) -> f64 {
    let angle = angle_between(from, to);
    if from.perp_dot(to) >= 0.0 {
        return angle;
    }
    let reflex = TAU - angle;
    if reflex >= TAU {
        0.0
    } else {
        reflex
    }
}

/// Wraps any signed index into `[0, n)`.
///
/// `n` must be non-zero.
#[inline]
pub fn clamp_list_index(index: isize, n: usize) -> usize {
    index.rem_euclid(n as isize) as usize
}

/// Shoelace signed area; positive for counter-clockwise outlines.
pub fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum();
    twice * 0.5
}

/// Unsigned polygon area.
pub fn polygon_area(points: &[DVec2]) -> f64 {
    signed_area(points).abs()
}

/// Unsigned area of a 2D triangle.
pub fn triangle_area(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    ((b - a).perp_dot(c - a) * 0.5).abs()
}

/// Linear blend that returns `a` and `b` exactly at `t = 0` and `t = 1`.
///
/// Shared seams depend on endpoints landing on the same float as the
/// neighbouring piece, which `a + (b - a) * t` does not guarantee.
#[inline]
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// [`mix`] for 2D points.
#[inline]
pub fn mix2(a: DVec2, b: DVec2, t: f64) -> DVec2 {
    a * (1.0 - t) + b * t
}

/// `i / n` as a parameter in `[0, 1]`; exact at both ends.
#[inline]
pub fn fraction(i: u32, n: u32) -> f64 {
    i as f64 / n as f64
}

/// Unit vector at `angle` radians in the plane of `u` (angle 0) and `v`
/// (angle π/2).
///
/// Every arc in the builder library goes through this so that two pieces
/// sampling the same angle on the same axes land on identical points.
#[inline]
pub fn arc_direction(u: DVec3, v: DVec3, angle: f64) -> DVec3 {
    u * angle.cos() + v * angle.sin()
}

// =============================================================================
// LOCAL FRAME
// =============================================================================

/// Orthonormal local reference frame.
///
/// Local coordinates map as x → `right`, y → `forward`, z → `up`, with
/// `up = right × forward` (right-handed). Builders place every sample
/// through [`Frame::point`], so a whole shape can be re-oriented by handing
/// the generator a different frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub origin: DVec3,
    pub right: DVec3,
    pub forward: DVec3,
    pub up: DVec3,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            right: DVec3::X,
            forward: DVec3::Y,
            up: DVec3::Z,
        }
    }
}

impl Frame {
    /// Builds a frame from a forward and right hint.
    ///
    /// `forward` is normalised and `right` is re-orthogonalised against it.
    /// Zero-length or parallel axes are rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use primitive_mesh::math::Frame;
    ///
    /// let frame = Frame::new(DVec3::ZERO, DVec3::new(0.0, 2.0, 0.0), DVec3::new(1.0, 0.5, 0.0)).unwrap();
    /// assert_eq!(frame.up, DVec3::Z);
    /// assert!(Frame::new(DVec3::ZERO, DVec3::Y, DVec3::Y).is_err());
    /// ```
    pub fn new(origin: DVec3, forward: DVec3, right: DVec3) -> Result<Self, MeshError> {
        if forward.length() < EPSILON {
            return Err(MeshError::degenerate_frame(format!(
                "forward axis has zero length: {forward:?}"
            )));
        }
        let forward = forward.normalize();
        let right = right - forward * right.dot(forward);
        if right.length() < EPSILON {
            return Err(MeshError::degenerate_frame(
                "right axis is zero or parallel to forward",
            ));
        }
        let right = right.normalize();
        Ok(Self {
            origin,
            right,
            forward,
            up: right.cross(forward),
        })
    }

    /// Maps local coordinates to a world position.
    #[inline]
    pub fn point(&self, x: f64, y: f64, z: f64) -> DVec3 {
        self.origin + self.vector(x, y, z)
    }

    /// Maps a local direction or offset (no translation).
    #[inline]
    pub fn vector(&self, x: f64, y: f64, z: f64) -> DVec3 {
        self.right * x + self.forward * y + self.up * z
    }

    /// Point at `radius` along the direction `angle` radians from `right`
    /// towards `forward`, lifted by `z` along `up`.
    ///
    /// Every revolved piece (lateral walls, caps, cut faces) places its rim
    /// samples through this so shared rims agree exactly.
    #[inline]
    pub fn ring_point(&self, radius: f64, angle: f64, z: f64) -> DVec3 {
        self.origin + arc_direction(self.right, self.forward, angle) * radius + self.up * z
    }

    /// Same axes, origin moved by a local offset.
    pub fn shifted(&self, x: f64, y: f64, z: f64) -> Self {
        Self {
            origin: self.point(x, y, z),
            ..*self
        }
    }

    /// Same origin, axes rotated about `up` by `angle` radians
    /// (counter-clockwise seen from `up`).
    pub fn rotated_about_up(&self, angle: f64) -> Self {
        let right = arc_direction(self.right, self.forward, angle);
        let forward = arc_direction(self.forward, -self.right, angle);
        Self {
            right,
            forward,
            ..*self
        }
    }
}

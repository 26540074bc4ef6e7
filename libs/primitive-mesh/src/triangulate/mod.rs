//! # Ear-Clipping Triangulation
//!
//! Triangulates a simple polygon given as an ordered boundary.
//!
//! ## Algorithm
//!
//! 1. The boundary is loaded into an arena of [`LinkedVertex`] records whose
//!    `prev`/`next` links are arena indices. Clockwise input is loaded in
//!    reverse so the ring is always traversed counter-clockwise.
//! 2. Each live vertex is tagged [`VertexClass::Reflex`], `Convex` or `Ear`.
//!    A vertex is convex when its interior angle is strictly below π; an
//!    ear is a convex vertex whose neighbour triangle holds no reflex vertex
//!    (border included).
//! 3. The first ear in arena order is clipped, emitting `(ear, prev, next)`
//!    in the caller's point order, and only its two neighbours are
//!    re-classified.
//!
//! Tagging each slot with exactly one class keeps `convex ∪ reflex` equal to
//! the live ring and every ear convex without any set bookkeeping.

use config::constants::{GlobalConfig, MAX_VERTICES};
use glam::DVec2;
use std::f64::consts::PI;
use tracing::{trace, warn};

use crate::error::MeshError;
use crate::math::{angle_from_to_ccw, is_point_in_triangle};


/// Classification of one arena slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexClass {
    /// Interior angle ≥ π; never clipped while in this state
    Reflex,
    /// Interior angle < π, but its triangle contains a reflex vertex
    Convex,
    /// Convex and clippable
    Ear,
    /// Removed from the ring
    Clipped,
}

/// One node of the live boundary ring.
#[derive(Debug, Clone, Copy)]
pub struct LinkedVertex {
    pub position: DVec2,
    /// Index into the caller's point list
    pub index: u32,
    pub prev: usize,
    pub next: usize,
}

/// Mutable ring state for one triangulation call.
struct EarClipper {
    vertices: Vec<LinkedVertex>,
    classes: Vec<VertexClass>,
    tolerance: f64,
}

impl EarClipper {
    fn new(points: &[DVec2], clockwise: bool, tolerance: f64) -> Self {
        let n = points.len();
        let order: Vec<usize> = if clockwise {
            (0..n).rev().collect()
        } else {
            (0..n).collect()
        };

        let vertices = order
            .iter()
            .enumerate()
            .map(|(slot, &input)| LinkedVertex {
                position: points[input],
                index: input as u32,
                prev: (slot + n - 1) % n,
                next: (slot + 1) % n,
            })
            .collect();

        let mut clipper = Self {
            vertices,
            classes: vec![VertexClass::Reflex; n],
            tolerance,
        };
        clipper.drop_repeated_points();
        for slot in 0..n {
            if clipper.classes[slot] != VertexClass::Clipped {
                clipper.classes[slot] = clipper.classify_angle(slot);
            }
        }
        for slot in 0..n {
            clipper.refresh_ear(slot);
        }
        clipper
    }

    /// Unlinks every vertex that coincides with its successor, so a closing
    /// duplicate or a repeated point leaves a single copy in the ring.
    fn drop_repeated_points(&mut self) {
        for slot in 0..self.vertices.len() {
            let LinkedVertex { position, prev, next, .. } = self.vertices[slot];
            if next == slot || position.distance(self.vertices[next].position) >= self.tolerance {
                continue;
            }
            self.vertices[prev].next = next;
            self.vertices[next].prev = prev;
            self.classes[slot] = VertexClass::Clipped;
        }
    }

    fn live_count(&self) -> usize {
        self.classes
            .iter()
            .filter(|class| **class != VertexClass::Clipped)
            .count()
    }

    /// Convex/reflex decision from the interior angle alone.
    fn classify_angle(&self, slot: usize) -> VertexClass {
        let v = self.vertices[slot];
        let to_prev = self.vertices[v.prev].position - v.position;
        let to_next = self.vertices[v.next].position - v.position;
        if to_prev.length() < self.tolerance || to_next.length() < self.tolerance {
            return VertexClass::Reflex;
        }

        let interior = 2.0 * PI - angle_from_to_ccw(to_prev, to_next);
        if interior < PI {
            VertexClass::Convex
        } else {
            VertexClass::Reflex
        }
    }

    /// Promotes a convex vertex to an ear or demotes an ear back to convex.
    fn refresh_ear(&mut self, slot: usize) {
        if !matches!(self.classes[slot], VertexClass::Convex | VertexClass::Ear) {
            return;
        }
        self.classes[slot] = if self.is_ear(slot) {
            VertexClass::Ear
        } else {
            VertexClass::Convex
        };
    }

    fn is_ear(&self, slot: usize) -> bool {
        let v = self.vertices[slot];
        let a = self.vertices[v.prev].position;
        let b = v.position;
        let c = self.vertices[v.next].position;

        !self.classes.iter().enumerate().any(|(other, class)| {
            *class == VertexClass::Reflex
                && other != slot
                && other != v.prev
                && other != v.next
                && is_point_in_triangle(a, b, c, self.vertices[other].position, true)
        })
    }

    fn find_ear(&self) -> Option<usize> {
        self.classes.iter().position(|class| *class == VertexClass::Ear)
    }

    /// Unlinks `slot` and re-classifies its two neighbours.
    ///
    /// A reflex neighbour may turn convex (and possibly an ear); a convex
    /// neighbour only gains or loses ear status.
    fn clip(&mut self, slot: usize) {
        let LinkedVertex { prev, next, .. } = self.vertices[slot];
        self.vertices[prev].next = next;
        self.vertices[next].prev = prev;
        self.classes[slot] = VertexClass::Clipped;

        for neighbour in [prev, next] {
            if self.classes[neighbour] == VertexClass::Reflex {
                self.classes[neighbour] = self.classify_angle(neighbour);
            }
            self.refresh_ear(neighbour);
        }
    }
}

/// Triangulates a simple polygon with the default tolerance and step cap.
///
/// Returns a flat index list of length `3 * (n - 2)` referencing the input
/// points, where `n` counts points after consecutive repeats (including a
/// closing copy of the first point) are collapsed. Triangles are emitted as `(ear, prev, next)` with neighbours taken
/// in the input order, so they wind opposite to the boundary: a
/// counter-clockwise outline yields clockwise triangles and vice versa.
///
/// # Errors
///
/// - [`MeshError::DegeneratePolygon`] for fewer than 3 distinct points.
/// - [`MeshError::TriangulationStalled`] when no ear remains before the
///   polygon is exhausted (self-intersecting, wrong winding flag, or
///   numerically degenerate input). The partial index list is carried in
///   the error.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use primitive_mesh::triangulate::triangulate;
///
/// let square = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(2.0, 0.0),
///     DVec2::new(2.0, 2.0),
///     DVec2::new(0.0, 2.0),
/// ];
/// let indices = triangulate(&square, false).unwrap();
/// assert_eq!(indices.len(), 6);
/// ```
pub fn triangulate(points: &[DVec2], clockwise: bool) -> Result<Vec<u32>, MeshError> {
    triangulate_with_config(points, clockwise, &GlobalConfig::default())
}

/// Triangulates with an explicit tolerance and iteration cap.
pub fn triangulate_with_config(
    points: &[DVec2],
    clockwise: bool,
    config: &GlobalConfig,
) -> Result<Vec<u32>, MeshError> {
    let n = points.len();
    if n < 3 {
        return Err(MeshError::degenerate_polygon(n));
    }
    if n > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: n,
            max: MAX_VERTICES,
        });
    }

    let mut clipper = EarClipper::new(points, clockwise, config.tolerance);
    let live = clipper.live_count();
    if live < 3 {
        return Err(MeshError::degenerate_polygon(live));
    }
    let expected = live - 2;
    let mut indices = Vec::with_capacity(expected * 3);

    for _ in 0..config.max_clip_iterations {
        if indices.len() == expected * 3 {
            break;
        }

        let Some(ear) = clipper.find_ear() else {
            break;
        };

        let v = clipper.vertices[ear];
        let (prev, next) = if clockwise {
            (clipper.vertices[v.next].index, clipper.vertices[v.prev].index)
        } else {
            (clipper.vertices[v.prev].index, clipper.vertices[v.next].index)
        };
        indices.extend_from_slice(&[v.index, prev, next]);
        clipper.clip(ear);
    }

    if indices.len() < expected * 3 {
        warn!(
            emitted = indices.len() / 3,
            expected, "ear clipping stalled, returning partial triangulation"
        );
        return Err(MeshError::stalled(expected, indices));
    }

    trace!(points = live, triangles = expected, "polygon triangulated");
    Ok(indices)
}

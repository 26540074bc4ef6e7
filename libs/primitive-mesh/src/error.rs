//! # Mesh Errors
//!
//! Error types for the fallible corners of mesh generation: triangulation
//! and frame construction. Shape generators never return these; they log
//! and fall back to an empty or partial contribution.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Polygon has too few points to form a triangle
    #[error("Degenerate polygon: {count} points (need at least 3)")]
    DegeneratePolygon { count: usize },

    /// No ear could be clipped before the polygon was exhausted
    #[error("Triangulation stalled after {emitted} of {expected} triangles")]
    TriangulationStalled {
        emitted: usize,
        expected: usize,
        /// Indices emitted before the stall, stride 3
        partial: Vec<u32>,
    },

    /// Orientation axes are zero-length or parallel
    #[error("Degenerate frame: {message}")]
    DegenerateFrame { message: String },

    /// Too many vertices for 32-bit indices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates a degenerate polygon error.
    pub fn degenerate_polygon(count: usize) -> Self {
        Self::DegeneratePolygon { count }
    }

    /// Creates a triangulation stall error carrying the partial result.
    pub fn stalled(expected: usize, partial: Vec<u32>) -> Self {
        Self::TriangulationStalled {
            emitted: partial.len() / 3,
            expected,
            partial,
        }
    }

    /// Creates a degenerate frame error.
    pub fn degenerate_frame(message: impl Into<String>) -> Self {
        Self::DegenerateFrame {
            message: message.into(),
        }
    }

    /// Returns whatever triangles were produced before the failure.
    ///
    /// Empty for every variant except a stall.
    pub fn partial_indices(&self) -> &[u32] {
        match self {
            Self::TriangulationStalled { partial, .. } => partial,
            _ => &[],
        }
    }
}

//! # Config Crate
//!
//! Centralized configuration constants for the primitive mesh pipeline.
//! Tolerances, clamp bounds and tessellation defaults are defined here so
//! the geometry kernel, the triangulator and every shape generator agree.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_dimension, clamp_segments, EPSILON, MAX_SEGMENTS};
//!
//! // Use EPSILON for degeneracy checks
//! let length: f64 = 1e-6;
//! assert!(length < EPSILON);
//!
//! // Out-of-range parameters are clamped, never rejected
//! assert_eq!(clamp_segments(500), MAX_SEGMENTS);
//! assert_eq!(clamp_dimension(2.0), 2.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Silent Clamping**: Helpers normalise values instead of failing
//! - **No Dependencies**: Pure constants and arithmetic

pub mod constants;

#[cfg(test)]
mod tests;

//! # Configuration Constants
//!
//! Centralized constants for the primitive mesh pipeline. Tolerances, clamp
//! bounds, tessellation defaults and the triangulation iteration cap are
//! defined here so generators never carry their own literals.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Clamping**: Bounds applied silently to every shape parameter
//! - **Resolution**: Default segment and side counts
//! - **Limits**: Safety caps for triangulation and mesh size

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for geometric degeneracy checks.
///
/// Used by the point-in-triangle border window, the vector normalisation
/// guards and every "is this length zero" test in the geometry kernel.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-6));
/// ```
pub const EPSILON: f64 = 1e-5;

/// Distance under which two lattice corners count as the same point.
///
/// Collapsed lattice rows (disc centres, cone apexes, zero-radius corners)
/// produce coincident corners; triangles touching two of them are skipped.
/// Must stay well below `MIN_DIMENSION / MAX_SEGMENTS`.
pub const DEGENERATE_EDGE_EPSILON: f64 = 1e-9;

// =============================================================================
// CLAMPING CONSTANTS
// =============================================================================

/// Smallest accepted linear dimension (radius, width, height, fillet...).
pub const MIN_DIMENSION: f64 = 1e-5;

/// Largest accepted linear dimension.
pub const MAX_DIMENSION: f64 = 1e4;

/// Smallest accepted subdivision count along any axis.
pub const MIN_SEGMENTS: u32 = 1;

/// Largest accepted subdivision count along any axis.
pub const MAX_SEGMENTS: u32 = 100;

/// Smallest accepted number of angular steps for a full revolution.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SIDES;
///
/// let requested = 1;
/// assert_eq!(requested.max(MIN_SIDES), 3);
/// ```
pub const MIN_SIDES: u32 = 3;

/// Largest accepted number of angular steps.
pub const MAX_SIDES: u32 = 100;

/// Upper end of every slice / angle range, in degrees.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Slices spanning within this many degrees of a full turn are snapped to
/// exactly `0..360`.
///
/// Sits above [`EPSILON`] once converted to radians, so any slice left
/// unsnapped is also seen as partial by the radian-level arc checks.
pub const FULL_TURN_SNAP_DEGREES: f64 = 1e-3;

/// Radian gap under which an arc counts as a closed turn. Only absorbs the
/// rounding of a degree to radian conversion.
pub const FULL_TURN_RADIANS_TOLERANCE: f64 = 1e-12;

/// Smallest accepted number of stair steps.
pub const MIN_STEPS: u32 = 1;

/// Largest accepted number of stair steps.
pub const MAX_STEPS: u32 = 100;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default angular steps for circles, cylinders and tori.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SIDES, MAX_SIDES, MIN_SIDES};
///
/// assert!((MIN_SIDES..=MAX_SIDES).contains(&DEFAULT_SIDES));
/// ```
pub const DEFAULT_SIDES: u32 = 24;

/// Default subdivision count for flat regions.
pub const DEFAULT_SEGMENTS: u32 = 1;

/// Default subdivision count for fillet arcs.
pub const DEFAULT_FILLET_SEGMENTS: u32 = 4;

/// Default linear dimension for freshly constructed parameters.
pub const DEFAULT_DIMENSION: f64 = 1.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of ear-clipping steps before the triangulator gives up.
///
/// Guards against self-intersecting or numerically degenerate outlines where
/// no ear can be found.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_CLIP_ITERATIONS;
///
/// let polygon_size = 1000;
/// assert!(polygon_size - 2 < MAX_CLIP_ITERATIONS);
/// ```
pub const MAX_CLIP_ITERATIONS: usize = 30_000;

/// Maximum number of vertices a single mesh may index with `u32`.
pub const MAX_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps an independent linear dimension to `[MIN_DIMENSION, MAX_DIMENSION]`.
///
/// NaN collapses to `MIN_DIMENSION` so a bad slider value never poisons a mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_dimension, MAX_DIMENSION, MIN_DIMENSION};
///
/// assert_eq!(clamp_dimension(-3.0), MIN_DIMENSION);
/// assert_eq!(clamp_dimension(5e6), MAX_DIMENSION);
/// assert_eq!(clamp_dimension(2.5), 2.5);
/// ```
#[inline]
pub fn clamp_dimension(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_DIMENSION;
    }
    value.clamp(MIN_DIMENSION, MAX_DIMENSION)
}

/// Clamps a dependent dimension to `[MIN_DIMENSION, bound]`.
///
/// `bound` is derived from the independent dimensions (e.g. half the
/// smallest side for a fillet). A bound below the minimum wins over the
/// minimum so the result never exceeds what the geometry can hold.
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_dependent;
///
/// assert_eq!(clamp_dependent(3.0, 0.5), 0.5);
/// assert_eq!(clamp_dependent(0.25, 0.5), 0.25);
/// ```
#[inline]
pub fn clamp_dependent(value: f64, bound: f64) -> f64 {
    let upper = bound.min(MAX_DIMENSION);
    if value.is_nan() || upper <= MIN_DIMENSION {
        return MIN_DIMENSION.min(upper.max(0.0));
    }
    value.clamp(MIN_DIMENSION, upper)
}

/// Clamps a subdivision count to `[MIN_SEGMENTS, MAX_SEGMENTS]`.
#[inline]
pub fn clamp_segments(value: u32) -> u32 {
    value.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Clamps an angular step count to `[MIN_SIDES, MAX_SIDES]`.
#[inline]
pub fn clamp_sides(value: u32) -> u32 {
    value.clamp(MIN_SIDES, MAX_SIDES)
}

/// Clamps a stair step count to `[MIN_STEPS, MAX_STEPS]`.
#[inline]
pub fn clamp_steps(value: u32) -> u32 {
    value.clamp(MIN_STEPS, MAX_STEPS)
}

/// Clamps a slice range in degrees.
///
/// `from` lands in `[0, 360]`, `to` in `[from, 360]`. A range within
/// [`FULL_TURN_SNAP_DEGREES`] of a full turn becomes exactly `(0, 360)`.
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_angle_range;
///
/// assert_eq!(clamp_angle_range(-10.0, 400.0), (0.0, 360.0));
/// assert_eq!(clamp_angle_range(90.0, 45.0), (90.0, 90.0));
/// assert_eq!(clamp_angle_range(0.0, 359.9999), (0.0, 360.0));
/// ```
#[inline]
pub fn clamp_angle_range(from: f64, to: f64) -> (f64, f64) {
    let from = if from.is_nan() {
        0.0
    } else {
        from.clamp(0.0, FULL_TURN_DEGREES)
    };
    let to = if to.is_nan() {
        FULL_TURN_DEGREES
    } else {
        to.clamp(from, FULL_TURN_DEGREES)
    };
    if to - from > FULL_TURN_DEGREES - FULL_TURN_SNAP_DEGREES {
        return (0.0, FULL_TURN_DEGREES);
    }
    (from, to)
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-6));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-6));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the tunables handed to the triangulator.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance for border and degeneracy tests.
    pub tolerance: f64,
    /// Hard cap on ear-clipping steps.
    pub max_clip_iterations: usize,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting a non-positive tolerance or a zero
    /// iteration cap.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 500).expect("valid config");
    /// assert_eq!(cfg.max_clip_iterations, 500);
    /// ```
    pub fn new(tolerance: f64, max_clip_iterations: usize) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_clip_iterations == 0 {
            return Err(ConfigError::InvalidIterationLimit(max_clip_iterations));
        }
        Ok(Self {
            tolerance,
            max_clip_iterations,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            max_clip_iterations: MAX_CLIP_ITERATIONS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the iteration cap would stop the clipper before it starts.
    InvalidIterationLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidIterationLimit(value) => {
                write!(f, "max_clip_iterations must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;

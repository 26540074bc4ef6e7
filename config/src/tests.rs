//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and the clamp helpers every shape generator relies on.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_matches_kernel_tolerance() {
    assert_eq!(EPSILON, 1e-5);
}

#[test]
fn test_degenerate_edge_epsilon_below_finest_lattice_step() {
    // Smallest dimension split into the most segments must still register as an edge
    let finest_step = MIN_DIMENSION / MAX_SEGMENTS as f64;
    assert!(DEGENERATE_EDGE_EPSILON < finest_step);
}

// =============================================================================
// CLAMPING TESTS
// =============================================================================

#[test]
fn test_clamp_dimension_bounds() {
    assert_eq!(clamp_dimension(0.0), MIN_DIMENSION);
    assert_eq!(clamp_dimension(-1.0), MIN_DIMENSION);
    assert_eq!(clamp_dimension(1e9), MAX_DIMENSION);
    assert_eq!(clamp_dimension(3.25), 3.25);
}

#[test]
fn test_clamp_dimension_nan() {
    assert_eq!(clamp_dimension(f64::NAN), MIN_DIMENSION);
}

#[test]
fn test_clamp_dependent_respects_bound() {
    assert_eq!(clamp_dependent(10.0, 2.0), 2.0);
    assert_eq!(clamp_dependent(1.0, 2.0), 1.0);
    assert_eq!(clamp_dependent(0.0, 2.0), MIN_DIMENSION);
}

#[test]
fn test_clamp_dependent_tiny_bound_never_exceeded() {
    let bound = MIN_DIMENSION / 2.0;
    assert!(clamp_dependent(1.0, bound) <= bound);
    assert_eq!(clamp_dependent(1.0, -1.0), 0.0);
}

#[test]
fn test_clamp_segments_bounds() {
    assert_eq!(clamp_segments(0), MIN_SEGMENTS);
    assert_eq!(clamp_segments(7), 7);
    assert_eq!(clamp_segments(1000), MAX_SEGMENTS);
}

#[test]
fn test_clamp_sides_bounds() {
    assert_eq!(clamp_sides(0), MIN_SIDES);
    assert_eq!(clamp_sides(2), MIN_SIDES);
    assert_eq!(clamp_sides(500), MAX_SIDES);
}

#[test]
fn test_clamp_angle_range_orders_endpoints() {
    assert_eq!(clamp_angle_range(0.0, 360.0), (0.0, 360.0));
    assert_eq!(clamp_angle_range(-45.0, 90.0), (0.0, 90.0));
    assert_eq!(clamp_angle_range(400.0, 10.0), (360.0, 360.0));
    assert_eq!(clamp_angle_range(120.0, 60.0), (120.0, 120.0));
}

#[test]
fn test_clamp_angle_range_snaps_near_full_turn() {
    assert_eq!(clamp_angle_range(0.0, 359.9999), (0.0, 360.0));
    assert_eq!(clamp_angle_range(1e-4, 360.0), (0.0, 360.0));
    assert_eq!(clamp_angle_range(0.0, 359.99), (0.0, 359.99));
    // An unsnapped gap is still wider than the radian-level degeneracy tolerance
    assert!(FULL_TURN_SNAP_DEGREES.to_radians() > EPSILON);
}

#[test]
fn test_clamp_steps_bounds() {
    assert_eq!(clamp_steps(0), MIN_STEPS);
    assert_eq!(clamp_steps(12), 12);
    assert_eq!(clamp_steps(1000), MAX_STEPS);
}

#[test]
fn test_clamp_angle_range_nan() {
    assert_eq!(clamp_angle_range(f64::NAN, f64::NAN), (0.0, 360.0));
}

#[test]
fn test_clamping_is_idempotent() {
    for value in [-5.0, 0.0, 1e-7, 0.5, 42.0, 1e12] {
        let once = clamp_dimension(value);
        assert_eq!(clamp_dimension(once), once);
    }
    let once = clamp_angle_range(300.0, -20.0);
    assert_eq!(clamp_angle_range(once.0, once.1), once);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_defaults_inside_clamp_ranges() {
    assert_eq!(clamp_sides(DEFAULT_SIDES), DEFAULT_SIDES);
    assert_eq!(clamp_segments(DEFAULT_SEGMENTS), DEFAULT_SEGMENTS);
    assert_eq!(clamp_segments(DEFAULT_FILLET_SEGMENTS), DEFAULT_FILLET_SEGMENTS);
    assert_eq!(clamp_dimension(DEFAULT_DIMENSION), DEFAULT_DIMENSION);
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(1.0, 2.0));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 2.0));
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_clip_iteration_cap() {
    assert_eq!(MAX_CLIP_ITERATIONS, 30_000);
}

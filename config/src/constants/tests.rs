//! Tests for the validated configuration snapshot.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert_eq!(cfg.max_clip_iterations, MAX_CLIP_ITERATIONS);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(0.0, 10).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 10).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 0).unwrap_err(),
        ConfigError::InvalidIterationLimit(0)
    );
    assert!(GlobalConfig::new(f64::NAN, 10).is_err());
}

#[test]
fn config_error_messages() {
    assert_eq!(
        ConfigError::InvalidIterationLimit(0).to_string(),
        "max_clip_iterations must be >= 1: 0"
    );
}

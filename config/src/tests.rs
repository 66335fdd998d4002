//! # Tests for Config Constants
//!
//! Unit tests verifying the configuration constants and the refinement
//! configuration builder.

use crate::constants::*;
use approx::assert_relative_eq;

// =============================================================================
// ENGINE TESTS
// =============================================================================

#[test]
fn test_target_unit_is_centimetres() {
    assert_eq!(OCC_TARGET_UNIT, "CM");
}

#[test]
fn test_default_mesh_size_factor_is_identity() {
    assert_eq!(DEFAULT_MESH_SIZE_FACTOR, 1.0);
}

#[test]
fn test_field_tags_are_distinct() {
    assert_ne!(DISTANCE_FIELD_TAG, THRESHOLD_FIELD_TAG);
}

// =============================================================================
// PARAMETER TESTS
// =============================================================================

#[test]
fn test_default_parameters_produce_flat_mesh() {
    assert_eq!(DEFAULT_Z_EXTRUDE, 0.0);
    assert_eq!(DEFAULT_N_EXTRUDE, 1);
}

#[test]
fn test_default_medial_surface_length_is_positive() {
    assert!(DEFAULT_MEDIAL_SURFACE_LENGTH > 0.0);
}

// =============================================================================
// REFINEMENT TESTS
// =============================================================================

#[test]
fn test_default_refinement_matches_medial_ramp() {
    let cfg = RefinementConfig::default();
    assert_eq!(cfg.size_min, 0.025);
    assert_relative_eq!(cfg.size_max(), 0.125);
    assert_relative_eq!(cfg.dist_max(), 0.125);
    assert_eq!(cfg.sampling, 100);
}

#[test]
fn test_refinement_rejects_non_positive_size() {
    assert_eq!(
        RefinementConfig::new(0.0, 5.0, 5.0, 100).unwrap_err(),
        ConfigError::InvalidSize(0.0)
    );
    assert!(RefinementConfig::new(f64::NAN, 5.0, 5.0, 100).is_err());
}

#[test]
fn test_refinement_rejects_shrinking_far_field() {
    assert_eq!(
        RefinementConfig::new(0.025, 0.5, 5.0, 100).unwrap_err(),
        ConfigError::InvalidFactor(0.5)
    );
}

#[test]
fn test_refinement_rejects_zero_sampling() {
    assert_eq!(
        RefinementConfig::new(0.025, 5.0, 5.0, 0).unwrap_err(),
        ConfigError::InvalidSampling(0)
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidSampling(0);
    assert!(err.to_string().contains("sampling"));
}

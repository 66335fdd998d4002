//! # Geometry Errors
//!
//! Validation errors raised before the engine is touched (or, for deferred
//! extrusion checks, before anything is meshed).

use thiserror::Error;

/// Errors that can occur while resolving a geometry and its parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Name not present in the catalog.
    #[error("Unknown 'geometry-name', {0}")]
    UnknownGeometry(String),

    /// Negative (or NaN) extrusion depth.
    #[error("`z_extrude` must be >= 0, got {0}")]
    NegativeExtrusion(f64),

    /// Extrusion requested with zero layers.
    #[error("`n_extrude` must be >= 1, got {0}")]
    InvalidLayerCount(u32),

    /// Geometry only exists as a flat cross-section.
    #[error("{geometry} has no extruded region table")]
    ExtrusionUnsupported { geometry: &'static str },

    /// STEP file names for this geometry carry an integer angle.
    #[error("medial angle {0} must be a whole number of degrees for this geometry")]
    NonIntegralAngle(f64),

    /// Parametric construction would collapse or flip.
    #[error("Degenerate trapezoid: {0}")]
    DegenerateTrapezoid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::UnknownGeometry("M6".into());
        assert_eq!(err.to_string(), "Unknown 'geometry-name', M6");
        let err = GeometryError::NegativeExtrusion(-1.0);
        assert!(err.to_string().contains("z_extrude"));
    }
}

//! # Mesh Errors
//!
//! Error types for mesh generation runs.

use thiserror::Error;
use vf_engine::EngineError;
use vf_geometry::GeometryError;

/// Errors that can occur while generating a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Invalid geometry name or parameters.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// The engine rejected an operation or failed to mesh.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: MeshError = GeometryError::NegativeExtrusion(-1.0).into();
        assert!(err.to_string().starts_with("Geometry error:"));
        let err: MeshError = EngineError::NoActiveModel.into();
        assert!(err.to_string().starts_with("Engine error:"));
    }
}

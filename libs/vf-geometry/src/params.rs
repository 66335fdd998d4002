//! Mesh parameters shared by every generator.

use config::constants::{
    DEFAULT_MEDIAL_ANGLE, DEFAULT_MEDIAL_SURFACE_LENGTH, DEFAULT_N_EXTRUDE, DEFAULT_Z_EXTRUDE,
};
use serde::Serialize;

use crate::error::GeometryError;

/// Parameters of one generator run.
///
/// `medial_surface_length` is only read by the trapezoid.
///
/// # Example
///
/// ```rust
/// use vf_geometry::MeshParams;
///
/// let params = MeshParams::default();
/// assert_eq!(params.z_extrude, 0.0);
/// assert!(!params.is_extruded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeshParams {
    /// Medial surface angle in degrees.
    pub medial_angle: f64,
    /// Extrusion depth along +Z; zero keeps the mesh flat.
    pub z_extrude: f64,
    /// Number of layers the extrusion is divided into.
    pub n_extrude: u32,
    /// Length of the trapezoid's medial surface.
    pub medial_surface_length: f64,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            medial_angle: DEFAULT_MEDIAL_ANGLE,
            z_extrude: DEFAULT_Z_EXTRUDE,
            n_extrude: DEFAULT_N_EXTRUDE,
            medial_surface_length: DEFAULT_MEDIAL_SURFACE_LENGTH,
        }
    }
}

impl MeshParams {
    pub fn is_extruded(&self) -> bool {
        self.z_extrude > 0.0
    }

    /// Rejects negative or NaN extrusion depths.
    pub fn check_extrusion_depth(&self) -> Result<(), GeometryError> {
        if self.z_extrude >= 0.0 {
            Ok(())
        } else {
            Err(GeometryError::NegativeExtrusion(self.z_extrude))
        }
    }

    /// Rejects a zero layer count when an extrusion will happen.
    pub fn validate_layers(&self) -> Result<(), GeometryError> {
        if self.is_extruded() && self.n_extrude == 0 {
            return Err(GeometryError::InvalidLayerCount(self.n_extrude));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_and_nan_depths_rejected() {
        let params = MeshParams {
            z_extrude: -0.1,
            ..MeshParams::default()
        };
        assert_eq!(
            params.check_extrusion_depth(),
            Err(GeometryError::NegativeExtrusion(-0.1))
        );
        let params = MeshParams {
            z_extrude: f64::NAN,
            ..MeshParams::default()
        };
        assert!(params.check_extrusion_depth().is_err());
    }

    #[test]
    fn test_zero_layers_only_matter_when_extruding() {
        let flat = MeshParams {
            n_extrude: 0,
            ..MeshParams::default()
        };
        assert!(flat.validate_layers().is_ok());
        let extruded = MeshParams {
            z_extrude: 1.0,
            n_extrude: 0,
            ..MeshParams::default()
        };
        assert_eq!(
            extruded.validate_layers(),
            Err(GeometryError::InvalidLayerCount(0))
        );
    }
}

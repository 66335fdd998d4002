//! Inputs of a single generator run.

use config::constants::{RefinementConfig, DEFAULT_STEP_DIR};
use std::path::PathBuf;
use vf_geometry::MeshParams;

/// Mesh parameters plus where to find CAD inputs and how to refine.
///
/// # Example
///
/// ```rust
/// use vf_geometry::MeshParams;
/// use vf_mesh::MeshRequest;
///
/// let request = MeshRequest::new(MeshParams { medial_angle: 5.0, ..MeshParams::default() })
///     .with_step_dir("cad");
/// assert_eq!(request.step_dir.to_str(), Some("cad"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshRequest {
    pub params: MeshParams,
    /// Directory holding the STEP files, relative to the session work dir.
    pub step_dir: PathBuf,
    pub refinement: RefinementConfig,
}

impl Default for MeshRequest {
    fn default() -> Self {
        Self::new(MeshParams::default())
    }
}

impl MeshRequest {
    pub fn new(params: MeshParams) -> Self {
        Self {
            params,
            step_dir: PathBuf::from(DEFAULT_STEP_DIR),
            refinement: RefinementConfig::default(),
        }
    }

    pub fn with_step_dir(mut self, step_dir: impl Into<PathBuf>) -> Self {
        self.step_dir = step_dir.into();
        self
    }

    pub fn with_refinement(mut self, refinement: RefinementConfig) -> Self {
        self.refinement = refinement;
        self
    }
}

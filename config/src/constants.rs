//! # Configuration Constants
//!
//! Centralized constants for the meshing pipeline. Engine option names,
//! default mesh parameters, and the medial refinement field are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Engine**: Option names and values understood by the external mesher
//! - **Parameters**: Defaults for the CLI mesh parameters
//! - **Refinement**: Distance/threshold field settings

use std::fmt;

// =============================================================================
// ENGINE CONSTANTS
// =============================================================================

/// Default name of the external mesher executable.
///
/// Resolved through `PATH` unless the CLI overrides it.
pub const DEFAULT_GMSH_EXECUTABLE: &str = "gmsh";

/// Name given to the model created at the start of every generator run.
pub const MODEL_NAME: &str = "main";

/// Engine option selecting the unit CAD imports are scaled to.
///
/// # Example
///
/// ```rust
/// use config::constants::{OCC_TARGET_UNIT, OCC_TARGET_UNIT_OPTION};
///
/// let line = format!("{OCC_TARGET_UNIT_OPTION} = \"{OCC_TARGET_UNIT}\";");
/// assert_eq!(line, "Geometry.OCCTargetUnit = \"CM\";");
/// ```
pub const OCC_TARGET_UNIT_OPTION: &str = "Geometry.OCCTargetUnit";

/// Unit every geometry is expressed in.
pub const OCC_TARGET_UNIT: &str = "CM";

/// Engine option scaling every characteristic length.
///
/// Its value is embedded in each output file name.
pub const MESH_SIZE_FACTOR_OPTION: &str = "Mesh.MeshSizeFactor";

/// Value of [`MESH_SIZE_FACTOR_OPTION`] when nothing overrides it.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_MESH_SIZE_FACTOR;
///
/// let user_factor: Option<f64> = None;
/// assert_eq!(user_factor.unwrap_or(DEFAULT_MESH_SIZE_FACTOR), 1.0);
/// ```
pub const DEFAULT_MESH_SIZE_FACTOR: f64 = 1.0;

/// Command-line flag the mesher accepts as shorthand for
/// [`MESH_SIZE_FACTOR_OPTION`].
pub const CLSCALE_FLAG: &str = "-clscale";

// =============================================================================
// PARAMETER DEFAULTS
// =============================================================================

/// Directory STEP files are read from, relative to the working directory.
pub const DEFAULT_STEP_DIR: &str = "stp";

/// Default medial surface angle in degrees.
pub const DEFAULT_MEDIAL_ANGLE: f64 = 0.0;

/// Default extrusion depth. Zero keeps the mesh two-dimensional.
pub const DEFAULT_Z_EXTRUDE: f64 = 0.0;

/// Default number of layers an extrusion is subdivided into.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_N_EXTRUDE;
///
/// assert!(DEFAULT_N_EXTRUDE >= 1);
/// ```
pub const DEFAULT_N_EXTRUDE: u32 = 1;

/// Default length of the trapezoid's medial surface.
pub const DEFAULT_MEDIAL_SURFACE_LENGTH: f64 = 0.5;

/// Largest medial angle magnitude (degrees, exclusive) for which the
/// trapezoid stays a proper quadrilateral.
pub const MAX_MEDIAL_ANGLE: f64 = 90.0;

// =============================================================================
// REFINEMENT CONSTANTS
// =============================================================================

/// Target element size at the medial surface.
pub const REFINEMENT_BASE_SIZE: f64 = 0.025;

/// Ratio between the far-field element size and [`REFINEMENT_BASE_SIZE`].
pub const REFINEMENT_SIZE_MAX_FACTOR: f64 = 5.0;

/// Ratio between the distance where the far-field size is reached and
/// [`REFINEMENT_BASE_SIZE`].
pub const REFINEMENT_DIST_MAX_FACTOR: f64 = 5.0;

/// Number of samples the distance field takes along each curve.
pub const DISTANCE_SAMPLING: u32 = 100;

/// Tag of the distance field.
pub const DISTANCE_FIELD_TAG: i32 = 1;

/// Tag of the threshold field installed as background mesh.
pub const THRESHOLD_FIELD_TAG: i32 = 2;

/// Settings for the distance/threshold refinement pair.
///
/// # Examples
/// ```
/// use config::constants::RefinementConfig;
/// let config = RefinementConfig::default();
/// assert_eq!(config.size_max(), 0.125);
/// assert_eq!(config.dist_max(), 0.125);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefinementConfig {
    /// Element size at distance zero.
    pub size_min: f64,
    /// Multiplier giving the far-field size.
    pub size_max_factor: f64,
    /// Multiplier giving the distance the far-field size is reached at.
    pub dist_max_factor: f64,
    /// Distance field sampling along each curve.
    pub sampling: u32,
}

impl RefinementConfig {
    /// Builds a refinement configuration, rejecting sizes that would make
    /// the threshold ramp empty or inverted.
    ///
    /// # Examples
    /// ```
    /// use config::constants::RefinementConfig;
    /// let cfg = RefinementConfig::new(0.01, 4.0, 4.0, 50).expect("valid config");
    /// assert_eq!(cfg.sampling, 50);
    /// assert!(RefinementConfig::new(0.0, 4.0, 4.0, 50).is_err());
    /// ```
    pub fn new(
        size_min: f64,
        size_max_factor: f64,
        dist_max_factor: f64,
        sampling: u32,
    ) -> Result<Self, ConfigError> {
        if !(size_min > 0.0 && size_min.is_finite()) {
            return Err(ConfigError::InvalidSize(size_min));
        }
        if !(size_max_factor >= 1.0 && size_max_factor.is_finite()) {
            return Err(ConfigError::InvalidFactor(size_max_factor));
        }
        if !(dist_max_factor > 0.0 && dist_max_factor.is_finite()) {
            return Err(ConfigError::InvalidFactor(dist_max_factor));
        }
        if sampling == 0 {
            return Err(ConfigError::InvalidSampling(sampling));
        }
        Ok(Self {
            size_min,
            size_max_factor,
            dist_max_factor,
            sampling,
        })
    }

    /// Far-field element size.
    pub fn size_max(&self) -> f64 {
        self.size_max_factor * self.size_min
    }

    /// Distance at which the far-field size is reached.
    pub fn dist_max(&self) -> f64 {
        self.dist_max_factor * self.size_min
    }
}

impl Default for RefinementConfig {
    fn default() -> Self {
        Self {
            size_min: REFINEMENT_BASE_SIZE,
            size_max_factor: REFINEMENT_SIZE_MAX_FACTOR,
            dist_max_factor: REFINEMENT_DIST_MAX_FACTOR,
            sampling: DISTANCE_SAMPLING,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the base element size is zero, negative or not finite.
    InvalidSize(f64),
    /// Raised when a ramp factor would invert or collapse the threshold.
    InvalidFactor(f64),
    /// Raised when the distance field would take no samples.
    InvalidSampling(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSize(value) => {
                write!(f, "element size must be positive: {value}")
            }
            ConfigError::InvalidFactor(value) => {
                write!(f, "refinement factor out of range: {value}")
            }
            ConfigError::InvalidSampling(value) => {
                write!(f, "sampling must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

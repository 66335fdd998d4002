//! Backends that turn a model script into an output file.
//!
//! The in-memory [`RecordingMesher`] lets tests exercise generators end to
//! end without the external executable.

mod gmsh;
mod recording;
mod script_only;

pub use gmsh::GmshProcess;
pub use recording::{RecordedRun, RecordingMesher};
pub use script_only::ScriptOnly;

use crate::error::EngineError;
use crate::script::GeoScript;
use std::path::Path;

/// Executes a model script.
///
/// # Examples
/// ```
/// use vf_engine::{GeoScript, Mesher, RecordingMesher};
/// let mut mesher = RecordingMesher::default();
/// mesher.run(&GeoScript::default(), &[], std::path::Path::new("out.msh")).unwrap();
/// assert_eq!(mesher.runs().len(), 1);
/// ```
pub trait Mesher {
    /// Runs `script`, which ends by saving to `output`.
    fn run(
        &mut self,
        script: &GeoScript,
        engine_args: &[String],
        output: &Path,
    ) -> Result<(), EngineError>;
}

use super::Mesher;
use crate::error::EngineError;
use crate::script::GeoScript;
use std::path::Path;
use tracing::info;

/// Writes the script next to the requested output instead of meshing.
///
/// `M5_BC--GA0.00--DZ0.00--CL1.00e+00.msh` becomes
/// `M5_BC--GA0.00--DZ0.00--CL1.00e+00.geo`; running the mesher on that file
/// later produces the mesh.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptOnly;

impl Mesher for ScriptOnly {
    fn run(
        &mut self,
        script: &GeoScript,
        engine_args: &[String],
        output: &Path,
    ) -> Result<(), EngineError> {
        let target = output.with_extension("geo");
        std::fs::write(&target, script.render())?;
        info!(
            script = %target.display(),
            ?engine_args,
            "script written; mesher not run"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Dim;
    use crate::script::Command;

    #[test]
    fn writes_script_beside_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut script = GeoScript::default();
        script.push(Command::Generate { dim: Dim::Surface });
        let output = dir.path().join("mesh.msh");

        ScriptOnly.run(&script, &[], &output).unwrap();

        let text = std::fs::read_to_string(dir.path().join("mesh.geo")).unwrap();
        assert!(text.contains("Mesh 2;"));
        assert!(!output.exists());
    }
}

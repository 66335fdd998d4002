use super::Mesher;
use crate::error::EngineError;
use crate::script::GeoScript;
use config::constants::DEFAULT_GMSH_EXECUTABLE;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Runs the external `gmsh` executable on a temporary `.geo` file:
///
/// ```text
/// gmsh <engine args> <script.geo> -parse_and_exit
/// ```
#[derive(Debug, Clone)]
pub struct GmshProcess {
    executable: PathBuf,
}

impl Default for GmshProcess {
    fn default() -> Self {
        Self::new(DEFAULT_GMSH_EXECUTABLE)
    }
}

impl GmshProcess {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

impl Mesher for GmshProcess {
    fn run(
        &mut self,
        script: &GeoScript,
        engine_args: &[String],
        output: &Path,
    ) -> Result<(), EngineError> {
        let mut file = tempfile::Builder::new()
            .prefix("vf-mesh-")
            .suffix(".geo")
            .tempfile()?;
        file.write_all(script.render().as_bytes())?;
        file.flush()?;

        let program = self.executable.display().to_string();
        debug!(%program, script = %file.path().display(), "running mesher");
        let result = Command::new(&self.executable)
            .args(engine_args)
            .arg(file.path())
            .arg("-parse_and_exit")
            .output()
            .map_err(|source| EngineError::Launch {
                program: program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&result.stdout);
        let stderr = String::from_utf8_lossy(&result.stderr);
        for line in stdout.lines() {
            debug!(target: "gmsh", "{line}");
        }
        for line in stderr.lines() {
            warn!(target: "gmsh", "{line}");
        }

        let errors = error_lines(&stdout, &stderr);
        if !result.status.success() || !errors.is_empty() {
            return Err(EngineError::Process {
                status: result.status.code(),
                message: if errors.is_empty() {
                    stderr.trim().to_string()
                } else {
                    errors.join("; ")
                },
            });
        }
        if !output.exists() {
            return Err(EngineError::MissingOutput(output.to_path_buf()));
        }
        Ok(())
    }
}

/// Lines the mesher tagged as errors. It can report them with a zero exit
/// status when running a script.
fn error_lines(stdout: &str, stderr: &str) -> Vec<String> {
    stdout
        .lines()
        .chain(stderr.lines())
        .map(str::trim)
        .filter(|line| line.starts_with("Error"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_lines_are_collected_from_both_streams() {
        let stdout = "Info    : Reading 'x.geo'...\nError   : Unknown entity\n";
        let stderr = "Error   : Could not open file\n";
        let errors = error_lines(stdout, stderr);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Unknown entity"));
    }

    #[test]
    fn missing_executable_is_a_launch_error() {
        let mut mesher = GmshProcess::new("/nonexistent/bin/gmsh-for-tests");
        let err = mesher
            .run(&GeoScript::default(), &[], Path::new("/tmp/out.msh"))
            .unwrap_err();
        assert!(matches!(err, EngineError::Launch { .. }));
    }

    #[test]
    fn default_executable_is_on_path() {
        assert_eq!(GmshProcess::default().executable(), Path::new("gmsh"));
    }
}

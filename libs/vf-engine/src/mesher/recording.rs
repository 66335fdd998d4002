use super::Mesher;
use crate::error::EngineError;
use crate::script::GeoScript;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One call to [`Mesher::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRun {
    pub script: GeoScript,
    pub args: Vec<String>,
    pub output: PathBuf,
}

/// In-memory backend that records every run instead of meshing.
///
/// Clones share the same record, so a test can keep one handle while the
/// session owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingMesher {
    runs: Arc<Mutex<Vec<RecordedRun>>>,
    failure: Option<String>,
}

impl RecordingMesher {
    /// A recorder whose runs fail with `message` after being recorded.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            runs: Arc::default(),
            failure: Some(message.into()),
        }
    }

    /// Snapshot of the runs recorded so far.
    pub fn runs(&self) -> Vec<RecordedRun> {
        self.runs.lock().map(|runs| runs.clone()).unwrap_or_default()
    }
}

impl Mesher for RecordingMesher {
    fn run(
        &mut self,
        script: &GeoScript,
        engine_args: &[String],
        output: &Path,
    ) -> Result<(), EngineError> {
        if let Ok(mut runs) = self.runs.lock() {
            runs.push(RecordedRun {
                script: script.clone(),
                args: engine_args.to_vec(),
                output: output.to_path_buf(),
            });
        }
        match &self.failure {
            Some(message) => Err(EngineError::Process {
                status: Some(1),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

//! Mesh generation.

use crate::cli::Cli;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use vf_engine::Session;

/// Generates the selected mesh in the current directory.
pub fn execute(cli: &Cli) -> Result<()> {
    let work_dir = std::env::current_dir().context("cannot determine working directory")?;
    execute_in(cli, &work_dir)?;
    Ok(())
}

/// Generates the selected mesh with paths resolved against `work_dir`.
pub fn execute_in(cli: &Cli, work_dir: &Path) -> Result<PathBuf> {
    let request = cli.request()?;
    let mut session = Session::initialize_in(work_dir, cli.engine_args(), cli.mesher())
        .context("failed to initialize mesh engine")?;

    let path = vf_mesh::generate(&mut session, cli.geometry_name, &request)
        .with_context(|| format!("failed to generate {} mesh", cli.geometry_name))?;
    info!(geometry = %cli.geometry_name, path = %path.display(), "done");
    Ok(path)
}

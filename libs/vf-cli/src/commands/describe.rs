//! JSON description of a geometry record and the files a run would touch.

use crate::cli::Cli;
use anyhow::Result;
use config::constants::MESH_SIZE_FACTOR_OPTION;
use serde::Serialize;
use std::path::PathBuf;
use vf_engine::OptionStore;
use vf_geometry::{naming, GeometrySpec, MeshParams};

#[derive(Debug, Serialize)]
struct Description {
    geometry: &'static GeometrySpec,
    params: MeshParams,
    step_file: Option<PathBuf>,
    output_file: String,
}

pub fn execute(cli: &Cli) -> Result<()> {
    println!("{}", describe(cli)?);
    Ok(())
}

/// Pretty-printed JSON for the selected geometry. The engine is not started.
pub fn describe(cli: &Cli) -> Result<String> {
    let spec = cli.geometry_name.spec();
    let params = cli.params();
    let options = OptionStore::from_args(&cli.engine_args())?;
    let factor = options.number(MESH_SIZE_FACTOR_OPTION)?;

    let description = Description {
        geometry: spec,
        params,
        step_file: spec.source.step_path(&cli.stp_dir, params.medial_angle)?,
        output_file: naming::output_file_name(&spec.naming, &params, factor),
    };
    Ok(serde_json::to_string_pretty(&description)?)
}

//! Command-line flags and their conversion into generator inputs.

use anyhow::Result;
use clap::Parser;
use config::constants::{
    RefinementConfig, DEFAULT_GMSH_EXECUTABLE, DEFAULT_MEDIAL_ANGLE,
    DEFAULT_MEDIAL_SURFACE_LENGTH, DEFAULT_N_EXTRUDE, DEFAULT_STEP_DIR, DEFAULT_Z_EXTRUDE,
    DISTANCE_SAMPLING, REFINEMENT_BASE_SIZE, REFINEMENT_DIST_MAX_FACTOR,
    REFINEMENT_SIZE_MAX_FACTOR,
};
use std::path::PathBuf;
use vf_engine::{GmshProcess, Mesher, ScriptOnly};
use vf_geometry::{GeometryName, MeshParams};
use vf_mesh::MeshRequest;

/// Vocal-fold mesh generator
#[derive(Parser, Debug)]
#[command(name = "genmesh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate vocal-fold meshes with gmsh", long_about = None)]
pub struct Cli {
    /// Geometry to mesh (M5, LiEtal2020, M5Split, Trapezoid)
    #[arg(long, default_value = "M5")]
    pub geometry_name: GeometryName,

    /// Medial surface angle in degrees
    #[arg(long, default_value_t = DEFAULT_MEDIAL_ANGLE, allow_negative_numbers = true)]
    pub medial_angle: f64,

    /// Extrusion depth; 0 meshes the flat cross-section
    #[arg(long, default_value_t = DEFAULT_Z_EXTRUDE, allow_negative_numbers = true)]
    pub z_extrude: f64,

    /// Number of layers along the extrusion
    #[arg(long, default_value_t = DEFAULT_N_EXTRUDE)]
    pub n_extrude: u32,

    /// Medial surface length of the trapezoid
    #[arg(long, default_value_t = DEFAULT_MEDIAL_SURFACE_LENGTH)]
    pub medial_surface_length: f64,

    /// Element size at the medial surface
    #[arg(long, default_value_t = REFINEMENT_BASE_SIZE)]
    pub refinement_size: f64,

    /// Arguments passed through to gmsh, e.g. "-clscale 0.5"
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub gmsh_args: String,

    /// Directory holding the STEP files
    #[arg(long, default_value = DEFAULT_STEP_DIR)]
    pub stp_dir: PathBuf,

    /// gmsh executable
    #[arg(long, default_value = DEFAULT_GMSH_EXECUTABLE)]
    pub gmsh: PathBuf,

    /// Write the .geo script instead of running gmsh
    #[arg(long)]
    pub emit_script: bool,

    /// Print the geometry record and parameters as JSON and exit
    #[arg(long)]
    pub describe: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn params(&self) -> MeshParams {
        MeshParams {
            medial_angle: self.medial_angle,
            z_extrude: self.z_extrude,
            n_extrude: self.n_extrude,
            medial_surface_length: self.medial_surface_length,
        }
    }

    pub fn request(&self) -> Result<MeshRequest> {
        let refinement = RefinementConfig::new(
            self.refinement_size,
            REFINEMENT_SIZE_MAX_FACTOR,
            REFINEMENT_DIST_MAX_FACTOR,
            DISTANCE_SAMPLING,
        )?;
        Ok(MeshRequest::new(self.params())
            .with_step_dir(&self.stp_dir)
            .with_refinement(refinement))
    }

    /// `--gmsh-args` split on whitespace.
    pub fn engine_args(&self) -> Vec<String> {
        self.gmsh_args.split_whitespace().map(str::to_string).collect()
    }

    pub fn mesher(&self) -> Box<dyn Mesher> {
        if self.emit_script {
            Box::new(ScriptOnly)
        } else {
            Box::new(GmshProcess::new(&self.gmsh))
        }
    }
}

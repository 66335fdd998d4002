//! # Generation Pipeline
//!
//! The stages every generator runs through, driven by a
//! [`GeometrySpec`] record:
//!
//! 1. Eager extrusion check (skipped for deferred geometries)
//! 2. Reset the session and open a fresh model in centimetre units
//! 3. Merge the STEP file or build the parametric cross-section
//! 4. Choose flat or extruded (deferred geometries validate here)
//! 5. Extrude, if requested
//! 6. Tag physical regions
//! 7. Write the geometry snapshot, if the record asks for one
//! 8. Install medial refinement, if the record asks for it
//! 9. Mesh at 2 or 3 dimensions and write the named `.msh` file

pub mod geometry;
pub mod refinement;
pub mod regions;

use crate::error::MeshError;
use crate::request::MeshRequest;
use config::constants::{MESH_SIZE_FACTOR_OPTION, MODEL_NAME, OCC_TARGET_UNIT, OCC_TARGET_UNIT_OPTION};
use std::path::PathBuf;
use tracing::{debug, info};
use vf_engine::Session;
use vf_geometry::{naming, GeometrySpec, Variant};

/// Runs the full pipeline for `spec` and returns the written mesh path.
pub fn run(
    session: &mut Session,
    spec: &GeometrySpec,
    request: &MeshRequest,
) -> Result<PathBuf, MeshError> {
    let params = &request.params;
    info!(geometry = %spec.name, ?params, "generating mesh");

    spec.check_extrusion(params)?;

    session.clear();
    session.add_model(MODEL_NAME);
    session.set_option_string(OCC_TARGET_UNIT_OPTION, OCC_TARGET_UNIT);

    geometry::load(session, spec, request)?;

    let variant = spec.variant(params)?;
    debug!(?variant, "variant selected");
    if variant == Variant::Extruded {
        regions::extrude(session, spec, params)?;
    }

    regions::tag(session, spec.regions(variant))?;

    if let Some(snapshot) = spec.geometry_snapshot {
        session.write(snapshot)?;
    }

    if let Some(curves) = spec.refinement_curves() {
        refinement::add_medial_refinement(session, curves, &request.refinement)?;
    }

    session.generate(variant.mesh_dim())?;

    let factor = session.option_number(MESH_SIZE_FACTOR_OPTION)?;
    let file_name = naming::output_file_name(&spec.naming, params, factor);
    let path = session.write(file_name)?;
    info!(path = %path.display(), "mesh generated");
    Ok(path)
}

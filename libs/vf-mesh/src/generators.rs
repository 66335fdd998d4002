//! # Generators
//!
//! One entry point per geometry plus the name → generator dispatch table.

use crate::error::MeshError;
use crate::pipeline;
use crate::request::MeshRequest;
use std::path::PathBuf;
use vf_engine::Session;
use vf_geometry::{catalog, GeometryName};

/// Signature shared by every generator.
pub type GeneratorFn = fn(&mut Session, &MeshRequest) -> Result<PathBuf, MeshError>;

/// M5 cover/body model: flat, or extruded into a layered volume.
pub fn gen_m5(session: &mut Session, request: &MeshRequest) -> Result<PathBuf, MeshError> {
    pipeline::run(session, &catalog::M5, request)
}

/// Single-body model of Li et al. (2020), without medial refinement.
pub fn gen_li_etal_2020(session: &mut Session, request: &MeshRequest) -> Result<PathBuf, MeshError> {
    pipeline::run(session, &catalog::LI_ETAL_2020, request)
}

/// M5 with the cover split in two. Flat only.
pub fn gen_m5_split(session: &mut Session, request: &MeshRequest) -> Result<PathBuf, MeshError> {
    pipeline::run(session, &catalog::M5_SPLIT, request)
}

/// Parametric trapezoid; also writes `Trapezoid.geo_unrolled`.
pub fn gen_trapezoid(session: &mut Session, request: &MeshRequest) -> Result<PathBuf, MeshError> {
    pipeline::run(session, &catalog::TRAPEZOID, request)
}

/// Looks up the generator for `name`.
pub fn generator_for(name: GeometryName) -> GeneratorFn {
    match name {
        GeometryName::M5 => gen_m5,
        GeometryName::LiEtal2020 => gen_li_etal_2020,
        GeometryName::M5Split => gen_m5_split,
        GeometryName::Trapezoid => gen_trapezoid,
    }
}

/// Runs the generator registered for `name`.
pub fn generate(
    session: &mut Session,
    name: GeometryName,
    request: &MeshRequest,
) -> Result<PathBuf, MeshError> {
    generator_for(name)(session, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_engine::RecordingMesher;

    #[test]
    fn test_dispatch_matches_output_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let expected = [
            (GeometryName::M5, "M5_BC--GA"),
            (GeometryName::LiEtal2020, "LiEtal2020--GA"),
            (GeometryName::M5Split, "M5_CB_GA"),
            (GeometryName::Trapezoid, "Trapezoid"),
        ];
        for (name, prefix) in expected {
            let recorder = RecordingMesher::default();
            let mut session =
                Session::initialize_in(dir.path(), Vec::new(), Box::new(recorder.clone())).unwrap();
            let path = generate(&mut session, name, &MeshRequest::default()).unwrap();
            let file_name = path.file_name().unwrap().to_str().unwrap();
            assert!(file_name.starts_with(prefix), "{name}: {file_name}");
            assert_eq!(recorder.runs().len(), 1);
        }
    }
}

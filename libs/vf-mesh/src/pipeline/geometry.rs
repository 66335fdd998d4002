//! Cross-section sources: merged STEP files and the parametric trapezoid.

use crate::error::MeshError;
use crate::request::MeshRequest;
use vf_engine::{Session, Tag};
use vf_geometry::{GeometrySpec, MeshParams, Source, Trapezoid};

/// Brings the cross-section of `spec` into the current model.
pub fn load(session: &mut Session, spec: &GeometrySpec, request: &MeshRequest) -> Result<(), MeshError> {
    match spec.source {
        Source::Step { .. } => {
            let path = spec
                .source
                .step_path(&request.step_dir, request.params.medial_angle)?;
            if let Some(path) = path {
                session.merge(path)?;
            }
        }
        Source::Trapezoid => {
            build_trapezoid(session, &request.params)?;
        }
    }
    Ok(())
}

/// Adds the trapezoid's points, edges, loop and face, then synchronizes.
pub fn build_trapezoid(session: &mut Session, params: &MeshParams) -> Result<Trapezoid, MeshError> {
    let trapezoid = Trapezoid::build(params.medial_angle, params.medial_surface_length)?;

    for (tag, corner) in Trapezoid::POINT_TAGS.into_iter().zip(trapezoid.corners()) {
        session.add_point(corner, Some(tag))?;
    }
    for (tag, start, end) in Trapezoid::LINES {
        session.add_line(start, end, Some(tag))?;
    }

    let edges: Vec<Tag> = Trapezoid::LINES.iter().map(|(tag, _, _)| *tag).collect();
    session.add_curve_loop(&edges, Some(Trapezoid::CURVE_LOOP_TAG))?;
    session.add_plane_surface(&[Trapezoid::CURVE_LOOP_TAG], Some(Trapezoid::SURFACE_TAG))?;
    session.synchronize()?;

    Ok(trapezoid)
}

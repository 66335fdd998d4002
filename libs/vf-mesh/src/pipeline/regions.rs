//! Extrusion and physical region tagging.

use crate::error::MeshError;
use glam::DVec3;
use vf_engine::{Session, Tag};
use vf_geometry::{GeometryError, GeometrySpec, MeshParams, RegionTable};

/// Extrudes the record's faces by `z_extrude` in `n_extrude` layers.
pub fn extrude(session: &mut Session, spec: &GeometrySpec, params: &MeshParams) -> Result<(), MeshError> {
    let layout = spec.extruded.ok_or(GeometryError::ExtrusionUnsupported {
        geometry: spec.name.as_str(),
    })?;

    session.extrude(
        &layout.entities(),
        DVec3::new(0.0, 0.0, params.z_extrude),
        params.n_extrude,
    )?;
    session.synchronize()?;
    Ok(())
}

/// Adds every group of `table` in order and returns the assigned tags.
pub fn tag(session: &mut Session, table: &RegionTable) -> Result<Vec<Tag>, MeshError> {
    table
        .groups()
        .iter()
        .map(|group| {
            session
                .add_physical_group(group.dim, group.tags, group.region.as_str(), group.tag)
                .map_err(MeshError::from)
        })
        .collect()
}

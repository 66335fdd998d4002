//! Mesh size refinement towards the medial surface.
//!
//! A distance field measures how far each point is from the medial curves;
//! a threshold field maps that distance onto an element size, fine at the
//! curves and coarse beyond `dist_max`. The threshold is the background
//! size field.

use crate::error::MeshError;
use config::constants::{RefinementConfig, DISTANCE_FIELD_TAG, THRESHOLD_FIELD_TAG};
use tracing::debug;
use vf_engine::{FieldKind, Session, Tag};

pub fn add_medial_refinement(
    session: &mut Session,
    medial_curves: &[Tag],
    config: &RefinementConfig,
) -> Result<(), MeshError> {
    debug!(?medial_curves, ?config, "adding medial refinement");

    let distance = session.add_field(FieldKind::Distance, DISTANCE_FIELD_TAG)?;
    let curves: Vec<f64> = medial_curves.iter().map(|t| f64::from(*t)).collect();
    session.set_field_numbers(distance, "CurvesList", &curves)?;
    session.set_field_number(distance, "Sampling", f64::from(config.sampling))?;

    let threshold = session.add_field(FieldKind::Threshold, THRESHOLD_FIELD_TAG)?;
    session.set_field_number(threshold, "InField", f64::from(distance))?;
    session.set_field_number(threshold, "SizeMin", config.size_min)?;
    session.set_field_number(threshold, "SizeMax", config.size_max())?;
    session.set_field_number(threshold, "DistMin", 0.0)?;
    session.set_field_number(threshold, "DistMax", config.dist_max())?;

    session.set_background_field(threshold)?;
    Ok(())
}

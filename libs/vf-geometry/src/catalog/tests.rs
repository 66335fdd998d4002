//! Consistency checks over the literal region tables.

use super::*;
use std::collections::BTreeSet;

fn all_specs() -> [&'static GeometrySpec; 4] {
    [&M5, &LI_ETAL_2020, &M5_SPLIT, &TRAPEZOID]
}

fn params(z_extrude: f64, n_extrude: u32) -> MeshParams {
    MeshParams {
        z_extrude,
        n_extrude,
        ..MeshParams::default()
    }
}

#[test]
fn flat_tables_describe_two_dimensional_domains() {
    for spec in all_specs() {
        assert_eq!(spec.flat.dimension(), Some(Dim::Surface), "{}", spec.name);
    }
}

#[test]
fn extruded_tables_describe_volumes() {
    for spec in all_specs() {
        if let Some(layout) = spec.extruded {
            assert_eq!(layout.regions.dimension(), Some(Dim::Volume), "{}", spec.name);
            assert!(!layout.surfaces.is_empty());
        }
    }
}

#[test]
fn extruded_tables_lift_every_flat_region_one_dimension() {
    for spec in all_specs() {
        let Some(layout) = spec.extruded else { continue };
        for flat in spec.flat.groups() {
            let lifted = layout
                .regions
                .find(flat.region)
                .unwrap_or_else(|| panic!("{} lacks {:?}", spec.name, flat.region));
            assert_eq!(flat.dim.extruded(), Some(lifted.dim));
        }
    }
}

#[test]
fn region_names_are_unique_per_table() {
    for spec in all_specs() {
        let mut tables = vec![spec.flat];
        tables.extend(spec.extruded.map(|l| l.regions));
        for table in tables {
            let names: BTreeSet<_> = table.groups().iter().map(|g| g.region.as_str()).collect();
            assert_eq!(names.len(), table.groups().len());
        }
    }
}

#[test]
fn m5_flat_pressure_is_the_surface_curves() {
    let curves = M5.curves.unwrap();
    let pressure = M5.flat.find(Region::Pressure).unwrap();
    assert_eq!(pressure.tags, curves.pressure().as_slice());
}

#[test]
fn m5_extruded_pressure_is_offset_surface_curves() {
    let layout = M5.extruded.unwrap();
    let shifted: BTreeSet<Tag> = M5
        .curves
        .unwrap()
        .extruded_counterparts(layout.tag_offset())
        .into_iter()
        .collect();
    let pressure: BTreeSet<Tag> = layout
        .regions
        .find(Region::Pressure)
        .unwrap()
        .tags
        .iter()
        .copied()
        .collect();
    assert_eq!(shifted, pressure);
}

#[test]
fn only_m5_is_refined() {
    assert_eq!(M5.refinement_curves(), Some(&[10][..]));
    for spec in [&LI_ETAL_2020, &M5_SPLIT, &TRAPEZOID] {
        assert_eq!(spec.refinement_curves(), None);
    }
}

#[test]
fn variant_follows_extrusion_depth() {
    assert_eq!(M5.variant(&params(0.0, 1)), Ok(Variant::Flat));
    assert_eq!(M5.variant(&params(0.1, 3)), Ok(Variant::Extruded));
    assert_eq!(
        M5.variant(&params(-0.1, 1)),
        Err(GeometryError::NegativeExtrusion(-0.1))
    );
    assert_eq!(
        M5.variant(&params(0.1, 0)),
        Err(GeometryError::InvalidLayerCount(0))
    );
}

#[test]
fn split_model_cannot_be_extruded() {
    assert_eq!(
        M5_SPLIT.variant(&params(0.5, 2)),
        Err(GeometryError::ExtrusionUnsupported { geometry: "M5Split" })
    );
    assert_eq!(M5_SPLIT.variant(&params(0.0, 2)), Ok(Variant::Flat));
}

#[test]
fn deferred_guard_skips_early_check() {
    assert!(LI_ETAL_2020.check_extrusion(&params(-1.0, 1)).is_ok());
    assert!(M5.check_extrusion(&params(-1.0, 1)).is_err());
}

#[test]
fn regions_pick_table_for_variant() {
    assert_eq!(
        M5.regions(Variant::Extruded).find(Region::Body).unwrap().dim,
        Dim::Volume
    );
    assert_eq!(
        M5_SPLIT.regions(Variant::Extruded).find(Region::Body).unwrap().dim,
        Dim::Surface
    );
}

#[test]
fn step_paths_follow_angle_format() {
    let dir = Path::new("stp");
    assert_eq!(
        M5.source.step_path(dir, -3.0).unwrap().unwrap(),
        Path::new("stp/M5_CB--GA-3.STEP")
    );
    assert_eq!(
        LI_ETAL_2020.source.step_path(dir, 5.0).unwrap().unwrap(),
        Path::new("stp/LiEtal2020--GA5.STEP")
    );
    assert_eq!(
        M5_SPLIT.source.step_path(dir, 0.0).unwrap().unwrap(),
        Path::new("stp/M5_CB_GA0_split.STEP")
    );
    assert_eq!(
        LI_ETAL_2020.source.step_path(dir, 2.5),
        Err(GeometryError::NonIntegralAngle(2.5))
    );
    assert_eq!(TRAPEZOID.source.step_path(dir, 2.5), Ok(None));
}

#[test]
fn extruded_layout_lists_surfaces() {
    let layout = M5.extruded.unwrap();
    assert_eq!(
        layout.entities(),
        vec![DimTag::new(Dim::Surface, 1), DimTag::new(Dim::Surface, 2)]
    );
    assert_eq!(layout.tag_offset(), 2);
}

#[test]
fn offset_saturates_instead_of_wrapping() {
    assert_eq!(offset_tags(&[Tag::MAX - 1], 5), vec![Tag::MAX]);
}

//! Session tests using the in-memory recording backend.

use super::*;
use crate::mesher::RecordingMesher;
use crate::options::OptionValue;

fn session() -> (Session, RecordingMesher) {
    let recorder = RecordingMesher::default();
    let session = Session::initialize_in("/work", Vec::new(), Box::new(recorder.clone()))
        .expect("session");
    (session, recorder)
}

fn quad(session: &mut Session) -> Tag {
    let corners = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    ];
    let points: Vec<Tag> = corners
        .iter()
        .map(|c| session.add_point(*c, None).unwrap())
        .collect();
    let lines: Vec<Tag> = (0..4)
        .map(|i| session.add_line(points[i], points[(i + 1) % 4], None).unwrap())
        .collect();
    let lp = session.add_curve_loop(&lines, None).unwrap();
    session.add_plane_surface(&[lp], None).unwrap()
}

#[test]
fn operations_without_model_fail() {
    let (mut s, _) = session();
    assert!(matches!(
        s.add_point(DVec3::ZERO, None),
        Err(EngineError::NoActiveModel)
    ));
    assert!(matches!(s.merge("a.STEP"), Err(EngineError::NoActiveModel)));
    assert!(matches!(s.write("a.msh"), Err(EngineError::NoActiveModel)));
}

#[test]
fn tags_are_allocated_per_dimension() {
    let (mut s, _) = session();
    s.add_model("main");
    let surface = quad(&mut s);
    assert_eq!(surface, 1);
    assert_eq!(s.entities(Dim::Point).len(), 4);
    assert_eq!(s.entities(Dim::Curve).len(), 4);
    assert_eq!(s.entities(Dim::Surface), vec![DimTag::new(Dim::Surface, 1)]);
}

#[test]
fn explicit_tag_collision_is_rejected() {
    let (mut s, _) = session();
    s.add_model("main");
    s.add_point(DVec3::ZERO, Some(3)).unwrap();
    let err = s.add_point(DVec3::X, Some(3)).unwrap_err();
    assert!(matches!(err, EngineError::DuplicateTag { dim: Dim::Point, tag: 3 }));
    assert_eq!(s.add_point(DVec3::Y, None).unwrap(), 4);
}

#[test]
fn auto_tag_after_max_tag_is_rejected() {
    let (mut s, _) = session();
    s.add_model("main");
    s.add_point(DVec3::ZERO, Some(Tag::MAX)).unwrap();
    let err = s.add_point(DVec3::X, None).unwrap_err();
    assert!(matches!(err, EngineError::DuplicateTag { dim: Dim::Point, .. }));
    assert_eq!(s.entities(Dim::Point).len(), 1);
}

#[test]
fn line_requires_existing_points() {
    let (mut s, _) = session();
    s.add_model("main");
    s.add_point(DVec3::ZERO, Some(1)).unwrap();
    let err = s.add_line(1, 2, None).unwrap_err();
    assert!(matches!(err, EngineError::UnknownEntity { dim: Dim::Point, tag: 2 }));
}

#[test]
fn clear_discards_model_but_keeps_options() {
    let (mut s, _) = session();
    s.add_model("main");
    s.set_option_string("Geometry.OCCTargetUnit", "CM");
    quad(&mut s);
    s.clear();
    assert!(s.script().is_none());
    assert!(s.entities(Dim::Point).is_empty());

    s.add_model("main");
    let script = s.script().unwrap();
    assert!(script.contains(|c| matches!(
        c,
        Command::SetOption { name, value: OptionValue::String(v) }
            if name == "Geometry.OCCTargetUnit" && v == "CM"
    )));
    assert_eq!(s.option_string("Geometry.OCCTargetUnit").unwrap(), "CM");
}

#[test]
fn merge_paths_resolve_against_work_dir() {
    let (mut s, _) = session();
    s.add_model("main");
    s.merge("stp/M5_CB--GA0.STEP").unwrap();
    let script = s.script().unwrap();
    assert!(script.contains(|c| matches!(
        c,
        Command::Merge { path } if path == Path::new("/work/stp/M5_CB--GA0.STEP")
    )));
}

#[test]
fn field_settings_require_field() {
    let (mut s, _) = session();
    s.add_model("main");
    assert!(matches!(
        s.set_field_number(2, "SizeMin", 0.1),
        Err(EngineError::UnknownField(2))
    ));
    s.add_field(FieldKind::Distance, 1).unwrap();
    s.set_field_numbers(1, "CurvesList", &[10.0]).unwrap();
    assert!(s.add_field(FieldKind::Threshold, 1).is_err());
}

#[test]
fn physical_group_tags_count_per_dimension() {
    let (mut s, _) = session();
    s.add_model("main");
    assert_eq!(s.add_physical_group(Dim::Surface, &[2], "body", None).unwrap(), 1);
    assert_eq!(s.add_physical_group(Dim::Surface, &[1], "cover", None).unwrap(), 2);
    assert_eq!(s.add_physical_group(Dim::Curve, &[13], "fixed", None).unwrap(), 1);
    assert!(s.add_physical_group(Dim::Curve, &[], "empty", None).is_err());
}

#[test]
fn extrude_validates_input() {
    let (mut s, _) = session();
    s.add_model("main");
    let faces = [DimTag::new(Dim::Surface, 1)];
    assert!(s.extrude(&[], DVec3::Z, 1).is_err());
    assert!(s.extrude(&faces, DVec3::Z, 0).is_err());
    assert!(s
        .extrude(&[DimTag::new(Dim::Volume, 1)], DVec3::Z, 1)
        .is_err());
    s.extrude(&faces, DVec3::Z, 2).unwrap();
}

#[test]
fn generate_rejects_dimension_zero() {
    let (mut s, _) = session();
    s.add_model("main");
    assert!(s.generate(Dim::Point).is_err());
    s.generate(Dim::Surface).unwrap();
}

#[test]
fn mesh_write_runs_backend_with_save() {
    let recorder = RecordingMesher::default();
    let args = vec!["-clscale".to_string(), "0.5".to_string()];
    let mut s = Session::initialize_in("/work", args.clone(), Box::new(recorder.clone())).unwrap();
    s.add_model("main");
    quad(&mut s);
    s.generate(Dim::Surface).unwrap();
    let out = s.write("quad.msh").unwrap();
    assert_eq!(out, PathBuf::from("/work/quad.msh"));

    let runs = recorder.runs();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].args, args);
    assert_eq!(runs[0].output, out);
    assert!(matches!(
        runs[0].script.commands().last(),
        Some(Command::Save { .. })
    ));
    assert_eq!(s.option_number("Mesh.MeshSizeFactor").unwrap(), 0.5);
}

#[test]
fn script_write_bypasses_backend() {
    let dir = tempfile::tempdir().unwrap();
    let recorder = RecordingMesher::default();
    let mut s = Session::initialize_in(dir.path(), Vec::new(), Box::new(recorder.clone())).unwrap();
    s.add_model("main");
    quad(&mut s);
    let out = s.write("quad.geo_unrolled").unwrap();
    let text = std::fs::read_to_string(out).unwrap();
    assert!(text.contains("Plane Surface(1) = {1};"));
    assert!(recorder.runs().is_empty());
}

//! # Engine Command IR
//!
//! Every model operation issued through a [`crate::Session`] is recorded as a
//! [`Command`]. The command list prints as a `.geo` script for the
//! OpenCASCADE kernel, which is what the mesher executes.

use crate::entity::{Dim, DimTag, Tag};
use crate::options::OptionValue;
use glam::DVec3;
use std::path::PathBuf;

/// Scalar field types used for mesh size control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Distance,
    Threshold,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Distance => "Distance",
            FieldKind::Threshold => "Threshold",
        }
    }
}

/// One recorded model operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Model { name: String },
    SetOption { name: String, value: OptionValue },
    Merge { path: PathBuf },
    Point { tag: Tag, position: DVec3 },
    Line { tag: Tag, start: Tag, end: Tag },
    CurveLoop { tag: Tag, curves: Vec<Tag> },
    PlaneSurface { tag: Tag, loops: Vec<Tag> },
    Extrude {
        entities: Vec<DimTag>,
        offset: DVec3,
        layers: u32,
    },
    Synchronize,
    PhysicalGroup {
        dim: Dim,
        tag: Tag,
        name: String,
        entities: Vec<Tag>,
    },
    Field { tag: Tag, kind: FieldKind },
    FieldNumber { tag: Tag, name: String, value: f64 },
    FieldNumbers { tag: Tag, name: String, values: Vec<f64> },
    BackgroundField { tag: Tag },
    Generate { dim: Dim },
    Save { path: PathBuf },
}

/// Ordered list of commands describing one model.
///
/// # Example
///
/// ```rust
/// use vf_engine::{Command, Dim, GeoScript};
///
/// let mut script = GeoScript::default();
/// script.push(Command::Generate { dim: Dim::Surface });
/// assert!(script.render().contains("Mesh 2;"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoScript {
    commands: Vec<Command>,
}

impl GeoScript {
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns true if any command matches the predicate.
    pub fn contains(&self, predicate: impl Fn(&Command) -> bool) -> bool {
        self.commands.iter().any(predicate)
    }

    /// Prints the script in `.geo` syntax.
    pub fn render(&self) -> String {
        let mut out = String::from("SetFactory(\"OpenCASCADE\");\n");
        for line in self.commands.iter().filter_map(print_command) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

fn print_command(command: &Command) -> Option<String> {
    let line = match command {
        Command::Model { name } => format!("// model: {name}"),
        Command::SetOption { name, value } => format!("{name} = {};", print_value(value)),
        Command::Merge { path } => format!("Merge {};", print_path(path)),
        Command::Point { tag, position } => format!(
            "Point({tag}) = {{{}, {}, {}}};",
            print_number(position.x),
            print_number(position.y),
            print_number(position.z)
        ),
        Command::Line { tag, start, end } => format!("Line({tag}) = {{{start}, {end}}};"),
        Command::CurveLoop { tag, curves } => {
            format!("Curve Loop({tag}) = {{{}}};", print_tags(curves))
        }
        Command::PlaneSurface { tag, loops } => {
            format!("Plane Surface({tag}) = {{{}}};", print_tags(loops))
        }
        Command::Extrude {
            entities,
            offset,
            layers,
        } => format!(
            "Extrude {{{}, {}, {}}} {{ {} Layers{{{layers}}}; }}",
            print_number(offset.x),
            print_number(offset.y),
            print_number(offset.z),
            print_entity_lists(entities)
        ),
        Command::Synchronize => return None,
        Command::PhysicalGroup {
            dim,
            tag,
            name,
            entities,
        } => format!(
            "Physical {}({}, {tag}) = {{{}}};",
            dim.keyword(),
            print_string(name),
            print_tags(entities)
        ),
        Command::Field { tag, kind } => format!("Field[{tag}] = {};", kind.as_str()),
        Command::FieldNumber { tag, name, value } => {
            format!("Field[{tag}].{name} = {};", print_number(*value))
        }
        Command::FieldNumbers { tag, name, values } => format!(
            "Field[{tag}].{name} = {{{}}};",
            values.iter().map(|v| print_number(*v)).collect::<Vec<_>>().join(", ")
        ),
        Command::BackgroundField { tag } => format!("Background Field = {tag};"),
        Command::Generate { dim } => format!("Mesh {};", dim.as_u8()),
        Command::Save { path } => format!("Save {};", print_path(path)),
    };
    Some(line)
}

fn print_value(value: &OptionValue) -> String {
    match value {
        OptionValue::Number(n) => print_number(*n),
        OptionValue::String(s) => print_string(s),
    }
}

fn print_number(value: f64) -> String {
    format!("{value:?}")
}

fn print_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn print_path(path: &std::path::Path) -> String {
    print_string(&path.display().to_string())
}

fn print_tags(tags: &[Tag]) -> String {
    tags.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ")
}

fn print_entity_lists(entities: &[DimTag]) -> String {
    let mut dims: Vec<Dim> = entities.iter().map(|e| e.dim).collect();
    dims.sort();
    dims.dedup();
    dims.iter()
        .map(|dim| {
            let tags: Vec<Tag> = entities
                .iter()
                .filter(|e| e.dim == *dim)
                .map(|e| e.tag)
                .collect();
            format!("{}{{{}}};", dim.keyword(), print_tags(&tags))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

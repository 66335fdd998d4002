//! # Engine Session
//!
//! The mesher keeps a single mutable "current model" per process. A
//! [`Session`] owns that state explicitly: it is created once, passed by
//! `&mut` to each generator, reset with [`Session::clear`], and finalized on
//! drop.
//!
//! Entities built through the session (points, lines, loops, faces) are
//! tracked so that references between them are checked before anything
//! reaches the mesher. Entities that come from a merged CAD file or from an
//! extrusion are only known to the mesher and are referenced by tag alone.

use crate::entity::{Dim, DimTag, Tag};
use crate::error::EngineError;
use crate::mesher::Mesher;
use crate::options::OptionStore;
use crate::script::{Command, FieldKind, GeoScript};
use glam::DVec3;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extensions written by printing the model instead of running the mesher.
const SCRIPT_EXTENSIONS: [&str; 2] = ["geo", "geo_unrolled"];

/// State of the current model.
#[derive(Debug)]
struct Model {
    name: String,
    script: GeoScript,
    entities: BTreeMap<Dim, BTreeSet<Tag>>,
    loops: BTreeSet<Tag>,
    physical: BTreeMap<Dim, BTreeSet<Tag>>,
    fields: BTreeSet<Tag>,
}

impl Model {
    fn new(name: &str) -> Self {
        let mut script = GeoScript::default();
        script.push(Command::Model {
            name: name.to_string(),
        });
        Self {
            name: name.to_string(),
            script,
            entities: BTreeMap::new(),
            loops: BTreeSet::new(),
            physical: BTreeMap::new(),
            fields: BTreeSet::new(),
        }
    }

    fn claim(&mut self, dim: Dim, tag: Option<Tag>) -> Result<Tag, EngineError> {
        let taken = self.entities.entry(dim).or_default();
        claim_tag(taken, tag).ok_or(EngineError::DuplicateTag {
            dim,
            tag: tag.unwrap_or_default(),
        })
    }

    fn require(&self, dim: Dim, tag: Tag) -> Result<(), EngineError> {
        match self.entities.get(&dim) {
            Some(tags) if tags.contains(&tag) => Ok(()),
            _ => Err(EngineError::UnknownEntity { dim, tag }),
        }
    }
}

/// Takes `tag` (or the next free one) from `taken`. `None` on collision or
/// when no tag is left above the current maximum.
fn claim_tag(taken: &mut BTreeSet<Tag>, tag: Option<Tag>) -> Option<Tag> {
    let tag = match tag {
        Some(tag) => tag,
        None => match taken.iter().next_back() {
            Some(max) => max.checked_add(1)?,
            None => 1,
        },
    };
    taken.insert(tag).then_some(tag)
}

/// Explicit handle on the mesher's process-wide state.
pub struct Session {
    options: OptionStore,
    engine_args: Vec<String>,
    work_dir: PathBuf,
    model: Option<Model>,
    mesher: Box<dyn Mesher>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("engine_args", &self.engine_args)
            .field("work_dir", &self.work_dir)
            .field("model", &self.model.as_ref().map(|m| m.name.as_str()))
            .finish()
    }
}

impl Session {
    /// Initializes the engine in the current working directory.
    ///
    /// `engine_args` are the mesher's own command-line arguments. They are
    /// forwarded verbatim on every run and also seed the option table.
    pub fn initialize(
        engine_args: Vec<String>,
        mesher: Box<dyn Mesher>,
    ) -> Result<Self, EngineError> {
        let work_dir = std::env::current_dir()?;
        Self::initialize_in(work_dir, engine_args, mesher)
    }

    /// Initializes the engine with relative paths resolved against `work_dir`.
    pub fn initialize_in(
        work_dir: impl Into<PathBuf>,
        engine_args: Vec<String>,
        mesher: Box<dyn Mesher>,
    ) -> Result<Self, EngineError> {
        let options = OptionStore::from_args(&engine_args)?;
        let work_dir = work_dir.into();
        debug!(?engine_args, work_dir = %work_dir.display(), "initializing engine session");
        Ok(Self {
            options,
            engine_args,
            work_dir,
            model: None,
            mesher,
        })
    }

    pub fn engine_args(&self) -> &[String] {
        &self.engine_args
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Script of the current model, if one exists.
    pub fn script(&self) -> Option<&GeoScript> {
        self.model.as_ref().map(|m| &m.script)
    }

    /// Discards the current model. Options are kept.
    pub fn clear(&mut self) {
        if let Some(model) = self.model.take() {
            debug!(model = %model.name, "clearing model");
        }
    }

    /// Starts a new current model, replacing any existing one.
    pub fn add_model(&mut self, name: &str) {
        let mut model = Model::new(name);
        for (option, value) in self.options.overrides() {
            model.script.push(Command::SetOption {
                name: option.to_string(),
                value: value.clone(),
            });
        }
        self.model = Some(model);
    }

    // =========================================================================
    // OPTIONS
    // =========================================================================

    pub fn set_option_string(&mut self, name: &str, value: &str) {
        self.options.set_string(name, value);
        self.record_option(name);
    }

    pub fn set_option_number(&mut self, name: &str, value: f64) {
        self.options.set_number(name, value);
        self.record_option(name);
    }

    pub fn option_number(&self, name: &str) -> Result<f64, EngineError> {
        self.options.number(name)
    }

    pub fn option_string(&self, name: &str) -> Result<&str, EngineError> {
        self.options.string(name)
    }

    fn record_option(&mut self, name: &str) {
        let value = self
            .options
            .overrides()
            .find(|(option, _)| *option == name)
            .map(|(_, value)| value.clone());
        if let (Some(model), Some(value)) = (self.model.as_mut(), value) {
            model.script.push(Command::SetOption {
                name: name.to_string(),
                value,
            });
        }
    }

    // =========================================================================
    // GEOMETRY
    // =========================================================================

    /// Imports a CAD file into the current model.
    pub fn merge(&mut self, path: impl AsRef<Path>) -> Result<(), EngineError> {
        let path = self.resolve(path.as_ref());
        debug!(path = %path.display(), "merging CAD file");
        self.model_mut()?.script.push(Command::Merge { path });
        Ok(())
    }

    pub fn add_point(&mut self, position: DVec3, tag: Option<Tag>) -> Result<Tag, EngineError> {
        let model = self.model_mut()?;
        let tag = model.claim(Dim::Point, tag)?;
        model.script.push(Command::Point { tag, position });
        Ok(tag)
    }

    pub fn add_line(&mut self, start: Tag, end: Tag, tag: Option<Tag>) -> Result<Tag, EngineError> {
        let model = self.model_mut()?;
        model.require(Dim::Point, start)?;
        model.require(Dim::Point, end)?;
        if start == end {
            return Err(EngineError::InvalidOperation(format!(
                "line endpoints coincide at point {start}"
            )));
        }
        let tag = model.claim(Dim::Curve, tag)?;
        model.script.push(Command::Line { tag, start, end });
        Ok(tag)
    }

    pub fn add_curve_loop(&mut self, curves: &[Tag], tag: Option<Tag>) -> Result<Tag, EngineError> {
        let model = self.model_mut()?;
        if curves.is_empty() {
            return Err(EngineError::InvalidOperation("empty curve loop".into()));
        }
        for curve in curves {
            model.require(Dim::Curve, *curve)?;
        }
        let tag = claim_tag(&mut model.loops, tag).ok_or_else(|| {
            EngineError::InvalidOperation(format!("duplicate curve loop tag {tag:?}"))
        })?;
        model.script.push(Command::CurveLoop {
            tag,
            curves: curves.to_vec(),
        });
        Ok(tag)
    }

    pub fn add_plane_surface(&mut self, loops: &[Tag], tag: Option<Tag>) -> Result<Tag, EngineError> {
        let model = self.model_mut()?;
        if loops.is_empty() {
            return Err(EngineError::InvalidOperation("plane surface without loops".into()));
        }
        if let Some(missing) = loops.iter().find(|l| !model.loops.contains(l)) {
            return Err(EngineError::InvalidOperation(format!(
                "unknown curve loop {missing}"
            )));
        }
        let tag = model.claim(Dim::Surface, tag)?;
        model.script.push(Command::PlaneSurface {
            tag,
            loops: loops.to_vec(),
        });
        Ok(tag)
    }

    /// Extrudes entities by `offset`, subdivided into `layers` layers.
    pub fn extrude(
        &mut self,
        entities: &[DimTag],
        offset: DVec3,
        layers: u32,
    ) -> Result<(), EngineError> {
        if entities.is_empty() {
            return Err(EngineError::InvalidOperation("nothing to extrude".into()));
        }
        if layers == 0 {
            return Err(EngineError::InvalidOperation("extrusion needs at least one layer".into()));
        }
        if let Some(volume) = entities.iter().find(|e| e.dim.extruded().is_none()) {
            return Err(EngineError::InvalidOperation(format!(
                "cannot extrude volume {}",
                volume.tag
            )));
        }
        debug!(?entities, dz = offset.z, layers, "extruding");
        self.model_mut()?.script.push(Command::Extrude {
            entities: entities.to_vec(),
            offset,
            layers,
        });
        Ok(())
    }

    pub fn synchronize(&mut self) -> Result<(), EngineError> {
        self.model_mut()?.script.push(Command::Synchronize);
        Ok(())
    }

    /// Entities of dimension `dim` built through this session.
    pub fn entities(&self, dim: Dim) -> Vec<DimTag> {
        self.model
            .as_ref()
            .and_then(|m| m.entities.get(&dim))
            .map(|tags| tags.iter().map(|t| DimTag::new(dim, *t)).collect())
            .unwrap_or_default()
    }

    // =========================================================================
    // PHYSICAL GROUPS & FIELDS
    // =========================================================================

    pub fn add_physical_group(
        &mut self,
        dim: Dim,
        entities: &[Tag],
        name: &str,
        tag: Option<Tag>,
    ) -> Result<Tag, EngineError> {
        let model = self.model_mut()?;
        if entities.is_empty() {
            return Err(EngineError::InvalidOperation(format!(
                "physical group {name} has no entities"
            )));
        }
        let taken = model.physical.entry(dim).or_default();
        let tag = claim_tag(taken, tag).ok_or(EngineError::DuplicateTag {
            dim,
            tag: tag.unwrap_or_default(),
        })?;
        debug!(%dim, tag, name, ?entities, "adding physical group");
        model.script.push(Command::PhysicalGroup {
            dim,
            tag,
            name: name.to_string(),
            entities: entities.to_vec(),
        });
        Ok(tag)
    }

    pub fn add_field(&mut self, kind: FieldKind, tag: Tag) -> Result<Tag, EngineError> {
        let model = self.model_mut()?;
        if !model.fields.insert(tag) {
            return Err(EngineError::InvalidOperation(format!("duplicate field {tag}")));
        }
        model.script.push(Command::Field { tag, kind });
        Ok(tag)
    }

    pub fn set_field_number(&mut self, tag: Tag, name: &str, value: f64) -> Result<(), EngineError> {
        let model = self.field_model(tag)?;
        model.script.push(Command::FieldNumber {
            tag,
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    pub fn set_field_numbers(&mut self, tag: Tag, name: &str, values: &[f64]) -> Result<(), EngineError> {
        let model = self.field_model(tag)?;
        model.script.push(Command::FieldNumbers {
            tag,
            name: name.to_string(),
            values: values.to_vec(),
        });
        Ok(())
    }

    pub fn set_background_field(&mut self, tag: Tag) -> Result<(), EngineError> {
        let model = self.field_model(tag)?;
        model.script.push(Command::BackgroundField { tag });
        Ok(())
    }

    // =========================================================================
    // MESHING & OUTPUT
    // =========================================================================

    pub fn generate(&mut self, dim: Dim) -> Result<(), EngineError> {
        if dim == Dim::Point {
            return Err(EngineError::InvalidOperation("cannot mesh at dimension 0".into()));
        }
        self.model_mut()?.script.push(Command::Generate { dim });
        Ok(())
    }

    /// Writes the model to `path`.
    ///
    /// `.geo`/`.geo_unrolled` targets receive the printed script. Any other
    /// target is saved by the mesher backend, which replays the whole model.
    pub fn write(&mut self, path: impl AsRef<Path>) -> Result<PathBuf, EngineError> {
        let path = self.resolve(path.as_ref());
        let is_script = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext));

        let model = self.model.as_mut().ok_or(EngineError::NoActiveModel)?;
        if is_script {
            std::fs::write(&path, model.script.render())?;
        } else {
            model.script.push(Command::Save { path: path.clone() });
            self.mesher.run(&model.script, &self.engine_args, &path)?;
        }
        info!(path = %path.display(), "wrote {}", if is_script { "geometry" } else { "mesh" });
        Ok(path)
    }

    fn model_mut(&mut self) -> Result<&mut Model, EngineError> {
        self.model.as_mut().ok_or(EngineError::NoActiveModel)
    }

    fn field_model(&mut self, tag: Tag) -> Result<&mut Model, EngineError> {
        let model = self.model_mut()?;
        if !model.fields.contains(&tag) {
            return Err(EngineError::UnknownField(tag));
        }
        Ok(model)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.work_dir.join(path)
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!("finalizing engine session");
    }
}

#[cfg(test)]
mod tests;

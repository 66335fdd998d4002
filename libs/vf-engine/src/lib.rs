//! # VF Engine
//!
//! Scoped handle around the external mesher. The mesher keeps one mutable
//! "current model"; here that state lives in an explicit [`Session`] that is
//! passed by `&mut` to whoever builds a model, so nothing else can touch it
//! concurrently.
//!
//! ## Architecture
//!
//! ```text
//! Session (model commands, options) → GeoScript → Mesher backend
//!                                                  ├── GmshProcess   (runs gmsh)
//!                                                  ├── ScriptOnly    (writes .geo)
//!                                                  └── RecordingMesher (tests)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use vf_engine::{Dim, RecordingMesher, Session};
//!
//! let recorder = RecordingMesher::default();
//! let mut session = Session::initialize_in(
//!     std::env::temp_dir(),
//!     Vec::new(),
//!     Box::new(recorder.clone()),
//! )
//! .unwrap();
//! session.clear();
//! session.add_model("main");
//! let p = session.add_point(DVec3::ZERO, None).unwrap();
//! assert_eq!(p, 1);
//! assert_eq!(session.entities(Dim::Point).len(), 1);
//! ```

pub mod entity;
pub mod error;
pub mod mesher;
pub mod options;
pub mod script;
pub mod session;

pub use entity::{Dim, DimTag, Tag};
pub use error::EngineError;
pub use mesher::{GmshProcess, Mesher, RecordedRun, RecordingMesher, ScriptOnly};
pub use options::{OptionStore, OptionValue};
pub use script::{Command, FieldKind, GeoScript};
pub use session::Session;

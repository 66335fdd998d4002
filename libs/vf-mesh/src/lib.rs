//! # VF Mesh
//!
//! Mesh generators for the vocal-fold geometry catalog.
//!
//! ## Architecture
//!
//! ```text
//! GeometryName ──generator_for──▶ gen_* ──▶ pipeline::run(spec)
//!                                            │
//!   clear → load/build → [extrude] → tag → [refine] → mesh → write
//! ```
//!
//! Every generator is the same pipeline driven by a different
//! [`vf_geometry::GeometrySpec`] record.
//!
//! ## Usage
//!
//! ```rust
//! use vf_engine::{RecordingMesher, Session};
//! use vf_geometry::GeometryName;
//! use vf_mesh::{generate, MeshRequest};
//!
//! let recorder = RecordingMesher::default();
//! let mut session =
//!     Session::initialize_in("/tmp", Vec::new(), Box::new(recorder.clone())).unwrap();
//! let out = generate(&mut session, GeometryName::M5, &MeshRequest::default()).unwrap();
//! assert!(out.ends_with("M5_BC--GA0.00--DZ0.00--CL1.00e+00.msh"));
//! assert_eq!(recorder.runs().len(), 1);
//! ```

pub mod error;
pub mod generators;
pub mod pipeline;
pub mod request;

pub use error::MeshError;
pub use generators::{
    gen_li_etal_2020, gen_m5, gen_m5_split, gen_trapezoid, generate, generator_for, GeneratorFn,
};
pub use request::MeshRequest;

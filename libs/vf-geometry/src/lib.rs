//! # VF Geometry
//!
//! Everything that describes *what* to mesh, with no engine calls:
//!
//! - [`GeometryName`] and the [`catalog`] of per-geometry records
//! - [`MeshParams`] validated against each record
//! - [`Trapezoid`], the one parametrically constructed cross-section
//! - [`naming`] helpers that turn parameters into file names
//!
//! ## Usage
//!
//! ```rust
//! use vf_geometry::{GeometryName, MeshParams, Variant};
//!
//! let spec = "M5".parse::<GeometryName>().unwrap().spec();
//! let params = MeshParams { z_extrude: 0.5, n_extrude: 4, ..MeshParams::default() };
//! assert_eq!(spec.variant(&params).unwrap(), Variant::Extruded);
//! ```

pub mod catalog;
pub mod error;
pub mod name;
pub mod naming;
pub mod params;
pub mod trapezoid;

pub use catalog::{
    AngleFormat, ExtrudedLayout, ExtrusionGuard, GeometrySpec, NamingStyle, PhysicalGroup,
    Region, RegionTable, Source, SurfaceCurves, Variant,
};
pub use error::GeometryError;
pub use name::GeometryName;
pub use params::MeshParams;
pub use trapezoid::Trapezoid;

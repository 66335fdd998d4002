//! # Config Crate
//!
//! Centralized configuration constants for the vocal-fold meshing pipeline.
//! Engine option names, geometry defaults and refinement parameters live
//! here so the geometry catalog and the generators never carry bare literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{RefinementConfig, DEFAULT_MEDIAL_ANGLE, REFINEMENT_BASE_SIZE};
//!
//! let refinement = RefinementConfig::default();
//! assert_eq!(refinement.size_min, REFINEMENT_BASE_SIZE);
//! assert_eq!(DEFAULT_MEDIAL_ANGLE, 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine Compatible**: Option names match the external mesher exactly
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;

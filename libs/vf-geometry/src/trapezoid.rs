//! # Trapezoid Cross-Section
//!
//! A synthetic vocal-fold cross-section in the XY plane:
//!
//! ```text
//!   p4 ──────── p3   medial surface p3→p4, tilted by `medial_angle`
//!    ╲          │
//!     ╲         │
//!      p1 ───── p2
//! ```
//!
//! `p1` is the origin, `p2 = (1, 0, 0)` the base corner and `p3 = (1, 0.5, 0)`
//! the medial-superior point. `p4` lies `medial_surface_length` away from
//! `p3` along `(-1, -tan(angle), 0)`.

use crate::error::GeometryError;
use config::constants::MAX_MEDIAL_ANGLE;
use glam::DVec3;
use serde::Serialize;
use vf_engine::Tag;

/// The four corners of the trapezoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trapezoid {
    pub origin: DVec3,
    pub base_corner: DVec3,
    pub medial_superior: DVec3,
    pub medial_inferior: DVec3,
}

impl Trapezoid {
    pub const ORIGIN: DVec3 = DVec3::new(0.0, 0.0, 0.0);
    pub const BASE_CORNER: DVec3 = DVec3::new(1.0, 0.0, 0.0);
    pub const MEDIAL_SUPERIOR: DVec3 = DVec3::new(1.0, 0.5, 0.0);

    /// Point tags, in corner order.
    pub const POINT_TAGS: [Tag; 4] = [1, 2, 3, 4];

    /// Line tags with their `(start, end)` point tags, closing the loop.
    pub const LINES: [(Tag, Tag, Tag); 4] = [(1, 1, 2), (2, 2, 3), (3, 3, 4), (4, 4, 1)];

    pub const CURVE_LOOP_TAG: Tag = 1;
    pub const SURFACE_TAG: Tag = 1;

    /// Builds the cross-section for a medial angle in degrees.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateTrapezoid`] when the angle is not finite or
    /// reaches ±90° (the medial direction becomes vertical), or when the
    /// length is not a finite positive number.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use vf_geometry::Trapezoid;
    ///
    /// let t = Trapezoid::build(0.0, 0.5).unwrap();
    /// assert_eq!(t.medial_inferior, DVec3::new(0.5, 0.5, 0.0));
    /// ```
    pub fn build(medial_angle: f64, medial_surface_length: f64) -> Result<Self, GeometryError> {
        if !medial_angle.is_finite() || medial_angle.abs() >= MAX_MEDIAL_ANGLE {
            return Err(GeometryError::DegenerateTrapezoid(format!(
                "medial angle {medial_angle} outside (-{MAX_MEDIAL_ANGLE}, {MAX_MEDIAL_ANGLE})"
            )));
        }
        if !(medial_surface_length.is_finite() && medial_surface_length > 0.0) {
            return Err(GeometryError::DegenerateTrapezoid(format!(
                "medial surface length {medial_surface_length} must be positive"
            )));
        }
        let direction = Self::medial_direction(medial_angle)?;
        Ok(Self {
            origin: Self::ORIGIN,
            base_corner: Self::BASE_CORNER,
            medial_superior: Self::MEDIAL_SUPERIOR,
            medial_inferior: Self::MEDIAL_SUPERIOR + medial_surface_length * direction,
        })
    }

    /// Unit vector from the medial-superior towards the medial-inferior point.
    pub fn medial_direction(medial_angle: f64) -> Result<DVec3, GeometryError> {
        let raw = DVec3::new(-1.0, -medial_angle.to_radians().tan(), 0.0);
        raw.try_normalize().ok_or_else(|| {
            GeometryError::DegenerateTrapezoid(format!(
                "no medial direction for angle {medial_angle}"
            ))
        })
    }

    /// Corners in point-tag order.
    pub fn corners(&self) -> [DVec3; 4] {
        [
            self.origin,
            self.base_corner,
            self.medial_superior,
            self.medial_inferior,
        ]
    }

    /// Length of the medial surface `p3 → p4`.
    pub fn medial_surface_length(&self) -> f64 {
        self.medial_superior.distance(self.medial_inferior)
    }
}

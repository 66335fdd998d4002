//! # Model Entities
//!
//! Entities of the mesher's model are addressed by a dimension and an
//! integer tag, unique within that dimension.

use serde::Serialize;
use std::fmt;

/// Integer identifier of an entity, physical group or field.
pub type Tag = i32;

/// Topological dimension of a model entity.
///
/// # Example
///
/// ```rust
/// use vf_engine::Dim;
///
/// assert_eq!(Dim::Surface.as_u8(), 2);
/// assert_eq!(Dim::from_u8(3), Some(Dim::Volume));
/// assert_eq!(Dim::Curve.keyword(), "Curve");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Dim {
    Point,
    Curve,
    Surface,
    Volume,
}

impl Dim {
    /// Numeric dimension as the mesher's API expects it.
    pub fn as_u8(self) -> u8 {
        match self {
            Dim::Point => 0,
            Dim::Curve => 1,
            Dim::Surface => 2,
            Dim::Volume => 3,
        }
    }

    /// Inverse of [`Dim::as_u8`].
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Dim::Point),
            1 => Some(Dim::Curve),
            2 => Some(Dim::Surface),
            3 => Some(Dim::Volume),
            _ => None,
        }
    }

    /// Entity keyword used by the `.geo` language.
    pub fn keyword(self) -> &'static str {
        match self {
            Dim::Point => "Point",
            Dim::Curve => "Curve",
            Dim::Surface => "Surface",
            Dim::Volume => "Volume",
        }
    }

    /// Dimension one step higher, as produced by extruding this one.
    pub fn extruded(self) -> Option<Self> {
        Self::from_u8(self.as_u8() + 1)
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A `(dimension, tag)` pair identifying one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DimTag {
    pub dim: Dim,
    pub tag: Tag,
}

impl DimTag {
    pub fn new(dim: Dim, tag: Tag) -> Self {
        Self { dim, tag }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_round_trips_through_u8() {
        for dim in [Dim::Point, Dim::Curve, Dim::Surface, Dim::Volume] {
            assert_eq!(Dim::from_u8(dim.as_u8()), Some(dim));
        }
        assert_eq!(Dim::from_u8(4), None);
    }

    #[test]
    fn test_extruding_a_volume_has_no_dimension() {
        assert_eq!(Dim::Surface.extruded(), Some(Dim::Volume));
        assert_eq!(Dim::Volume.extruded(), None);
    }
}

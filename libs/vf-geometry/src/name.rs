//! Names of the geometries the catalog knows about.

use crate::catalog::{self, GeometrySpec};
use crate::error::GeometryError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the fixed set of meshable geometries.
///
/// Parsing is an exact, case-sensitive match on the CLI spelling.
///
/// # Example
///
/// ```rust
/// use vf_geometry::GeometryName;
///
/// assert_eq!("M5Split".parse::<GeometryName>().unwrap(), GeometryName::M5Split);
/// assert!("m5".parse::<GeometryName>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GeometryName {
    M5,
    LiEtal2020,
    M5Split,
    Trapezoid,
}

impl GeometryName {
    /// Every geometry, in CLI listing order.
    pub const ALL: [GeometryName; 4] = [
        GeometryName::M5,
        GeometryName::LiEtal2020,
        GeometryName::M5Split,
        GeometryName::Trapezoid,
    ];

    pub fn all() -> &'static [GeometryName] {
        &Self::ALL
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GeometryName::M5 => "M5",
            GeometryName::LiEtal2020 => "LiEtal2020",
            GeometryName::M5Split => "M5Split",
            GeometryName::Trapezoid => "Trapezoid",
        }
    }

    /// Catalog record for this geometry.
    pub fn spec(self) -> &'static GeometrySpec {
        match self {
            GeometryName::M5 => &catalog::M5,
            GeometryName::LiEtal2020 => &catalog::LI_ETAL_2020,
            GeometryName::M5Split => &catalog::M5_SPLIT,
            GeometryName::Trapezoid => &catalog::TRAPEZOID,
        }
    }
}

impl FromStr for GeometryName {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| GeometryError::UnknownGeometry(s.to_string()))
    }
}

impl fmt::Display for GeometryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for name in GeometryName::all() {
            assert_eq!(name.as_str().parse::<GeometryName>().unwrap(), *name);
        }
    }

    #[test]
    fn test_unknown_name_reports_input() {
        let err = "Cube".parse::<GeometryName>().unwrap_err();
        assert_eq!(err, GeometryError::UnknownGeometry("Cube".into()));
    }

    #[test]
    fn test_spec_points_back_to_name() {
        for name in GeometryName::all() {
            assert_eq!(name.spec().name, *name);
        }
    }
}

//! # Geometry Catalog
//!
//! One [`GeometrySpec`] per meshable geometry. A record holds:
//! - where the cross-section comes from
//! - which entity tags form each physical region, for the flat and for the
//!   extruded variant
//! - how validation is ordered
//! - how the output file is named
//!
//! Tags of merged CAD models are fixed by the STEP files themselves. After an
//! OpenCASCADE extrusion, the tags follow from the order of the extruded
//! faces. The tables below are literal for both reasons; nothing here is
//! computed except the curve offset in [`SurfaceCurves::extruded_counterparts`].

use crate::error::GeometryError;
use crate::name::GeometryName;
use crate::params::MeshParams;
use serde::Serialize;
use std::path::{Path, PathBuf};
use vf_engine::{Dim, DimTag, Tag};

// =============================================================================
// REGIONS
// =============================================================================

/// Physical region labels written into the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    Body,
    Cover,
    Pressure,
    Fixed,
    SeparationInf,
    SeparationSup,
    SeparationMid,
    VocalFold,
}

impl Region {
    /// Name stored in the mesh file.
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Body => "body",
            Region::Cover => "cover",
            Region::Pressure => "pressure",
            Region::Fixed => "fixed",
            Region::SeparationInf => "separation-inf",
            Region::SeparationSup => "separation-sup",
            Region::SeparationMid => "separation-mid",
            Region::VocalFold => "VocalFold",
        }
    }
}

/// Entities of one dimension assigned to a named region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalGroup {
    pub region: Region,
    pub dim: Dim,
    pub tags: &'static [Tag],
    /// Physical tag to request; `None` lets the engine pick the next free one.
    pub tag: Option<Tag>,
}

const fn group(region: Region, dim: Dim, tags: &'static [Tag]) -> PhysicalGroup {
    PhysicalGroup {
        region,
        dim,
        tags,
        tag: None,
    }
}

/// Ordered physical groups of one geometry variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionTable {
    pub groups: &'static [PhysicalGroup],
}

impl RegionTable {
    pub fn groups(&self) -> &'static [PhysicalGroup] {
        self.groups
    }

    pub fn find(&self, region: Region) -> Option<&'static PhysicalGroup> {
        self.groups.iter().find(|g| g.region == region)
    }

    /// Highest dimension among the groups, i.e. the dimension of the domain.
    pub fn dimension(&self) -> Option<Dim> {
        self.groups.iter().map(|g| g.dim).max()
    }
}

// =============================================================================
// SURFACE CURVES
// =============================================================================

/// Curves bounding the airway-facing surface of a cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceCurves {
    pub medial: &'static [Tag],
    pub inferior: &'static [Tag],
    pub superior: &'static [Tag],
}

impl SurfaceCurves {
    /// Medial, inferior then superior curves: the flat pressure boundary.
    pub fn pressure(&self) -> Vec<Tag> {
        [self.medial, self.inferior, self.superior].concat()
    }

    /// Tags of the faces swept by the pressure curves during extrusion.
    ///
    /// OpenCASCADE numbers those faces after the `offset` faces that existed
    /// before the extrusion.
    pub fn extruded_counterparts(&self, offset: usize) -> Vec<Tag> {
        offset_tags(&self.pressure(), offset)
    }
}

/// Shifts every tag by `offset`.
///
/// # Example
///
/// ```rust
/// use vf_geometry::catalog::offset_tags;
///
/// assert_eq!(offset_tags(&[10, 12], 2), vec![12, 14]);
/// ```
pub fn offset_tags(tags: &[Tag], offset: usize) -> Vec<Tag> {
    let offset = Tag::try_from(offset).unwrap_or(Tag::MAX);
    tags.iter().map(|t| t.saturating_add(offset)).collect()
}

// =============================================================================
// LAYOUT & POLICIES
// =============================================================================

/// Faces to extrude and the region table valid afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtrudedLayout {
    pub surfaces: &'static [Tag],
    pub regions: RegionTable,
}

impl ExtrudedLayout {
    pub fn entities(&self) -> Vec<DimTag> {
        self.surfaces
            .iter()
            .map(|t| DimTag::new(Dim::Surface, *t))
            .collect()
    }

    /// Number of 2-D entities present before extrusion.
    pub fn tag_offset(&self) -> usize {
        self.surfaces.len()
    }
}

/// How the medial angle appears in a STEP file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AngleFormat {
    /// Rounded to the nearest whole degree.
    Rounded,
    /// Must already be a whole number of degrees.
    Integer,
}

/// Where the cross-section comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Source {
    /// `{dir}/{prefix}{angle}{suffix}.STEP`
    Step {
        prefix: &'static str,
        suffix: &'static str,
        angle: AngleFormat,
    },
    /// Built point by point, see [`crate::Trapezoid`].
    Trapezoid,
}

impl Source {
    /// STEP file for `medial_angle`, or `None` for parametric sources.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::path::Path;
    /// use vf_geometry::GeometryName;
    ///
    /// let path = GeometryName::M5.spec().source.step_path(Path::new("stp"), 2.4).unwrap();
    /// assert_eq!(path.unwrap(), Path::new("stp/M5_CB--GA2.STEP"));
    /// ```
    pub fn step_path(&self, dir: &Path, medial_angle: f64) -> Result<Option<PathBuf>, GeometryError> {
        let Source::Step {
            prefix,
            suffix,
            angle,
        } = self
        else {
            return Ok(None);
        };
        let angle = match angle {
            AngleFormat::Rounded => format!("{medial_angle:.0}"),
            AngleFormat::Integer => {
                if !medial_angle.is_finite() || medial_angle.fract() != 0.0 {
                    return Err(GeometryError::NonIntegralAngle(medial_angle));
                }
                format!("{}", medial_angle as i64)
            }
        };
        Ok(Some(dir.join(format!("{prefix}{angle}{suffix}.STEP"))))
    }
}

/// When the extrusion parameters are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExtrusionGuard {
    /// Before the engine is touched.
    Eager,
    /// After the model is reset and the geometry loaded, when choosing the
    /// variant.
    Deferred,
}

/// Output file name template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NamingStyle {
    /// `{prefix}{angle:.2f}--{extrude_string}--{option_string}.msh`
    ExtrusionLayers { prefix: &'static str },
    /// `{prefix}{angle:.2f}--DZ{z:.2f}--{option_string}.msh`
    ExtrusionDepth { prefix: &'static str },
    /// `{prefix}{angle:.2f}{suffix}--{option_string}.msh`
    AngleOnly {
        prefix: &'static str,
        suffix: &'static str,
    },
    /// `{prefix}{angle:.2f}--{option_string}.msh` when flat,
    /// `{prefix}{angle:.2f}--{extrude_string}--{option_string}.msh` when extruded.
    AngleThenExtrusion { prefix: &'static str },
}

/// Flat cross-section or extruded volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Variant {
    Flat,
    Extruded,
}

impl Variant {
    /// Dimension the mesher is asked to generate.
    pub fn mesh_dim(self) -> Dim {
        match self {
            Variant::Flat => Dim::Surface,
            Variant::Extruded => Dim::Volume,
        }
    }
}

// =============================================================================
// GEOMETRY SPEC
// =============================================================================

/// Complete description of one meshable geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometrySpec {
    pub name: GeometryName,
    pub source: Source,
    pub flat: RegionTable,
    pub extruded: Option<ExtrudedLayout>,
    pub curves: Option<SurfaceCurves>,
    /// Refine the mesh towards the medial curves.
    pub refine_medial: bool,
    pub guard: ExtrusionGuard,
    pub naming: NamingStyle,
    /// Geometry script written before meshing.
    pub geometry_snapshot: Option<&'static str>,
}

impl GeometrySpec {
    /// Picks the variant `params` ask for, validating them on the way.
    pub fn variant(&self, params: &MeshParams) -> Result<Variant, GeometryError> {
        params.check_extrusion_depth()?;
        if !params.is_extruded() {
            return Ok(Variant::Flat);
        }
        params.validate_layers()?;
        if self.extruded.is_none() {
            return Err(GeometryError::ExtrusionUnsupported {
                geometry: self.name.as_str(),
            });
        }
        Ok(Variant::Extruded)
    }

    /// Validation that runs before the engine is touched. Deferred
    /// geometries validate in [`GeometrySpec::variant`] instead.
    pub fn check_extrusion(&self, params: &MeshParams) -> Result<(), GeometryError> {
        match self.guard {
            ExtrusionGuard::Eager => self.variant(params).map(|_| ()),
            ExtrusionGuard::Deferred => Ok(()),
        }
    }

    /// Region table in effect for `variant`.
    pub fn regions(&self, variant: Variant) -> &RegionTable {
        match (variant, &self.extruded) {
            (Variant::Extruded, Some(layout)) => &layout.regions,
            _ => &self.flat,
        }
    }

    /// Medial curves to refine towards, if this geometry is refined.
    pub fn refinement_curves(&self) -> Option<&'static [Tag]> {
        match (self.refine_medial, self.curves) {
            (true, Some(curves)) => Some(curves.medial),
            _ => None,
        }
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// M5 cover/body model, merged from `M5_CB--GA{angle}.STEP`.
pub static M5: GeometrySpec = GeometrySpec {
    name: GeometryName::M5,
    source: Source::Step {
        prefix: "M5_CB--GA",
        suffix: "",
        angle: AngleFormat::Rounded,
    },
    flat: RegionTable {
        groups: &[
            group(Region::Body, Dim::Surface, &[2]),
            group(Region::Cover, Dim::Surface, &[1]),
            group(Region::Pressure, Dim::Curve, &[10, 12, 11, 9, 8]),
            group(Region::Fixed, Dim::Curve, &[13, 7, 1]),
            group(Region::SeparationInf, Dim::Point, &[10]),
            group(Region::SeparationSup, Dim::Point, &[9]),
        ],
    },
    extruded: Some(ExtrudedLayout {
        surfaces: &[1, 2],
        regions: RegionTable {
            groups: &[
                group(Region::Body, Dim::Volume, &[2]),
                group(Region::Cover, Dim::Volume, &[1]),
                group(Region::Pressure, Dim::Surface, &[14, 13, 12, 11, 10]),
                // anterior, posterior, lateral
                group(Region::Fixed, Dim::Surface, &[15, 17, 2, 1, 3, 16, 9]),
                group(Region::SeparationInf, Dim::Curve, &[31]),
                group(Region::SeparationSup, Dim::Curve, &[29]),
            ],
        },
    }),
    curves: Some(SurfaceCurves {
        medial: &[10],
        inferior: &[12, 11],
        superior: &[9, 8],
    }),
    refine_medial: true,
    guard: ExtrusionGuard::Eager,
    naming: NamingStyle::ExtrusionLayers { prefix: "M5_BC--GA" },
    geometry_snapshot: None,
};

/// Li et al. (2020) single-layer model, merged from `LiEtal2020--GA{angle}.STEP`.
pub static LI_ETAL_2020: GeometrySpec = GeometrySpec {
    name: GeometryName::LiEtal2020,
    source: Source::Step {
        prefix: "LiEtal2020--GA",
        suffix: "",
        angle: AngleFormat::Integer,
    },
    flat: RegionTable {
        groups: &[
            group(Region::Body, Dim::Surface, &[1]),
            group(Region::Pressure, Dim::Curve, &[1, 6, 5, 4, 3]),
            group(Region::Fixed, Dim::Curve, &[2]),
            group(Region::SeparationInf, Dim::Point, &[5]),
            group(Region::SeparationSup, Dim::Point, &[4]),
        ],
    },
    extruded: Some(ExtrudedLayout {
        surfaces: &[1],
        regions: RegionTable {
            groups: &[
                group(Region::Body, Dim::Volume, &[1]),
                group(Region::Pressure, Dim::Surface, &[2, 7, 6, 5, 4]),
                group(Region::Fixed, Dim::Surface, &[3]),
                group(Region::SeparationInf, Dim::Curve, &[14]),
                group(Region::SeparationSup, Dim::Curve, &[12]),
            ],
        },
    }),
    curves: None,
    refine_medial: false,
    guard: ExtrusionGuard::Deferred,
    naming: NamingStyle::ExtrusionDepth {
        prefix: "LiEtal2020--GA",
    },
    geometry_snapshot: None,
};

/// M5 with the cover split at the medial separation point.
pub static M5_SPLIT: GeometrySpec = GeometrySpec {
    name: GeometryName::M5Split,
    source: Source::Step {
        prefix: "M5_CB_GA",
        suffix: "_split",
        angle: AngleFormat::Integer,
    },
    flat: RegionTable {
        groups: &[
            group(Region::Body, Dim::Surface, &[3]),
            group(Region::Cover, Dim::Surface, &[1, 2]),
            group(Region::Pressure, Dim::Curve, &[6, 5, 4, 3, 15, 14]),
            group(Region::Fixed, Dim::Curve, &[13, 7, 16]),
            group(Region::SeparationInf, Dim::Point, &[4]),
            group(Region::SeparationMid, Dim::Point, &[3]),
            group(Region::SeparationSup, Dim::Point, &[14]),
        ],
    },
    extruded: None,
    curves: None,
    refine_medial: false,
    guard: ExtrusionGuard::Eager,
    naming: NamingStyle::AngleOnly {
        prefix: "M5_CB_GA",
        suffix: "_split",
    },
    geometry_snapshot: None,
};

/// Synthetic quadrilateral cross-section, see [`crate::Trapezoid`].
pub static TRAPEZOID: GeometrySpec = GeometrySpec {
    name: GeometryName::Trapezoid,
    source: Source::Trapezoid,
    flat: RegionTable {
        groups: &[PhysicalGroup {
            region: Region::VocalFold,
            dim: Dim::Surface,
            tags: &[1],
            tag: Some(1),
        }],
    },
    extruded: Some(ExtrudedLayout {
        surfaces: &[1],
        regions: RegionTable {
            groups: &[PhysicalGroup {
                region: Region::VocalFold,
                dim: Dim::Volume,
                tags: &[1],
                tag: Some(1),
            }],
        },
    }),
    curves: None,
    refine_medial: false,
    guard: ExtrusionGuard::Eager,
    naming: NamingStyle::AngleThenExtrusion {
        prefix: "Trapezoid",
    },
    geometry_snapshot: Some("Trapezoid.geo_unrolled"),
};

#[cfg(test)]
mod tests;

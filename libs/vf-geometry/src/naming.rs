//! # Output File Naming
//!
//! Mesh files are named after the geometry and every parameter that shaped
//! them, so a directory of meshes documents itself.
//!
//! Exponent notation follows the `printf`-style `%.Ne` convention (signed,
//! at least two exponent digits), which is what existing mesh collections
//! are named with: `1.0` → `1.00e+00`.

use crate::catalog::NamingStyle;
use crate::params::MeshParams;

/// Formats `value` in `%.{precision}e` style.
///
/// # Example
///
/// ```rust
/// use vf_geometry::naming::sci_notation;
///
/// assert_eq!(sci_notation(1.0, 2), "1.00e+00");
/// assert_eq!(sci_notation(0.0025, 2), "2.50e-03");
/// assert_eq!(sci_notation(-12345.0, 1), "-1.2e+04");
/// ```
pub fn sci_notation(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return formatted;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// `CL{factor:.2e}`, the mesh-size-factor tag.
pub fn option_string(mesh_size_factor: f64) -> String {
    format!("CL{}", sci_notation(mesh_size_factor, 2))
}

/// `DZ{z:.2f}` when flat, `DZ{z:.2e}--NZ{n}` when extruded.
///
/// # Example
///
/// ```rust
/// use vf_geometry::naming::extrude_string;
///
/// assert_eq!(extrude_string(0.0, 1), "DZ0.00");
/// assert_eq!(extrude_string(0.5, 4), "DZ5.00e-01--NZ4");
/// ```
pub fn extrude_string(z_extrude: f64, n_extrude: u32) -> String {
    if z_extrude == 0.0 {
        format!("DZ{z_extrude:.2}")
    } else {
        format!("DZ{}--NZ{n_extrude}", sci_notation(z_extrude, 2))
    }
}

/// Mesh file name for `params` under `style`.
///
/// # Example
///
/// ```rust
/// use vf_geometry::{naming::output_file_name, GeometryName, MeshParams};
///
/// let name = output_file_name(&GeometryName::M5.spec().naming, &MeshParams::default(), 1.0);
/// assert_eq!(name, "M5_BC--GA0.00--DZ0.00--CL1.00e+00.msh");
/// ```
pub fn output_file_name(style: &NamingStyle, params: &MeshParams, mesh_size_factor: f64) -> String {
    let angle = params.medial_angle;
    let option = option_string(mesh_size_factor);
    match style {
        NamingStyle::ExtrusionLayers { prefix } => format!(
            "{prefix}{angle:.2}--{}--{option}.msh",
            extrude_string(params.z_extrude, params.n_extrude)
        ),
        NamingStyle::ExtrusionDepth { prefix } => {
            format!("{prefix}{angle:.2}--DZ{:.2}--{option}.msh", params.z_extrude)
        }
        NamingStyle::AngleOnly { prefix, suffix } => {
            format!("{prefix}{angle:.2}{suffix}--{option}.msh")
        }
        NamingStyle::AngleThenExtrusion { prefix } if params.is_extruded() => format!(
            "{prefix}{angle:.2}--{}--{option}.msh",
            extrude_string(params.z_extrude, params.n_extrude)
        ),
        NamingStyle::AngleThenExtrusion { prefix } => format!("{prefix}{angle:.2}--{option}.msh"),
    }
}

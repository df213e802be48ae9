//! Quad-to-triangle split for one grid cell

use glam::DVec3;

use crate::geometry::{CylinderParams, column_angle, polar_to_cartesian};
use crate::types::Triangle;

/// Triangulate the surface patch of one grid cell.
///
/// `corners` holds the intensities in the order top-left, top-right,
/// bottom-right, bottom-left, i.e. at (col, row), (col+1, row),
/// (col+1, row+1), (col, row+1). The row index is used directly as z.
///
/// The quad is always split along the corner 2 -> corner 4 diagonal:
/// `(c1, c2, c4)` then `(c2, c3, c4)`. With columns advancing
/// counter-clockwise this orients both facets away from the axis.
pub fn triangulate_cell(
    params: &CylinderParams,
    corners: [f64; 4],
    col: f64,
    row: f64,
    angle_per_col: f64,
) -> [Triangle; 2] {
    let [c1, c2, c3, c4] = corners;
    let left = column_angle(col, angle_per_col);
    let right = column_angle(col + 1.0, angle_per_col);

    let v1 = surface_point(params, c1, left, row);
    let v2 = surface_point(params, c2, right, row);
    let v3 = surface_point(params, c3, right, row + 1.0);
    let v4 = surface_point(params, c4, left, row + 1.0);

    [Triangle::new(v1, v2, v4), Triangle::new(v2, v3, v4)]
}

/// Point on the relief surface for one sample
pub(crate) fn surface_point(params: &CylinderParams, intensity: f64, angle: f64, z: f64) -> DVec3 {
    polar_to_cartesian(params.effective_radius(intensity), angle).extend(z)
}

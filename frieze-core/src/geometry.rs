//! Coordinate mapping and radius modulation
//!
//! Columns map to angles around the cylinder axis (z), intensities map to a
//! radial offset from the inner radius.

use glam::DVec2;
use std::f64::consts::TAU;

use crate::error::FriezeError;

/// Intensity of a fully white sample. Samples at this value sit exactly on
/// the inner radius.
pub const MAX_INTENSITY: f64 = 255.0;

/// Convert polar coordinates to a point in the xy plane.
///
/// No validation: a negative radius (offset larger than the inner radius)
/// is carried through unchanged.
pub fn polar_to_cartesian(radius: f64, angle: f64) -> DVec2 {
    DVec2::new(radius * angle.cos(), radius * angle.sin())
}

/// Angle covered by one pixel column when `width` columns span a full turn
pub fn angle_per_column(width: u32) -> f64 {
    TAU / width as f64
}

/// Angle of column `col`. Column `width` lands on a full turn and is the same
/// direction as column 0.
pub fn column_angle(col: f64, angle_per_col: f64) -> f64 {
    col * angle_per_col
}

/// Radii of the cylinder the relief is cut into
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderParams {
    inner_radius: f64,
    outer_radius: f64,
}

impl CylinderParams {
    /// Create validated cylinder parameters.
    ///
    /// Both radii must be finite and positive with `outer > inner`.
    pub fn new(inner_radius: f64, outer_radius: f64) -> Result<Self, FriezeError> {
        let valid = inner_radius.is_finite()
            && outer_radius.is_finite()
            && inner_radius > 0.0
            && outer_radius > inner_radius;
        if !valid {
            return Err(FriezeError::InvalidRadii {
                inner: inner_radius,
                outer: outer_radius,
            });
        }
        Ok(Self {
            inner_radius,
            outer_radius,
        })
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Radial depth available to the relief (`outer - inner`)
    pub fn span(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// Offset added to the inner radius for a sample.
    ///
    /// Linear in intensity: 255 gives 0, 0 gives `-span`. Out-of-range
    /// intensities are not clamped.
    pub fn radius_offset(&self, intensity: f64) -> f64 {
        ((intensity - MAX_INTENSITY) / MAX_INTENSITY) * self.span()
    }

    /// Distance from the axis of the surface at a sample
    pub fn effective_radius(&self, intensity: f64) -> f64 {
        self.inner_radius + self.radius_offset(intensity)
    }
}

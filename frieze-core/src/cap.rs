//! End-cap fans closing the two flat ends of the cylinder

use glam::DVec3;

use crate::cell::surface_point;
use crate::geometry::{CylinderParams, angle_per_column, column_angle};
use crate::grid::PixelGrid;
use crate::types::Triangle;

/// Which end of the cylinder a fan closes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndCap {
    /// z = 0, the first pixel row
    Bottom,
    /// z = H - 1, the last pixel row
    Top,
}

impl EndCap {
    /// Height of the cap plane for a grid of `grid_height` rows
    pub fn height(self, grid_height: u32) -> f64 {
        match self {
            EndCap::Bottom => 0.0,
            EndCap::Top => grid_height.saturating_sub(1) as f64,
        }
    }
}

/// Where a cap reads the intensities that set its rim radii
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CapSampling {
    /// Both caps read row 0, whichever end they close
    #[default]
    FirstRow,
    /// Each cap reads the row at its own end (0 or H - 1)
    CappedRow,
}

impl CapSampling {
    /// Grid row sampled for `end`
    pub fn source_row(self, end: EndCap, grid_height: u32) -> u32 {
        match (self, end) {
            (CapSampling::FirstRow, _) | (CapSampling::CappedRow, EndCap::Bottom) => 0,
            (CapSampling::CappedRow, EndCap::Top) => grid_height.saturating_sub(1),
        }
    }
}

/// Cap generation switches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapOptions {
    pub sampling: CapSampling,
    /// Emit the last main fan triangle a second time before the closing
    /// wedge. Produces one duplicate facet per cap.
    pub repeat_last_fan_triangle: bool,
}

impl Default for CapOptions {
    fn default() -> Self {
        Self {
            sampling: CapSampling::FirstRow,
            repeat_last_fan_triangle: true,
        }
    }
}

/// Number of triangles in one cap of a grid `width` columns wide
pub fn cap_triangle_count(width: u32, options: &CapOptions) -> usize {
    if width < 2 {
        return 0;
    }
    let fan = width as usize - 1;
    let repeat = usize::from(options.repeat_last_fan_triangle);
    fan + repeat + 1
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Fan,
    Repeat,
    Wedge,
    Done,
}

/// Lazy stream of one cap's triangles.
///
/// Emits a wedge per adjacent column pair (0..W-1), the optional repeat of
/// the last one, then the wedge from column W-1 back to angle 0.
/// The top cap faces +z and the bottom cap faces -z.
pub struct EndCapFan<'a, G: PixelGrid> {
    grid: &'a G,
    params: CylinderParams,
    end: EndCap,
    options: CapOptions,
    angle_per_col: f64,
    z: f64,
    source_row: u32,
    col: u32,
    stage: Stage,
    last: Option<Triangle>,
}

impl<'a, G: PixelGrid> EndCapFan<'a, G> {
    pub fn new(grid: &'a G, params: CylinderParams, end: EndCap, options: CapOptions) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let stage = if width < 2 || height < 2 {
            Stage::Done
        } else {
            Stage::Fan
        };
        Self {
            grid,
            params,
            end,
            options,
            angle_per_col: angle_per_column(width.max(1)),
            z: end.height(height),
            source_row: options.sampling.source_row(end, height),
            col: 0,
            stage,
            last: None,
        }
    }

    /// Fan triangle between rim samples at `from_col` and `to_col`, the
    /// second placed at `to_angle`
    fn wedge(&self, from_col: u32, to_col: u32, to_angle: f64) -> Triangle {
        let from = surface_point(
            &self.params,
            self.grid.intensity(from_col, self.source_row),
            column_angle(from_col as f64, self.angle_per_col),
            self.z,
        );
        let to = surface_point(
            &self.params,
            self.grid.intensity(to_col, self.source_row),
            to_angle,
            self.z,
        );
        let axis = DVec3::new(0.0, 0.0, self.z);
        match self.end {
            EndCap::Top => Triangle::new(from, to, axis),
            EndCap::Bottom => Triangle::new(to, from, axis),
        }
    }
}

impl<G: PixelGrid> Iterator for EndCapFan<'_, G> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        let width = self.grid.width();
        loop {
            match self.stage {
                Stage::Fan => {
                    if self.col + 1 < width {
                        let col = self.col;
                        let angle = column_angle((col + 1) as f64, self.angle_per_col);
                        let tri = self.wedge(col, col + 1, angle);
                        self.col += 1;
                        self.last = Some(tri);
                        return Some(tri);
                    }
                    self.stage = Stage::Repeat;
                }
                Stage::Repeat => {
                    self.stage = Stage::Wedge;
                    if self.options.repeat_last_fan_triangle {
                        if let Some(tri) = self.last {
                            return Some(tri);
                        }
                    }
                }
                Stage::Wedge => {
                    self.stage = Stage::Done;
                    return Some(self.wedge(width - 1, 0, 0.0));
                }
                Stage::Done => return None,
            }
        }
    }
}

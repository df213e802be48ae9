//! Surface sweep over the pixel grid
//!
//! Walks every interior cell column by column, then one seam pass pairing
//! the last column with the first to close the band.

use crate::cell::triangulate_cell;
use crate::geometry::{CylinderParams, angle_per_column};
use crate::grid::PixelGrid;
use crate::types::Triangle;

/// Number of triangles in the band of a `width` x `height` grid:
/// two per interior cell plus two per seam cell.
pub fn band_triangle_count(width: u32, height: u32) -> usize {
    if width < 2 || height < 2 {
        return 0;
    }
    let bands = height as usize - 1;
    2 * ((width as usize - 1) * bands + bands)
}

/// Lazy stream of band triangles.
///
/// Order: for column 0..W-1, every row band 0..H-1; then the seam cells
/// (column W-1 paired with column 0) for each row band. The seam's wrapped
/// corner takes its angle from column W (a full turn) and its intensity
/// from column 0.
pub struct SurfaceSweep<'a, G: PixelGrid> {
    grid: &'a G,
    params: CylinderParams,
    angle_per_col: f64,
    col: u32,
    row: u32,
    pending: Option<Triangle>,
}

impl<'a, G: PixelGrid> SurfaceSweep<'a, G> {
    /// Start a sweep. Grids smaller than 2x2 yield nothing.
    pub fn new(grid: &'a G, params: CylinderParams) -> Self {
        let width = grid.width();
        let done = width < 2 || grid.height() < 2;
        Self {
            grid,
            params,
            angle_per_col: angle_per_column(width.max(1)),
            col: if done { width } else { 0 },
            row: 0,
            pending: None,
        }
    }

    fn next_cell(&mut self) -> Option<[Triangle; 2]> {
        let width = self.grid.width();
        if self.col >= width {
            return None;
        }
        let bands = self.grid.height() - 1;

        let (col, row) = (self.col, self.row);
        // Last column is the seam: its right-hand neighbour is column 0
        let right = if col + 1 == width { 0 } else { col + 1 };
        let corners = [
            self.grid.intensity(col, row),
            self.grid.intensity(right, row),
            self.grid.intensity(right, row + 1),
            self.grid.intensity(col, row + 1),
        ];

        self.row += 1;
        if self.row == bands {
            self.row = 0;
            self.col += 1;
        }

        Some(triangulate_cell(
            &self.params,
            corners,
            col as f64,
            row as f64,
            self.angle_per_col,
        ))
    }
}

impl<G: PixelGrid> Iterator for SurfaceSweep<'_, G> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        if let Some(tri) = self.pending.take() {
            return Some(tri);
        }
        let [first, second] = self.next_cell()?;
        self.pending = Some(second);
        Some(first)
    }
}

//! Frieze assembly: band plus both caps, streamed to a mesh writer

use crate::cap::{CapOptions, EndCap, EndCapFan, cap_triangle_count};
use crate::error::FriezeError;
use crate::geometry::CylinderParams;
use crate::grid::PixelGrid;
use crate::sweep::{SurfaceSweep, band_triangle_count};
use crate::types::Triangle;

/// Sink for a triangle stream (STL and similar formats).
///
/// Calls arrive as one `write_header`, every triangle in order, then one
/// `write_trailer`. Framing and per-facet formatting belong to the writer.
pub trait MeshWriter {
    /// Start the mesh. `triangle_count` is exact.
    fn write_header(&mut self, triangle_count: usize) -> std::io::Result<()>;

    /// Append one facet
    fn write_triangle(&mut self, triangle: &Triangle) -> std::io::Result<()>;

    /// Finish the mesh
    fn write_trailer(&mut self) -> std::io::Result<()>;
}

impl<M: MeshWriter + ?Sized> MeshWriter for &mut M {
    fn write_header(&mut self, triangle_count: usize) -> std::io::Result<()> {
        (**self).write_header(triangle_count)
    }

    fn write_triangle(&mut self, triangle: &Triangle) -> std::io::Result<()> {
        (**self).write_triangle(triangle)
    }

    fn write_trailer(&mut self) -> std::io::Result<()> {
        (**self).write_trailer()
    }
}

/// A validated frieze over a borrowed pixel grid
pub struct FriezeMesh<'a, G: PixelGrid> {
    grid: &'a G,
    params: CylinderParams,
    caps: CapOptions,
}

impl<'a, G: PixelGrid> FriezeMesh<'a, G> {
    /// Check the grid can form at least one cell.
    ///
    /// Nothing is emitted for a rejected grid.
    pub fn new(grid: &'a G, params: CylinderParams, caps: CapOptions) -> Result<Self, FriezeError> {
        let (width, height) = (grid.width(), grid.height());
        if width < 2 || height < 2 {
            return Err(FriezeError::GridTooSmall { width, height });
        }
        tracing::debug!(
            "Frieze grid {}x{}, radii {}..{}, caps {:?}",
            width,
            height,
            params.inner_radius(),
            params.outer_radius(),
            caps
        );
        Ok(Self { grid, params, caps })
    }

    pub fn params(&self) -> &CylinderParams {
        &self.params
    }

    pub fn cap_options(&self) -> &CapOptions {
        &self.caps
    }

    /// Band triangles only
    pub fn surface(&self) -> SurfaceSweep<'a, G> {
        SurfaceSweep::new(self.grid, self.params)
    }

    /// Fan for one end
    pub fn end_cap(&self, end: EndCap) -> EndCapFan<'a, G> {
        EndCapFan::new(self.grid, self.params, end, self.caps)
    }

    /// Full closed mesh: band, bottom cap, top cap
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> {
        self.surface()
            .chain(self.end_cap(EndCap::Bottom))
            .chain(self.end_cap(EndCap::Top))
    }

    /// Exact length of [`Self::triangles`]
    pub fn triangle_count(&self) -> usize {
        band_triangle_count(self.grid.width(), self.grid.height())
            + 2 * cap_triangle_count(self.grid.width(), &self.caps)
    }

    /// Stream the mesh into `writer`, returning the number of facets written
    pub fn write_to<M: MeshWriter>(&self, mut writer: M) -> Result<usize, FriezeError> {
        let expected = self.triangle_count();
        writer.write_header(expected)?;

        let mut written = 0;
        for tri in self.triangles() {
            writer.write_triangle(&tri)?;
            written += 1;
        }
        writer.write_trailer()?;

        debug_assert_eq!(written, expected);
        tracing::info!("Wrote {} triangles", written);
        Ok(written)
    }
}

//! frieze-core
//!
//! Turns a grayscale pixel grid into the triangles of a cylindrical relief.
//! The image wraps once around the cylinder; each intensity pulls the surface
//! in from the inner radius. The band is closed at the angular seam and both
//! ends are capped with a triangle fan to the axis.
//!
//! Everything here is pure and synchronous. Triangles are produced lazily and
//! handed to a [`MeshWriter`], so the full mesh is never held in memory.

pub mod cap;
pub mod cell;
pub mod error;
pub mod frieze;
pub mod geometry;
pub mod grid;
pub mod sweep;
pub mod types;

pub use cap::{CapOptions, CapSampling, EndCap, EndCapFan, cap_triangle_count};
pub use cell::triangulate_cell;
pub use error::FriezeError;
pub use frieze::{FriezeMesh, MeshWriter};
pub use geometry::{
    CylinderParams, MAX_INTENSITY, angle_per_column, column_angle, polar_to_cartesian,
};
pub use grid::{IntensityGrid, PixelGrid};
pub use sweep::{SurfaceSweep, band_triangle_count};
pub use types::{Triangle, Vertex};

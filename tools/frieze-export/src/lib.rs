//! frieze-export library
//!
//! Loads a grayscale image, wraps it around a cylinder with `frieze-core`
//! and streams the result to an STL file.

pub mod config;
pub mod convert;
pub mod grayscale;
pub mod stl;

pub use config::{CapsSection, FriezeConfig};
pub use convert::{ConversionSummary, convert};
pub use grayscale::{GrayscaleImage, load_grayscale};
pub use stl::{AsciiStlWriter, BinaryStlWriter, StlFormat};

//! Image -> STL conversion pipeline

use anyhow::{Context, Result};
use frieze_core::FriezeMesh;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::FriezeConfig;
use crate::grayscale::load_grayscale;
use crate::stl::{AsciiStlWriter, BinaryStlWriter, StlFormat};

/// Result of a finished conversion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionSummary {
    pub width: u32,
    pub height: u32,
    pub triangle_count: usize,
    pub output: PathBuf,
}

/// Convert the configured image to an STL frieze.
///
/// Radii and image size are checked before the output file is created. A
/// write failure part way through leaves an incomplete file behind and
/// returns an error.
pub fn convert(config: &FriezeConfig) -> Result<ConversionSummary> {
    let params = config.validate()?;
    let image = load_grayscale(&config.image)?;
    let (width, height) = image.dimensions();

    let mesh = FriezeMesh::new(&image, params, config.cap_options())
        .with_context(|| format!("Cannot build frieze from {}", config.image.display()))?;

    let file = File::create(&config.output)
        .with_context(|| format!("Failed to create output: {}", config.output.display()))?;
    let out = BufWriter::new(file);
    let name = config.solid_name();

    let written = match config.format {
        StlFormat::Ascii => mesh.write_to(AsciiStlWriter::new(out, &name)),
        StlFormat::Binary => mesh.write_to(BinaryStlWriter::new(out, &name)),
    }
    .with_context(|| format!("Failed to write {}", config.output.display()))?;

    tracing::info!(
        "Converted {}x{} image: {} triangles, format={:?}, radii {}..{}",
        width,
        height,
        written,
        config.format,
        params.inner_radius(),
        params.outer_radius()
    );

    Ok(ConversionSummary {
        width,
        height,
        triangle_count: written,
        output: config.output.clone(),
    })
}

//! frieze.toml parsing
//!
//! One manifest describes one conversion. Example:
//!
//! ```toml
//! image = "face.png"
//! output = "frieze.stl"
//! inner_radius = 50.0
//! outer_radius = 55.0
//! format = "binary"
//!
//! [caps]
//! sampling = "capped-row"
//! repeat_last_fan_triangle = false
//! ```

use anyhow::{Context, Result};
use frieze_core::{CapOptions, CapSampling, CylinderParams};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::stl::StlFormat;

/// Conversion settings
#[derive(Clone, Debug, Deserialize)]
pub struct FriezeConfig {
    /// Source image (any format the image loader decodes)
    pub image: PathBuf,
    /// Destination mesh file
    pub output: PathBuf,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Default: ascii
    #[serde(default)]
    pub format: StlFormat,
    #[serde(default)]
    pub caps: CapsSection,
}

/// End-cap settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CapsSection {
    /// Row the caps read their rim radii from.
    /// Default: first-row (both caps read row 0)
    #[serde(default)]
    pub sampling: SamplingMode,

    /// Emit the last fan triangle of each cap twice.
    /// Default: true
    #[serde(default = "default_repeat_last_fan_triangle")]
    pub repeat_last_fan_triangle: bool,
}

fn default_repeat_last_fan_triangle() -> bool {
    true
}

impl Default for CapsSection {
    fn default() -> Self {
        Self {
            sampling: SamplingMode::default(),
            repeat_last_fan_triangle: default_repeat_last_fan_triangle(),
        }
    }
}

/// Cap sampling as written in manifests and on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SamplingMode {
    /// Both caps read row 0
    #[default]
    FirstRow,
    /// Each cap reads the row at its own end
    CappedRow,
}

impl From<SamplingMode> for CapSampling {
    fn from(mode: SamplingMode) -> Self {
        match mode {
            SamplingMode::FirstRow => CapSampling::FirstRow,
            SamplingMode::CappedRow => CapSampling::CappedRow,
        }
    }
}

impl FriezeConfig {
    /// Load a manifest from file. Relative paths inside it resolve against
    /// the manifest's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.image = base.join(&config.image);
            config.output = base.join(&config.output);
        }
        Ok(config)
    }

    /// Parse a manifest from a string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse frieze.toml")
    }

    /// Check the radii, returning the cylinder they describe
    pub fn validate(&self) -> Result<CylinderParams> {
        CylinderParams::new(self.inner_radius, self.outer_radius)
            .context("Invalid radii in frieze config")
    }

    pub fn cap_options(&self) -> CapOptions {
        CapOptions {
            sampling: self.caps.sampling.into(),
            repeat_last_fan_triangle: self.caps.repeat_last_fan_triangle,
        }
    }

    /// Name written into the STL header (image file stem)
    pub fn solid_name(&self) -> String {
        self.image
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("frieze")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_minimal() {
        let config = FriezeConfig::parse(
            r#"
image = "face2.png"
output = "frieze.stl"
inner_radius = 50.0
outer_radius = 55.0
"#,
        )
        .unwrap();

        assert_eq!(config.image, PathBuf::from("face2.png"));
        assert_eq!(config.output, PathBuf::from("frieze.stl"));
        assert_eq!(config.format, StlFormat::Ascii);
        assert_eq!(config.caps, CapsSection::default());
        assert_eq!(config.cap_options(), CapOptions::default());
        assert_eq!(config.solid_name(), "face2");

        let params = config.validate().unwrap();
        assert_eq!(params.span(), 5.0);
    }

    #[test]
    fn test_config_full() {
        let config = FriezeConfig::parse(
            r#"
image = "art/face.jpg"
output = "out/die.stl"
inner_radius = 20
outer_radius = 21.5
format = "binary"

[caps]
sampling = "capped-row"
repeat_last_fan_triangle = false
"#,
        )
        .unwrap();

        assert_eq!(config.format, StlFormat::Binary);
        assert_eq!(config.inner_radius, 20.0);
        let caps = config.cap_options();
        assert_eq!(caps.sampling, CapSampling::CappedRow);
        assert!(!caps.repeat_last_fan_triangle);
    }

    #[test]
    fn test_config_missing_radius() {
        let result = FriezeConfig::parse(
            r#"
image = "face.png"
output = "frieze.stl"
inner_radius = 50.0
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_invalid_format() {
        let result = FriezeConfig::parse(
            r#"
image = "face.png"
output = "frieze.stl"
inner_radius = 50.0
outer_radius = 55.0
format = "obj"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_radii() {
        let config = FriezeConfig::parse(
            r#"
image = "face.png"
output = "frieze.stl"
inner_radius = 55.0
outer_radius = 50.0
"#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(format!("{err:#}").contains("invalid cylinder radii"));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let manifest = dir.path().join("frieze.toml");
        std::fs::write(
            &manifest,
            "image = \"face.png\"\noutput = \"frieze.stl\"\ninner_radius = 1.0\nouter_radius = 2.0\n",
        )
        .unwrap();

        let config = FriezeConfig::load(&manifest).unwrap();
        assert_eq!(config.image, dir.path().join("face.png"));
        assert_eq!(config.output, dir.path().join("frieze.stl"));
    }
}

//! frieze-export - cylindrical relief exporter
//!
//! Wraps a grayscale image around a cylinder and writes the relief as an
//! STL mesh.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use frieze_export::config::{CapsSection, SamplingMode};
use frieze_export::{FriezeConfig, StlFormat, convert};

#[derive(Parser)]
#[command(name = "frieze-export")]
#[command(about = "Cylindrical relief (frieze) STL exporter")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert using a manifest file
    Build {
        /// Path to frieze.toml manifest
        #[arg(default_value = "frieze.toml")]
        manifest: PathBuf,

        /// Output file (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate manifest without converting
    Check {
        /// Path to frieze.toml manifest
        #[arg(default_value = "frieze.toml")]
        manifest: PathBuf,
    },

    /// Convert a single image
    Convert {
        /// Input PNG/JPG file
        input: PathBuf,

        /// Output .stl file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Inner cylinder radius (white pixels)
        #[arg(long)]
        inner: f64,

        /// Outer cylinder radius
        #[arg(long)]
        outer: f64,

        /// STL encoding
        #[arg(long, value_enum, default_value_t = StlFormat::Ascii)]
        format: StlFormat,

        /// Row the end caps read their rim radii from
        #[arg(long, value_enum, default_value_t = SamplingMode::FirstRow)]
        cap_sampling: SamplingMode,

        /// Do not repeat the last fan triangle of each cap
        #[arg(long)]
        no_repeat_fan: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { manifest, output } => {
            tracing::info!("Building frieze from {:?}", manifest);
            let mut config = FriezeConfig::load(&manifest)?;
            if let Some(output) = output {
                config.output = output;
            }
            let summary = convert(&config)?;
            tracing::info!("Wrote {:?}", summary.output);
        }

        Commands::Check { manifest } => {
            tracing::info!("Checking manifest {:?}", manifest);
            let config = FriezeConfig::load(&manifest)?;
            config.validate()?;
            if !config.image.exists() {
                anyhow::bail!("Image not found: {:?}", config.image);
            }
            tracing::info!("Manifest is valid!");
        }

        Commands::Convert {
            input,
            output,
            inner,
            outer,
            format,
            cap_sampling,
            no_repeat_fan,
        } => {
            let output = output.unwrap_or_else(|| input.with_extension("stl"));
            tracing::info!("Converting {:?} -> {:?}", input, output);
            let config = FriezeConfig {
                image: input,
                output,
                inner_radius: inner,
                outer_radius: outer,
                format,
                caps: CapsSection {
                    sampling: cap_sampling,
                    repeat_last_fan_triangle: !no_repeat_fan,
                },
            };
            convert(&config)?;
            tracing::info!("Done!");
        }
    }

    Ok(())
}

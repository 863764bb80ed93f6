//! Headless front end: frames a box and reports the resulting camera.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cubeview::{FitResult, Options, ViewCommand, ViewerContext};
use glam::Vec3;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "cubeview")]
#[command(about = "Orbit camera framing for a single box")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit the camera to a box and print the framing as JSON
    Fit {
        /// Box dimensions along X, Y and Z
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], default_values_t = [1.0, 1.0, 1.0])]
        size: Vec<f32>,

        /// TOML options file
        #[arg(short, long)]
        options: Option<PathBuf>,

        /// Viewport width in pixels
        #[arg(long, default_value = "800")]
        width: u32,

        /// Viewport height in pixels
        #[arg(long, default_value = "600")]
        height: u32,
    },

    /// Print the JSON schema of the options file
    Schema,

    /// Print the default options as TOML, or write them to a file
    Defaults {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the option presets (`*.toml`) in a directory
    Presets {
        #[arg(default_value = "presets")]
        dir: PathBuf,
    },
}

#[derive(Serialize)]
struct FitReport {
    scale: [f32; 3],
    eye: [f32; 3],
    target: [f32; 3],
    fit: FitResult,
}

fn load_options(path: Option<&PathBuf>) -> Result<Options> {
    match path {
        Some(path) => Options::load(path)
            .with_context(|| format!("loading options from {}", path.display())),
        None => Ok(Options::default()),
    }
}

fn fit(
    size: &[f32],
    options: Option<&PathBuf>,
    width: u32,
    height: u32,
) -> Result<FitReport> {
    let options = load_options(options)?;
    let mut viewer = ViewerContext::new(options, width, height)?;
    let size = Vec3::from_slice(size);
    let fit = viewer.execute(ViewCommand::SetScale(size))?;
    log::debug!("framed {size} at distance {:.3}", fit.camera_distance);

    Ok(FitReport {
        scale: viewer.model().scale().to_array(),
        eye: viewer.camera().eye.to_array(),
        target: viewer.controller().target().to_array(),
        fit,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Fit {
            size,
            options,
            width,
            height,
        } => {
            let report = fit(&size, options.as_ref(), width, height)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        Commands::Schema => {
            let schema = Options::json_schema();
            writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
        }
        Commands::Defaults { output } => {
            let defaults = Options::default();
            match output {
                Some(path) => {
                    defaults.save(&path)?;
                    log::info!("wrote defaults to {}", path.display());
                }
                None => write!(out, "{}", defaults.to_toml_string()?)?,
            }
        }
        Commands::Presets { dir } => {
            let names = Options::list_presets(&dir);
            if names.is_empty() {
                log::warn!("no presets found in {}", dir.display());
            }
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
    }
    Ok(())
}

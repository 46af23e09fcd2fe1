// SPDX-License-Identifier: MIT OR Apache-2.0
//! `motioncurve` - export scene camera animation for an external renderer
//!
//! # Commands
//!
//! - `motioncurve export` - write a `.vd` (key times) or `.wf` (every frame) curve
//! - `motioncurve channel` - write one channel's value at every frame
//! - `motioncurve cameras` - list the cameras in a scene
//!
//! # Usage
//!
//! ```bash
//! motioncurve export shot.ron /obj/cam1 cam1.vd
//! motioncurve export shot.ron /out/mantra1 cam1.wf --start 1 --end 120
//! motioncurve channel shot.ron cam1 focal focal.txt
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use motioncurve_export::{export_camera, export_channel, Camera, ChannelName, CurveFormat, FrameRange};
use motioncurve_scene::Scene;
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Export scene camera animation as motion curves
#[derive(Parser)]
#[command(name = "motioncurve")]
#[command(about = "Export scene camera animation as motion curves")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a camera; the output suffix picks .vd (key times) or .wf (every frame)
    Export(ExportArgs),

    /// Export one channel's value at every frame
    Channel(ChannelArgs),

    /// List the cameras in a scene
    Cameras {
        /// Scene file (.ron or .json)
        scene: PathBuf,
    },
}

#[derive(Args)]
struct RangeArgs {
    /// First frame
    #[arg(long, default_value_t = 1.0)]
    start: f64,

    /// Last frame (defaults to the last keyframe)
    #[arg(long)]
    end: Option<f64>,
}

impl From<RangeArgs> for FrameRange {
    fn from(args: RangeArgs) -> Self {
        FrameRange {
            start: args.start,
            end: args.end,
        }
    }
}

#[derive(Args)]
struct ExportArgs {
    /// Scene file (.ron or .json)
    scene: PathBuf,

    /// Camera path, render output path, or bare camera name
    camera: String,

    /// Output file (.vd or .wf)
    output: PathBuf,

    #[command(flatten)]
    range: RangeArgs,
}

#[derive(Args)]
struct ChannelArgs {
    /// Scene file (.ron or .json)
    scene: PathBuf,

    /// Camera path, render output path, or bare camera name
    camera: String,

    /// Channel name (tx, ty, tz, rx, ry, rz, focal, aperture, resx, resy)
    channel: String,

    /// Output file
    output: PathBuf,

    #[command(flatten)]
    range: RangeArgs,
}

fn load_scene(path: &Path) -> Result<Scene> {
    Scene::load(path).with_context(|| format!("Failed to load scene {}", path.display()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Export(args) => {
            let scene = load_scene(&args.scene)?;
            let format = export_camera(&scene, &args.camera, &args.output, args.range.into())
                .with_context(|| format!("Failed to export {}", args.camera))?;
            let kind = match format {
                CurveFormat::KeyTime => "key-time",
                CurveFormat::FixedFrame => "fixed-frame",
            };
            tracing::info!(format = format.extension(), "Wrote {kind} curve {}", args.output.display());
        }
        Commands::Channel(args) => {
            let scene = load_scene(&args.scene)?;
            let lines = export_channel(&scene, &args.camera, &args.channel, &args.output, args.range.into())
                .with_context(|| format!("Failed to export {} from {}", args.channel, args.camera))?;
            tracing::info!("Wrote {lines} {} values to {}", args.channel, args.output.display());
        }
        Commands::Cameras { scene } => {
            let scene = load_scene(&scene)?;
            tracing::info!("{} cameras", scene.camera_count());
            for cam in scene.cameras() {
                let keys: Vec<String> = ChannelName::SPATIAL
                    .iter()
                    .map(|&c| format!("{c}:{}", cam.keyframes(c).len()))
                    .collect();
                println!("{} [{:?}] {}", cam.path(), cam.rotation_order(), keys.join(" "));
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("motioncurve=info,motioncurve_export=info,motioncurve_scene=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(Cli::parse())
}

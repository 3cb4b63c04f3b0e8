use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use whitted_core::{load_scene, Scene};
use whitted_renderer::{render_to_file, RenderConfig};

/// Render a scene with the Whitted ray tracer.
#[derive(Parser, Debug)]
#[command(version, about = "Deterministic recursive ray tracer")]
struct Args {
    /// JSON scene file; the built-in demo scene is used when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output image (.ppm or .png)
    #[arg(short, long, default_value = "out.ppm")]
    output: PathBuf,

    #[arg(long, default_value_t = 1920)]
    width: u32,

    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Worker threads (defaults to all cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Trace a single ray per pixel
    #[arg(long)]
    no_antialias: bool,

    /// Hide the checkerboard floor
    #[arg(long)]
    no_floor: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, rendering the demo scene");
            Scene::demo()
        }
    };
    let scene = if args.no_floor {
        scene.with_checkerboard(false)
    } else {
        scene
    };

    let mut config = RenderConfig::default()
        .with_resolution(args.width, args.height)
        .with_antialias(!args.no_antialias);
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }

    render_to_file(&scene, &config, &args.output)
        .with_context(|| format!("Failed to render {}", args.output.display()))?;

    Ok(())
}

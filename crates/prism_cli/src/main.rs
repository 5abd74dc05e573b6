//! Headless renderer: JSON scene description in, PNG out.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use prism_core::load_scene;
use prism_renderer::{render, RenderSettings};

/// Command line arguments.
#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "A Whitted-style ray tracer")]
struct Args {
    /// Scene description file (JSON)
    scene: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Maximum reflection depth
    #[arg(long, default_value_t = 1)]
    max_depth: u32,

    /// Disable the ambient shading term
    #[arg(long)]
    no_ambient: bool,

    /// Disable the diffuse shading term
    #[arg(long)]
    no_diffuse: bool,

    /// Disable the specular shading term
    #[arg(long)]
    no_specular: bool,

    /// Disable reflection bounces
    #[arg(long)]
    no_reflection: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let scene = load_scene(&args.scene, args.width, args.height)
        .with_context(|| format!("loading scene {}", args.scene.display()))?;

    let settings = RenderSettings {
        max_depth: args.max_depth,
        ambient: !args.no_ambient,
        diffuse: !args.no_diffuse,
        specular: !args.no_specular,
        reflection: !args.no_reflection,
        ..RenderSettings::default()
    };

    let start = Instant::now();
    let frame = render(&scene, &settings, None)?;
    log::info!("rendered in {:?}", start.elapsed());

    let rgba = frame.to_rgba();
    image::save_buffer(
        &args.output,
        &rgba,
        frame.width(),
        frame.height(),
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}

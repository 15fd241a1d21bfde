//! Command line front end: `raycast <width> <height> <input> <output>`.

mod args;
mod output;

use std::time::Instant;

use anyhow::{Context, Result};
use raycast_core::load_scene;
use raycast_renderer::{render_parallel, RenderConfig};

use crate::args::CliArgs;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::from_args(std::env::args())?;

    let scene = load_scene(&args.input)
        .with_context(|| format!("Failed to read scene \"{}\"", args.input.display()))?;

    let config = RenderConfig::default();
    log::info!("Rendering {}x{}...", args.width, args.height);

    let start = Instant::now();
    let image = render_parallel(&scene, args.width, args.height, &config).context("Cannot render scene")?;
    log::info!("Rendered in {:?}", start.elapsed());

    output::save_image(&image, &args.output)
        .with_context(|| format!("Failed to write image \"{}\"", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}

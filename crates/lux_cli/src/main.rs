use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lux_math::Vec3;
use lux_renderer::{render_into, Camera, FrameBuffer, FrameSink, ImageFileSink, RenderConfig};

mod cli;
mod demo;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    log::info!("Starting Lux");

    let scene = demo::demo_scene();
    scene.validate().context("Demo scene failed validation")?;
    log::info!(
        "Scene: {} spheres, {} lights",
        scene.sphere_count(),
        scene.light_count()
    );

    let camera = Camera::new()
        .with_resolution(args.width, args.height)
        .with_origin(Vec3::new(0.0, 0.0, args.camera_z))
        .with_viewport(
            args.viewport_width,
            args.viewport_height,
            args.projection_distance,
        );
    let config = RenderConfig::default();

    let mut frame = FrameBuffer::new(camera.image_width, camera.image_height);
    for index in 0..args.frames {
        let start = Instant::now();
        render_into(&camera, &scene, &config, &mut frame).context("Render failed")?;
        log::info!(
            "Frame {} ({}x{}) rendered in {:?}",
            index,
            camera.image_width,
            camera.image_height,
            start.elapsed()
        );
    }

    let mut sink = ImageFileSink::new(&args.output);
    sink.present(&frame)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}

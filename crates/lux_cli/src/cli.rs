use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "lux")]
#[command(about = "Render a sphere scene with a Phong ray tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Output file (.png or .ppm)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Camera position on the Z axis
    #[arg(long, default_value_t = -5.0, allow_hyphen_values = true)]
    pub camera_z: f32,

    /// Viewport width in scene units
    #[arg(long, default_value_t = 1.0)]
    pub viewport_width: f32,

    /// Viewport height in scene units
    #[arg(long, default_value_t = 1.0)]
    pub viewport_height: f32,

    /// Distance from the camera to the viewport plane
    #[arg(long, default_value_t = 1.0)]
    pub projection_distance: f32,

    /// Number of frames to render before presenting the last one
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,

    /// Set the logging level (RUST_LOG still applies per module)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

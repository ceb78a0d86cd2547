#![allow(non_snake_case)]

mod actions;
mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gallery_core::{AssetSource, GalleryConfig};

/// Launch settings resolved from the command line
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub config: GalleryConfig,
    pub source: AssetSource,
}

/// Global launch settings, set once in `main`
static LAUNCH: OnceLock<LaunchSettings> = OnceLock::new();

/// Launch settings (defaults if `main` did not set them, e.g. in tests)
pub fn get_launch_settings() -> LaunchSettings {
    LAUNCH.get().cloned().unwrap_or_else(|| LaunchSettings {
        config: GalleryConfig::default(),
        source: AssetSource::directory("."),
    })
}

/// Character Gallery - browse and download character models
#[derive(Parser, Debug)]
#[command(name = "gallery-desktop")]
#[command(about = "Character Gallery - browse, filter and download character models")]
struct Args {
    /// Base for every relative locator: a directory or an http(s) URL
    #[arg(short, long, default_value = ".")]
    source: String,

    /// Dataset location relative to the source
    #[arg(short, long)]
    dataset: Option<String>,

    /// JSON file overriding timings and appearance settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    gallery_core::logging::init(gallery_core::logging::DEFAULT_DIRECTIVE);

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GalleryConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => GalleryConfig::default(),
    };
    if let Some(dataset) = args.dataset {
        config.dataset_path = dataset;
    }

    let source = AssetSource::from_base(&args.source)
        .with_context(|| format!("invalid source {}", args.source))?;

    tracing::info!(
        "Starting gallery with source {:?} and dataset {}",
        args.source,
        config.dataset_path
    );

    let _ = LAUNCH.set(LaunchSettings { config, source });

    let window = WindowBuilder::new()
        .with_title("Character Gallery")
        .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}

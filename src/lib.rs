//! Generates the "Task Consumer" app icon set: PNG icons for iOS and macOS
//! plus the asset catalog `Contents.json` that describes them.

pub mod config;
pub mod error;
pub mod icon;
pub mod iconset;
pub mod logger;
pub mod manifest;
pub mod models;

use std::path::PathBuf;

use tracing::info;

pub use config::IconConfig;
pub use error::{IconError, Result};
pub use iconset::ICON_SET;

/// What a completed run left on disk.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub images: Vec<PathBuf>,
    pub manifest: PathBuf,
}

/// Render every icon, write the manifest derived from the same table, then check the result.
pub fn run(config: &IconConfig) -> Result<RunSummary> {
    info!(dir = %config.output_dir.display(), icons = ICON_SET.len(), "generating icon set");

    let images = iconset::write_icons(config, &ICON_SET)?;

    println!("\n📄 Generating {}...", config.manifest_name);
    let manifest = manifest::build_manifest(&ICON_SET);
    let manifest_path = manifest::write_manifest(config, &manifest)?;

    manifest::verify_output(config, &ICON_SET, &manifest)?;
    info!(images = images.len(), "icon set verified");

    Ok(RunSummary {
        output_dir: config.output_dir.clone(),
        images,
        manifest: manifest_path,
    })
}

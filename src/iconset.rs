use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::config::IconConfig;
use crate::error::{IconError, Result};
use crate::icon::render_icon;
use crate::models::{Appearance, Glyph, IconEntry, Idiom, Platform, Scale};

const fn ios(filename: &'static str, appearance: Option<Appearance>) -> IconEntry {
    IconEntry {
        filename,
        idiom: Idiom::Universal,
        platform: Some(Platform::Ios),
        points: 1024,
        scale: None,
        appearance,
        glyph: Glyph::Clock,
    }
}

const fn mac(points: u32, scale: Scale, filename: &'static str) -> IconEntry {
    IconEntry {
        filename,
        idiom: Idiom::Mac,
        platform: None,
        points,
        scale: Some(scale),
        appearance: None,
        glyph: Glyph::Clock,
    }
}

/// Every image in the app icon set, in manifest order.
pub static ICON_SET: [IconEntry; 13] = [
    ios("AppIcon-1024.png", None),
    ios("AppIcon-1024-dark.png", Some(Appearance::Dark)),
    ios("AppIcon-1024-tinted.png", Some(Appearance::Tinted)),
    mac(16, Scale::X1, "AppIcon-16.png"),
    mac(16, Scale::X2, "AppIcon-16@2x.png"),
    mac(32, Scale::X1, "AppIcon-32.png"),
    mac(32, Scale::X2, "AppIcon-32@2x.png"),
    mac(128, Scale::X1, "AppIcon-128.png"),
    mac(128, Scale::X2, "AppIcon-128@2x.png"),
    mac(256, Scale::X1, "AppIcon-256.png"),
    mac(256, Scale::X2, "AppIcon-256@2x.png"),
    mac(512, Scale::X1, "AppIcon-512.png"),
    mac(512, Scale::X2, "AppIcon-512@2x.png"),
];

/// Create the output directory if needed. Returns true when it had to be created.
pub fn ensure_output_dir(config: &IconConfig) -> Result<bool> {
    let dir = &config.output_dir;
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|source| IconError::CreateDir { path: dir.clone(), source })?;
    info!(path = %dir.display(), "created output directory");
    println!("✓ Created directory: {}", dir.display());
    Ok(true)
}

/// Consecutive runs of entries sharing an idiom, in table order.
pub fn idiom_sections(entries: &[IconEntry]) -> impl Iterator<Item = (Idiom, &[IconEntry])> {
    entries.chunk_by(|a, b| a.idiom == b.idiom).map(|group| (group[0].idiom, group))
}

/// Render and save every entry. Stops at the first failure; files already written stay.
pub fn write_icons(config: &IconConfig, entries: &[IconEntry]) -> Result<Vec<PathBuf>> {
    ensure_output_dir(config)?;

    let mut written = Vec::with_capacity(entries.len());
    for (idiom, section) in idiom_sections(entries) {
        println!("\n{}", idiom.heading());
        for entry in section {
            let px = entry.pixels();
            let img = render_icon(px, entry.glyph, &config.palette);
            let path = config.output_dir.join(entry.filename);
            img.save(&path)
                .map_err(|source| IconError::WriteImage { path: path.clone(), source })?;
            info!(file = entry.filename, px, "icon written");
            println!("✓ Generated: {} ({}x{})", entry.filename, px, px);
            written.push(path);
        }
    }
    Ok(written)
}

use std::path::PathBuf;

use image::Rgb;

/// Asset catalog the generated icons are written into, relative to the working directory.
pub const ICON_DIR: &str = "Task Consumer/Assets.xcassets/AppIcon.appiconset";
pub const MANIFEST_NAME: &str = "Contents.json";

pub const TEAL: Rgb<u8> = Rgb([0, 128, 128]); // #008080
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self { background: TEAL, foreground: WHITE }
    }
}

#[derive(Debug, Clone)]
pub struct IconConfig {
    pub output_dir: PathBuf,
    pub manifest_name: String,
    pub palette: Palette,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(ICON_DIR),
            manifest_name: MANIFEST_NAME.to_string(),
            palette: Palette::default(),
        }
    }
}

impl IconConfig {
    /// Same icon set, written somewhere else.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(&self.manifest_name)
    }
}

use serde::{Deserialize, Serialize};

/// Glyph drawn in the middle of an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Clock,
    Checkmark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    Universal,
    Mac,
}

impl Idiom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Idiom::Universal => "universal",
            Idiom::Mac => "mac",
        }
    }
}

impl Idiom {
    /// Progress section header for icons of this idiom.
    pub fn heading(&self) -> &'static str {
        match self {
            Idiom::Universal => "📱 Generating iOS icons...",
            Idiom::Mac => "💻 Generating macOS icons...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    X1,
    X2,
}

impl Scale {
    pub fn factor(&self) -> u32 {
        match self {
            Scale::X1 => 1,
            Scale::X2 => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::X1 => "1x",
            Scale::X2 => "2x",
        }
    }
}

/// Luminosity variant of the iOS marketing icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Dark,
    Tinted,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Dark => "dark",
            Appearance::Tinted => "tinted",
        }
    }
}

/// One row of the icon table. Drives both the rendered file and its manifest record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconEntry {
    pub filename: &'static str,
    pub idiom: Idiom,
    pub platform: Option<Platform>,
    /// Logical size in points.
    pub points: u32,
    pub scale: Option<Scale>,
    pub appearance: Option<Appearance>,
    pub glyph: Glyph,
}

impl IconEntry {
    /// Edge length of the rendered bitmap in pixels.
    pub fn pixels(&self) -> u32 {
        self.points * self.scale.map(|s| s.factor()).unwrap_or(1)
    }

    pub fn size_string(&self) -> String {
        format!("{}x{}", self.points, self.points)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceTag {
    pub appearance: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearances: Option<Vec<AppearanceTag>>,
    pub idiom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
    pub size: String,
    pub filename: String,
}

impl From<&IconEntry> for ImageDescriptor {
    fn from(entry: &IconEntry) -> Self {
        Self {
            appearances: entry.appearance.map(|a| {
                vec![AppearanceTag {
                    appearance: "luminosity".to_string(),
                    value: a.as_str().to_string(),
                }]
            }),
            idiom: entry.idiom.as_str().to_string(),
            platform: entry.platform.map(|p| p.as_str().to_string()),
            scale: entry.scale.map(|s| s.as_str().to_string()),
            size: entry.size_string(),
            filename: entry.filename.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self { author: "xcode".to_string(), version: 1 }
    }
}

/// Contents of an `.appiconset/Contents.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ImageDescriptor>,
    pub info: ManifestInfo,
}

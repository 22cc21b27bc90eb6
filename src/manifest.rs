use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::IconConfig;
use crate::error::{IconError, Result};
use crate::models::{IconEntry, ImageDescriptor, Manifest, ManifestInfo};

/// Manifest for exactly the images the table renders.
pub fn build_manifest(entries: &[IconEntry]) -> Manifest {
    Manifest {
        images: entries.iter().map(ImageDescriptor::from).collect(),
        info: ManifestInfo::default(),
    }
}

pub fn to_json(manifest: &Manifest) -> Result<String> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Write `Contents.json`, replacing whatever was there.
pub fn write_manifest(config: &IconConfig, manifest: &Manifest) -> Result<PathBuf> {
    let path = config.manifest_path();
    let json = to_json(manifest)?;
    fs::write(&path, json).map_err(|source| IconError::WriteManifest { path: path.clone(), source })?;
    info!(path = %path.display(), images = manifest.images.len(), "manifest written");
    println!("✓ Generated: {}", config.manifest_name);
    Ok(path)
}

/// Check that every manifest image exists on disk with the pixel size its entry renders.
pub fn verify_output(config: &IconConfig, entries: &[IconEntry], manifest: &Manifest) -> Result<()> {
    for image in &manifest.images {
        let Some(entry) = entries.iter().find(|e| e.filename == image.filename) else {
            warn!(file = %image.filename, "manifest entry has no icon table row");
            return Err(IconError::MissingImage { filename: image.filename.clone() });
        };
        let path = config.output_dir.join(&image.filename);
        if !path.is_file() {
            return Err(IconError::MissingImage { filename: image.filename.clone() });
        }
        let (width, height) = image::image_dimensions(&path)
            .map_err(|source| IconError::ReadImage { path: path.clone(), source })?;
        let expected = entry.pixels();
        if width != expected || height != expected {
            return Err(IconError::DimensionMismatch {
                filename: image.filename.clone(),
                expected,
                width,
                height,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iconset::{ICON_SET, write_icons};

    #[test]
    fn test_manifest_matches_table() {
        let manifest = build_manifest(&ICON_SET);
        assert_eq!(manifest.images.len(), 13);
        assert_eq!(manifest.images.iter().filter(|i| i.idiom == "mac").count(), 10);
        assert_eq!(manifest.images.iter().filter(|i| i.platform.as_deref() == Some("ios")).count(), 3);
        assert_eq!(manifest.info.author, "xcode");
        assert_eq!(manifest.info.version, 1);

        let tinted = &manifest.images[2];
        assert_eq!(tinted.filename, "AppIcon-1024-tinted.png");
        assert_eq!(tinted.appearances.as_ref().unwrap()[0].value, "tinted");

        let retina = &manifest.images[4];
        assert_eq!(retina.filename, "AppIcon-16@2x.png");
        assert_eq!(retina.size, "16x16");
        assert_eq!(retina.scale.as_deref(), Some("2x"));
    }

    #[test]
    fn test_json_layout() {
        let json = to_json(&build_manifest(&ICON_SET[..2])).unwrap();
        let expected = r#"{
  "images": [
    {
      "idiom": "universal",
      "platform": "ios",
      "size": "1024x1024",
      "filename": "AppIcon-1024.png"
    },
    {
      "appearances": [
        {
          "appearance": "luminosity",
          "value": "dark"
        }
      ],
      "idiom": "universal",
      "platform": "ios",
      "size": "1024x1024",
      "filename": "AppIcon-1024-dark.png"
    }
  ],
  "info": {
    "author": "xcode",
    "version": 1
  }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_mac_entry_json_has_scale_not_platform() {
        let json = to_json(&build_manifest(&ICON_SET[3..4])).unwrap();
        assert!(json.contains(r#""idiom": "mac",
      "scale": "1x",
      "size": "16x16",
      "filename": "AppIcon-16.png""#));
        assert!(!json.contains("platform"));
    }

    #[test]
    fn test_manifest_round_trips() {
        let manifest = build_manifest(&ICON_SET);
        let parsed: Manifest = serde_json::from_str(&to_json(&manifest).unwrap()).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_verify_reports_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = IconConfig::default().with_output_dir(tmp.path());
        let entries = &ICON_SET[3..5];
        write_icons(&config, entries).unwrap();
        let manifest = build_manifest(entries);
        verify_output(&config, entries, &manifest).unwrap();

        fs::remove_file(tmp.path().join("AppIcon-16@2x.png")).unwrap();
        match verify_output(&config, entries, &manifest) {
            Err(IconError::MissingImage { filename }) => assert_eq!(filename, "AppIcon-16@2x.png"),
            other => panic!("expected MissingImage, got {other:?}"),
        }
    }

    #[test]
    fn test_verify_reports_wrong_size() {
        let tmp = tempfile::tempdir().unwrap();
        let config = IconConfig::default().with_output_dir(tmp.path());
        let entry = IconEntry { points: 32, ..ICON_SET[3] };
        write_icons(&config, &[entry]).unwrap();

        let err = verify_output(&config, &ICON_SET[3..4], &build_manifest(&ICON_SET[3..4])).unwrap_err();
        assert!(matches!(err, IconError::DimensionMismatch { expected: 16, width: 32, height: 32, .. }));
    }
}

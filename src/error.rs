use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop an icon set run.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write image {path}")]
    WriteImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read image {path}")]
    ReadImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to serialize manifest")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write manifest {path}")]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest entry names a file that was not produced.
    #[error("manifest references missing image {filename}")]
    MissingImage { filename: String },

    #[error("{filename} is {width}x{height}, expected {expected}x{expected}")]
    DimensionMismatch {
        filename: String,
        expected: u32,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;

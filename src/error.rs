//! Error types for the stitching pipeline.
//!
//! Library code returns [`StitchError`]; `main` wraps it in `anyhow` for the
//! final report.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StitchError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to decode image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// No column produced a single image.
    #[error("no images found under {}", .0.display())]
    Empty(PathBuf),

    #[error("unsupported output format: {}", .0.display())]
    UnsupportedOutput(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, StitchError>;

//! Run parameters — the validated form of the command line.
//!
//! There is no config file: everything comes from the two positional
//! arguments.  Validation happens here, before any directory is read.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::{Result, StitchError};

/// Everything a single stitching run needs.
#[derive(Debug, Clone)]
pub struct StitchConfig {
    /// Directory whose subdirectories become columns.
    pub root: PathBuf,
    /// Where the composed canvas is written.
    pub output: PathBuf,
    /// Encoder picked from the output extension.
    pub output_format: ImageFormat,
}

impl StitchConfig {
    /// Build a config, rejecting output names the `image` crate cannot encode.
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let output = output.into();
        let output_format = output_format(&output)?;
        Ok(Self {
            root,
            output,
            output_format,
        })
    }
}

/// Infer the encoder from the file extension and check it can write.
fn output_format(output: &Path) -> Result<ImageFormat> {
    match ImageFormat::from_path(output) {
        Ok(format) if format.writing_enabled() => Ok(format),
        _ => Err(StitchError::UnsupportedOutput(output.to_path_buf())),
    }
}

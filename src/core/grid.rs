//! Column and canvas assembly — the whole stitching pipeline.
//!
//! enumerate → sort → stack each directory vertically → place the columns
//! side by side → save.  Nothing touches the output path until the canvas
//! is fully composed.

use std::path::Path;

use image::{ImageReader, RgbImage};
use tracing::{debug, info, warn};

use super::compose::{stack_horizontal, stack_vertical};
use super::fs::{discover_columns, list_images};
use crate::config::StitchConfig;
use crate::error::{Result, StitchError};

/// Summary of a finished composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StitchReport {
    /// Directories that contributed at least one image.
    pub columns: usize,
    pub images: usize,
    pub width: u32,
    pub height: u32,
}

/// Decode `path`, detecting the format from its content, and drop any alpha.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let decode_err = |source| StitchError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let io_err = |source| StitchError::Io {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?
        .decode()
        .map_err(decode_err)?;
    Ok(img.to_rgb8())
}

/// Stack the images directly inside `dir`, top to bottom in name order.
///
/// Returns the column and how many images went into it, or `None` when the
/// directory holds no images.
pub fn build_column(dir: &Path) -> Result<Option<(RgbImage, usize)>> {
    let images = list_images(dir)?;

    let mut column = None;
    for path in &images {
        let img = load_image(path)?;
        debug!(path = %path.display(), width = img.width(), height = img.height(), "stacking image");
        column = Some(stack_vertical(column, img));
    }

    Ok(column.map(|c| (c, images.len())))
}

/// Compose every column under `root` into one canvas, left to right.
pub fn build_canvas(root: &Path) -> Result<(RgbImage, StitchReport)> {
    let dirs = discover_columns(root)?;

    let mut canvas = None;
    let mut columns = 0;
    let mut images = 0;
    for dir in &dirs {
        match build_column(dir)? {
            Some((column, count)) => {
                debug!(dir = %dir.display(), images = count, "built column");
                canvas = Some(stack_horizontal(canvas, column));
                columns += 1;
                images += count;
            }
            None => warn!(dir = %dir.display(), "no images in directory, skipping"),
        }
    }

    let canvas = canvas.ok_or_else(|| StitchError::Empty(root.to_path_buf()))?;
    let report = StitchReport {
        columns,
        images,
        width: canvas.width(),
        height: canvas.height(),
    };
    Ok((canvas, report))
}

/// Compose the canvas for `config.root` and write it to `config.output`.
pub fn build_image(config: &StitchConfig) -> Result<StitchReport> {
    let (canvas, report) = build_canvas(&config.root)?;

    canvas
        .save_with_format(&config.output, config.output_format)
        .map_err(|source| StitchError::Save {
            path: config.output.clone(),
            source,
        })?;

    info!(
        output = %config.output.display(),
        columns = report.columns,
        images = report.images,
        width = report.width,
        height = report.height,
        "wrote image"
    );
    Ok(report)
}

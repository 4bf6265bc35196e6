//! Pairwise concatenation of RGB images.
//!
//! The canvas always takes its cross-axis size from the first operand.  A
//! second operand that is larger on that axis is clipped; a smaller one
//! leaves the rest of the canvas black.

use image::{imageops, RgbImage};

/// Put `bottom` under `top`.  Returns `bottom` as-is when there is no `top`.
pub fn stack_vertical(top: Option<RgbImage>, bottom: RgbImage) -> RgbImage {
    let Some(top) = top else {
        return bottom;
    };

    let mut canvas = RgbImage::new(top.width(), top.height() + bottom.height());
    imageops::replace(&mut canvas, &top, 0, 0);
    imageops::replace(&mut canvas, &bottom, 0, i64::from(top.height()));
    canvas
}

/// Put `right` next to `left`.  Returns `right` as-is when there is no `left`.
pub fn stack_horizontal(left: Option<RgbImage>, right: RgbImage) -> RgbImage {
    let Some(left) = left else {
        return right;
    };

    let mut canvas = RgbImage::new(left.width() + right.width(), left.height());
    imageops::replace(&mut canvas, &left, 0, 0);
    imageops::replace(&mut canvas, &right, i64::from(left.width()), 0);
    canvas
}

//! Eight-color palette quantization.
//!
//! Every pixel is replaced by the nearest of eight reference colors, measured by
//! squared Euclidean distance in RGB. Ties keep the earliest palette entry.

use ndarray::{Array3, ArrayView3};

use super::core::map_pixels;

/// Reference colors, in priority order.
pub const PALETTE: [[u8; 3]; 8] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 255],
    [0, 0, 0],
];

/// One above the largest possible squared distance (3 * 255^2).
const NO_MATCH: u32 = 195_076;

#[inline]
fn squared_distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

/// Nearest palette color to `rgb`.
pub fn nearest_color(rgb: [u8; 3]) -> [u8; 3] {
    let mut best = PALETTE[0];
    let mut best_delta = NO_MATCH;
    for color in PALETTE {
        let delta = squared_distance(rgb, color);
        if delta < best_delta {
            best_delta = delta;
            best = color;
        }
    }
    best
}

/// Quantize an RGBA image to [`PALETTE`].
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// Quantized image, alpha preserved
pub fn eight_colors_u8(input: ArrayView3<u8>) -> Array3<u8> {
    map_pixels(input, nearest_color)
}

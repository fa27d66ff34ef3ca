//! Grayscale conversion filter.
//!
//! Two modes:
//! - **Average**: `floor((R + G + B) / 3)`, the same brightness measure the
//!   edge filters convolve.
//! - **Luminance**: `round(0.21 R) + round(0.72 G) + round(0.07 B)`, saturated
//!   at 255. Weights are applied in integer hundredths so results are exact.
//!
//! Output is RGBA with R=G=B, alpha preserved.

use std::str::FromStr;

use ndarray::{Array3, ArrayView3};

use crate::error::FilterError;

use super::core::{intensity, map_pixels};

/// Luminance weights in hundredths.
const LUMA_R: u32 = 21;
const LUMA_G: u32 = 72;
const LUMA_B: u32 = 7;

/// How color is reduced to a single gray level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayscaleMode {
    /// Unweighted channel average.
    Average,
    /// Perceptual channel weights.
    #[default]
    Luminance,
}

impl FromStr for GrayscaleMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "average" => Ok(GrayscaleMode::Average),
            "luminance" => Ok(GrayscaleMode::Luminance),
            other => Err(FilterError::UnknownGrayscaleMode(other.to_string())),
        }
    }
}

/// `round(value * weight / 100)`, halves rounded up.
#[inline]
fn weighted(value: u8, weight: u32) -> u32 {
    (value as u32 * weight + 50) / 100
}

/// Perceptual gray level of one color.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    (weighted(r, LUMA_R) + weighted(g, LUMA_G) + weighted(b, LUMA_B)).min(255) as u8
}

/// Convert an RGBA u8 image to grayscale.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4)
/// * `mode` - Average or luminance reduction
///
/// # Returns
/// New array with the gray level in R, G and B, alpha preserved
pub fn grayscale_rgba_u8(input: ArrayView3<u8>, mode: GrayscaleMode) -> Array3<u8> {
    match mode {
        GrayscaleMode::Average => map_pixels(input, |[r, g, b]| {
            let gray = intensity(r, g, b);
            [gray, gray, gray]
        }),
        GrayscaleMode::Luminance => map_pixels(input, |[r, g, b]| {
            let gray = luminance(r, g, b);
            [gray, gray, gray]
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn pixel(r: u8, g: u8, b: u8, a: u8) -> Array3<u8> {
        Array3::from_shape_vec((1, 1, 4), vec![r, g, b, a]).unwrap()
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("average".parse::<GrayscaleMode>().unwrap(), GrayscaleMode::Average);
        assert_eq!("luminance".parse::<GrayscaleMode>().unwrap(), GrayscaleMode::Luminance);
        assert!(matches!(
            "sepia".parse::<GrayscaleMode>(),
            Err(FilterError::UnknownGrayscaleMode(_))
        ));
    }

    #[test]
    fn test_average_rounds_down() {
        let result = grayscale_rgba_u8(pixel(10, 20, 31, 255).view(), GrayscaleMode::Average);
        assert_eq!(result.as_slice().unwrap(), &[20, 20, 20, 255]);
    }

    #[test]
    fn test_luminance_red() {
        let result = grayscale_rgba_u8(pixel(255, 0, 0, 255).view(), GrayscaleMode::Luminance);
        // 0.21 * 255 = 53.55
        assert_eq!(result[[0, 0, 0]], 54);
        assert_eq!(result[[0, 0, 0]], result[[0, 0, 1]]);
        assert_eq!(result[[0, 0, 1]], result[[0, 0, 2]]);
    }

    #[test]
    fn test_luminance_white_saturates() {
        // 54 + 184 + 18 = 256
        assert_eq!(luminance(255, 255, 255), 255);
    }

    #[test]
    fn test_luminance_rounds_half_up() {
        // 0.21 * 50 = 10.5
        assert_eq!(luminance(50, 0, 0), 11);
    }

    #[test]
    fn test_grayscale_preserves_alpha() {
        for mode in [GrayscaleMode::Average, GrayscaleMode::Luminance] {
            let result = grayscale_rgba_u8(pixel(128, 128, 128, 100).view(), mode);
            assert_eq!(result[[0, 0, 3]], 100);
        }
    }
}

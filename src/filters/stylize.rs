//! Stylize filters: Binary threshold, Solarize.
//!
//! Pixel-wise; alpha is always preserved.

use ndarray::{Array3, ArrayView3};

use super::core::{intensity, map_pixels};

// ============================================================================
// Binary threshold
// ============================================================================

/// Reduce every pixel to black or white.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `threshold` - Gray levels below this become black, the rest white
///
/// # Returns
/// Black and white image, alpha preserved
pub fn threshold_u8(input: ArrayView3<u8>, threshold: u8) -> Array3<u8> {
    map_pixels(input, |[r, g, b]| {
        let v = if intensity(r, g, b) < threshold { 0 } else { 255 };
        [v, v, v]
    })
}

// ============================================================================
// Solarize
// ============================================================================

/// Apply solarize effect.
///
/// Inverts each color channel at or below the threshold, creating a
/// part-negative image.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `threshold` - Channels `<= threshold` are inverted
///
/// # Returns
/// Solarized image, alpha preserved
pub fn solarize_u8(input: ArrayView3<u8>, threshold: u8) -> Array3<u8> {
    let solarize = |v: u8| if v <= threshold { 255 - v } else { v };
    map_pixels(input, |[r, g, b]| [solarize(r), solarize(g), solarize(b)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(pixels: &[[u8; 4]]) -> Array3<u8> {
        let data: Vec<u8> = pixels.iter().flatten().copied().collect();
        Array3::from_shape_vec((1, pixels.len(), 4), data).unwrap()
    }

    #[test]
    fn test_threshold_splits_at_value() {
        let img = image(&[[127, 127, 127, 255], [128, 128, 128, 9], [200, 10, 30, 1]]);
        let result = threshold_u8(img.view(), 128);
        assert_eq!(
            result.as_slice().unwrap(),
            &[0, 0, 0, 255, 255, 255, 255, 9, 0, 0, 0, 1]
        );
    }

    #[test]
    fn test_threshold_zero_is_all_white() {
        let img = image(&[[0, 0, 0, 255]]);
        let result = threshold_u8(img.view(), 0);
        assert_eq!(result[[0, 0, 0]], 255);
    }

    #[test]
    fn test_solarize_inverts_at_or_below_threshold() {
        let img = image(&[[100, 105, 106, 42]]);
        let result = solarize_u8(img.view(), 105);
        assert_eq!(result.as_slice().unwrap(), &[155, 150, 106, 42]);
    }

    #[test]
    fn test_solarize_max_threshold_is_inversion() {
        let img = image(&[[0, 64, 255, 7]]);
        let result = solarize_u8(img.view(), 255);
        assert_eq!(result.as_slice().unwrap(), &[255, 191, 0, 7]);
    }
}

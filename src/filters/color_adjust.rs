//! Color adjustment filters: Invert.

use ndarray::{Array3, ArrayView3};

use super::core::map_pixels;

/// Invert image colors.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// Color-inverted image, alpha preserved
pub fn invert_u8(input: ArrayView3<u8>) -> Array3<u8> {
    map_pixels(input, |[r, g, b]| [255 - r, 255 - g, 255 - b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_u8_rgba() {
        let img = Array3::from_shape_vec((1, 2, 4), vec![0, 100, 255, 30, 1, 2, 3, 4]).unwrap();
        let result = invert_u8(img.view());
        assert_eq!(result.as_slice().unwrap(), &[255, 155, 0, 30, 254, 253, 252, 4]);
    }

    #[test]
    fn test_invert_twice_is_identity() {
        let img = Array3::from_shape_vec((2, 1, 4), vec![9, 8, 7, 6, 5, 4, 3, 2]).unwrap();
        let result = invert_u8(invert_u8(img.view()).view());
        assert_eq!(result, img);
    }
}

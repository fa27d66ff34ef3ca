//! Core utilities shared by the filters.
//!
//! - Pixel intensity (the single brightness measure fed into convolution)
//! - Linear index to coordinate mapping
//! - Clamp-to-edge neighborhood sampling for 3x3 kernels
//! - The per-pixel map used by every non-neighborhood filter

use ndarray::{Array3, ArrayView3, Axis, Zip};

use crate::buffer::CHANNELS;

/// Average of the color channels, rounded down. Alpha is ignored.
#[inline]
pub fn intensity(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Pixel position within an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    /// Position of the `index`-th pixel in a row-major image of `width` columns.
    #[inline]
    pub fn from_index(index: usize, width: usize) -> Self {
        Self {
            x: index % width,
            y: index / width,
        }
    }

    /// Byte offset of this pixel's red channel.
    #[inline]
    pub fn byte_offset(&self, width: usize) -> usize {
        (self.y * width + self.x) * CHANNELS
    }
}

/// Neighbor of `center` at kernel position `(m, n)`, i.e. offset `(m - 1, n - 1)`.
///
/// Coordinates past an edge are pulled back onto the nearest edge pixel, so the
/// result is always inside `width x height`.
#[inline]
pub fn neighbor(
    center: Coordinate,
    width: usize,
    height: usize,
    m: usize,
    n: usize,
) -> Coordinate {
    let x = (center.x as isize + m as isize - 1).clamp(0, width as isize - 1) as usize;
    let y = (center.y as isize + n as isize - 1).clamp(0, height as isize - 1) as usize;
    Coordinate { x, y }
}

/// Intensities of the 3x3 neighborhood around `center`.
///
/// Laid out row-major like [`Kernel`](super::kernels::Kernel) weights:
/// `samples[n][m]` holds the neighbor at offset `(m - 1, n - 1)`.
#[inline]
pub fn sample_neighborhood(
    data: &[u8],
    width: usize,
    height: usize,
    center: Coordinate,
) -> [[i32; 3]; 3] {
    let mut samples = [[0i32; 3]; 3];
    for (n, row) in samples.iter_mut().enumerate() {
        for (m, sample) in row.iter_mut().enumerate() {
            let offset = neighbor(center, width, height, m, n).byte_offset(width);
            *sample = intensity(data[offset], data[offset + 1], data[offset + 2]) as i32;
        }
    }
    samples
}

/// Apply `f` to the color channels of every pixel, copying alpha unchanged.
///
/// Input must be `(height, width, 4)`.
pub fn map_pixels<F>(input: ArrayView3<u8>, f: F) -> Array3<u8>
where
    F: Fn([u8; 3]) -> [u8; 3],
{
    let mut output = Array3::<u8>::zeros(input.dim());

    Zip::from(output.lanes_mut(Axis(2)))
        .and(input.lanes(Axis(2)))
        .for_each(|mut out, px| {
            let [r, g, b] = f([px[0], px[1], px[2]]);
            out[0] = r;
            out[1] = g;
            out[2] = b;
            out[3] = px[3];
        });

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_rounds_down() {
        assert_eq!(intensity(0, 0, 0), 0);
        assert_eq!(intensity(255, 255, 255), 255);
        assert_eq!(intensity(1, 1, 0), 0);
        assert_eq!(intensity(10, 20, 30), 20);
        assert_eq!(intensity(255, 255, 254), 254);
    }

    #[test]
    fn test_coordinate_from_index() {
        assert_eq!(Coordinate::from_index(0, 3), Coordinate { x: 0, y: 0 });
        assert_eq!(Coordinate::from_index(5, 3), Coordinate { x: 2, y: 1 });
        assert_eq!(Coordinate::from_index(6, 3).byte_offset(3), 24);
    }

    #[test]
    fn test_neighbor_interior_is_plain_offset() {
        let c = Coordinate { x: 2, y: 2 };
        assert_eq!(neighbor(c, 5, 5, 0, 0), Coordinate { x: 1, y: 1 });
        assert_eq!(neighbor(c, 5, 5, 1, 1), c);
        assert_eq!(neighbor(c, 5, 5, 2, 1), Coordinate { x: 3, y: 2 });
    }

    #[test]
    fn test_neighbor_clamps_both_edges() {
        let top_left = Coordinate { x: 0, y: 0 };
        assert_eq!(neighbor(top_left, 4, 3, 0, 0), top_left);
        assert_eq!(neighbor(top_left, 4, 3, 2, 0), Coordinate { x: 1, y: 0 });

        let bottom_right = Coordinate { x: 3, y: 2 };
        assert_eq!(neighbor(bottom_right, 4, 3, 2, 2), bottom_right);
        assert_eq!(neighbor(bottom_right, 4, 3, 0, 2), Coordinate { x: 2, y: 2 });
    }

    #[test]
    fn test_neighbor_single_pixel_image() {
        let c = Coordinate { x: 0, y: 0 };
        for m in 0..3 {
            for n in 0..3 {
                assert_eq!(neighbor(c, 1, 1, m, n), c);
            }
        }
    }

    #[test]
    fn test_sample_neighborhood_replicates_corner() {
        // 2x2: only the top-left pixel is bright
        let mut data = vec![0u8; 16];
        data[..4].copy_from_slice(&[255, 255, 255, 255]);
        let samples = sample_neighborhood(&data, 2, 2, Coordinate { x: 0, y: 0 });
        assert_eq!(samples, [[255, 255, 0], [255, 255, 0], [0, 0, 0]]);
    }

    #[test]
    fn test_map_pixels_preserves_alpha() {
        let mut img = Array3::<u8>::zeros((1, 2, 4));
        img[[0, 0, 0]] = 10;
        img[[0, 0, 3]] = 77;
        img[[0, 1, 3]] = 3;

        let result = map_pixels(img.view(), |[r, g, b]| [b, r, g]);

        assert_eq!(result[[0, 0, 1]], 10);
        assert_eq!(result[[0, 0, 3]], 77);
        assert_eq!(result[[0, 1, 3]], 3);
    }
}

//! 3x3 convolution over RGBA buffers.
//!
//! Every pixel is reduced to its neighborhood intensities (clamp-to-edge),
//! weighted by one kernel or combined from two kernels by gradient magnitude,
//! and written back as an inverted gray level. Alpha is copied from the source.

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::error::Result;

use super::core::{sample_neighborhood, Coordinate};
use super::kernels::Kernel;
use super::partition::{run_partitioned, ExecutionStrategy};

/// The kernels a convolution filter applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelSet {
    /// One kernel, its weighted sum is the response.
    Single(Kernel),
    /// Two directional kernels combined as `sqrt(gx^2 + gy^2)`, truncated.
    Magnitude(Kernel, Kernel),
}

impl KernelSet {
    /// Scalar response for one neighborhood.
    #[inline]
    pub fn response(&self, neighborhood: &[[i32; 3]; 3]) -> i32 {
        match self {
            KernelSet::Single(kernel) => kernel.apply(neighborhood),
            KernelSet::Magnitude(kx, ky) => {
                let gx = kx.apply(neighborhood) as f64;
                let gy = ky.apply(neighborhood) as f64;
                (gx * gx + gy * gy).sqrt() as i32
            }
        }
    }
}

/// Saturate a response into `0..=255` and invert it.
#[inline]
pub fn channel_value(response: i32) -> u8 {
    255 - response.clamp(0, 255) as u8
}

/// Convolve the pixels covered by `dst`.
///
/// `dst` is the slice of the output that starts at byte `start` of the full
/// buffer; `start` and `dst.len()` must be multiples of 4. `src` is the whole
/// input image and is only read.
pub fn convolve_range(
    src: &[u8],
    width: usize,
    height: usize,
    kernels: &KernelSet,
    start: usize,
    dst: &mut [u8],
) {
    let first_pixel = start / CHANNELS;

    for (i, out) in dst.chunks_exact_mut(CHANNELS).enumerate() {
        let index = first_pixel + i;
        let center = Coordinate::from_index(index, width);
        let neighborhood = sample_neighborhood(src, width, height, center);
        let value = channel_value(kernels.response(&neighborhood));

        out[0] = value;
        out[1] = value;
        out[2] = value;
        out[3] = src[index * CHANNELS + 3];
    }
}

/// Convolve a whole buffer into a new one.
///
/// Output is byte-identical for every strategy and worker count.
pub fn convolve(
    input: &PixelBuffer,
    kernels: &KernelSet,
    strategy: ExecutionStrategy,
) -> Result<PixelBuffer> {
    let (width, height) = (input.width(), input.height());
    let src = input.as_bytes();
    let mut output = PixelBuffer::zeroed_like(input);

    run_partitioned(output.as_bytes_mut(), strategy, |assignment, chunk| {
        convolve_range(src, width, height, kernels, assignment.start, chunk);
    })?;

    Ok(output)
}

//! Edge detection filters: Sobel, Laplacian.
//!
//! Both read a clamp-to-edge 3x3 intensity neighborhood per pixel and write
//! `255 - clamp(response, 0, 255)` into R, G and B, so edges come out dark on a
//! white field. Alpha is preserved. Output is always gray.

use crate::buffer::PixelBuffer;
use crate::error::Result;

use super::convolution::{convolve, KernelSet};
use super::kernels::{LAPLACIAN, SOBEL_HORIZONTAL, SOBEL_VERTICAL};
use super::partition::ExecutionStrategy;

// ============================================================================
// Sobel Edge Detection
// ============================================================================

/// Kernels of the Sobel filter.
pub const SOBEL_KERNELS: KernelSet = KernelSet::Magnitude(SOBEL_HORIZONTAL, SOBEL_VERTICAL);

/// Apply Sobel gradient-magnitude edge detection.
///
/// # Arguments
/// * `input` - RGBA image
/// * `strategy` - How the pixels are split across workers
///
/// # Returns
/// New RGBA image with `255 - min(|G|, 255)` in every color channel
pub fn sobel_u8(input: &PixelBuffer, strategy: ExecutionStrategy) -> Result<PixelBuffer> {
    convolve(input, &SOBEL_KERNELS, strategy)
}

// ============================================================================
// Laplacian Edge Detection
// ============================================================================

/// Kernel of the Laplacian filter.
pub const LAPLACIAN_KERNELS: KernelSet = KernelSet::Single(LAPLACIAN);

/// Apply 8-neighbor Laplacian edge detection.
///
/// # Arguments
/// * `input` - RGBA image
/// * `strategy` - How the pixels are split across workers
///
/// # Returns
/// New RGBA image with `255 - clamp(L, 0, 255)` in every color channel
pub fn laplacian_u8(input: &PixelBuffer, strategy: ExecutionStrategy) -> Result<PixelBuffer> {
    convolve(input, &LAPLACIAN_KERNELS, strategy)
}

//! Owned RGBA8 pixel storage.
//!
//! A [`PixelBuffer`] is the unit every filter consumes and produces. It owns a
//! private copy of the host's bytes, so the host mutating its own storage while
//! a filter runs cannot reach the in-flight computation. Construction validates
//! that `width * height * 4 == len`; past that point no filter needs to check
//! bounds again.

use ndarray::{Array3, ArrayView3};

use crate::error::{FilterError, Result};

/// Bytes per pixel (red, green, blue, alpha).
pub const CHANNELS: usize = 4;

/// Check that `len` bytes describe exactly `width x height` RGBA pixels.
pub fn validate_dimensions(len: usize, width: usize, height: usize) -> Result<()> {
    if len % CHANNELS != 0 {
        return Err(FilterError::NotPixelAligned(len));
    }
    if width == 0 || height == 0 {
        return Err(FilterError::EmptyImage { width, height });
    }
    let expected = width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(CHANNELS));
    if expected != Some(len) {
        return Err(FilterError::DimensionMismatch { width, height, len });
    }
    Ok(())
}

/// Row-major RGBA8 image with known extents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Take ownership of `data` after validating it against the extents.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        validate_dimensions(data.len(), width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Copy host bytes into a fresh buffer.
    pub fn from_slice(data: &[u8], width: usize, height: usize) -> Result<Self> {
        validate_dimensions(data.len(), width, height)?;
        Ok(Self {
            data: data.to_vec(),
            width,
            height,
        })
    }

    /// Build from a `(height, width, 4)` array.
    pub fn from_array(array: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = array.dim();
        if channels != CHANNELS {
            return Err(FilterError::ChannelMismatch(channels));
        }
        let array = if array.is_standard_layout() {
            array
        } else {
            array.as_standard_layout().into_owned()
        };
        Self::new(array.into_raw_vec_and_offset().0, width, height)
    }

    /// Allocate a zeroed buffer with the same extents.
    pub(crate) fn zeroed_like(other: &PixelBuffer) -> Self {
        Self {
            data: vec![0; other.data.len()],
            width: other.width,
            height: other.height,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a validated buffer; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Give the bytes back to the caller.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a `(height, width, 4)` array view.
    pub fn view(&self) -> Result<ArrayView3<'_, u8>> {
        Ok(ArrayView3::from_shape(
            (self.height, self.width, CHANNELS),
            &self.data,
        )?)
    }

    /// Convert into a `(height, width, 4)` array.
    pub fn into_array(self) -> Result<Array3<u8>> {
        Ok(Array3::from_shape_vec(
            (self.height, self.width, CHANNELS),
            self.data,
        )?)
    }
}

//! Filter modules for RGBA canvas effects.
//!
//! ## Format
//!
//! Every filter works on 8-bit RGBA, row-major, `(height, width, 4)`.
//! Alpha is always copied from the input unchanged.
//!
//! ## Filter Categories
//!
//! - **Convolution**: sobel, laplacian. A clamp-to-edge 3x3 intensity
//!   neighborhood per pixel, optionally split across rayon workers by
//!   pixel-aligned byte ranges. Output is gray.
//! - **Pixel-wise**: binary threshold, grayscale (average / luminance), invert,
//!   solarize, eight-color palette. Independent per-pixel maps.

pub mod color_adjust;
pub mod convolution;
pub mod core;
pub mod edge;
pub mod grayscale;
pub mod kernels;
pub mod palette;
pub mod partition;
pub mod stylize;

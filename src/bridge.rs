//! Host call boundary.
//!
//! Hosts (the WASM exports, the Python module) hand over loosely typed
//! arguments. This module checks that every argument a filter needs is present,
//! clamps thresholds, copies the bytes into an owned [`PixelBuffer`], runs the
//! filter and hands back a fresh byte vector. Nothing is written for a call
//! that fails validation.

use std::str::FromStr;

use log::debug;
use ndarray::{Array3, ArrayView3};

use crate::buffer::PixelBuffer;
use crate::error::{FilterError, Result};
use crate::filters::color_adjust::invert_u8;
use crate::filters::edge::{laplacian_u8, sobel_u8};
use crate::filters::grayscale::{grayscale_rgba_u8, GrayscaleMode};
use crate::filters::palette::eight_colors_u8;
use crate::filters::partition::ExecutionStrategy;
use crate::filters::stylize::{solarize_u8, threshold_u8};

/// Filters reachable from a host, by their host-facing names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Binary,
    ColorInversion,
    EightColors,
    Grayscale,
    Laplacian,
    Sobel,
    Solarize,
}

/// Positional arguments a host call can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Data,
    Width,
    Height,
    Threshold,
}

impl Argument {
    pub fn name(&self) -> &'static str {
        match self {
            Argument::Data => "data",
            Argument::Width => "width",
            Argument::Height => "height",
            Argument::Threshold => "threshold",
        }
    }
}

const IMAGE_ARGS: &[Argument] = &[Argument::Data, Argument::Width, Argument::Height];
const THRESHOLD_ARGS: &[Argument] = &[
    Argument::Data,
    Argument::Width,
    Argument::Height,
    Argument::Threshold,
];

impl FilterKind {
    pub const ALL: [FilterKind; 7] = [
        FilterKind::Binary,
        FilterKind::ColorInversion,
        FilterKind::EightColors,
        FilterKind::Grayscale,
        FilterKind::Laplacian,
        FilterKind::Sobel,
        FilterKind::Solarize,
    ];

    /// Host-facing name.
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Binary => "binary",
            FilterKind::ColorInversion => "colorInversion",
            FilterKind::EightColors => "eightColors",
            FilterKind::Grayscale => "grayscale",
            FilterKind::Laplacian => "laplacian",
            FilterKind::Sobel => "sobel",
            FilterKind::Solarize => "solarize",
        }
    }

    /// Arguments that must be present, in positional order.
    pub fn required_arguments(&self) -> &'static [Argument] {
        match self {
            FilterKind::Binary | FilterKind::Solarize => THRESHOLD_ARGS,
            _ => IMAGE_ARGS,
        }
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

/// Arguments as received from a host. Absent values are `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterArgs<'a> {
    pub data: Option<&'a [u8]>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub threshold: Option<i32>,
    /// Only read by the grayscale filter; defaults to luminance.
    pub grayscale_mode: Option<GrayscaleMode>,
}

impl<'a> FilterArgs<'a> {
    /// Fail with `MissingArguments` on the first absent required argument,
    /// otherwise hand back the image bytes and extents.
    pub fn check(&self, kind: FilterKind) -> Result<(&'a [u8], u32, u32)> {
        let missing = |argument: Argument| FilterError::MissingArguments {
            filter: kind.name(),
            argument: argument.name(),
        };

        let data = self.data.ok_or_else(|| missing(Argument::Data))?;
        let width = self.width.ok_or_else(|| missing(Argument::Width))?;
        let height = self.height.ok_or_else(|| missing(Argument::Height))?;
        check_threshold(kind, self.threshold)?;

        Ok((data, width, height))
    }
}

fn check_threshold(kind: FilterKind, threshold: Option<i32>) -> Result<()> {
    if threshold.is_none() && kind.required_arguments().contains(&Argument::Threshold) {
        return Err(FilterError::MissingArguments {
            filter: kind.name(),
            argument: Argument::Threshold.name(),
        });
    }
    Ok(())
}

/// Clamp a host threshold into the 8-bit range.
pub fn clamp_threshold(threshold: i32) -> u8 {
    threshold.clamp(0, 255) as u8
}

/// Run a filter over an owned buffer.
pub fn apply(
    kind: FilterKind,
    input: &PixelBuffer,
    threshold: u8,
    grayscale_mode: GrayscaleMode,
    strategy: ExecutionStrategy,
) -> Result<PixelBuffer> {
    match kind {
        FilterKind::Sobel => sobel_u8(input, strategy),
        FilterKind::Laplacian => laplacian_u8(input, strategy),
        FilterKind::Binary => PixelBuffer::from_array(threshold_u8(input.view()?, threshold)),
        FilterKind::Solarize => PixelBuffer::from_array(solarize_u8(input.view()?, threshold)),
        FilterKind::ColorInversion => PixelBuffer::from_array(invert_u8(input.view()?)),
        FilterKind::EightColors => PixelBuffer::from_array(eight_colors_u8(input.view()?)),
        FilterKind::Grayscale => {
            PixelBuffer::from_array(grayscale_rgba_u8(input.view()?, grayscale_mode))
        }
    }
}

fn apply_checked(
    kind: FilterKind,
    input: &PixelBuffer,
    threshold: Option<i32>,
    grayscale_mode: Option<GrayscaleMode>,
    strategy: ExecutionStrategy,
) -> Result<PixelBuffer> {
    let threshold = clamp_threshold(threshold.unwrap_or(0));

    debug!(
        "{} on {}x{} ({:?}, threshold {})",
        kind.name(),
        input.width(),
        input.height(),
        strategy,
        threshold
    );

    apply(kind, input, threshold, grayscale_mode.unwrap_or_default(), strategy)
}

/// Validate host arguments, copy the bytes in, filter, copy the bytes out.
pub fn run(
    kind: FilterKind,
    args: FilterArgs<'_>,
    strategy: ExecutionStrategy,
) -> Result<Vec<u8>> {
    let (data, width, height) = args.check(kind)?;
    let input = PixelBuffer::from_slice(data, width as usize, height as usize)?;

    Ok(apply_checked(kind, &input, args.threshold, args.grayscale_mode, strategy)?.into_vec())
}

/// [`run`] with the filter chosen by its host-facing name.
pub fn run_named(
    name: &str,
    args: FilterArgs<'_>,
    strategy: ExecutionStrategy,
) -> Result<Vec<u8>> {
    run(name.parse()?, args, strategy)
}

/// [`run`] for hosts that hand over a `(height, width, 4)` array.
///
/// The array always carries its bytes and extents, so only the threshold
/// can be missing. The input is copied before filtering.
pub fn run_array(
    kind: FilterKind,
    image: ArrayView3<u8>,
    threshold: Option<i32>,
    grayscale_mode: Option<GrayscaleMode>,
    strategy: ExecutionStrategy,
) -> Result<Array3<u8>> {
    check_threshold(kind, threshold)?;
    let input = PixelBuffer::from_array(image.to_owned())?;

    apply_checked(kind, &input, threshold, grayscale_mode, strategy)?.into_array()
}

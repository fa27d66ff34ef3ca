//! WebAssembly exports for the canvas filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Every argument is
//! optional on the JS side: a call with a missing argument rejects with the
//! string `"MISSING_ARGUMENTS"` and produces no pixels. Other failures reject
//! with a descriptive message.
//!
//! Arguments are positional and always start with `data, width, height`.
//! `binary` and `solarize` take `threshold` fourth, `grayscale` takes its mode
//! fourth, and `applyFilter` prepends the filter name and takes `threshold`
//! then the grayscale mode after the extents. A call that skips the extents,
//! such as `binary(data, threshold)`, leaves `height` and `threshold` unset and
//! rejects with `"MISSING_ARGUMENTS"`.
//!
//! Input bytes are copied into WASM memory and the result is returned as a new
//! `Uint8Array`, so the caller's `ImageData` is never touched mid-call.

use wasm_bindgen::prelude::*;

use crate::bridge::{self, FilterArgs, FilterKind};
use crate::error::FilterError;
use crate::filters::grayscale::GrayscaleMode;
use crate::filters::partition::ExecutionStrategy;

fn to_js(err: FilterError) -> JsValue {
    JsValue::from_str(&err.host_message())
}

fn run(kind: FilterKind, args: FilterArgs<'_>) -> Result<Vec<u8>, JsValue> {
    bridge::run(kind, args, ExecutionStrategy::Parallel).map_err(to_js)
}

fn image_args(
    data: &Option<Vec<u8>>,
    width: Option<u32>,
    height: Option<u32>,
) -> FilterArgs<'_> {
    FilterArgs {
        data: data.as_deref(),
        width,
        height,
        ..Default::default()
    }
}

// ============================================================================
// Convolution filters
// ============================================================================

/// Sobel gradient-magnitude edge detection.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Flat array of RGBA bytes, edges dark on white
#[wasm_bindgen]
pub fn sobel(
    data: Option<Vec<u8>>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<Vec<u8>, JsValue> {
    run(FilterKind::Sobel, image_args(&data, width, height))
}

/// Laplacian edge detection.
#[wasm_bindgen]
pub fn laplacian(
    data: Option<Vec<u8>>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<Vec<u8>, JsValue> {
    run(FilterKind::Laplacian, image_args(&data, width, height))
}

// ============================================================================
// Pixel-wise filters
// ============================================================================

/// Black and white threshold. `threshold` is clamped to 0-255.
#[wasm_bindgen]
pub fn binary(
    data: Option<Vec<u8>>,
    width: Option<u32>,
    height: Option<u32>,
    threshold: Option<i32>,
) -> Result<Vec<u8>, JsValue> {
    let args = FilterArgs {
        threshold,
        ..image_args(&data, width, height)
    };
    run(FilterKind::Binary, args)
}

/// Invert channels at or below `threshold` (clamped to 0-255).
#[wasm_bindgen]
pub fn solarize(
    data: Option<Vec<u8>>,
    width: Option<u32>,
    height: Option<u32>,
    threshold: Option<i32>,
) -> Result<Vec<u8>, JsValue> {
    let args = FilterArgs {
        threshold,
        ..image_args(&data, width, height)
    };
    run(FilterKind::Solarize, args)
}

/// Invert every color channel.
#[wasm_bindgen(js_name = colorInversion)]
pub fn color_inversion(
    data: Option<Vec<u8>>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<Vec<u8>, JsValue> {
    run(FilterKind::ColorInversion, image_args(&data, width, height))
}

/// Quantize to the eight-color palette.
#[wasm_bindgen(js_name = eightColors)]
pub fn eight_colors(
    data: Option<Vec<u8>>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<Vec<u8>, JsValue> {
    run(FilterKind::EightColors, image_args(&data, width, height))
}

/// Grayscale; `grayscale_type` is `"average"` or `"luminance"` (default).
#[wasm_bindgen]
pub fn grayscale(
    data: Option<Vec<u8>>,
    width: Option<u32>,
    height: Option<u32>,
    grayscale_type: Option<String>,
) -> Result<Vec<u8>, JsValue> {
    let grayscale_mode = grayscale_type
        .as_deref()
        .map(str::parse::<GrayscaleMode>)
        .transpose()
        .map_err(to_js)?;
    let args = FilterArgs {
        grayscale_mode,
        ..image_args(&data, width, height)
    };
    run(FilterKind::Grayscale, args)
}

// ============================================================================
// Dispatch by name
// ============================================================================

/// Run any filter by its name (`"binary"`, `"sobel"`, ...).
#[wasm_bindgen(js_name = applyFilter)]
pub fn apply_filter(
    filter: &str,
    data: Option<Vec<u8>>,
    width: Option<u32>,
    height: Option<u32>,
    threshold: Option<i32>,
    grayscale_type: Option<String>,
) -> Result<Vec<u8>, JsValue> {
    let grayscale_mode = grayscale_type
        .as_deref()
        .map(str::parse::<GrayscaleMode>)
        .transpose()
        .map_err(to_js)?;
    let args = FilterArgs {
        threshold,
        grayscale_mode,
        ..image_args(&data, width, height)
    };
    bridge::run_named(filter, args, ExecutionStrategy::Parallel).map_err(to_js)
}

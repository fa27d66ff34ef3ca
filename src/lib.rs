//! Canvas Filters
//!
//! RGBA8 pixel-buffer filters for canvas-style hosts, with Python bindings via
//! PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Every filter takes row-major RGBA8 data, `width * height * 4` bytes, and
//! returns a new buffer of the same size. Alpha is always preserved.
//!
//! ## Filters
//! - **Convolution**: `sobel` (gradient magnitude), `laplacian`. These share a
//!   3x3 clamp-to-edge convolution core that can split the image into
//!   pixel-aligned chunks processed by a fixed number of rayon workers.
//! - **Pixel-wise**: `binary`, `grayscale`, `colorInversion`, `solarize`,
//!   `eightColors`.
//!
//! ## Example
//! ```
//! use canvas_filters::{sobel_u8, ExecutionStrategy, PixelBuffer};
//!
//! let flat = PixelBuffer::new([10u8, 20, 30, 255].repeat(16), 4, 4)?;
//! let edges = sobel_u8(&flat, ExecutionStrategy::Workers(3))?;
//! assert!(edges.as_bytes().iter().all(|&v| v == 255));
//! # Ok::<(), canvas_filters::FilterError>(())
//! ```

pub mod bridge;
pub mod buffer;
pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::PixelBuffer;
pub use error::{FilterError, Result, MISSING_ARGUMENTS};
pub use filters::edge::{laplacian_u8, sobel_u8};
pub use filters::partition::ExecutionStrategy;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::bridge::{run_array, FilterKind};
    use crate::error::FilterError;
    use crate::filters::grayscale::GrayscaleMode;
    use crate::filters::partition::ExecutionStrategy;

    fn to_py(err: FilterError) -> PyErr {
        PyValueError::new_err(err.host_message())
    }

    fn execution(workers: Option<usize>) -> ExecutionStrategy {
        workers.map_or(ExecutionStrategy::Parallel, ExecutionStrategy::Workers)
    }

    /// Copy the array in, run `kind` through the host boundary, copy it out.
    fn filter_py<'py>(
        py: Python<'py>,
        kind: FilterKind,
        image: PyReadonlyArray3<'py, u8>,
        threshold: Option<i32>,
        grayscale_mode: Option<GrayscaleMode>,
        workers: Option<usize>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = run_array(
            kind,
            image.as_array(),
            threshold,
            grayscale_mode,
            execution(workers),
        )
        .map_err(to_py)?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Edge Detection
    // ========================================================================

    /// Sobel gradient-magnitude edges on an RGBA u8 image.
    ///
    /// `workers` fixes the number of parallel chunks; default is one per core.
    #[pyfunction]
    #[pyo3(signature = (image, workers=None))]
    pub fn sobel<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        workers: Option<usize>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        filter_py(py, FilterKind::Sobel, image, None, None, workers)
    }

    /// Laplacian edges on an RGBA u8 image.
    #[pyfunction]
    #[pyo3(signature = (image, workers=None))]
    pub fn laplacian<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        workers: Option<usize>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        filter_py(py, FilterKind::Laplacian, image, None, None, workers)
    }

    // ========================================================================
    // Pixel-wise Filters
    // ========================================================================

    /// Black and white threshold. Raises `ValueError("MISSING_ARGUMENTS")`
    /// without a threshold.
    #[pyfunction]
    #[pyo3(signature = (image, threshold=None))]
    pub fn binary<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: Option<i32>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        filter_py(py, FilterKind::Binary, image, threshold, None, None)
    }

    #[pyfunction]
    #[pyo3(signature = (image, threshold=None))]
    pub fn solarize<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: Option<i32>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        filter_py(py, FilterKind::Solarize, image, threshold, None, None)
    }

    #[pyfunction]
    pub fn color_inversion<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        filter_py(py, FilterKind::ColorInversion, image, None, None, None)
    }

    #[pyfunction]
    pub fn eight_colors<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        filter_py(py, FilterKind::EightColors, image, None, None, None)
    }

    /// Grayscale with `mode` = "average" or "luminance" (default).
    #[pyfunction]
    #[pyo3(signature = (image, mode=None))]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        mode: Option<&str>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mode = mode
            .map(str::parse::<GrayscaleMode>)
            .transpose()
            .map_err(to_py)?;
        filter_py(py, FilterKind::Grayscale, image, None, mode, None)
    }

    /// Canvas filters Rust extension module
    #[pymodule]
    pub fn canvas_filters(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Edge detection
        m.add_function(wrap_pyfunction!(sobel, m)?)?;
        m.add_function(wrap_pyfunction!(laplacian, m)?)?;

        // Pixel-wise
        m.add_function(wrap_pyfunction!(binary, m)?)?;
        m.add_function(wrap_pyfunction!(solarize, m)?)?;
        m.add_function(wrap_pyfunction!(color_inversion, m)?)?;
        m.add_function(wrap_pyfunction!(eight_colors, m)?)?;
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::canvas_filters;

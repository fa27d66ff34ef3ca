//! Fixed 3x3 integer kernels used by the edge filters.

/// A 3x3 matrix of integer weights.
///
/// Weights are row-major: `weights[row][col]` applies to the neighbor at
/// vertical offset `row - 1` and horizontal offset `col - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    weights: [[i32; 3]; 3],
}

impl Kernel {
    /// Wrap a weight matrix.
    pub const fn new(weights: [[i32; 3]; 3]) -> Self {
        Self { weights }
    }

    /// Weighted sum of a neighborhood laid out the same way as the kernel.
    #[inline]
    pub fn apply(&self, neighborhood: &[[i32; 3]; 3]) -> i32 {
        let mut sum = 0i32;
        for (weights, samples) in self.weights.iter().zip(neighborhood.iter()) {
            for (w, s) in weights.iter().zip(samples.iter()) {
                sum += w * s;
            }
        }
        sum
    }
}

/// Sobel derivative along x.
pub const SOBEL_HORIZONTAL: Kernel = Kernel::new([[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]);

/// Sobel derivative along y.
pub const SOBEL_VERTICAL: Kernel = Kernel::new([[1, 2, 1], [0, 0, 0], [-1, -2, -1]]);

/// 8-neighbor Laplacian.
pub const LAPLACIAN: Kernel = Kernel::new([[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]]);

//! Orthonormal 2-D DCT-II and its inverse for square blocks.
//!
//! Blocks are `size * size` values in natural (row-major) order, no level shift is
//! applied. With orthonormal scaling `inverse(forward(x)) == x` up to float rounding.

use std::f64::consts::PI;

/// Separable 2-D transform with pre-computed cosine and normalization tables.
#[derive(Debug, Clone)]
pub struct Dct2d {
    size: usize,
    /// `cos[u * size + x] = cos((2x + 1) * u * PI / (2 * size))`
    cos: Vec<f64>,
    /// C(0) = sqrt(1/size), C(u>0) = sqrt(2/size)
    norm: Vec<f64>,
}

impl Dct2d {
    pub fn new(size: usize) -> Self {
        let n = size as f64;
        let mut cos = vec![0.0; size * size];
        for u in 0..size {
            for x in 0..size {
                cos[u * size + x] = ((2 * x + 1) as f64 * u as f64 * PI / (2.0 * n)).cos();
            }
        }

        let mut norm = vec![(2.0 / n).sqrt(); size];
        if let Some(c0) = norm.first_mut() {
            *c0 = (1.0 / n).sqrt();
        }

        Self { size, cos, norm }
    }

    /// Pixel block to coefficients, in place.
    ///
    /// `temp` is scratch space of the same length as `block`.
    pub fn forward(&self, block: &mut [f64], temp: &mut [f64]) {
        let n = self.size;
        debug_assert_eq!(block.len(), n * n);
        debug_assert_eq!(temp.len(), n * n);

        // rows
        for row in 0..n {
            for u in 0..n {
                let mut sum = 0.0;
                for x in 0..n {
                    sum += block[row * n + x] * self.cos[u * n + x];
                }
                temp[row * n + u] = self.norm[u] * sum;
            }
        }

        // columns
        for col in 0..n {
            for v in 0..n {
                let mut sum = 0.0;
                for y in 0..n {
                    sum += temp[y * n + col] * self.cos[v * n + y];
                }
                block[v * n + col] = self.norm[v] * sum;
            }
        }
    }

    /// Coefficients back to a pixel block, in place.
    ///
    /// `temp` is scratch space of the same length as `block`.
    pub fn inverse(&self, block: &mut [f64], temp: &mut [f64]) {
        let n = self.size;
        debug_assert_eq!(block.len(), n * n);
        debug_assert_eq!(temp.len(), n * n);

        // columns
        for col in 0..n {
            for y in 0..n {
                let mut sum = 0.0;
                for v in 0..n {
                    sum += self.norm[v] * block[v * n + col] * self.cos[v * n + y];
                }
                temp[y * n + col] = sum;
            }
        }

        // rows
        for row in 0..n {
            for x in 0..n {
                let mut sum = 0.0;
                for u in 0..n {
                    sum += self.norm[u] * temp[row * n + u] * self.cos[u * n + x];
                }
                block[row * n + x] = sum;
            }
        }
    }
}

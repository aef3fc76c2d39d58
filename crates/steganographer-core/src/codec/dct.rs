//! Frequency domain concealer.
//!
//! The channel is cut into non-overlapping `block_size` x `block_size` blocks in
//! raster order. Every block carries one bit in the parity of one quantized DCT
//! coefficient. Rows and columns that do not fill a whole block are copied through
//! unchanged.
//!
//! A terminator character is always embedded behind the message, so extraction
//! yields exactly the embedded text.

use super::bits::{bits_to_message, message_to_bits, BITS_PER_CHAR};
use super::capacity::{dct_capacity, dct_total_blocks};
use super::transform::Dct2d;
use super::{ensure_capacity, Concealer};
use crate::channel::Channel;
use crate::error::{Result, SteganoError};

/// Largest accepted block edge, the transform keeps `block_size²` sized tables per block.
pub const MAX_BLOCK_SIZE: usize = 1024;

/// DCT concealer, its parameters are validated once and never change.
#[derive(Debug, Clone)]
pub struct DctAlgorithm {
    block_size: usize,
    dct_coefficient: usize,
    quantization_factor: u32,
    transform: Dct2d,
}

impl DctAlgorithm {
    /// # Arguments
    /// * `block_size` - edge length of a block, a positive power of two
    /// * `dct_coefficient` - 1-based row-major index of the carrying coefficient, `1..block_size²`
    /// * `quantization_factor` - step width used for the parity quantization, positive
    pub fn new(block_size: usize, dct_coefficient: usize, quantization_factor: u32) -> Result<Self> {
        if !block_size.is_power_of_two() {
            return Err(SteganoError::InvalidParameter {
                param: "block_size",
                reason: format!("{block_size} is not a positive power of 2"),
            });
        }
        if block_size > MAX_BLOCK_SIZE {
            return Err(SteganoError::InvalidParameter {
                param: "block_size",
                reason: format!("{block_size} is larger than {MAX_BLOCK_SIZE}"),
            });
        }

        let Some(coefficients) = block_size.checked_mul(block_size) else {
            return Err(SteganoError::InvalidParameter {
                param: "block_size",
                reason: format!("{block_size}² coefficients do not fit into memory"),
            });
        };
        if !(1..coefficients).contains(&dct_coefficient) {
            return Err(SteganoError::InvalidParameter {
                param: "dct_coefficient",
                reason: format!(
                    "{dct_coefficient} is not between 1 and {}",
                    coefficients.saturating_sub(1)
                ),
            });
        }

        if quantization_factor == 0 {
            return Err(SteganoError::InvalidParameter {
                param: "quantization_factor",
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            block_size,
            dct_coefficient,
            quantization_factor,
            transform: Dct2d::new(block_size),
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn dct_coefficient(&self) -> usize {
        self.dct_coefficient
    }

    pub fn quantization_factor(&self) -> u32 {
        self.quantization_factor
    }

    /// Flat index of the carrying coefficient inside a block.
    fn coefficient_index(&self) -> usize {
        let (row, col) = coefficient_position(self.dct_coefficient, self.block_size);
        row * self.block_size + col
    }

    fn load_block(&self, channel: &[u8], width: usize, block: usize, buf: &mut [f64]) {
        let n = self.block_size;
        let (top, left) = block_origin(block, width / n, n);
        for row in 0..n {
            let start = (top + row) * width + left;
            for (dst, src) in buf[row * n..(row + 1) * n]
                .iter_mut()
                .zip(&channel[start..start + n])
            {
                *dst = f64::from(*src);
            }
        }
    }

    fn store_block(&self, channel: &mut [u8], width: usize, block: usize, buf: &[f64]) {
        let n = self.block_size;
        let (top, left) = block_origin(block, width / n, n);
        for row in 0..n {
            let start = (top + row) * width + left;
            for (dst, src) in channel[start..start + n]
                .iter_mut()
                .zip(&buf[row * n..(row + 1) * n])
            {
                *dst = src.clamp(0.0, 255.0).round() as u8;
            }
        }
    }
}

impl Concealer for DctAlgorithm {
    fn embed(&self, channel: &Channel, message: &str) -> Result<Channel> {
        ensure_capacity(message, self.capacity(channel.shape())?)?;

        let mut bits = message_to_bits(message)?;
        bits.extend_from_slice(&[0; BITS_PER_CHAR]);

        let Some((_, width)) = channel.dimensions() else {
            return Err(SteganoError::InvalidShape(channel.shape().to_vec()));
        };
        let total_blocks = dct_total_blocks(channel.shape(), self.block_size)?;
        let coefficient = self.coefficient_index();

        // the border outside of whole blocks stays as it is
        let mut samples = channel.samples().to_vec();
        let mut buf = vec![0.0; self.block_size * self.block_size];
        let mut scratch = buf.clone();
        for block in 0..total_blocks {
            self.load_block(channel.samples(), width, block, &mut buf);
            self.transform.forward(&mut buf, &mut scratch);
            if let Some(bit) = bits.get(block) {
                buf[coefficient] =
                    embed_bit_in_coefficient(buf[coefficient], *bit, self.quantization_factor);
            }
            self.transform.inverse(&mut buf, &mut scratch);
            self.store_block(&mut samples, width, block, &buf);
        }

        Ok(channel.with_samples(samples))
    }

    fn extract(&self, channel: &Channel) -> Result<String> {
        let Some((_, width)) = channel.dimensions() else {
            return Err(SteganoError::InvalidShape(channel.shape().to_vec()));
        };
        let total_blocks = dct_total_blocks(channel.shape(), self.block_size)?;
        let coefficient = self.coefficient_index();

        let mut buf = vec![0.0; self.block_size * self.block_size];
        let mut scratch = buf.clone();
        let bits = (0..total_blocks).map(|block| {
            self.load_block(channel.samples(), width, block, &mut buf);
            self.transform.forward(&mut buf, &mut scratch);
            extract_bit_from_coefficient(buf[coefficient], self.quantization_factor)
        });

        Ok(bits_to_message(bits))
    }

    fn capacity(&self, shape: &[usize]) -> Result<usize> {
        dct_capacity(shape, self.block_size)
    }
}

/// top left sample of the `block`-th block in raster order
fn block_origin(block: usize, blocks_wide: usize, block_size: usize) -> (usize, usize) {
    (
        (block / blocks_wide) * block_size,
        (block % blocks_wide) * block_size,
    )
}

/// Maps a 1-based coefficient index to its (row, column) inside a block.
///
/// The index is used as row-major linear position, the DC term at (0, 0) is never
/// returned.
pub fn coefficient_position(coeff_index: usize, block_size: usize) -> (usize, usize) {
    let row = coeff_index / block_size;
    let col = coeff_index % block_size;

    if row == 0 && col == 0 {
        (0, 1)
    } else {
        (row, col)
    }
}

fn quantize(coeff: f64, quantization: u32) -> i64 {
    (coeff / f64::from(quantization)).round_ties_even() as i64
}

/// Forces the parity of the quantized coefficient to `bit` and scales it back.
///
/// ```
/// use steganographer_core::codec::dct::embed_bit_in_coefficient;
///
/// assert_eq!(embed_bit_in_coefficient(10.5, 0, 10), 0.0);
/// ```
pub fn embed_bit_in_coefficient(coeff: f64, bit: u8, quantization: u32) -> f64 {
    let mut quantized = quantize(coeff, quantization);
    let odd = quantized.rem_euclid(2) == 1;

    match (bit & 1, odd) {
        (0, true) => quantized -= 1,
        (1, false) => quantized += 1,
        _ => {}
    }

    (quantized * i64::from(quantization)) as f64
}

/// Parity of the quantized coefficient, `0` for even and `1` for odd.
pub fn extract_bit_from_coefficient(coeff: f64, quantization: u32) -> u8 {
    quantize(coeff, quantization).rem_euclid(2) as u8
}

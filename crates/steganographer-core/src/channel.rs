//! A single color plane, handed to the concealers.

use crate::error::{Result, SteganoError};

/// Row-major grid of 8 bit samples with an arbitrary number of dimensions.
///
/// Image planes are always 2-D (`[height, width]`), other shapes only matter for the
/// LSB concealer that works on the flattened samples anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    shape: Vec<usize>,
    samples: Vec<u8>,
}

impl Channel {
    pub fn new(shape: Vec<usize>, samples: Vec<u8>) -> Result<Self> {
        if shape.iter().product::<usize>() != samples.len() {
            return Err(SteganoError::InvalidShape(shape));
        }

        Ok(Self { shape, samples })
    }

    /// builds a 2-D channel where every sample is computed from its (row, column)
    pub fn from_fn(height: usize, width: usize, f: impl Fn(usize, usize) -> u8) -> Self {
        let mut samples = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                samples.push(f(row, col));
            }
        }

        Self {
            shape: vec![height, width],
            samples,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// `(height, width)` for 2-D channels, `None` otherwise
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        match self.shape.as_slice() {
            [height, width] => Some((*height, *width)),
            _ => None,
        }
    }

    pub(crate) fn with_samples(&self, samples: Vec<u8>) -> Self {
        debug_assert_eq!(samples.len(), self.samples.len());
        Self {
            shape: self.shape.clone(),
            samples,
        }
    }
}

//! Least significant bit concealer.
//!
//! Samples are visited in raster order, each one carries one bit of the message.
//! Embedding clears the lowest bit of *every* sample first, also the ones behind the
//! message, and then adds the message bits on top.

use super::bits::{bits_to_message, message_to_bits, BITS_PER_CHAR};
use super::capacity::lsb_capacity;
use super::{ensure_capacity, Concealer};
use crate::channel::Channel;
use crate::error::{Result, SteganoError};

/// Stateless LSB concealer, works on channels of any shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LsbAlgorithm;

impl Concealer for LsbAlgorithm {
    fn embed(&self, channel: &Channel, message: &str) -> Result<Channel> {
        ensure_capacity(message, self.capacity(channel.shape())?)?;

        let samples = insert_message(channel.samples(), message)?;
        Ok(channel.with_samples(samples))
    }

    fn extract(&self, channel: &Channel) -> Result<String> {
        Ok(extract_message(channel.samples()))
    }

    fn capacity(&self, shape: &[usize]) -> Result<usize> {
        Ok(lsb_capacity(shape))
    }
}

/// Rounds every sample down to the next even value.
pub fn even_samples(samples: &[u8]) -> Vec<u8> {
    samples.iter().map(|s| s & !1).collect()
}

/// Hides `message` in the lowest bits of the flattened `samples`.
///
/// The bit budget is checked against the raw sample count here, independent of the
/// character capacity that [`LsbAlgorithm::embed`] already verified. Failures are
/// reported in characters like every other capacity error.
pub fn insert_message(samples: &[u8], message: &str) -> Result<Vec<u8>> {
    let bits = message_to_bits(message)?;
    if bits.len() > samples.len() {
        return Err(SteganoError::CapacityExceeded {
            required: bits.len() / BITS_PER_CHAR,
            available: samples.len() / BITS_PER_CHAR,
        });
    }

    let mut evened = even_samples(samples);
    for (sample, bit) in evened.iter_mut().zip(bits) {
        // lowest bit is clear, the addition never carries
        *sample += bit;
    }

    Ok(evened)
}

/// Reads the lowest bit of every sample until the message terminates.
pub fn extract_message(samples: &[u8]) -> String {
    bits_to_message(samples.iter().map(|s| s % 2))
}

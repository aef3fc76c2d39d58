//! The concealers that hide text inside a single [`Channel`].
//!
//! Both variants of [`Algorithm`] fulfil the same [`Concealer`] contract, so callers
//! can pick one at runtime without caring about its internals.

pub mod bits;
pub mod capacity;
pub mod dct;
pub mod lsb;
pub mod transform;

use enum_dispatch::enum_dispatch;

pub use dct::DctAlgorithm;
pub use lsb::LsbAlgorithm;

use crate::channel::Channel;
use crate::error::{Result, SteganoError};

/// hides text in a channel and brings it back
#[enum_dispatch]
pub trait Concealer {
    /// Returns a new channel that carries `message`, the input stays untouched.
    ///
    /// Fails with [`SteganoError::CapacityExceeded`] before any work is done
    /// if `message` holds more characters than [`Concealer::capacity`] allows.
    fn embed(&self, channel: &Channel, message: &str) -> Result<Channel>;

    /// Reads the text back, stopping at the first terminator.
    fn extract(&self, channel: &Channel) -> Result<String>;

    /// Maximum number of characters that fit into a channel of `shape`.
    fn capacity(&self, shape: &[usize]) -> Result<usize>;
}

/// The available concealers, dispatched by variant.
#[enum_dispatch(Concealer)]
#[derive(Debug, Clone)]
pub enum Algorithm {
    Lsb(LsbAlgorithm),
    Dct(DctAlgorithm),
}

/// shared pre-flight check of every `embed`
pub(crate) fn ensure_capacity(message: &str, available: usize) -> Result<()> {
    let required = message.chars().count();
    if required > available {
        return Err(SteganoError::CapacityExceeded {
            required,
            available,
        });
    }

    Ok(())
}

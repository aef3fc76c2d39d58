//! # Steganographer Core API
//!
//! Hides text inside the color planes of an image, either in the least significant
//! bits ([`LsbAlgorithm`][lsb]) or in the parity of quantized DCT coefficients
//! ([`DctAlgorithm`][dct]).
//!
//! The building blocks are layered:
//! - [`codec`] works on a single [`Channel`] and knows nothing about images
//! - [`Carrier`] splits an image into color planes and writes them back
//! - [`SecretMessage`] seals a text and spreads it over the three planes
//! - [`api`] wraps it all into builders that read and write files
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbImage::from_pixel(64, 64, image::Rgb([120, 80, 200]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! steganographer_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = steganographer_core::api::unveil::prepare()
//!     .with_secret_image(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! ## Work on a single plane
//!
//! ```rust
//! use steganographer_core::{Algorithm, Channel, Concealer, LsbAlgorithm};
//!
//! let channel = Channel::from_fn(8, 8, |row, col| (row * 8 + col) as u8);
//! let lsb: Algorithm = LsbAlgorithm.into();
//!
//! let secret = lsb.embed(&channel, "Hello!").unwrap();
//! assert_eq!(lsb.extract(&secret).unwrap(), "Hello!");
//! ```
//!
//! [lsb]: ./codec/lsb/struct.LsbAlgorithm.html
//! [dct]: ./codec/dct/struct.DctAlgorithm.html

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod api;
pub mod channel;
pub mod codec;
pub mod error;
pub mod media;
pub mod message;

pub use crate::channel::Channel;
pub use crate::codec::{Algorithm, Concealer, DctAlgorithm, LsbAlgorithm};
pub use crate::error::{Result, SteganoError};
pub use crate::media::{AlgorithmType, Carrier, CodecOptions, DctCodecOptions, Persist};
pub use crate::message::SecretMessage;

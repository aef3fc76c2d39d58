//! Layout of a sealed text across the three color planes.
//!
//! | plane | content                                     |
//! |-------|---------------------------------------------|
//! | red   | base64 of the encrypted payload             |
//! | green | base64 of the wrapped content key           |
//! | blue  | base64 of the secret key that unwraps it    |

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::debug;
use rand::{CryptoRng, RngCore};
use steganographer_seal::{KeyPair, Sealed};

use crate::codec::Algorithm;
use crate::error::{Result, SteganoError};
use crate::media::{Carrier, COLOR_CHANNELS};

const PAYLOAD_CHANNEL: usize = 0;
const WRAPPED_KEY_CHANNEL: usize = 1;
const SECRET_KEY_CHANNEL: usize = 2;

/// A sealed text, already encoded as one string per color plane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretMessage {
    payload: String,
    wrapped_key: String,
    secret_key: String,
}

impl SecretMessage {
    /// Seals `plaintext` under a freshly generated key pair.
    pub fn seal<R: RngCore + CryptoRng>(plaintext: &str, rng: &mut R) -> Result<Self> {
        let keys = KeyPair::generate(rng);
        let sealed = steganographer_seal::seal(rng, keys.public_key(), plaintext.as_bytes())
            .map_err(SteganoError::EncryptionError)?;

        Ok(Self {
            payload: BASE64.encode(&sealed.payload),
            wrapped_key: BASE64.encode(&sealed.wrapped_key),
            secret_key: BASE64.encode(keys.secret_bytes()),
        })
    }

    /// Decrypts the message again.
    pub fn open(&self) -> Result<String> {
        let keys = KeyPair::from_secret_slice(&decode_plane("secret key", &self.secret_key)?)
            .map_err(SteganoError::DecryptionError)?;
        let sealed = Sealed {
            payload: decode_plane("payload", &self.payload)?,
            wrapped_key: decode_plane("wrapped key", &self.wrapped_key)?,
        };

        let plaintext =
            steganographer_seal::open(&keys, &sealed).map_err(SteganoError::DecryptionError)?;

        String::from_utf8(plaintext)
            .map_err(|e| SteganoError::InvalidTextData(format!("plaintext is no UTF-8: {e}")))
    }

    /// The plane strings in red, green, blue order.
    pub fn planes(&self) -> [&str; COLOR_CHANNELS] {
        let mut planes = [""; COLOR_CHANNELS];
        planes[PAYLOAD_CHANNEL] = &self.payload;
        planes[WRAPPED_KEY_CHANNEL] = &self.wrapped_key;
        planes[SECRET_KEY_CHANNEL] = &self.secret_key;

        planes
    }

    /// Writes all planes into `carrier`.
    ///
    /// Every plane is checked against the capacity first, on error the carrier stays
    /// untouched.
    pub fn write_to(&self, carrier: &mut Carrier, algorithm: &Algorithm) -> Result<()> {
        let available = carrier.capacity(algorithm)?;
        let required = self
            .planes()
            .iter()
            .map(|plane| plane.chars().count())
            .max()
            .unwrap_or_default();
        if required > available {
            return Err(SteganoError::CapacityExceeded {
                required,
                available,
            });
        }

        for (index, plane) in self.planes().into_iter().enumerate() {
            carrier.encode_channel(index, algorithm, plane)?;
        }

        Ok(())
    }

    /// Reads all planes back out of `carrier`.
    pub fn read_from(carrier: &Carrier, algorithm: &Algorithm) -> Result<Self> {
        let mut planes = Vec::with_capacity(COLOR_CHANNELS);
        for index in 0..COLOR_CHANNELS {
            let plane = carrier.decode_channel(index, algorithm)?;
            if plane.is_empty() {
                debug!("Color channel {index} carries no data");
                return Err(SteganoError::NoSecretData);
            }
            planes.push(plane);
        }

        let secret_key = planes.swap_remove(SECRET_KEY_CHANNEL);
        let wrapped_key = planes.swap_remove(WRAPPED_KEY_CHANNEL);
        let payload = planes.swap_remove(PAYLOAD_CHANNEL);

        Ok(Self {
            payload,
            wrapped_key,
            secret_key,
        })
    }

    /// Seals `plaintext` and hides it inside `carrier`.
    pub fn hide<R: RngCore + CryptoRng>(
        carrier: &mut Carrier,
        algorithm: &Algorithm,
        plaintext: &str,
        rng: &mut R,
    ) -> Result<()> {
        Self::seal(plaintext, rng)?.write_to(carrier, algorithm)
    }

    /// Reads the planes of `carrier` and decrypts the hidden text.
    pub fn unveil(carrier: &Carrier, algorithm: &Algorithm) -> Result<String> {
        Self::read_from(carrier, algorithm)?.open()
    }
}

fn decode_plane(name: &str, plane: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(plane)
        .map_err(|e| SteganoError::InvalidTextData(format!("{name} is no valid base64: {e}")))
}

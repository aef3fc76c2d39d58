//! # Hybrid encryption for hidden messages
//!
//! A fresh content key encrypts the message with XChaCha20Poly1305. The content key
//! itself is wrapped for the recipient: an ephemeral X25519 key agreement feeds
//! HKDF-SHA256, the derived key encrypts the content key with ChaCha20Poly1305.
//!
//! All randomness comes from the `rng` handed in by the caller.

use chacha20poly1305::aead::Aead;
use chacha20poly1305::{ChaCha20Poly1305, KeyInit, Nonce, XChaCha20Poly1305, XNonce};
use hkdf::Hkdf;
use rand_core::{CryptoRng, RngCore};
use sha2::Sha256;
use x25519_dalek::{EphemeralSecret, PublicKey, StaticSecret};
use zeroize::Zeroize;

pub mod error;

pub use crate::error::SealError;

pub const KEY_LEN: usize = 32;
const PAYLOAD_NONCE_LEN: usize = 24;
const WRAP_NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;
const WRAPPED_KEY_LEN: usize = KEY_LEN + WRAP_NONCE_LEN + KEY_LEN + TAG_LEN;
const HKDF_INFO: &[u8] = b"steganographer-seal/v1 content key";

pub type Result<T> = std::result::Result<T, SealError>;

/// X25519 key pair of the recipient
pub struct KeyPair {
    secret: StaticSecret,
    public: PublicKey,
}

impl KeyPair {
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::from_secret(StaticSecret::random_from_rng(rng))
    }

    pub fn from_secret_bytes(mut bytes: [u8; KEY_LEN]) -> Self {
        let secret = StaticSecret::from(bytes);
        bytes.zeroize();

        Self::from_secret(secret)
    }

    pub fn from_secret_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LEN] =
            bytes
                .try_into()
                .map_err(|_| SealError::InvalidKeyLength {
                    expected: KEY_LEN,
                    actual: bytes.len(),
                })?;

        Ok(Self::from_secret_bytes(bytes))
    }

    fn from_secret(secret: StaticSecret) -> Self {
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    /// Raw secret key, the caller is responsible to zeroize it.
    pub fn secret_bytes(&self) -> [u8; KEY_LEN] {
        self.secret.to_bytes()
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }
}

/// Result of [`seal`], both parts are needed to [`open`] it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    /// message ciphertext followed by its 24 byte nonce
    pub payload: Vec<u8>,
    /// ephemeral public key, 12 byte nonce and the encrypted content key
    pub wrapped_key: Vec<u8>,
}

/// encrypt `plaintext` so that only the owner of `recipient`'s secret key can read it
pub fn seal<R: RngCore + CryptoRng>(
    rng: &mut R,
    recipient: &PublicKey,
    plaintext: &[u8],
) -> Result<Sealed> {
    let mut content_key = [0u8; KEY_LEN];
    rng.fill_bytes(&mut content_key);
    let mut payload_nonce = [0u8; PAYLOAD_NONCE_LEN];
    rng.fill_bytes(&mut payload_nonce);

    let mut payload = XChaCha20Poly1305::new(&content_key.into())
        .encrypt(XNonce::from_slice(&payload_nonce), plaintext)
        .map_err(SealError::EncryptionError)?;
    payload.extend_from_slice(&payload_nonce);

    let ephemeral = EphemeralSecret::random_from_rng(&mut *rng);
    let ephemeral_public = PublicKey::from(&ephemeral);
    let shared = ephemeral.diffie_hellman(recipient);
    let mut wrapping_key = derive_key(shared.as_bytes(), ephemeral_public.as_bytes())?;

    let mut wrap_nonce = [0u8; WRAP_NONCE_LEN];
    rng.fill_bytes(&mut wrap_nonce);
    let wrapped = ChaCha20Poly1305::new(&wrapping_key.into())
        .encrypt(Nonce::from_slice(&wrap_nonce), content_key.as_slice())
        .map_err(SealError::EncryptionError);

    content_key.zeroize();
    wrapping_key.zeroize();
    payload_nonce.zeroize();

    let mut wrapped_key = Vec::with_capacity(WRAPPED_KEY_LEN);
    wrapped_key.extend_from_slice(ephemeral_public.as_bytes());
    wrapped_key.extend_from_slice(&wrap_nonce);
    wrapped_key.extend_from_slice(&wrapped?);

    Ok(Sealed {
        payload,
        wrapped_key,
    })
}

/// unwraps the content key with `keys` and decrypts the payload
pub fn open(keys: &KeyPair, sealed: &Sealed) -> Result<Vec<u8>> {
    ensure_len(&sealed.wrapped_key, WRAPPED_KEY_LEN)?;
    ensure_len(&sealed.payload, PAYLOAD_NONCE_LEN + TAG_LEN)?;

    let (ephemeral_public, rest) = sealed.wrapped_key.split_at(KEY_LEN);
    let (wrap_nonce, wrapped) = rest.split_at(WRAP_NONCE_LEN);
    let mut ephemeral_bytes = [0u8; KEY_LEN];
    ephemeral_bytes.copy_from_slice(ephemeral_public);

    let shared = keys
        .secret
        .diffie_hellman(&PublicKey::from(ephemeral_bytes));
    let mut wrapping_key = derive_key(shared.as_bytes(), &ephemeral_bytes)?;

    let content_key = ChaCha20Poly1305::new(&wrapping_key.into())
        .decrypt(Nonce::from_slice(wrap_nonce), wrapped)
        .map_err(SealError::DecryptionError);
    wrapping_key.zeroize();
    let mut content_key = content_key?;
    let mut key: [u8; KEY_LEN] = content_key
        .as_slice()
        .try_into()
        .map_err(|_| SealError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: content_key.len(),
        })?;
    content_key.zeroize();

    let split = sealed.payload.len() - PAYLOAD_NONCE_LEN;
    let (ciphertext, payload_nonce) = sealed.payload.split_at(split);
    let plaintext = XChaCha20Poly1305::new(&key.into())
        .decrypt(XNonce::from_slice(payload_nonce), ciphertext)
        .map_err(SealError::DecryptionError);
    key.zeroize();

    plaintext
}

fn derive_key(shared_secret: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN]> {
    let mut output_key_material = [0u8; KEY_LEN];
    Hkdf::<Sha256>::new(Some(salt), shared_secret)
        .expand(HKDF_INFO, &mut output_key_material)
        .map_err(|_| SealError::KeyDerivationError)?;

    Ok(output_key_material)
}

fn ensure_len(data: &[u8], expected: usize) -> Result<()> {
    if data.len() < expected {
        return Err(SealError::Truncated {
            expected,
            actual: data.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_seal_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        let keys = KeyPair::generate(&mut rng);
        let data = b"lorem ipsum dolor sit amet, consectetur adipiscing elit.";

        let sealed = seal(&mut rng, keys.public_key(), data).unwrap();
        let opened = open(&keys, &sealed).unwrap();

        assert_ne!(data.as_slice(), &sealed.payload[..data.len()]);
        assert_eq!(sealed.wrapped_key.len(), WRAPPED_KEY_LEN);
        assert_eq!(sealed.payload.len(), data.len() + TAG_LEN + PAYLOAD_NONCE_LEN);
        assert_eq!(data.as_slice(), opened.as_slice());
    }

    #[test]
    fn test_same_seed_gives_same_output() {
        let seal_with_seed = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let keys = KeyPair::generate(&mut rng);
            seal(&mut rng, keys.public_key(), b"deterministic").unwrap()
        };

        assert_eq!(seal_with_seed(7), seal_with_seed(7));
        assert_ne!(seal_with_seed(7), seal_with_seed(8));
    }

    #[test]
    fn test_wrong_key_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let keys = KeyPair::generate(&mut rng);
        let other = KeyPair::generate(&mut rng);

        let sealed = seal(&mut rng, keys.public_key(), b"for keys only").unwrap();

        assert!(matches!(
            open(&other, &sealed),
            Err(SealError::DecryptionError(_))
        ));
    }

    #[test]
    fn test_tampered_payload_fails() {
        let mut rng = StdRng::seed_from_u64(2);
        let keys = KeyPair::generate(&mut rng);
        let mut sealed = seal(&mut rng, keys.public_key(), b"integrity").unwrap();
        sealed.payload[0] ^= 0x01;

        assert!(matches!(
            open(&keys, &sealed),
            Err(SealError::DecryptionError(_))
        ));
    }

    #[test]
    fn test_truncated_input_fails() {
        let mut rng = StdRng::seed_from_u64(3);
        let keys = KeyPair::generate(&mut rng);
        let mut sealed = seal(&mut rng, keys.public_key(), b"short").unwrap();
        sealed.wrapped_key.truncate(40);

        assert!(matches!(
            open(&keys, &sealed),
            Err(SealError::Truncated { expected: WRAPPED_KEY_LEN, actual: 40 })
        ));
    }

    #[test]
    fn test_secret_key_export_and_import() {
        let mut rng = StdRng::seed_from_u64(4);
        let keys = KeyPair::generate(&mut rng);
        let sealed = seal(&mut rng, keys.public_key(), b"exported").unwrap();

        let restored = KeyPair::from_secret_slice(&keys.secret_bytes()).unwrap();
        assert_eq!(restored.public_key(), keys.public_key());
        assert_eq!(open(&restored, &sealed).unwrap(), b"exported");

        assert!(matches!(
            KeyPair::from_secret_slice(&[0u8; 31]),
            Err(SealError::InvalidKeyLength { expected: 32, actual: 31 })
        ));
    }
}

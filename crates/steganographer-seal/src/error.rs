pub use chacha20poly1305::Error as Chacha20Poly1305Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SealError {
    #[error("Key derivation error")]
    KeyDerivationError,

    #[error("Decryption error")]
    DecryptionError(Chacha20Poly1305Error),

    #[error("Encryption error")]
    EncryptionError(Chacha20Poly1305Error),

    #[error("Sealed data is truncated, expected at least {expected} bytes but got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("Secret key must be {expected} bytes long but was {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
}

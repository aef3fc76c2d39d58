use thiserror::Error;

pub use steganographer_seal::SealError;

pub type Result<T> = std::result::Result<T, SteganoError>;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a message that does not fit into the carrier, always reported in characters
    #[error("Capacity Error: message requires {required} characters but only {available} are available")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents an algorithm constructed with invalid parameters, for example a block size of 6
    #[error("Invalid parameter `{param}`: {reason}")]
    InvalidParameter { param: &'static str, reason: String },

    /// Represents a channel whose shape does not fit the algorithm or its sample count
    #[error("Invalid channel shape {0:?}")]
    InvalidShape(Vec<usize>),

    /// Represents a message character outside of the 7 bit range or the reserved terminator
    #[error("Character {0:?} cannot be represented in 7 bits")]
    UnsupportedCharacter(char),

    /// Represents an unsupported carrier media. For example, a WAV file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a color plane index outside of R, G and B
    #[error("Color channel {0} does not exist, expected 0, 1 or 2")]
    InvalidChannel(usize),

    /// Represents unveiled plane data that is not the expected text encoding
    #[error("Invalid text data found inside a color channel: {0}")]
    InvalidTextData(String),

    /// Represents an unveil of no secret data. For example when a media did not contain any secrets
    #[error("No secret data found")]
    NoSecretData,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    EncryptionError(#[source] SealError),

    /// Represents an error when decrypting the data
    #[error("Decryption error")]
    DecryptionError(#[source] SealError),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}

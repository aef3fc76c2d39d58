use std::path::{Path, PathBuf};

use log::info;

use crate::{Carrier, CodecOptions, SecretMessage, SteganoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_image: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they have to match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn with_secret_image(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and return the hidden message
    pub fn execute(self) -> Result<String, SteganoError> {
        let Some(secret_image) = self.secret_image else {
            return Err(SteganoError::CarrierNotSet);
        };

        let algorithm = self.options.algorithm()?;
        let carrier = Carrier::from_file(&secret_image)?;
        let message = SecretMessage::unveil(&carrier, &algorithm)?;
        info!(
            "Unveiled {} characters from {secret_image:?}",
            message.chars().count()
        );

        Ok(message)
    }
}

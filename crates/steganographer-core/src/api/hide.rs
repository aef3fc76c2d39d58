use std::path::{Path, PathBuf};

use log::info;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::media::Persist;
use crate::{Carrier, CodecOptions, SecretMessage, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Hides the message with keys drawn from the operating system.
    pub fn execute(self) -> Result<(), SteganoError> {
        self.execute_with_rng(&mut OsRng)
    }

    /// Hides the message, all key material comes from `rng`.
    pub fn execute_with_rng<R: RngCore + CryptoRng>(self, rng: &mut R) -> Result<(), SteganoError> {
        let Some(message) = self.message else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let algorithm = self.options.algorithm()?;
        let mut carrier = Carrier::from_file(&image)?;
        SecretMessage::hide(&mut carrier, &algorithm, &message, rng)?;
        carrier.save_as(&output)?;
        info!(
            "Hid message in {image:?} with {}, written to {output:?}",
            self.options.algorithm_type()
        );

        Ok(())
    }
}

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

pub use image::{ImageFormat, RgbImage};
use log::{debug, error, warn};

use super::Persist;
use crate::channel::Channel;
use crate::codec::{Algorithm, Concealer};
use crate::error::{Result, SteganoError};

/// Number of color planes that can carry data, R, G and B
pub const COLOR_CHANNELS: usize = 3;

/// an image as carrier for secrets, every color plane is one [`Channel`]
#[derive(Debug, Clone)]
pub struct Carrier {
    image: RgbImage,
}

impl Carrier {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            return Err(SteganoError::UnsupportedMedia);
        };

        match ext.to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" => Ok(Self::from_image(
                image::open(f)
                    .map_err(|e| {
                        error!("Error opening image {f:?}: {e}");
                        SteganoError::InvalidImageMedia
                    })?
                    .to_rgb8(),
            )),
            _ => Err(SteganoError::UnsupportedMedia),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes).map_err(|e| {
            error!("Error decoding image from memory: {e}");
            SteganoError::InvalidImageMedia
        })?;

        Ok(Self::from_image(image.to_rgb8()))
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Copies color plane `index` out of the image.
    pub fn channel(&self, index: usize) -> Result<Channel> {
        ensure_color_channel(index)?;
        let (width, height) = self.image.dimensions();
        let samples = self.image.pixels().map(|p| p.0[index]).collect();

        Channel::new(vec![height as usize, width as usize], samples)
    }

    /// Writes `channel` back as color plane `index`, shapes have to match.
    pub fn set_channel(&mut self, index: usize, channel: &Channel) -> Result<()> {
        ensure_color_channel(index)?;
        let (width, height) = self.image.dimensions();
        if channel.dimensions() != Some((height as usize, width as usize)) {
            return Err(SteganoError::InvalidShape(channel.shape().to_vec()));
        }

        for (pixel, sample) in self.image.pixels_mut().zip(channel.samples()) {
            pixel.0[index] = *sample;
        }

        Ok(())
    }

    pub fn encode_channel(
        &mut self,
        index: usize,
        algorithm: &Algorithm,
        msg: &str,
    ) -> Result<&mut Self> {
        let plane = self.channel(index)?;
        let modified = algorithm.embed(&plane, msg)?;
        self.set_channel(index, &modified)?;
        debug!("Hid {} characters in color channel {index}", msg.len());

        Ok(self)
    }

    pub fn decode_channel(&self, index: usize, algorithm: &Algorithm) -> Result<String> {
        let plane = self.channel(index)?;
        algorithm.extract(&plane)
    }

    /// Characters that fit into a single color plane.
    pub fn capacity(&self, algorithm: &Algorithm) -> Result<usize> {
        let (width, height) = self.image.dimensions();
        algorithm.capacity(&[height as usize, width as usize])
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W, format: ImageFormat) -> Result<()> {
        self.image.write_to(&mut writer, format).map_err(|e| {
            error!("Error saving image: {e}");
            SteganoError::ImageEncodingError
        })
    }
}

impl Persist for Carrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let format = ImageFormat::from_path(file).unwrap_or(ImageFormat::Png);
        if format == ImageFormat::Jpeg {
            // lossy re-compression destroys LSB data and most DCT parities
            warn!("Saving {file:?} as JPEG, hidden data will likely not survive");
        }

        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer, format)?;
        writer
            .flush()
            .map_err(|source| SteganoError::WriteError { source })
    }
}

fn ensure_color_channel(index: usize) -> Result<()> {
    if index >= COLOR_CHANNELS {
        return Err(SteganoError::InvalidChannel(index));
    }

    Ok(())
}

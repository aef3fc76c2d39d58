use std::path::PathBuf;

use clap::Args;
use steganographer_core::DctCodecOptions;

use super::AlgorithmArgs;
use crate::CliResult;

/// Hides an encrypted text message in a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Final image will be stored as file, use PNG to keep the secret intact
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    #[command(flatten)]
    pub algorithm: AlgorithmArgs,
}

impl HideArgs {
    pub fn run(self, dct: DctCodecOptions) -> CliResult<()> {
        steganographer_core::api::hide::prepare()
            .with_image(&self.image)
            .with_output(&self.write_to_file)
            .with_message(&self.message)
            .with_options(self.algorithm.codec_options(dct))
            .execute()?;

        Ok(())
    }
}

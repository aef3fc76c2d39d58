use std::path::PathBuf;

use clap::Args;
use steganographer_core::DctCodecOptions;

use super::AlgorithmArgs;
use crate::CliResult;

/// Unveils a hidden text message and prints it
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub image: PathBuf,

    #[command(flatten)]
    pub algorithm: AlgorithmArgs,
}

impl UnveilArgs {
    pub fn run(self, dct: DctCodecOptions) -> CliResult<()> {
        println!("{}", self.unveil(dct)?);

        Ok(())
    }

    pub fn unveil(self, dct: DctCodecOptions) -> CliResult<String> {
        Ok(steganographer_core::api::unveil::prepare()
            .with_secret_image(&self.image)
            .with_options(self.algorithm.codec_options(dct))
            .execute()?)
    }
}

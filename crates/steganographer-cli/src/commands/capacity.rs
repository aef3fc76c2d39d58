use std::path::PathBuf;

use clap::Args;
use steganographer_core::DctCodecOptions;

use super::AlgorithmArgs;
use crate::CliResult;

/// Prints how many characters fit into each color plane of an image
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Image to inspect
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    #[command(flatten)]
    pub algorithm: AlgorithmArgs,
}

impl CapacityArgs {
    pub fn run(self, dct: DctCodecOptions) -> CliResult<()> {
        let capacity = steganographer_core::api::capacity::prepare()
            .with_image(&self.image)
            .with_options(self.algorithm.codec_options(dct))
            .execute()?;
        println!("{capacity}");

        Ok(())
    }
}

pub mod capacity;
pub mod hide;
pub mod unveil;

use clap::Args;
use steganographer_core::{AlgorithmType, CodecOptions, DctCodecOptions};

/// Algorithm selection shared by all commands
#[derive(Args, Debug)]
pub struct AlgorithmArgs {
    /// Steganography algorithm, `lsb` or `dct`
    #[arg(long, value_name = "algorithm", default_value_t = AlgorithmType::Lsb)]
    pub algorithm: AlgorithmType,
}

impl AlgorithmArgs {
    pub fn codec_options(&self, dct: DctCodecOptions) -> CodecOptions {
        match self.algorithm {
            AlgorithmType::Lsb => CodecOptions::Lsb,
            AlgorithmType::Dct => CodecOptions::Dct(dct),
        }
    }
}

use clap::{Parser, Subcommand};
use steganographer_core::media::codec_options::{
    DEFAULT_BLOCK_SIZE, DEFAULT_DCT_COEFFICIENT, DEFAULT_QUANTIZATION_FACTOR,
};
use steganographer_core::DctCodecOptions;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// DCT: edge length of the square blocks, a power of 2
    #[arg(long, global = true, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,

    /// DCT: row-major index of the coefficient that carries the bit, never 0
    #[arg(long, global = true, default_value_t = DEFAULT_DCT_COEFFICIENT)]
    pub dct_coefficient: usize,

    /// DCT: quantization step of the carrying coefficient
    #[arg(long, global = true, default_value_t = DEFAULT_QUANTIZATION_FACTOR)]
    pub quantization_factor: u32,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn dct_options(&self) -> DctCodecOptions {
        DctCodecOptions::default()
            .with_block_size(self.block_size)
            .with_dct_coefficient(self.dct_coefficient)
            .with_quantization_factor(self.quantization_factor)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}

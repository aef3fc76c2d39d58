use std::fmt;
use std::str::FromStr;

use crate::codec::{Algorithm, DctAlgorithm, LsbAlgorithm};
use crate::error::{Result, SteganoError};

/// Default edge length of a DCT block
pub const DEFAULT_BLOCK_SIZE: usize = 8;
/// Default carrying coefficient, 1-based and never the DC term
pub const DEFAULT_DCT_COEFFICIENT: usize = 3;
/// Default quantization step for the coefficient parity
pub const DEFAULT_QUANTIZATION_FACTOR: u32 = 10;

/// Codec configuration for hiding and unveiling
///
/// The same options have to be used for both directions, nothing about the
/// algorithm is stored inside the carrier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CodecOptions {
    #[default]
    Lsb,
    Dct(DctCodecOptions),
}

impl CodecOptions {
    /// Builds the validated concealer for these options.
    pub fn algorithm(&self) -> Result<Algorithm> {
        Ok(match self {
            CodecOptions::Lsb => LsbAlgorithm.into(),
            CodecOptions::Dct(opts) => DctAlgorithm::new(
                opts.block_size,
                opts.dct_coefficient,
                opts.quantization_factor,
            )?
            .into(),
        })
    }

    pub fn algorithm_type(&self) -> AlgorithmType {
        match self {
            CodecOptions::Lsb => AlgorithmType::Lsb,
            CodecOptions::Dct(_) => AlgorithmType::Dct,
        }
    }
}

/// Options for DCT (Discrete Cosine Transform) encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DctCodecOptions {
    /// Edge length of the square blocks, must be a power of 2.
    pub block_size: usize,

    /// Row-major, 1-based index of the coefficient that carries the bit of a block.
    /// Must be between 1 and `block_size² - 1`.
    pub dct_coefficient: usize,

    /// Step width of the quantization, bigger values survive more distortion but
    /// change the image more.
    pub quantization_factor: u32,
}

impl Default for DctCodecOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            dct_coefficient: DEFAULT_DCT_COEFFICIENT,
            quantization_factor: DEFAULT_QUANTIZATION_FACTOR,
        }
    }
}

impl DctCodecOptions {
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_dct_coefficient(mut self, dct_coefficient: usize) -> Self {
        self.dct_coefficient = dct_coefficient;
        self
    }

    pub fn with_quantization_factor(mut self, quantization_factor: u32) -> Self {
        self.quantization_factor = quantization_factor;
        self
    }
}

/// Name of an algorithm, as used on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlgorithmType {
    #[default]
    Lsb,
    Dct,
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmType::Lsb => write!(f, "lsb"),
            AlgorithmType::Dct => write!(f, "dct"),
        }
    }
}

impl FromStr for AlgorithmType {
    type Err = SteganoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lsb" => Ok(AlgorithmType::Lsb),
            "dct" => Ok(AlgorithmType::Dct),
            _ => Err(SteganoError::InvalidParameter {
                param: "algorithm",
                reason: format!("unknown algorithm `{s}`, expected `lsb` or `dct`"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Concealer;

    #[test]
    fn should_default_to_lsb() {
        assert_eq!(CodecOptions::default(), CodecOptions::Lsb);
        assert!(matches!(
            CodecOptions::default().algorithm().unwrap(),
            Algorithm::Lsb(_)
        ));
    }

    #[test]
    fn should_build_dct_with_defaults() {
        let algorithm = CodecOptions::Dct(DctCodecOptions::default())
            .algorithm()
            .unwrap();

        let Algorithm::Dct(dct) = &algorithm else {
            panic!("expected the DCT variant");
        };
        assert_eq!(dct.block_size(), 8);
        assert_eq!(dct.dct_coefficient(), 3);
        assert_eq!(dct.quantization_factor(), 10);
        assert_eq!(algorithm.capacity(&[128, 128]).unwrap(), 35);
    }

    #[test]
    fn should_fail_on_invalid_dct_options() {
        let opts = CodecOptions::Dct(DctCodecOptions::default().with_block_size(12));
        assert!(matches!(
            opts.algorithm(),
            Err(SteganoError::InvalidParameter { param: "block_size", .. })
        ));
    }

    #[test]
    fn should_fail_on_huge_block_size_instead_of_allocating() {
        let opts = CodecOptions::Dct(DctCodecOptions::default().with_block_size(1 << 16));
        assert!(matches!(
            opts.algorithm(),
            Err(SteganoError::InvalidParameter { param: "block_size", .. })
        ));
    }

    #[test]
    fn should_parse_algorithm_types() {
        assert_eq!("lsb".parse::<AlgorithmType>().unwrap(), AlgorithmType::Lsb);
        assert_eq!("DCT".parse::<AlgorithmType>().unwrap(), AlgorithmType::Dct);
        assert!("f5".parse::<AlgorithmType>().is_err());
        assert_eq!(AlgorithmType::Dct.to_string(), "dct");
    }
}

//! Character capacity of a channel shape for both concealers.

use super::bits::BITS_PER_CHAR;
use crate::error::{Result, SteganoError};

/// One bit per sample, no room reserved for a terminator.
pub fn lsb_capacity(shape: &[usize]) -> usize {
    shape.iter().product::<usize>() / BITS_PER_CHAR
}

/// Number of whole `block_size` x `block_size` blocks in a 2-D shape.
pub fn dct_total_blocks(shape: &[usize], block_size: usize) -> Result<usize> {
    if block_size == 0 {
        return Err(SteganoError::InvalidParameter {
            param: "block_size",
            reason: "must be positive".to_string(),
        });
    }

    match shape {
        [height, width] => Ok((height / block_size) * (width / block_size)),
        _ => Err(SteganoError::InvalidShape(shape.to_vec())),
    }
}

/// One bit per whole block, 7 blocks are reserved for the terminator.
pub fn dct_capacity(shape: &[usize], block_size: usize) -> Result<usize> {
    let total_blocks = dct_total_blocks(shape, block_size)?;
    let available = total_blocks.saturating_sub(BITS_PER_CHAR);

    Ok(available / BITS_PER_CHAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compute_lsb_capacity() {
        assert_eq!(lsb_capacity(&[64, 64]), 585);
        assert_eq!(lsb_capacity(&[3, 2]), 0);
        assert_eq!(lsb_capacity(&[7]), 1);
        assert_eq!(lsb_capacity(&[2, 7, 3]), 6);
    }

    #[test]
    fn should_compute_dct_capacity() {
        assert_eq!(dct_total_blocks(&[128, 128], 8).unwrap(), 256);
        assert_eq!(dct_capacity(&[128, 128], 8).unwrap(), 35);
        // partial blocks do not count
        assert_eq!(dct_total_blocks(&[135, 129], 8).unwrap(), 256);
    }

    #[test]
    fn should_not_underflow_on_tiny_shapes() {
        assert_eq!(dct_capacity(&[8, 8], 8).unwrap(), 0);
        assert_eq!(dct_capacity(&[16, 24], 8).unwrap(), 0);
        assert_eq!(dct_capacity(&[4, 4], 8).unwrap(), 0);
        assert_eq!(dct_capacity(&[32, 16], 8).unwrap(), 0);
        assert_eq!(dct_capacity(&[32, 32], 8).unwrap(), 1);
    }

    #[test]
    fn should_require_2d_shape_for_dct() {
        assert!(matches!(
            dct_capacity(&[64, 64, 3], 8),
            Err(SteganoError::InvalidShape(s)) if s == vec![64, 64, 3]
        ));
        assert!(dct_capacity(&[64], 8).is_err());
    }

    #[test]
    fn should_refuse_zero_block_size() {
        for result in [dct_total_blocks(&[64, 64], 0), dct_capacity(&[64, 64], 0)] {
            assert!(matches!(
                result,
                Err(SteganoError::InvalidParameter {
                    param: "block_size",
                    ..
                })
            ));
        }
    }
}

//! Conversion between text and flat sequences of 7 bit groups.
//!
//! Every character becomes one group, most significant bit first. A group that decodes
//! to `0` terminates a message, so does a trailing group with less than 7 bits.

use crate::error::{Result, SteganoError};

/// Number of bits that carry one character.
pub const BITS_PER_CHAR: usize = 7;

/// Character that marks the end of a message.
pub const TERMINATOR: char = '\0';

const MAX_CODE_POINT: u32 = (1 << BITS_PER_CHAR) - 1;

/// Converts one character into its 7 bit group.
///
/// ```
/// use steganographer_core::codec::bits::char_to_bits;
///
/// assert_eq!(char_to_bits('a').unwrap(), [1, 1, 0, 0, 0, 0, 1]);
/// ```
pub fn char_to_bits(c: char) -> Result<[u8; BITS_PER_CHAR]> {
    let code = c as u32;
    if code > MAX_CODE_POINT {
        return Err(SteganoError::UnsupportedCharacter(c));
    }

    let mut bits = [0; BITS_PER_CHAR];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = ((code >> (BITS_PER_CHAR - 1 - i)) & 1) as u8;
    }

    Ok(bits)
}

/// Concatenates the groups of all characters of `msg` in order.
pub fn message_to_bits(msg: &str) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(msg.len() * BITS_PER_CHAR);
    for c in msg.chars() {
        bits.extend_from_slice(&char_to_bits(c)?);
    }

    Ok(bits)
}

/// Interprets up to 7 bits as a big endian code point.
///
/// Shorter input is padded with leading zeros, longer input is cut after the 7th bit.
pub fn bits_to_char(bits: &[u8]) -> char {
    let used = &bits[..bits.len().min(BITS_PER_CHAR)];
    let code = used
        .iter()
        .fold(0u8, |code, bit| (code << 1) | (bit & 1));

    char::from(code)
}

/// Decodes characters in strides of 7 bits until a terminator or an incomplete group.
///
/// Bits after the stop are never pulled from `bits`, which keeps extraction lazy.
pub fn bits_to_message<I>(bits: I) -> String
where
    I: IntoIterator<Item = u8>,
{
    let mut bits = bits.into_iter();
    let mut msg = String::new();
    let mut group = [0u8; BITS_PER_CHAR];

    'groups: loop {
        for slot in group.iter_mut() {
            match bits.next() {
                Some(bit) => *slot = bit,
                None => break 'groups,
            }
        }

        let c = bits_to_char(&group);
        if c == TERMINATOR {
            break;
        }
        msg.push(c);
    }

    msg
}

//! Conversions between bytes, text and strings of `'0'`/`'1'` characters,
//! plus the handful of single byte bit tricks the codec needs.

use std::collections::VecDeque;

use crate::error::StegafyError;
use crate::result::Result;

pub const BITS_PER_BYTE: usize = 8;

/// the 8 bit binary form of a byte, most significant bit first
pub fn to_binary8(byte: u8) -> String {
    format!("{byte:08b}")
}

/// parses up to 8 binary digits into a byte
pub fn from_binary(bits: &str) -> Result<u8> {
    if bits.is_empty() || bits.len() > BITS_PER_BYTE {
        return Err(StegafyError::InvalidBitString(bits.to_string()));
    }
    u8::from_str_radix(bits, 2).map_err(|_| StegafyError::InvalidBitString(bits.to_string()))
}

/// Concatenates the 8 bit codes of every character.
///
/// Every character has to fit into a single byte (`U+0000..=U+00FF`), the
/// first one that does not is returned as error.
pub fn text_to_binary(text: &str) -> Result<String> {
    let mut binary = String::with_capacity(text.len() * BITS_PER_BYTE);
    for c in text.chars() {
        let byte = u8::try_from(c).map_err(|_| StegafyError::UnsupportedCharacter(c))?;
        binary.push_str(&to_binary8(byte));
    }

    Ok(binary)
}

/// Reads 8 bits per character, a trailing remainder shorter than 8 bits is dropped.
pub fn binary_to_text(binary: &str) -> Result<String> {
    let bytes = binary
        .as_bytes()
        .chunks_exact(BITS_PER_BYTE)
        .map(|chunk| {
            std::str::from_utf8(chunk)
                .map_err(|_| StegafyError::InvalidBitString(binary.to_string()))
                .and_then(from_binary)
        })
        .collect::<Result<Vec<u8>>>()?;

    Ok(bytes.into_iter().map(char::from).collect())
}

/// Splits a bit string left to right into chunks of `width` bits, the last
/// chunk may be shorter. A `width` of 0 yields no chunks.
pub fn chunks_of(binary: &str, width: usize) -> VecDeque<String> {
    if width == 0 {
        return VecDeque::new();
    }
    binary
        .as_bytes()
        .chunks(width)
        .map(|chunk| chunk.iter().map(|b| *b as char).collect())
        .collect()
}

#[inline]
pub fn set_lsb(byte: u8, bit: bool) -> u8 {
    (byte & (u8::MAX - 1)) | u8::from(bit)
}

#[inline]
pub fn get_lsb(byte: u8) -> bool {
    byte & 1 == 1
}

#[inline]
pub fn pop_count(byte: u8) -> u8 {
    byte.count_ones() as u8
}

/// Encodes a count as a byte with the low `n` bits set, `n` is capped at 8.
#[inline]
pub fn set_pop_count(n: u8) -> u8 {
    match n {
        0 => 0,
        n if n as usize >= BITS_PER_BYTE => u8::MAX,
        n => (1u8 << n) - 1,
    }
}

/// mask with the low `bits` bits set
#[inline]
pub(crate) fn low_bits_mask(bits: u8) -> u8 {
    set_pop_count(bits)
}

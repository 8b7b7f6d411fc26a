//! Conversion between raw input (bytes or text) and the symbols the codec works on.

use crate::error::HuffError;
use crate::Symbol;

/// One symbol per byte.
pub fn from_bytes(data: &[u8]) -> Vec<Symbol> {
    data.iter().map(|&b| b as Symbol).collect()
}

/// One symbol per Unicode scalar value.
pub fn from_text(text: &str) -> Vec<Symbol> {
    text.chars().map(|c| c as Symbol).collect()
}

/// Turn symbols back into bytes. Fails on any symbol above 255.
pub fn to_bytes(symbols: &[Symbol]) -> Result<Vec<u8>, HuffError> {
    symbols
        .iter()
        .map(|&s| {
            u8::try_from(s)
                .map_err(|_| HuffError::InvalidInput(format!("symbol {} is not a byte", s)))
        })
        .collect()
}

/// Turn symbols back into text. Fails on any symbol that is not a Unicode scalar value.
pub fn to_text(symbols: &[Symbol]) -> Result<String, HuffError> {
    symbols
        .iter()
        .map(|&s| {
            char::from_u32(s).ok_or_else(|| {
                HuffError::InvalidInput(format!("symbol {} is not a character", s))
            })
        })
        .collect()
}

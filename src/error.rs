//! Error type shared by every stage of the codec.
//!
//! Every error aborts the operation that raised it. Nothing is retried inside the
//! library, and no partially built result is ever returned alongside an error.

use thiserror::Error;

use crate::Symbol;

/// Errors raised while counting, building, encoding, decoding or reassembling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffError {
    /// The input can not be coded: no symbols to build a trie from, a symbol
    /// without a code, zero partitions, and so on.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A symbol does not fit in the declared alphabet.
    #[error("symbol {symbol} is outside the alphabet of {alphabet} symbols")]
    SymbolOutOfRange {
        /// The offending symbol
        symbol: Symbol,
        /// Size of the alphabet it was checked against
        alphabet: usize,
    },

    /// Decoding ran out of bits before reaching a leaf.
    #[error("bit sequence exhausted at bit {position} after {decoded} of {expected} symbols")]
    BitSequenceExhausted {
        /// Bit position where the read failed
        position: usize,
        /// Symbols fully decoded before the failure
        decoded: usize,
        /// Symbols the caller asked for
        expected: usize,
    },

    /// Worker results do not line up with the partitions that were dispatched.
    #[error("partition mismatch: {0}")]
    PartitionMismatch(String),

    /// The thread pool for a parallel phase could not be created.
    #[error("unable to start workers: {0}")]
    WorkerPool(String),
}

impl From<rayon::ThreadPoolBuildError> for HuffError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        HuffError::WorkerPool(e.to_string())
    }
}

/// Lets the binary keep an `io::Result` main.
impl From<HuffError> for std::io::Error {
    fn from(e: HuffError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    }
}

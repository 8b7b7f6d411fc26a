//! Huffman coding with a partitioned, parallel encoder and decoder.
//!
//! Builds an optimal prefix-free code from the symbol frequencies of an input, encodes the input
//! into a bit sequence, and decodes it back losslessly. The input can be cut into any number of
//! partitions that are encoded and decoded concurrently against one shared trie and code table.
//! Results are always joined in partition order.
//!
//! The library works on in-memory data only. Reading files, choosing the partition count, and
//! storing or sending the trie are left to the caller (the `huffpar` binary does the first two).
//!
//! Basic usage:
//!
//! ```
//! use huffpar::{parallel_compress, tools::symbols};
//!
//! let data = symbols::from_text("abracadabra");
//! let encoded = parallel_compress(&data, huffpar::DEFAULT_ALPHABET, 4).unwrap();
//! assert!(encoded.bit_len() < 11 * 8);
//! assert_eq!(encoded.decode().unwrap(), data);
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

/// One element of the alphabet: a byte, or a Unicode scalar value.
pub type Symbol = u32;

/// Alphabet size for byte oriented input.
pub const DEFAULT_ALPHABET: usize = 256;

/// Largest alphabet accepted: every Unicode scalar value fits.
pub const MAX_ALPHABET: usize = 0x11_0000;

pub use bitstream::Bits;
pub use compression::compress::{parallel_compress, parallel_encode, CompressedPart, ParallelEncoded};
pub use compression::decompress::{parallel_decode, DecompressedPart};
pub use error::HuffError;
pub use huffman_coding::code_table::CodeTable;
pub use huffman_coding::codec::{decode, encode, encode_with, Encoded};
pub use huffman_coding::trie::Trie;
pub use tools::freq_count::FrequencyTable;

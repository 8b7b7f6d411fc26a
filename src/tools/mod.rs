//! The tools module provides helper functions around the Huffman codec.
//!
//! The tools are:
//! - cli: Command line interface for the huffpar binary.
//! - freq_count: Frequency count of the input symbols, checked against the alphabet.
//! - symbols: Conversion between bytes or text and the symbols the codec works on.
//! - timer: Phase timing for progress reports.
//!
pub mod cli;
pub mod freq_count;
pub mod symbols;
pub mod timer;

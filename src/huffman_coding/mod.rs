//! The huffman module builds the Huffman code and runs the sequential encoder and decoder.
//!
//! - trie: builds the trie from symbol frequencies with a min-priority queue. The two lightest
//!   nodes are merged until one remains. Equal weights are taken in the order they were queued.
//! - code_table: walks the trie to give every symbol its code (left = 0, right = 1).
//! - codec: encodes a whole symbol sequence with the code table, and decodes a bit sequence by
//!   walking the trie once per symbol.
//!
//! The bit sequence has no terminator, so decoding always needs the number of symbols to
//! recover. When the input holds only one distinct symbol, the trie is a single leaf and the
//! code for that symbol is empty.
//!

pub mod code_table;
pub mod codec;
pub mod trie;

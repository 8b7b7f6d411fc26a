//! The compression module runs the Huffman codec over partitions of the input in parallel.
//!
//! Partitioned compression happens in the following steps:
//! - Frequency count over the whole input, then one trie and one code table for everything.
//! - Partitioning: the input is cut into N contiguous, non-overlapping slices. The last slice
//!   takes whatever is left over from the integer division.
//! - Encoding: one worker per slice encodes against the shared code table and hands back
//!   (partition index, bits, symbol count).
//! - Reassembly: results are checked (one per partition, no gaps, no duplicates) and ordered by
//!   partition index, never by the order workers happened to finish in.
//!
//! Decompression mirrors this. Each worker decodes its own part with the shared trie and the
//! decoded slices are joined in index order.
//!
//! Each phase gets its own rayon thread pool that is dropped when the phase ends. The trie and
//! code table are only ever borrowed immutably by the workers, so no locking is involved.
//! A failing worker fails the whole phase.
//!

pub mod compress;
pub mod decompress;
pub mod partition;

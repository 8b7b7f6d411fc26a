use log::{debug, info};
use rayon::prelude::*;

use super::decompress::parallel_decode;
use super::partition::{partition, reassemble, worker_pool, Indexed};
use crate::bitstream::Bits;
use crate::error::HuffError;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::codec::encode_with;
use crate::huffman_coding::trie::Trie;
use crate::tools::freq_count::FrequencyTable;
use crate::Symbol;

/// One encode worker's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedPart {
    /// Partition this came from
    pub index: usize,
    /// Encoded bits of the partition
    pub bits: Bits,
    /// Number of symbols in the partition, needed to decode it
    pub length: usize,
}

impl Indexed for CompressedPart {
    fn index(&self) -> usize {
        self.index
    }
}

/// Everything a partitioned encode produces: the shared trie and code table, and one part per
/// partition in index order.
#[derive(Debug, Clone)]
pub struct ParallelEncoded {
    /// None only for empty input.
    pub trie: Option<Trie>,
    pub codes: CodeTable,
    pub parts: Vec<CompressedPart>,
}

impl ParallelEncoded {
    /// Total encoded bits across all parts.
    pub fn bit_len(&self) -> usize {
        self.parts.iter().map(|p| p.bits.len()).sum()
    }

    /// Total symbols across all parts.
    pub fn symbol_len(&self) -> usize {
        self.parts.iter().map(|p| p.length).sum()
    }

    /// All parts concatenated in index order. Matches a sequential encode of the same input.
    pub fn bits(&self) -> Bits {
        let mut bits = Vec::with_capacity(self.bit_len());
        self.parts.iter().for_each(|p| bits.extend_from_slice(&p.bits));
        bits
    }

    /// Decode every part in parallel and return the original symbols.
    pub fn decode(&self) -> Result<Vec<Symbol>, HuffError> {
        match &self.trie {
            Some(trie) => parallel_decode(&self.parts, trie),
            None if self.symbol_len() == 0 => Ok(Vec::new()),
            None => Err(HuffError::InvalidInput(
                "parts hold symbols but there is no trie".to_string(),
            )),
        }
    }
}

/// Build the frequency table, trie, and code table once from the whole input, then encode it
/// in `partitions` parts concurrently.
pub fn parallel_compress(
    symbols: &[Symbol],
    alphabet: usize,
    partitions: usize,
) -> Result<ParallelEncoded, HuffError> {
    let freqs = FrequencyTable::count(symbols, alphabet)?;
    let (trie, codes) = if symbols.is_empty() {
        (None, CodeTable::default())
    } else {
        let trie = Trie::build(&freqs)?;
        let codes = CodeTable::build(&trie);
        (Some(trie), codes)
    };
    let parts = parallel_encode(symbols, &codes, partitions)?;
    let encoded = ParallelEncoded { trie, codes, parts };
    info!(
        "Compressed {} symbols into {} bits ({} bytes) over {} partitions",
        symbols.len(),
        encoded.bit_len(),
        encoded.bit_len() / 8,
        partitions
    );
    Ok(encoded)
}

/// Encode `partitions` contiguous slices of `symbols` concurrently against a shared code table.
///
/// Every worker must succeed. The first failure aborts the phase, and parts come back ordered
/// by partition index.
pub fn parallel_encode(
    symbols: &[Symbol],
    codes: &CodeTable,
    partitions: usize,
) -> Result<Vec<CompressedPart>, HuffError> {
    let ranges = partition(symbols.len(), partitions)?;
    let pool = worker_pool(partitions)?;

    let parts = pool.install(|| {
        ranges
            .par_iter()
            .map(|p| -> Result<CompressedPart, HuffError> {
                let bits = encode_with(&symbols[p.range()], codes)?;
                debug!(
                    "Partition {}: {} symbols into {} bits",
                    p.index,
                    p.len(),
                    bits.len()
                );
                Ok(CompressedPart {
                    index: p.index,
                    bits,
                    length: p.len(),
                })
            })
            .collect::<Result<Vec<_>, HuffError>>()
    })?;

    reassemble(parts, partitions)
}

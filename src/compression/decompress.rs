use log::{debug, info};
use rayon::prelude::*;

use super::compress::CompressedPart;
use super::partition::{reassemble, worker_pool, Indexed};
use crate::error::HuffError;
use crate::huffman_coding::codec::decode;
use crate::huffman_coding::trie::Trie;
use crate::Symbol;

/// One decode worker's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompressedPart {
    pub index: usize,
    pub symbols: Vec<Symbol>,
}

impl Indexed for DecompressedPart {
    fn index(&self) -> usize {
        self.index
    }
}

/// Decode every part concurrently against the shared trie and join the results in partition
/// order.
///
/// Each part decodes exactly its own `length` symbols. Any failing part aborts the whole
/// decode, as do missing or duplicated partition indices.
pub fn parallel_decode(parts: &[CompressedPart], trie: &Trie) -> Result<Vec<Symbol>, HuffError> {
    if parts.is_empty() {
        return Err(HuffError::InvalidInput("no parts to decode".to_string()));
    }
    let pool = worker_pool(parts.len())?;

    let decoded = pool.install(|| {
        parts
            .par_iter()
            .map(|part| -> Result<DecompressedPart, HuffError> {
                let symbols = decode(&part.bits, trie, part.length)?;
                debug!(
                    "Partition {}: {} bits into {} symbols",
                    part.index,
                    part.bits.len(),
                    symbols.len()
                );
                Ok(DecompressedPart {
                    index: part.index,
                    symbols,
                })
            })
            .collect::<Result<Vec<_>, HuffError>>()
    })?;

    let ordered = reassemble(decoded, parts.len())?;
    let total = ordered.iter().map(|p| p.symbols.len()).sum();
    let mut output = Vec::with_capacity(total);
    ordered
        .into_iter()
        .for_each(|p| output.extend(p.symbols));
    info!(
        "Decompressed {} parts into {} symbols",
        parts.len(),
        output.len()
    );
    Ok(output)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress::{parallel_compress, parallel_encode};
    use crate::huffman_coding::codec::encode;
    use crate::tools::symbols::{from_text, to_text};

    fn sample(len: usize, alphabet: u32, mut state: u64) -> Vec<Symbol> {
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state % 997) as u32 % (1 + (state % alphabet as u64) as u32)
            })
            .collect()
    }

    #[test]
    fn parallel_equivalence_test() {
        for (i, len) in [0_usize, 1, 2, 5, 31, 256, 4_099].iter().enumerate() {
            let data = sample(*len, 200, 0x5eed + i as u64);
            let sequential = encode(&data, 256).unwrap().decode(data.len()).unwrap();
            for partitions in 1..=12 {
                let encoded = parallel_compress(&data, 256, partitions).unwrap();
                let decoded = encoded.decode().unwrap();
                assert_eq!(decoded, data, "len {} partitions {}", len, partitions);
                assert_eq!(decoded, sequential);
            }
        }
    }

    #[test]
    fn completion_order_test() {
        // Parts handed over out of order still come back in index order.
        let data = from_text("she sells sea shells by the sea shore");
        let encoded = parallel_compress(&data, 256, 5).unwrap();
        let mut parts = encoded.parts.clone();
        parts.reverse();
        let decoded = parallel_decode(&parts, encoded.trie.as_ref().unwrap()).unwrap();
        assert_eq!(
            to_text(&decoded).unwrap(),
            "she sells sea shells by the sea shore"
        );
    }

    #[test]
    fn truncated_part_test() {
        let data = from_text("abracadabra abracadabra");
        let encoded = parallel_compress(&data, 256, 3).unwrap();
        let mut parts = encoded.parts.clone();
        parts[1].bits.truncate(1);
        assert!(matches!(
            parallel_decode(&parts, encoded.trie.as_ref().unwrap()),
            Err(HuffError::BitSequenceExhausted { .. })
        ));
    }

    #[test]
    fn duplicate_part_test() {
        let data = from_text("abracadabra");
        let encoded = parallel_compress(&data, 256, 3).unwrap();
        let mut parts = encoded.parts.clone();
        parts[2] = parts[1].clone();
        assert!(matches!(
            parallel_decode(&parts, encoded.trie.as_ref().unwrap()),
            Err(HuffError::PartitionMismatch(_))
        ));
    }

    #[test]
    fn gap_test() {
        let data = from_text("abracadabra");
        let encoded = parallel_compress(&data, 256, 3).unwrap();
        let mut parts = encoded.parts.clone();
        parts[0].index = 3;
        assert!(matches!(
            parallel_decode(&parts, encoded.trie.as_ref().unwrap()),
            Err(HuffError::PartitionMismatch(_))
        ));
    }

    #[test]
    fn no_parts_test() {
        let encoded = encode(&from_text("abc"), 256).unwrap();
        assert!(matches!(
            parallel_decode(&[], encoded.trie.as_ref().unwrap()),
            Err(HuffError::InvalidInput(_))
        ));
    }

    #[test]
    fn shared_trie_test() {
        // The trie built from the whole input decodes parts encoded with its code table.
        let data = sample(10_000, 60, 42);
        let encoded = encode(&data, 256).unwrap();
        let parts = parallel_encode(&data, &encoded.codes, 8).unwrap();
        let trie = encoded.trie.as_ref().unwrap();
        assert_eq!(parallel_decode(&parts, trie).unwrap(), data);
    }
}

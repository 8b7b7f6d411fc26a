use log::{debug, info, trace};

use super::code_table::CodeTable;
use super::trie::{NodeData, Trie};
use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::bitstream::Bits;
use crate::error::HuffError;
use crate::tools::freq_count::FrequencyTable;
use crate::Symbol;

/// Result of a sequential encode. The trie is what the decoding side needs.
#[derive(Debug, Clone)]
pub struct Encoded {
    /// None only for empty input, which has no symbols to build a trie from.
    pub trie: Option<Trie>,
    pub codes: CodeTable,
    pub bits: Bits,
}

impl Encoded {
    /// Decode `length` symbols from these bits with this trie.
    pub fn decode(&self, length: usize) -> Result<Vec<Symbol>, HuffError> {
        match &self.trie {
            Some(trie) => decode(&self.bits, trie, length),
            None if length == 0 => Ok(Vec::new()),
            None => Err(HuffError::InvalidInput(format!(
                "asked for {} symbols from an empty encoding",
                length
            ))),
        }
    }
}

/// Count, build the trie and code table, and encode the whole input.
pub fn encode(symbols: &[Symbol], alphabet: usize) -> Result<Encoded, HuffError> {
    let freqs = FrequencyTable::count(symbols, alphabet)?;
    if symbols.is_empty() {
        debug!("Nothing to encode");
        return Ok(Encoded {
            trie: None,
            codes: CodeTable::default(),
            bits: Vec::new(),
        });
    }
    let trie = Trie::build(&freqs)?;
    let codes = CodeTable::build(&trie);
    let bits = encode_with(symbols, &codes)?;
    info!(
        "Encoded {} symbols into {} bits ({} bytes)",
        symbols.len(),
        bits.len(),
        bits.len() / 8
    );
    Ok(Encoded {
        trie: Some(trie),
        codes,
        bits,
    })
}

/// Encode with an existing code table. Every symbol must have a code.
pub fn encode_with(symbols: &[Symbol], codes: &CodeTable) -> Result<Bits, HuffError> {
    let mut bw = BitWriter::new(symbols.len());
    for &symbol in symbols {
        let code = codes.code(symbol).ok_or_else(|| {
            HuffError::InvalidInput(format!("symbol {} has no code", symbol))
        })?;
        bw.out_code(code);
    }
    trace!("Encoded {} symbols, stream at {}", symbols.len(), bw.loc());
    Ok(bw.into_bits())
}

/// Decode exactly `length` symbols by walking the trie from the root once per symbol.
///
/// A trie that is a single leaf has an empty code, so its symbol is repeated `length` times
/// without reading any bits. Bits left over after `length` symbols are ignored.
pub fn decode(bits: &[bool], trie: &Trie, length: usize) -> Result<Vec<Symbol>, HuffError> {
    let mut output = Vec::with_capacity(length);

    if let NodeData::Leaf(symbol) = trie.root().node_data {
        output.resize(length, symbol);
        return Ok(output);
    }

    let mut br = BitReader::new(bits);
    for decoded in 0..length {
        let mut node = trie.root();
        let symbol = loop {
            match &node.node_data {
                NodeData::Leaf(symbol) => break *symbol,
                NodeData::Kids(left, right) => {
                    node = match br.bit() {
                        Some(false) => &**left,
                        Some(true) => &**right,
                        None => {
                            return Err(HuffError::BitSequenceExhausted {
                                position: br.position(),
                                decoded,
                                expected: length,
                            })
                        }
                    };
                }
            }
        };
        output.push(symbol);
    }

    if br.remaining() > 0 {
        debug!(
            "{} trailing bits left after {} symbols at {}",
            br.remaining(),
            length,
            br.loc()
        );
    }
    Ok(output)
}

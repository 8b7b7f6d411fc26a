use log::debug;
use rayon::prelude::*;

use crate::error::HuffError;
use crate::{Symbol, MAX_ALPHABET};

/// Symbol counts indexed over the whole alphabet. A zero count means the symbol is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Count every symbol in `data` against an alphabet of `alphabet` symbols.
    pub fn count(data: &[Symbol], alphabet: usize) -> Result<Self, HuffError> {
        Ok(Self {
            counts: freqs(data, alphabet)?,
        })
    }

    /// Build a table from counts that are already known, one entry per alphabet symbol.
    pub fn from_counts(counts: Vec<u64>) -> Result<Self, HuffError> {
        check_alphabet(counts.len())?;
        Ok(Self { counts })
    }

    /// Size of the alphabet this table covers.
    pub fn alphabet_size(&self) -> usize {
        self.counts.len()
    }

    /// Count for `symbol`, zero for symbols outside the alphabet.
    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    /// Number of symbols with a nonzero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Nonzero (symbol, count) pairs in ascending symbol order.
    pub fn present(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter_map(|(s, &c)| (c > 0).then(|| (s as Symbol, c)))
    }
}

/// The alphabet must hold between 1 and MAX_ALPHABET symbols.
fn check_alphabet(alphabet: usize) -> Result<(), HuffError> {
    if alphabet == 0 {
        return Err(HuffError::InvalidInput(
            "alphabet must hold at least one symbol".to_string(),
        ));
    }
    if alphabet > MAX_ALPHABET {
        return Err(HuffError::InvalidInput(format!(
            "alphabet of {} symbols exceeds the limit of {}",
            alphabet, MAX_ALPHABET
        )));
    }
    Ok(())
}

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
/// Every symbol is checked against the alphabet before it is counted.
pub fn freqs(data: &[Symbol], alphabet: usize) -> Result<Vec<u64>, HuffError> {
    check_alphabet(alphabet)?;
    if let Some(&symbol) = data.iter().find(|&&s| s as usize >= alphabet) {
        return Err(HuffError::SymbolOutOfRange { symbol, alphabet });
    }

    if data.len() > 64_000 {
        debug!("Counting {} symbols in parallel", data.len());
        // 16k is pretty much the sweet spot for chunk size.
        Ok(data
            .par_chunks(16_000)
            .fold(
                || vec![0_u64; alphabet],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u64; alphabet],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u64>>(),
            ))
    } else {
        let mut freqs = vec![0_u64; alphabet];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        Ok(freqs)
    }
}

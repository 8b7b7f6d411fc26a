use rustc_hash::FxHashMap;

use super::trie::{Node, NodeData, Trie};
use crate::tools::freq_count::FrequencyTable;
use crate::Symbol;

/// Symbol to code mapping, one entry per trie leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: FxHashMap<Symbol, Vec<bool>>,
}

impl CodeTable {
    /// Walk the trie and record the path to every leaf: left is 0, right is 1.
    pub fn build(trie: &Trie) -> Self {
        let mut codes = FxHashMap::default();
        let mut prefix = Vec::with_capacity(trie.depth());
        return_codes(trie.root(), &mut prefix, &mut codes);
        Self { codes }
    }

    /// Code for `symbol`, if the symbol was in the trie.
    pub fn code(&self, symbol: Symbol) -> Option<&[bool]> {
        self.codes.get(&symbol).map(|c| c.as_slice())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All (symbol, code) pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[bool])> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_slice()))
    }

    /// Bits needed to encode data with these frequencies: sum of count times code length.
    pub fn encoded_len(&self, freqs: &FrequencyTable) -> u64 {
        freqs
            .present()
            .map(|(s, count)| count * self.code(s).map_or(0, |c| c.len() as u64))
            .sum()
    }
}

/// Recursively walk the tree, extending `prefix` on the way down and recording it at each leaf.
fn return_codes(node: &Node, prefix: &mut Vec<bool>, codes: &mut FxHashMap<Symbol, Vec<bool>>) {
    match &node.node_data {
        NodeData::Kids(left_child, right_child) => {
            prefix.push(false);
            return_codes(left_child, prefix, codes);
            prefix.pop();
            prefix.push(true);
            return_codes(right_child, prefix, codes);
            prefix.pop();
        }
        NodeData::Leaf(symbol) => {
            codes.insert(*symbol, prefix.clone());
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::symbols::from_text;

    fn table_for(text: &str) -> (FrequencyTable, CodeTable) {
        let freqs = FrequencyTable::count(&from_text(text), 256).unwrap();
        let trie = Trie::build(&freqs).unwrap();
        (freqs, CodeTable::build(&trie))
    }

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn abracadabra_test() {
        let (freqs, codes) = table_for("abracadabra");
        assert_eq!(codes.len(), 5);
        assert_eq!(codes.code('a' as Symbol), Some(bits("0").as_slice()));
        assert_eq!(codes.code('c' as Symbol), Some(bits("100").as_slice()));
        assert_eq!(codes.code('d' as Symbol), Some(bits("101").as_slice()));
        assert_eq!(codes.code('b' as Symbol), Some(bits("110").as_slice()));
        assert_eq!(codes.code('r' as Symbol), Some(bits("111").as_slice()));
        assert_eq!(codes.code('z' as Symbol), None);
        assert_eq!(codes.encoded_len(&freqs), 23);
    }

    #[test]
    fn single_symbol_test() {
        let (freqs, codes) = table_for("aaaa");
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.code('a' as Symbol), Some(&[][..]));
        assert_eq!(codes.encoded_len(&freqs), 0);
    }

    #[test]
    fn two_symbol_lengths_test() {
        let freqs = FrequencyTable::from_counts(vec![3, 5]).unwrap();
        let codes = CodeTable::build(&Trie::build(&freqs).unwrap());
        assert_eq!(codes.code(0).map(|c| c.len()), Some(1));
        assert_eq!(codes.code(1).map(|c| c.len()), Some(1));
        assert_eq!(codes.encoded_len(&freqs), 8);
    }

    #[test]
    fn prefix_free_test() {
        // Frequencies from a small xorshift generator, over several alphabets.
        let mut state = 0x2545_f491_u64;
        for round in 0..40 {
            let alphabet = 2 + round * 6;
            let counts: Vec<u64> = (0..alphabet)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    state % 50
                })
                .collect();
            let freqs = FrequencyTable::from_counts(counts).unwrap();
            if freqs.distinct() == 0 {
                continue;
            }
            let codes = CodeTable::build(&Trie::build(&freqs).unwrap());
            assert_eq!(codes.len(), freqs.distinct());
            let all: Vec<_> = codes.iter().collect();
            for (i, (sa, a)) in all.iter().enumerate() {
                for (sb, b) in all.iter().skip(i + 1) {
                    assert_ne!(sa, sb);
                    assert!(!b.starts_with(a), "{:?} is a prefix of {:?}", a, b);
                    assert!(!a.starts_with(b), "{:?} is a prefix of {:?}", b, a);
                }
            }
        }
    }

    #[test]
    fn kraft_equality_test() {
        // A full binary tree gives sum(2^-len) == 1 whenever there are two or more leaves.
        let (_, codes) = table_for("it was the best of times, it was the worst of times");
        let depth = codes.iter().map(|(_, c)| c.len()).max().unwrap();
        let sum: u64 = codes.iter().map(|(_, c)| 1_u64 << (depth - c.len())).sum();
        assert_eq!(sum, 1_u64 << depth);
    }
}

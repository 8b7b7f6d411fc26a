use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::error::HuffError;
use crate::tools::freq_count::FrequencyTable;
use crate::Symbol;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(Symbol),
}
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}
impl Node {
    /// Create a new node
    pub fn new(weight: u64, node_data: NodeData) -> Node {
        Node { weight, node_data }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

/// A subtree waiting in the priority queue, stamped with the order it was pushed in.
#[derive(Debug)]
struct Queued {
    weight: u64,
    seq: u64,
    node: Node,
}
impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl Eq for Queued {}
impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Queued {
    /// Reversed, so the max-heap pops the lowest weight first, and the earliest push among equal
    /// weights.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A finished Huffman trie. Never modified after `build` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie {
    root: Node,
}

impl Trie {
    /// Build the trie for a frequency table.
    ///
    /// Leaves go into the queue in ascending symbol order. The two lightest nodes are merged
    /// until one node is left, the first popped becoming the left child. Ties go to whichever
    /// node was pushed first, so the same table always gives the same trie.
    ///
    /// With a single distinct symbol its leaf is the root and its code is empty.
    pub fn build(freqs: &FrequencyTable) -> Result<Trie, HuffError> {
        let mut queue = BinaryHeap::with_capacity(freqs.distinct());
        let mut seq = 0_u64;
        for (symbol, weight) in freqs.present() {
            queue.push(Queued {
                weight,
                seq,
                node: Node::new(weight, NodeData::Leaf(symbol)),
            });
            seq += 1;
        }
        debug!("Building trie from {} distinct symbols", queue.len());

        let root = loop {
            let left = queue.pop().ok_or_else(|| {
                HuffError::InvalidInput("no symbol has a nonzero frequency".to_string())
            })?;
            let right = match queue.pop() {
                Some(right) => right,
                None => break left.node,
            };
            let weight = left.weight + right.weight;
            trace!(
                "Merging weights {} (seq {}) and {} (seq {}) as seq {}",
                left.weight,
                left.seq,
                right.weight,
                right.seq,
                seq
            );
            queue.push(Queued {
                weight,
                seq,
                node: Node::new(
                    weight,
                    NodeData::Kids(Box::new(left.node), Box::new(right.node)),
                ),
            });
            seq += 1;
        };

        let trie = Trie { root };
        debug!(
            "Trie has {} leaves, depth {}, weight {}",
            trie.leaf_count(),
            trie.depth(),
            trie.weight()
        );
        Ok(trie)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of leaves, which is the number of distinct symbols.
    pub fn leaf_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            match &node.node_data {
                NodeData::Kids(left, right) => count(left) + count(right),
                NodeData::Leaf(_) => 1,
            }
        }
        count(&self.root)
    }

    /// Length of the longest root to leaf path (the longest code).
    pub fn depth(&self) -> usize {
        fn depth(node: &Node) -> usize {
            match &node.node_data {
                NodeData::Kids(left, right) => 1 + depth(left).max(depth(right)),
                NodeData::Leaf(_) => 0,
            }
        }
        depth(&self.root)
    }

    /// Total weight, equal to the number of symbols the trie was built from.
    pub fn weight(&self) -> u64 {
        self.root.weight
    }
}

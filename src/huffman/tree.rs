use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use log::{debug, trace};

use super::frequency::FrequencyTable;

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node contains a symbol and its frequency.
    Leaf { symbol: char, frequency: usize },
    /// An internal node with left and right children and combined frequency.
    Internal {
        frequency: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the frequency of the node.
    pub fn frequency(&self) -> usize {
        match self {
            HuffmanNode::Leaf { frequency, .. } => *frequency,
            HuffmanNode::Internal { frequency, .. } => *frequency,
        }
    }

    /// Returns the symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Returns `(left, right)` for internal nodes.
    pub fn children(&self) -> Option<(&HuffmanNode, &HuffmanNode)> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, right, .. } => Some((left, right)),
        }
    }

    fn merge(left: HuffmanNode, right: HuffmanNode) -> HuffmanNode {
        HuffmanNode::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn height(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize, label: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            HuffmanNode::Leaf { symbol, frequency } => {
                writeln!(f, "{indent}{label} leaf {symbol:?} [{frequency}]")
            }
            HuffmanNode::Internal {
                frequency,
                left,
                right,
            } => {
                writeln!(f, "{indent}{label} internal [{frequency}]")?;
                left.fmt_indented(f, depth + 1, "0")?;
                right.fmt_indented(f, depth + 1, "1")
            }
        }
    }
}

/// A heap slot for a node awaiting merging.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed: the lowest
/// frequency wins, and among equal frequencies the earliest inserted wins.
#[derive(Debug)]
struct HeapEntry {
    node: HuffmanNode,
    seq: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .frequency()
            .cmp(&self.node.frequency())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// A finished Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// Leaves enter the heap in ascending symbol order and merged nodes are
    /// numbered after them, so equal frequencies are resolved by insertion
    /// order and the result is reproducible. The first node popped becomes the
    /// left child.
    ///
    /// Returns `None` if the frequency table is empty.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Option<Self> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut seq = 0;
        for (symbol, frequency) in frequencies {
            heap.push(HeapEntry {
                node: HuffmanNode::Leaf { symbol, frequency },
                seq,
            });
            seq += 1;
        }

        while heap.len() > 1 {
            let (Some(a), Some(b)) = (heap.pop(), heap.pop()) else {
                break;
            };
            trace!(
                "merging {} (seq {}) with {} (seq {})",
                a.node.frequency(),
                a.seq,
                b.node.frequency(),
                b.seq
            );
            heap.push(HeapEntry {
                node: HuffmanNode::merge(a.node, b.node),
                seq,
            });
            seq += 1;
        }

        let root = heap.pop()?.node;
        debug!(
            "built huffman tree: {} symbols, root weight {}",
            frequencies.len(),
            root.frequency()
        );
        Some(HuffmanTree { root })
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Length of the longest root-to-leaf path. A lone leaf has height 0.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_indented(f, 0, "root")
    }
}

/// Build the Huffman tree given a frequency table.
/// Returns `None` if the frequency table is empty.
pub fn build_huffman_tree(frequencies: &FrequencyTable) -> Option<HuffmanTree> {
    HuffmanTree::from_frequencies(frequencies)
}

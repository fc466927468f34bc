use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use super::tree::{HuffmanNode, HuffmanTree};

/// Maps each symbol of a tree to its bit-string code.
///
/// A code is the path from the root to the symbol's leaf, `'0'` for every left
/// turn and `'1'` for every right turn. A tree that is a single leaf has no
/// path, so its symbol is given the code `"0"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        match tree.root() {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, "0".to_string());
            }
            root => {
                let mut path = String::new();
                collect_codes(root, &mut path, &mut codes);
            }
        }
        CodeTable { codes }
    }

    /// Returns the code for `symbol`, or `None` if it never occurred.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.codes.iter(),
        }
    }
}

fn collect_codes(node: &HuffmanNode, path: &mut String, codes: &mut BTreeMap<char, String>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            codes.insert(*symbol, path.clone());
        }
        HuffmanNode::Internal { left, right, .. } => {
            path.push('0');
            collect_codes(left, path, codes);
            path.pop();
            path.push('1');
            collect_codes(right, path, codes);
            path.pop();
        }
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = (char, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, char, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (char, &'a str);

    fn next(&mut self) -> Option<(char, &'a str)> {
        self.inner.next().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self {
            writeln!(f, "{symbol:?}: {code}")?;
        }
        Ok(())
    }
}

/// Recursively build the code table mapping symbols to their Huffman codes.
///
/// If the tree consists of a single leaf (i.e. one unique symbol), the code "0" is assigned.
pub fn build_code_table(tree: &HuffmanTree) -> CodeTable {
    CodeTable::from_tree(tree)
}

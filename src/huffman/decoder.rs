use bitvec::prelude::*;
use log::debug;

use super::tree::{HuffmanNode, HuffmanTree};
use crate::error::{Error, Result};

/// Walks `tree` once per bit, `false` going left and `true` going right,
/// emitting a symbol and restarting at the root whenever a leaf is reached.
///
/// A tree that is a single leaf decodes every bit, whatever its value, to the
/// sole symbol. Bits left over after the last complete code are reported as
/// [`Error::IncompleteCode`], together with the symbols decoded before them.
fn walk<I>(tree: &HuffmanTree, bits: I) -> Result<String>
where
    I: IntoIterator<Item = bool>,
{
    let root = tree.root();
    if let HuffmanNode::Leaf { symbol, .. } = root {
        return Ok(bits.into_iter().map(|_| *symbol).collect());
    }

    let mut decoded = String::new();
    let mut current = root;
    let mut pending = 0;
    for bit in bits {
        if let HuffmanNode::Internal { left, right, .. } = current {
            current = if bit { right } else { left };
            pending += 1;
        }
        if let HuffmanNode::Leaf { symbol, .. } = current {
            decoded.push(*symbol);
            current = root;
            pending = 0;
        }
    }

    if pending > 0 {
        return Err(Error::IncompleteCode {
            decoded,
            trailing_bits: pending,
        });
    }
    Ok(decoded)
}

/// Decodes a `'0'`/`'1'` string. Any character other than `'0'` counts as a
/// `'1'`.
pub fn try_decode(encoded: &str, tree: &HuffmanTree) -> Result<String> {
    walk(tree, encoded.chars().map(|bit| bit != '0'))
}

/// Decode an encoded bit string using the Huffman tree.
/// Traverses the tree according to each bit until a leaf is reached.
///
/// Trailing bits that stop short of a leaf are dropped; the result holds only
/// the symbols completed before them.
pub fn decode(encoded: &str, tree: &HuffmanTree) -> String {
    match try_decode(encoded, tree) {
        Ok(decoded) => decoded,
        Err(Error::IncompleteCode {
            decoded,
            trailing_bits,
        }) => {
            debug!("dropping {trailing_bits} trailing bit(s) of an incomplete code");
            decoded
        }
        Err(err) => {
            debug!("decode failed: {err}");
            String::new()
        }
    }
}

/// Decodes packed bits as produced by
/// [`encode_bits`](super::encoder::encode_bits).
pub fn decode_bits(encoded: &BitSlice<u8, Msb0>, tree: &HuffmanTree) -> Result<String> {
    walk(tree, encoded.iter().by_vals())
}

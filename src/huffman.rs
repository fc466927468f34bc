//! Huffman coding over text.
//!
//! A code is built once from a training text: symbol frequencies are counted,
//! the two lightest nodes are merged until a single tree remains, and every
//! leaf is given the path leading to it as its code. The finished [`Huffman`]
//! is immutable and can encode text to a string of `'0'`/`'1'` characters and
//! decode such strings back.
//!
//! Construction is deterministic. Frequencies are visited in ascending symbol
//! order and equal frequencies are merged in insertion order, so two builds
//! from the same text always produce the same codes.
//!
//! # Examples
//!
//! ```rust
//! use huffcode::huffman::Huffman;
//!
//! let huffman = Huffman::build("aaabbc");
//! assert_eq!(huffman.get_code('a'), "0");
//!
//! let bits = huffman.encode("abcab");
//! assert_eq!(huffman.decode(&bits), "abcab");
//!
//! // Symbols outside the training text cannot be encoded.
//! assert_eq!(huffman.encode("abz"), "");
//! ```
//!
//! The lenient operations report every failure as an empty string. The `try_`
//! variants return [`Error`](crate::error::Error) instead.

use bitvec::prelude::*;
use log::debug;

use crate::error::{Error, Result};

pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod tree;

pub use code_table::{build_code_table, CodeTable};
pub use decoder::{decode, decode_bits, try_decode};
pub use encoder::{encode, encode_bits, encoded_len, try_encode};
pub use frequency::{build_frequency_table, FrequencyTable};
pub use tree::{build_huffman_tree, HuffmanNode, HuffmanTree};

/// A Huffman code built from a training text.
///
/// Owns the counted frequencies, the tree, and the code table derived from
/// it. Built from empty input it has no tree: it encodes and decodes empty
/// input to empty output and fails on anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Huffman {
    frequencies: FrequencyTable,
    tree: Option<HuffmanTree>,
    codes: CodeTable,
}

impl Huffman {
    /// Builds the code for the symbols of `input`.
    pub fn build(input: &str) -> Self {
        Huffman::from_frequencies(FrequencyTable::from_text(input))
    }

    /// Builds the code from known symbol counts.
    pub fn from_frequencies(frequencies: FrequencyTable) -> Self {
        let tree = HuffmanTree::from_frequencies(&frequencies);
        let codes = match &tree {
            Some(tree) => CodeTable::from_tree(tree),
            None => {
                debug!("no symbols to build a huffman tree from");
                CodeTable::default()
            }
        };
        Huffman {
            frequencies,
            tree,
            codes,
        }
    }

    /// True when built from empty input.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn root(&self) -> Option<&HuffmanNode> {
        self.tree.as_ref().map(HuffmanTree::root)
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.codes
    }

    /// Returns the code for `symbol`, or an empty string if it was not in the
    /// training text.
    pub fn get_code(&self, symbol: char) -> String {
        self.lookup(symbol).map(str::to_string).unwrap_or_default()
    }

    pub fn lookup(&self, symbol: char) -> Option<&str> {
        self.codes.get(symbol)
    }

    /// Encodes `input`, or returns an empty string if it holds a symbol
    /// without a code.
    ///
    /// A one-symbol input always encodes to `"0"`.
    pub fn encode(&self, input: &str) -> String {
        encoder::encode(input, &self.codes)
    }

    pub fn try_encode(&self, input: &str) -> Result<String> {
        encoder::try_encode(input, &self.codes)
    }

    /// Number of bits `input` encodes to.
    pub fn encoded_len(&self, input: &str) -> Result<usize> {
        encoder::encoded_len(input, &self.codes)
    }

    pub fn encode_bits(&self, input: &str) -> Result<BitVec<u8, Msb0>> {
        encoder::encode_bits(input, &self.codes)
    }

    /// Decodes a `'0'`/`'1'` string.
    ///
    /// Bits after the last complete code are dropped, and any character other
    /// than `'0'` is read as `'1'`.
    pub fn decode(&self, bits: &str) -> String {
        match &self.tree {
            Some(tree) => decoder::decode(bits, tree),
            None => String::new(),
        }
    }

    pub fn try_decode(&self, bits: &str) -> Result<String> {
        if bits.is_empty() {
            return Ok(String::new());
        }
        decoder::try_decode(bits, self.tree.as_ref().ok_or(Error::EmptyTree)?)
    }

    pub fn decode_bits(&self, bits: &BitSlice<u8, Msb0>) -> Result<String> {
        if bits.is_empty() {
            return Ok(String::new());
        }
        decoder::decode_bits(bits, self.tree.as_ref().ok_or(Error::EmptyTree)?)
    }

    /// Expected bits per symbol of the training text under this code.
    pub fn average_code_length(&self) -> f64 {
        let total = self.frequencies.total();
        if total == 0 {
            return 0.0;
        }
        let bits: usize = self
            .frequencies
            .iter()
            .filter_map(|(symbol, count)| self.lookup(symbol).map(|code| code.len() * count))
            .sum();
        bits as f64 / total as f64
    }
}

impl From<&str> for Huffman {
    fn from(input: &str) -> Self {
        Huffman::build(input)
    }
}

/// Convenience function: builds the Huffman tree from input, encodes the input,
/// and returns (encoded bit string, Huffman tree).
///
/// Returns `None` for empty input, which has no tree.
pub fn huffman_encode(input: &str) -> Option<(String, HuffmanTree)> {
    let tree = build_huffman_tree(&build_frequency_table(input))?;
    let code_table = build_code_table(&tree);
    let encoded = encode(input, &code_table);
    Some((encoded, tree))
}

/// Convenience function: decodes an encoded bit string using the provided Huffman tree.
pub fn huffman_decode(encoded: &str, tree: &HuffmanTree) -> String {
    decode(encoded, tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_scenario() {
        let huffman = Huffman::build("aaabbc");
        assert_eq!(huffman.frequencies().get('a'), Some(3));
        assert_eq!(huffman.frequencies().get('b'), Some(2));
        assert_eq!(huffman.frequencies().get('c'), Some(1));
        assert_eq!(huffman.get_code('a').len(), 1);
        assert!(huffman.get_code('c').len() >= huffman.get_code('b').len());
        let encoded = huffman.encode("aaabbc");
        assert_eq!(huffman.decode(&encoded), "aaabbc");
    }

    #[test]
    fn test_empty_input() {
        let huffman = Huffman::build("");
        assert!(huffman.is_empty());
        assert!(huffman.root().is_none());
        assert!(huffman.code_table().is_empty());
        assert_eq!(huffman.encode(""), "");
        assert_eq!(huffman.decode(""), "");
        assert_eq!(huffman.try_decode(""), Ok(String::new()));
        assert_eq!(huffman.average_code_length(), 0.0);
    }

    #[test]
    fn test_empty_tree_rejects_bits() {
        let huffman = Huffman::build("");
        assert_eq!(huffman.decode("0101"), "");
        assert_eq!(huffman.try_decode("0101"), Err(Error::EmptyTree));
        assert_eq!(
            huffman.decode_bits(bitvec![u8, Msb0; 0, 1].as_bitslice()),
            Err(Error::EmptyTree)
        );
        assert_eq!(huffman.encode("ab"), "");
        assert!(huffman.try_encode("ab").is_err());
    }

    #[test]
    fn test_single_symbol() {
        let input = "aaaaaaa";
        let huffman = Huffman::build(input);
        let encoded = huffman.encode(input);
        assert_eq!(encoded, "0".repeat(input.len()));
        assert_eq!(huffman.decode(&encoded), input);
        assert_eq!(huffman.get_code('a'), "0");
        assert_eq!(huffman.average_code_length(), 1.0);
    }

    #[test]
    fn test_unencodable_symbol() {
        let huffman = Huffman::build("ab");
        assert_eq!(huffman.encode("abc"), "");
        assert_eq!(
            huffman.try_encode("abc"),
            Err(Error::UnknownSymbol {
                symbol: 'c',
                position: 2
            })
        );
    }

    #[test]
    fn test_get_code_unknown_symbol() {
        let huffman = Huffman::build("ab");
        assert_eq!(huffman.get_code('z'), "");
        assert_eq!(huffman.lookup('z'), None);
        assert!(huffman.lookup('a').is_some());
    }

    #[test]
    fn test_determinism() {
        let input = "the quick brown fox jumps over the lazy dog";
        let first = Huffman::build(input);
        let second = Huffman::from(input);
        assert_eq!(first.code_table(), second.code_table());
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_frequencies_matches_build() {
        let counts = FrequencyTable::from_counts([('a', 3), ('b', 2), ('c', 1)]).unwrap();
        assert_eq!(Huffman::from_frequencies(counts), Huffman::build("abcaba"));
    }

    #[test]
    fn test_average_code_length() {
        // a: 1 bit x3, b: 2 bits x2, c: 2 bits x1 = 9 bits over 6 symbols.
        let huffman = Huffman::build("aaabbc");
        assert!((huffman.average_code_length() - 1.5).abs() < f64::EPSILON);
        assert_eq!(huffman.encoded_len("aaabbc"), Ok(9));
    }

    #[test]
    fn test_bits_roundtrip() {
        let input = "abracadabra abracadabra abracadabra";
        let huffman = Huffman::build(input);
        let bits = huffman.encode_bits(input).unwrap();
        assert_eq!(bits.len(), huffman.encode(input).len());
        assert_eq!(huffman.decode_bits(&bits), Ok(input.to_string()));
    }

    #[test]
    fn test_huffman_encode_decode() {
        let input = "huffman coding in rust is fun!";
        let (encoded, tree) = huffman_encode(input).unwrap();
        assert_eq!(huffman_decode(&encoded, &tree), input);
        assert!(huffman_encode("").is_none());
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Huffman>();

        let huffman = std::sync::Arc::new(Huffman::build("shared state is read only"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let huffman = std::sync::Arc::clone(&huffman);
                std::thread::spawn(move || huffman.decode(&huffman.encode("read only")))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "read only");
        }
    }
}

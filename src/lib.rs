//! # huffcode
//!
//! Huffman code construction over text, with encoding to and decoding from
//! `'0'`/`'1'` bit-strings.
//!
//! ```rust
//! use huffcode::Huffman;
//!
//! let huffman = Huffman::build("this is an example for huffman encoding");
//! let bits = huffman.encode("an example");
//! assert!(bits.chars().all(|bit| bit == '0' || bit == '1'));
//! assert_eq!(huffman.decode(&bits), "an example");
//! ```

pub mod error;
pub mod huffman;

pub use error::{Error, Result};
pub use huffman::{
    huffman_decode, huffman_encode, CodeTable, FrequencyTable, Huffman, HuffmanNode, HuffmanTree,
};

use bitvec::prelude::*;
use log::debug;

use super::code_table::CodeTable;
use crate::error::{Error, Result};

/// How an input of a given shape is turned into bits.
enum Shape {
    Empty,
    /// Exactly one symbol: always encoded as `"0"`, without a lookup.
    Single,
    General,
}

fn shape(input: &str) -> Shape {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Shape::Empty,
        (Some(_), None) => Shape::Single,
        _ => Shape::General,
    }
}

/// Calls `emit` with the code of every symbol of `input`, in order.
fn for_each_code<'t, F>(input: &str, table: &'t CodeTable, mut emit: F) -> Result<()>
where
    F: FnMut(&'t str),
{
    for (position, symbol) in input.chars().enumerate() {
        match table.get(symbol) {
            Some(code) => emit(code),
            None => return Err(Error::UnknownSymbol { symbol, position }),
        }
    }
    Ok(())
}

/// Encodes `input` as a `'0'`/`'1'` string, reporting the first symbol that
/// has no code.
///
/// A one-symbol input always encodes to `"0"`: that is the code of the sole
/// symbol of a single-symbol tree, and no lookup is made.
pub fn try_encode(input: &str, table: &CodeTable) -> Result<String> {
    match shape(input) {
        Shape::Empty => Ok(String::new()),
        Shape::Single => Ok("0".to_string()),
        Shape::General => {
            let mut encoded = String::new();
            for_each_code(input, table, |code| encoded.push_str(code))?;
            Ok(encoded)
        }
    }
}

/// Encode the input string using the provided code table.
/// Each character is replaced with its Huffman code.
///
/// Returns an empty string if any character has no code, which cannot be told
/// apart from the result for empty input. Use [`try_encode`] to distinguish.
pub fn encode(input: &str, table: &CodeTable) -> String {
    try_encode(input, table).unwrap_or_else(|err| {
        debug!("encode failed: {err}");
        String::new()
    })
}

/// Number of bits [`try_encode`] would produce, without building the string.
pub fn encoded_len(input: &str, table: &CodeTable) -> Result<usize> {
    match shape(input) {
        Shape::Empty => Ok(0),
        Shape::Single => Ok(1),
        Shape::General => {
            let mut bits = 0;
            for_each_code(input, table, |code| bits += code.len())?;
            Ok(bits)
        }
    }
}

/// Encodes `input` into packed bits, most significant bit first.
pub fn encode_bits(input: &str, table: &CodeTable) -> Result<BitVec<u8, Msb0>> {
    let mut encoded: BitVec<u8, Msb0> = BitVec::with_capacity(encoded_len(input, table)?);
    match shape(input) {
        Shape::Empty => {}
        Shape::Single => encoded.push(false),
        Shape::General => for_each_code(input, table, |code| {
            encoded.extend(code.bytes().map(|bit| bit == b'1'));
        })?,
    }
    Ok(encoded)
}

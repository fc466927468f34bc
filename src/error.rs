use thiserror::Error;

/// Errors reported by the fallible Huffman operations.
///
/// The lenient entry points (`encode`, `decode`, `get_code`) fold all of these
/// into an empty (or partial) string result; the `try_` variants surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input contains a symbol that was not observed when the code was built.
    #[error("symbol {symbol:?} at position {position} has no code")]
    UnknownSymbol { symbol: char, position: usize },

    /// The bit-string ended partway down the tree.
    ///
    /// `decoded` holds every symbol fully resolved before the input ran out.
    #[error("bit-string ends {trailing_bits} bit(s) into an incomplete code")]
    IncompleteCode {
        decoded: String,
        trailing_bits: usize,
    },

    /// The code was built from empty input and has no tree to walk.
    #[error("code was built from empty input")]
    EmptyTree,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the LZW codec.
//!
//! Every encode or decode call either returns its full result or one of
//! these errors. There are no partial results: a failed call leaves nothing
//! behind for the caller to clean up.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Alphabet: construction of the symbol set
/// - Message: encode input containing unknown symbols
/// - Code stream: decode input containing non-digit characters
/// - Code index: decode input whose code groups cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Alphabet could not be constructed (e.g., duplicate symbols)
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(#[from] AlphabetError),

    /// Message contains a symbol the alphabet does not define
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    SymbolNotInAlphabet { symbol: char, position: usize },

    /// Code stream contains a character that is not a decimal digit
    #[error("code stream character {character:?} at position {position} is not a digit")]
    InvalidCodeStream { character: char, position: usize },

    /// A code group is malformed or refers to a block that cannot exist
    #[error("invalid code index: {0}")]
    InvalidCodeIndex(#[from] CodeIndexError),
}

/// Alphabet construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// The same symbol was supplied more than once
    #[error("symbol {symbol:?} appears more than once")]
    DuplicateSymbol { symbol: char },
}

/// Decode-time failures while reading a single code group.
///
/// `position` is always the offset of the group's first digit in the
/// code string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeIndexError {
    /// Fewer digits remain than the current code width requires
    #[error("code group at {position} needs {width} digits, only {remaining} remain")]
    Truncated {
        position: usize,
        width: usize,
        remaining: usize,
    },

    /// Code width is zero (empty alphabet) but input remains
    #[error("code group at {position} has zero width: alphabet is empty")]
    ZeroWidth { position: usize },

    /// Digits do not fit a dictionary index
    #[error("code group at {position} does not parse as an index")]
    Unparseable { position: usize },

    /// Index lies beyond the next index the encoder could have assigned
    #[error("code group at {position} refers to index {index}, table has {table_len} entries")]
    OutOfRange {
        position: usize,
        index: usize,
        table_len: usize,
    },

    /// Index equals the table size but there is no previous block to extend
    #[error("code group at {position} refers to unseen index {index} with no prior block")]
    NoContext { position: usize, index: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

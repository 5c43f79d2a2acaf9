//! The symbol set shared by encoders and the decoder.
//!
//! An alphabet is an ordered set of distinct `char`s. Symbols are sorted by
//! their natural order and ranked `0..n`; rank `i` is the dictionary index of
//! the single-symbol block for the `i`-th symbol, so both sides of the codec
//! seed their dictionaries identically.
//!
//! # Example
//! ```
//! use lzw_codec_core::alphabet::Alphabet;
//!
//! let alphabet = Alphabet::parse("cab").unwrap();
//! assert_eq!(alphabet.symbols(), &['a', 'b', 'c']);
//! assert_eq!(alphabet.rank('c'), Some(2));
//! assert!(Alphabet::parse("abca").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{AlphabetError, Error, Result};

/// Sorted, duplicate-free set of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet {
    /// Symbols in ascending order; position is the rank
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from candidate symbols.
    ///
    /// # Errors
    /// Returns `AlphabetError::DuplicateSymbol` if any symbol repeats.
    pub fn new<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut symbols: Vec<char> = symbols.into_iter().collect();
        symbols.sort_unstable();

        if let Some(pair) = symbols.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(AlphabetError::DuplicateSymbol { symbol: pair[0] }.into());
        }

        Ok(Self { symbols })
    }

    /// Build an alphabet from the characters of a string.
    pub fn parse(symbols: &str) -> Result<Self> {
        Self::new(symbols.chars())
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in rank order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Rank of `symbol`, which is also its single-symbol dictionary index.
    pub fn rank(&self, symbol: char) -> Option<usize> {
        self.symbols.binary_search(&symbol).ok()
    }

    /// Symbol at `rank`.
    pub fn symbol(&self, rank: usize) -> Option<char> {
        self.symbols.get(rank).copied()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.rank(symbol).is_some()
    }

    /// Check that every symbol of `message` belongs to this alphabet.
    ///
    /// Returns the message as a symbol vector on success.
    ///
    /// # Errors
    /// Returns `Error::SymbolNotInAlphabet` for the first unknown symbol.
    pub fn validate_message(&self, message: &str) -> Result<Vec<char>> {
        message
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                if self.contains(symbol) {
                    Ok(symbol)
                } else {
                    Err(Error::SymbolNotInAlphabet { symbol, position })
                }
            })
            .collect()
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_ranks() {
        let alphabet = Alphabet::parse("tobern").unwrap();
        assert_eq!(alphabet.symbols(), &['b', 'e', 'n', 'o', 'r', 't']);
        assert_eq!(alphabet.rank('b'), Some(0));
        assert_eq!(alphabet.rank('t'), Some(5));
        assert_eq!(alphabet.rank('z'), None);
        assert_eq!(alphabet.symbol(3), Some('o'));
        assert_eq!(alphabet.symbol(6), None);
        assert_eq!(alphabet.to_string(), "benort");
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Alphabet::parse("abcb").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAlphabet(AlphabetError::DuplicateSymbol { symbol: 'b' })
        );
    }

    #[test]
    fn test_empty_alphabet() {
        let alphabet: Alphabet = "".parse().unwrap();
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.len(), 0);
        assert_eq!(alphabet.validate_message("").unwrap(), Vec::<char>::new());
        assert!(alphabet.validate_message("a").is_err());
    }

    #[test]
    fn test_non_ascii_symbols() {
        let alphabet = Alphabet::parse("ωαβ").unwrap();
        assert_eq!(alphabet.symbols(), &['α', 'β', 'ω']);
        assert_eq!(alphabet.validate_message("βω").unwrap(), vec!['β', 'ω']);
    }

    #[test]
    fn test_validate_message_reports_position() {
        let alphabet = Alphabet::parse("ab").unwrap();
        let err = alphabet.validate_message("abxa").unwrap_err();
        assert_eq!(
            err,
            Error::SymbolNotInAlphabet {
                symbol: 'x',
                position: 2
            }
        );
    }
}

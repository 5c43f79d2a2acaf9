//! Hash-table encoder with binary search over the match length.
//!
//! The dictionary maps every block to its index. To find the longest known
//! prefix of the remaining input, the encoder binary-searches the prefix
//! length in `1..=min(max_block_len, remaining)`.
//!
//! The search is valid because the dictionary is prefix-closed: every entry
//! is a previously present entry extended by one symbol, so if a prefix of
//! length `k` is present, so is every shorter prefix.

use std::collections::HashMap;

use crate::alphabet::Alphabet;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::width::{pad_code, CodeWidth};

/// Longest-prefix-match encoder backed by a `HashMap<Vec<char>, usize>`.
#[derive(Debug, Clone)]
pub struct HashEncoder {
    alphabet: Alphabet,
    /// Block → dictionary index; cleared, not dropped, between calls
    table: HashMap<Vec<char>, usize>,
    /// Next dictionary index to assign
    next_index: usize,
    /// Length of the longest block ever inserted
    max_block_len: usize,
    width: CodeWidth,
}

impl HashEncoder {
    pub fn new(alphabet: Alphabet) -> Self {
        let table = HashMap::with_capacity(alphabet.len() * 2 + 1);
        let width = CodeWidth::for_alphabet(alphabet.len());
        Self {
            alphabet,
            table,
            next_index: 0,
            max_block_len: 0,
            width,
        }
    }

    /// Seed the table with the single-symbol blocks.
    fn initialize(&mut self) {
        self.table.clear();
        self.next_index = 0;
        for &symbol in self.alphabet.symbols() {
            self.table.insert(vec![symbol], self.next_index);
            self.next_index += 1;
        }
        self.max_block_len = if self.alphabet.is_empty() { 0 } else { 1 };
        self.width = CodeWidth::for_alphabet(self.alphabet.len());
    }

    /// Length of the longest dictionary block at the front of `remaining`.
    ///
    /// `remaining` is non-empty and made of alphabet symbols, so the answer
    /// is at least 1.
    fn longest_match(&self, remaining: &[char]) -> usize {
        let mut low = 1;
        let mut high = self.max_block_len.min(remaining.len());
        while low != high {
            let mut middle = (low + high) / 2;
            if middle == low {
                middle += 1;
            }

            if self.table.contains_key(&remaining[..middle]) {
                low = middle;
            } else {
                high = middle - 1;
            }
        }
        high
    }
}

impl Encoder for HashEncoder {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn encode(&mut self, message: &str) -> Result<String> {
        let symbols = self.alphabet.validate_message(message)?;
        self.initialize();

        let mut output = String::new();
        let mut cursor = 0;

        while cursor < symbols.len() {
            let remaining = &symbols[cursor..];
            let matched = self.longest_match(remaining);

            // Every prefix up to `matched` is present.
            let index = self.table[&remaining[..matched]];
            output.push_str(&pad_code(index, self.width.get()));

            if matched < remaining.len() {
                let new_index = self.next_index;
                self.table.insert(remaining[..=matched].to_vec(), new_index);
                self.next_index += 1;

                self.max_block_len = self.max_block_len.max(matched + 1);
                self.width.observe_index(new_index);
            }

            cursor += matched;
        }

        // Keep the allocation; drop the blocks.
        self.table.clear();

        Ok(output)
    }

    fn dictionary_len(&self) -> usize {
        self.next_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn encode(alphabet: &str, message: &str) -> Result<String> {
        HashEncoder::new(Alphabet::parse(alphabet)?).encode(message)
    }

    #[test]
    fn test_single_symbols() {
        assert_eq!(encode("abc", "a").unwrap(), "0");
        assert_eq!(encode("abc", "c").unwrap(), "2");
        assert_eq!(encode("abc", "").unwrap(), "");
    }

    #[test]
    fn test_aabab() {
        // a -> 0, insert aa=3; a -> 0, insert ab=4; ba? no, b -> 1, insert ba=5;
        // ab -> 4 (end).
        assert_eq!(encode("abc", "aabab").unwrap(), "0014");
    }

    #[test]
    fn test_self_referential_case() {
        // a -> 0 (insert aa=1), aa -> 1 (insert aaa=2), aa -> 1 (end).
        assert_eq!(encode("a", "aaaaa").unwrap(), "011");
    }

    #[test]
    fn test_width_grows_after_crossing_ten() {
        // Alphabet of 9: width 1. Step 1 inserts index 9 (width stays 1),
        // step 2 inserts index 10 (width becomes 2 for step 3 onwards).
        // Codes: 0, 1, 02, 03.
        assert_eq!(encode("abcdefghi", "abcd").unwrap(), "010203");
    }

    #[test]
    fn test_unknown_symbol() {
        let err = encode("abc", "abd").unwrap_err();
        assert_eq!(
            err,
            Error::SymbolNotInAlphabet {
                symbol: 'd',
                position: 2
            }
        );
    }

    #[test]
    fn test_empty_alphabet() {
        assert_eq!(encode("", "").unwrap(), "");
        assert!(encode("", "a").is_err());
    }

    #[test]
    fn test_reuse_resets_state() {
        let mut encoder = HashEncoder::new(Alphabet::parse("ab").unwrap());
        let first = encoder.encode("abababababababab").unwrap();
        let len_after_first = encoder.dictionary_len();

        let fresh = HashEncoder::new(Alphabet::parse("ab").unwrap())
            .encode("ba")
            .unwrap();
        assert_eq!(encoder.encode("ba").unwrap(), fresh);
        assert_eq!(encoder.dictionary_len(), 3);

        assert_eq!(encoder.encode("abababababababab").unwrap(), first);
        assert_eq!(encoder.dictionary_len(), len_after_first);
    }
}

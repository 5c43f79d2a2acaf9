//! LZW encoders.
//!
//! Two interchangeable strategies find the longest dictionary block at the
//! front of the unconsumed input:
//! - [`HashEncoder`]: block → index hash table, binary search over the match
//!   length
//! - [`TrieEncoder`]: prefix tree walked one symbol at a time, nodes drawn
//!   from a reusable [`NodePool`](crate::node_pool::NodePool)
//!
//! Both implement [`Encoder`] and must produce identical code strings for the
//! same alphabet and message.
//!
//! # Algorithm
//!
//! The dictionary starts with one entry per alphabet symbol. Each step emits
//! the index of the longest known prefix, zero-padded to the current
//! [`CodeWidth`](crate::width::CodeWidth), then (if input remains) inserts
//! that prefix extended by the next symbol under the next free index and
//! advances past the matched prefix only.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::Alphabet;
use crate::error::Result;

pub mod hash;
pub mod trie;

pub use hash::HashEncoder;
pub use trie::TrieEncoder;

/// Encoding capability shared by every strategy.
///
/// Implementations reset their dictionary at the start of each call, so one
/// instance may encode any number of messages in sequence. Calls on one
/// instance must not overlap.
pub trait Encoder {
    /// Alphabet this encoder was built for.
    fn alphabet(&self) -> &Alphabet;

    /// Encode `message` into a string of decimal digits.
    ///
    /// # Errors
    /// Returns `Error::SymbolNotInAlphabet` if the message contains a symbol
    /// outside the alphabet.
    fn encode(&mut self, message: &str) -> Result<String>;

    /// Number of dictionary entries the last `encode` call ended with.
    fn dictionary_len(&self) -> usize;
}

/// Selects an [`Encoder`] strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncoderKind {
    /// Hash table with binary search over match length
    Hash,
    /// Pooled prefix tree
    #[default]
    Trie,
}

impl EncoderKind {
    /// Every strategy, for cross-checking.
    pub const ALL: [EncoderKind; 2] = [EncoderKind::Hash, EncoderKind::Trie];

    /// Build an encoder of this kind for `alphabet`.
    pub fn build(self, alphabet: Alphabet) -> Box<dyn Encoder> {
        match self {
            EncoderKind::Hash => Box::new(HashEncoder::new(alphabet)),
            EncoderKind::Trie => Box::new(TrieEncoder::new(alphabet)),
        }
    }
}

impl fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncoderKind::Hash => write!(f, "hash"),
            EncoderKind::Trie => write!(f, "trie"),
        }
    }
}

impl FromStr for EncoderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hash" => Ok(EncoderKind::Hash),
            "trie" => Ok(EncoderKind::Trie),
            other => Err(format!("unknown encoder strategy: {other} (expected hash or trie)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_and_display() {
        for kind in EncoderKind::ALL {
            assert_eq!(kind.to_string().parse::<EncoderKind>(), Ok(kind));
        }
        assert_eq!("TRIE".parse::<EncoderKind>(), Ok(EncoderKind::Trie));
        assert!("btree".parse::<EncoderKind>().is_err());
    }

    #[test]
    fn test_built_encoders_agree() {
        let alphabet = Alphabet::parse("benort").unwrap();
        let message = "tobeornottobeortobeornot";

        let codes: Vec<String> = EncoderKind::ALL
            .iter()
            .map(|kind| kind.build(alphabet.clone()).encode(message).unwrap())
            .collect();

        assert_eq!(codes[0], codes[1]);
    }
}

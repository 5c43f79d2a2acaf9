//! Prefix-tree encoder.
//!
//! The dictionary is a trie whose root has one child per alphabet symbol.
//! Matching walks from the root one symbol at a time until no child exists
//! for the next symbol, so each consumed symbol costs one child lookup
//! instead of the `O(log max_block_len)` hash probes of
//! [`HashEncoder`](crate::encoder::HashEncoder).
//!
//! Nodes come from a [`NodePool`] that is reset at the start of every call,
//! so a long-lived encoder stops allocating once the pool has grown to fit
//! the largest message it has seen.

use crate::alphabet::Alphabet;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::node_pool::{NodeId, NodePool};
use crate::width::{pad_code, CodeWidth};

/// Longest-prefix-match encoder backed by a pooled prefix tree.
#[derive(Debug, Clone)]
pub struct TrieEncoder {
    alphabet: Alphabet,
    pool: NodePool,
    /// Next dictionary index to assign
    next_index: usize,
    width: CodeWidth,
}

impl TrieEncoder {
    pub fn new(alphabet: Alphabet) -> Self {
        let pool = NodePool::new(alphabet.len() * 2 + 1);
        let width = CodeWidth::for_alphabet(alphabet.len());
        Self {
            alphabet,
            pool,
            next_index: 0,
            width,
        }
    }

    /// Nodes currently handed out by the pool (root included).
    pub fn pool_in_use(&self) -> usize {
        self.pool.in_use()
    }

    /// Slots backing the pool.
    pub fn pool_capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Reset the pool and build the root with its single-symbol children.
    fn initialize(&mut self) -> NodeId {
        self.pool.reset();
        self.next_index = 0;

        let root = self.pool.acquire();
        // Field-level borrows: `alphabet` is read while `pool` is mutated.
        for &symbol in self.alphabet.symbols() {
            let node = self.pool.acquire();
            self.pool.node_mut(node).number = self.next_index;
            self.next_index += 1;
            self.pool.attach(root, symbol, node);
        }

        self.width = CodeWidth::for_alphabet(self.alphabet.len());
        root
    }

    /// Acquire a node and give it the next dictionary index.
    fn new_node(&mut self) -> NodeId {
        let node = self.pool.acquire();
        self.pool.node_mut(node).number = self.next_index;
        self.next_index += 1;
        node
    }
}

impl Encoder for TrieEncoder {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn encode(&mut self, message: &str) -> Result<String> {
        let symbols = self.alphabet.validate_message(message)?;
        let root = self.initialize();

        let mut output = String::new();
        let mut cursor = 0;

        while cursor < symbols.len() {
            let mut node = root;
            let mut walked = cursor;
            while let Some(&symbol) = symbols.get(walked) {
                match self.pool.child(node, symbol) {
                    Some(child) => {
                        node = child;
                        walked += 1;
                    }
                    None => break,
                }
            }

            output.push_str(&pad_code(self.pool.node(node).number, self.width.get()));

            // The walk stopped early, so the next symbol has no child here.
            if let Some(&next) = symbols.get(walked) {
                let new_index = self.next_index;
                let leaf = self.new_node();
                self.pool.attach(node, next, leaf);
                self.width.observe_index(new_index);
            }

            cursor = walked;
        }

        Ok(output)
    }

    fn dictionary_len(&self) -> usize {
        self.next_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::HashEncoder;
    use crate::error::Error;

    fn encode(alphabet: &str, message: &str) -> Result<String> {
        TrieEncoder::new(Alphabet::parse(alphabet)?).encode(message)
    }

    #[test]
    fn test_aabab() {
        assert_eq!(encode("abc", "aabab").unwrap(), "0014");
    }

    #[test]
    fn test_self_referential_case() {
        assert_eq!(encode("a", "aaaaa").unwrap(), "011");
    }

    #[test]
    fn test_width_grows_after_crossing_ten() {
        assert_eq!(encode("abcdefghi", "abcd").unwrap(), "010203");
    }

    #[test]
    fn test_unknown_symbol() {
        let err = encode("xyz", "xyzw").unwrap_err();
        assert_eq!(
            err,
            Error::SymbolNotInAlphabet {
                symbol: 'w',
                position: 3
            }
        );
    }

    #[test]
    fn test_empty_alphabet() {
        assert_eq!(encode("", "").unwrap(), "");
        assert!(encode("", "a").is_err());
    }

    #[test]
    fn test_pool_reused_across_calls() {
        let mut encoder = TrieEncoder::new(Alphabet::parse("ab").unwrap());
        let long = "ab".repeat(200);

        encoder.encode(&long).unwrap();
        let capacity = encoder.pool_capacity();
        // Root + one node per dictionary entry.
        assert_eq!(encoder.pool_in_use(), encoder.dictionary_len() + 1);

        encoder.encode("ab").unwrap();
        assert_eq!(encoder.pool_capacity(), capacity);
        assert_eq!(encoder.pool_in_use(), 4);

        encoder.encode(&long).unwrap();
        assert_eq!(encoder.pool_capacity(), capacity);
    }

    #[test]
    fn test_power_of_ten_alphabets() {
        use crate::decoder::Decoder;

        for size in [10u32, 100, 1000] {
            let alphabet =
                Alphabet::new((0..size).filter_map(|i| char::from_u32(0x4e00 + i))).unwrap();
            let symbols = alphabet.symbols().to_vec();
            let message: String = (0..size as usize * 3)
                .map(|i| symbols[(i * 7) % symbols.len()])
                .collect();

            let mut trie = TrieEncoder::new(alphabet.clone());
            let code = trie.encode(&message).unwrap();
            assert_eq!(trie.pool_in_use(), trie.dictionary_len() + 1);
            assert_eq!(code, HashEncoder::new(alphabet.clone()).encode(&message).unwrap());
            assert_eq!(Decoder::new(alphabet).decode(&code).unwrap(), message);
        }
    }

    #[test]
    fn test_matches_hash_encoder() {
        let alphabet = Alphabet::parse("benort").unwrap();
        let message = format!("{}tobe", "tobeornottobeor".repeat(50));

        let mut trie = TrieEncoder::new(alphabet.clone());
        let mut hash = HashEncoder::new(alphabet);

        assert_eq!(trie.encode(&message).unwrap(), hash.encode(&message).unwrap());
        assert_eq!(trie.dictionary_len(), hash.dictionary_len());
    }
}

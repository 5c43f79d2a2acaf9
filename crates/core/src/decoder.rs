//! LZW decoder.
//!
//! The decoder rebuilds the encoder's dictionary from the code stream alone.
//! It runs one step behind the encoder: the entry the encoder inserted while
//! emitting code `k` is only known once code `k + 1` reveals its last symbol.
//!
//! # States
//!
//! ```text
//! AwaitingCode --(resolve group)--> HaveBlock --(input left)--> AwaitingCode
//!                                            \--(input empty)--> Done
//! ```
//!
//! A code equal to the table size is the one case where the encoder used an
//! entry the decoder has not built yet. That entry must be the previous
//! block extended by its own first symbol.

use crate::alphabet::Alphabet;
use crate::error::{CodeIndexError, Error, Result};
use crate::width::CodeWidth;

/// Decoder for one alphabet, reusable across code strings.
#[derive(Debug, Clone)]
pub struct Decoder {
    alphabet: Alphabet,
    /// Blocks by dictionary index; rebuilt on every call
    table: Vec<String>,
    width: CodeWidth,
}

impl Decoder {
    pub fn new(alphabet: Alphabet) -> Self {
        let table = Vec::with_capacity(alphabet.len() * 2 + 1);
        let width = CodeWidth::for_alphabet(alphabet.len());
        Self {
            alphabet,
            table,
            width,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of dictionary entries the last `decode` call ended with.
    pub fn dictionary_len(&self) -> usize {
        self.table.len()
    }

    /// Decode a string of decimal digits into the original message.
    ///
    /// # Errors
    /// - `Error::InvalidCodeStream` if `code` contains a non-digit character
    /// - `Error::InvalidCodeIndex` if a code group is short, unparseable, or
    ///   refers to an index the encoder could not have emitted
    pub fn decode(&mut self, code: &str) -> Result<String> {
        if let Some((position, character)) = code.char_indices().find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(Error::InvalidCodeStream {
                character,
                position,
            });
        }

        self.initialize();

        let mut output = String::new();
        let mut previous: Option<String> = None;
        let mut cursor = 0;

        while cursor < code.len() {
            let width = self.width.get();
            let index = parse_group(code, cursor, width)?;

            let block = if index < self.table.len() {
                let block = self.table[index].clone();
                if let Some(mut pending) = previous.take() {
                    pending.extend(block.chars().next());
                    self.table.push(pending);
                }
                block
            } else if index == self.table.len() {
                let mut block = previous.take().ok_or(CodeIndexError::NoContext {
                    position: cursor,
                    index,
                })?;
                let first = block.chars().next();
                block.extend(first);
                self.table.push(block.clone());
                block
            } else {
                return Err(CodeIndexError::OutOfRange {
                    position: cursor,
                    index,
                    table_len: self.table.len(),
                }
                .into());
            };

            output.push_str(&block);
            previous = Some(block);

            self.width.observe_table_len(self.table.len());
            cursor += width;
        }

        Ok(output)
    }

    /// Seed the table with the single-symbol blocks.
    fn initialize(&mut self) {
        self.table.clear();
        self.table
            .extend(self.alphabet.symbols().iter().map(|symbol| symbol.to_string()));
        self.width = CodeWidth::for_alphabet(self.alphabet.len());
    }
}

/// Read the `width`-digit group starting at byte `position`.
///
/// `code` is known to be ASCII digits, so byte offsets are char offsets.
fn parse_group(code: &str, position: usize, width: usize) -> Result<usize> {
    if width == 0 {
        return Err(CodeIndexError::ZeroWidth { position }.into());
    }

    let remaining = code.len() - position;
    if remaining < width {
        return Err(CodeIndexError::Truncated {
            position,
            width,
            remaining,
        }
        .into());
    }

    code[position..position + width]
        .parse()
        .map_err(|_| CodeIndexError::Unparseable { position }.into())
}

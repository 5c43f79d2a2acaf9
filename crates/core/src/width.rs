//! Decimal code width tracking.
//!
//! Every emitted code is the dictionary index printed in decimal and
//! left-padded with zeros to the current width. The width starts at the
//! number of digits of the largest single-symbol index and grows by exactly
//! one digit whenever the dictionary crosses a power of ten.
//!
//! # Synchronization
//!
//! The encoder grows the width right after inserting an entry, comparing
//! the digits of the new index. The decoder inserts one step later than the
//! encoder, so it compares the digits of its table length against the
//! digits of the length minus one. Both rules land on the same width for
//! the same code group, which is what makes the stream self-delimiting.

/// Number of decimal digits needed to print `value` (`0` needs one digit).
pub fn decimal_digits(value: usize) -> usize {
    let mut digits = 1;
    let mut rest = value / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

/// Render `index` as a decimal code zero-padded to `width` digits.
pub fn pad_code(index: usize, width: usize) -> String {
    format!("{index:0width$}")
}

/// Current decimal width of the code stream.
///
/// # Invariants
/// - Never decreases
/// - Grows by at most one digit per observed insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeWidth(usize);

impl CodeWidth {
    /// Starting width for an alphabet of `len` symbols.
    ///
    /// This is `digits(len - 1)`, or zero for the empty alphabet.
    pub fn for_alphabet(len: usize) -> Self {
        if len == 0 {
            Self(0)
        } else {
            Self(decimal_digits(len - 1))
        }
    }

    /// Current width in digits.
    pub fn get(self) -> usize {
        self.0
    }

    /// Encoder rule: called after assigning `new_index` to a fresh entry.
    pub fn observe_index(&mut self, new_index: usize) {
        if decimal_digits(new_index) > self.0 {
            self.0 += 1;
        }
    }

    /// Decoder rule: called after each code group with the table length.
    pub fn observe_table_len(&mut self, table_len: usize) {
        if table_len > 0 && decimal_digits(table_len) > decimal_digits(table_len - 1) {
            self.0 += 1;
        }
    }
}

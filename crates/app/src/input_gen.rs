//! Benchmark message generation.
//!
//! When the benchmark is not given a message, we produce one over the active
//! alphabet with a mix of compression characteristics.
//!
//! # Design
//!
//! Generated messages have:
//! - Some highly compressible sections (runs of one symbol)
//! - Some moderately compressible sections (a few favoured symbols)
//! - Some structured sections (short repeating patterns)
//! - Some incompressible sections (uniform random symbols)
//!
//! This makes dictionary growth and code width changes visible in metrics.

use lzw_codec_core::Alphabet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Symbols per generated section.
const SECTION_LEN: usize = 4096;

/// The classic LZW example: `"tobeornottobeor" * repeats + "tobe"`.
pub fn classic_message(repeats: usize) -> String {
    format!("{}tobe", "tobeornottobeor".repeat(repeats))
}

/// Generate a message of exactly `len` symbols drawn from `alphabet`.
///
/// Returns an empty message for an empty alphabet.
pub fn generate_message(seed: u64, alphabet: &Alphabet, len: usize) -> String {
    let symbols = alphabet.symbols();
    if symbols.is_empty() {
        return String::new();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut message = Vec::with_capacity(len);

    while message.len() < len {
        let section = (len - message.len()).min(SECTION_LEN);

        // Choose section type randomly
        match rng.gen_range(0..10) {
            // 30% highly compressible (runs of one symbol)
            0..=2 => {
                let symbol = symbols[rng.gen_range(0..symbols.len())];
                message.extend(std::iter::repeat(symbol).take(section));
            }

            // 30% moderately compressible (small favoured subset)
            3..=5 => {
                let favoured = rng.gen_range(1..=symbols.len().min(4));
                for _ in 0..section {
                    message.push(symbols[rng.gen_range(0..favoured)]);
                }
            }

            // 20% structured (repeating patterns)
            6..=7 => {
                let pattern = generate_pattern(&mut rng, symbols);
                message.extend(pattern.iter().cycle().take(section));
            }

            // 20% incompressible (uniform random)
            _ => {
                for _ in 0..section {
                    message.push(symbols[rng.gen_range(0..symbols.len())]);
                }
            }
        }
    }

    message.into_iter().collect()
}

/// Generate a short repeating pattern.
fn generate_pattern(rng: &mut ChaCha8Rng, symbols: &[char]) -> Vec<char> {
    let pattern_len = rng.gen_range(4..=32);
    (0..pattern_len)
        .map(|_| symbols[rng.gen_range(0..symbols.len())])
        .collect()
}

//! One-call encode/decode entry points and a reusable codec pair.
//!
//! [`encode`] and [`decode`] take the alphabet as a plain string of symbols
//! and build fresh state per call. [`Codec`] keeps an encoder and a decoder
//! for one alphabet so repeated messages reuse their tables and node pool.

use std::time::{Duration, Instant};

use crate::alphabet::Alphabet;
use crate::decoder::Decoder;
use crate::encoder::{Encoder, EncoderKind};
use crate::error::Result;

/// Encode `message` over `alphabet` with the default strategy.
///
/// # Errors
/// - `Error::InvalidAlphabet` if `alphabet` repeats a symbol
/// - `Error::SymbolNotInAlphabet` if `message` has a symbol outside it
pub fn encode(alphabet: &str, message: &str) -> Result<String> {
    EncoderKind::default()
        .build(Alphabet::parse(alphabet)?)
        .encode(message)
}

/// Decode `code` over `alphabet`.
///
/// # Errors
/// - `Error::InvalidAlphabet` if `alphabet` repeats a symbol
/// - `Error::InvalidCodeStream` if `code` has a non-digit character
/// - `Error::InvalidCodeIndex` if a code group is malformed or unresolvable
pub fn decode(alphabet: &str, code: &str) -> Result<String> {
    Decoder::new(Alphabet::parse(alphabet)?).decode(code)
}

/// Outcome of encoding a message and decoding it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    /// Encoded form of the message
    pub code: String,
    /// Decoded form of `code`
    pub decoded: String,
    pub encode_time: Duration,
    pub decode_time: Duration,
}

impl RoundTrip {
    /// Whether decoding reproduced the original message.
    pub fn matches(&self, message: &str) -> bool {
        self.decoded == message
    }
}

/// Encoder and decoder bound to the same alphabet.
pub struct Codec {
    kind: EncoderKind,
    encoder: Box<dyn Encoder>,
    decoder: Decoder,
}

impl Codec {
    pub fn new(alphabet: Alphabet, kind: EncoderKind) -> Self {
        Self {
            kind,
            encoder: kind.build(alphabet.clone()),
            decoder: Decoder::new(alphabet),
        }
    }

    /// Parse `alphabet` and build a codec for it.
    pub fn from_symbols(alphabet: &str, kind: EncoderKind) -> Result<Self> {
        Ok(Self::new(Alphabet::parse(alphabet)?, kind))
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.encoder.alphabet()
    }

    /// Encoder strategy in use.
    pub fn kind(&self) -> EncoderKind {
        self.kind
    }

    pub fn encode(&mut self, message: &str) -> Result<String> {
        self.encoder.encode(message)
    }

    pub fn decode(&mut self, code: &str) -> Result<String> {
        self.decoder.decode(code)
    }

    /// Encode `message`, then decode the result, timing each half.
    ///
    /// Only the encode half can fail on user input (`SymbolNotInAlphabet`).
    /// Any other error means the codec disagrees with itself.
    pub fn round_trip(&mut self, message: &str) -> Result<RoundTrip> {
        let started = Instant::now();
        let code = self.encode(message)?;
        let encode_time = started.elapsed();

        let started = Instant::now();
        let decoded = self.decode(&code)?;
        let decode_time = started.elapsed();

        Ok(RoundTrip {
            code,
            decoded,
            encode_time,
            decode_time,
        })
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("kind", &self.kind)
            .field("alphabet", self.alphabet())
            .finish()
    }
}

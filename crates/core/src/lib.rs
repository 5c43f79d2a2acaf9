//! lzw-codec-core: LZW dictionary compression over a caller-supplied alphabet
//!
//! This library provides the core components of a codec that:
//! - Maps a message over a finite alphabet to a string of decimal codes
//! - Grows the code width one digit at a time as the dictionary grows
//! - Rebuilds the same dictionary on the decode side from the codes alone
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `alphabet`: Symbol set validation and ranking
//! - `width`: Decimal code width rules shared by both sides
//! - `node_pool`: Reusable arena of prefix-tree nodes
//! - `encoder`: The `Encoder` capability with hash and trie strategies
//! - `decoder`: Incremental dictionary reconstruction
//! - `codec`: One-call entry points and a reusable encoder/decoder pair
//! - `metrics`: Counters and timings for callers that run many messages
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and returned
//! - **Atomic calls**: A failed call produces no partial output
//! - **Reusable state**: Tables and node pools are reset, not reallocated
//! - **Cross-checked**: Both encoders must emit identical code strings
//!
//! # Example
//! ```
//! use lzw_codec_core::{decode, encode};
//!
//! let code = encode("abc", "aabab").unwrap();
//! assert_eq!(code, "0014");
//! assert_eq!(decode("abc", &code).unwrap(), "aabab");
//! ```

pub mod alphabet;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod metrics;
pub mod node_pool;
pub mod width;

// Re-export commonly used types
pub use alphabet::Alphabet;
pub use codec::{decode, encode, Codec, RoundTrip};
pub use decoder::Decoder;
pub use encoder::{Encoder, EncoderKind, HashEncoder, TrieEncoder};
pub use error::{Error, Result};

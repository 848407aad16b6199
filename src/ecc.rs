//! Binary cyclic error-correcting codes.
//!
//! This module provides:
//! - GF(2) word arithmetic and cyclic rotations ([`gf2`])
//! - Cyclic burst length of error patterns ([`burst`])
//! - Codebook enumeration and minimum distance ([`codebook`])
//! - Generator-matrix encoding ([`encoder`])
//! - Syndromes over all cyclic shifts and error trapping ([`syndrome`])
//! - Brute-force nearest-neighbor decoding ([`nearest_neighbor`])
//! - Matrices from a generator polynomial ([`polynomial`])
//! - The decoding engine tying these together ([`cyclic`])
//!
//! Words are at most [`MAX_CODE_LENGTH`] bits; bit `i` of a [`Word`] is the
//! coefficient of xⁱ.
//!
//! # Examples
//!
//! ```rust
//! use cyclic_codes::ecc::{CyclicCode, DecodingStrategy};
//!
//! // (7,4) Hamming code, g(x) = 1 + x + x^3
//! let code = CyclicCode::from_generator_polynomial(7, 0b1011).unwrap();
//! let codeword = code.encode(0b1010).unwrap();
//!
//! let decoded = code.decode(codeword ^ 0b010_0000).unwrap();
//! assert!(decoded.is_success());
//! assert_eq!(decoded.word, codeword);
//! assert_eq!(code.recover_message(decoded.word), Some(0b1010));
//!
//! let decoded = code
//!     .decode_with(codeword ^ 0b000_0001, DecodingStrategy::burst_up_to(1))
//!     .unwrap();
//! assert_eq!(decoded.word, codeword);
//! ```

/// Result type for error correction operations
pub use crate::error::Result;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod burst;
pub mod codebook;
pub mod cyclic;
pub mod encoder;
pub mod gf2;
pub mod nearest_neighbor;
pub mod polynomial;
pub mod syndrome;

pub use codebook::Codebook;
pub use cyclic::{
    CyclicCode, CyclicCodeBuilder, DecodeStatus, Decoded, DecodingStrategy,
    DEFAULT_MAX_BURST_LENGTH,
};
pub use gf2::{Word, MAX_CODE_LENGTH};
pub use polynomial::{cyclic_matrices, Polynomial};

//! Error types shared by every code in the crate.

use thiserror::Error;

/// Errors raised while building a code or feeding it out-of-range input.
///
/// Uncorrectable received words are not errors at the word level; they are
/// reported through [`crate::ecc::DecodeStatus`]. Only the byte-stream codec
/// turns them into [`Error::Uncorrectable`] and [`Error::InconsistentDecode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed parameters: mismatched dimensions, rows wider than the code, etc.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A value needs more bits than the code or word representation allows.
    #[error("input too large: {length} bits exceeds the maximum of {max_length}")]
    InputTooLarge { length: usize, max_length: usize },

    /// No acceptable syndrome was found for a block of a byte stream.
    #[error("block {block} could not be decoded")]
    Uncorrectable { block: usize },

    /// A block decoded to a word that failed the codeword post-check.
    #[error("block {block} decoded to a word outside the code")]
    InconsistentDecode { block: usize },
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

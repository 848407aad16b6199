pub mod ecc;
pub mod error;

pub use ecc::{CyclicCode, DecodeStatus, Decoded, DecodingStrategy, ErrorCorrection, Word};
pub use error::{Error, Result};

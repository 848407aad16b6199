//! Brute-force nearest-neighbor decoding.
//!
//! The coset of a received word `r` is `{r ^ c : c in codebook}`. Its
//! minimum-weight member, the coset leader, is the most likely error pattern,
//! and `r ^ leader` the nearest codeword. Ties go to the codeword that comes
//! first in ascending codebook order. Cost is one pass over the codebook.

use crate::ecc::codebook::Codebook;
use crate::ecc::gf2::Word;

/// Minimum-weight member of the coset of `received`.
pub fn coset_leader(codebook: &Codebook, received: Word) -> Word {
    codebook
        .iter()
        .map(|codeword| received ^ codeword)
        .min_by_key(|coset_word| coset_word.count_ones())
        .unwrap_or(received)
}

/// Codeword closest to `received` in Hamming distance.
pub fn nearest_codeword(codebook: &Codebook, received: Word) -> Word {
    received ^ coset_leader(codebook, received)
}

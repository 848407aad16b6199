//! Burst-length analysis of bit patterns.
//!
//! A burst error is one whose nonzero bits sit inside a short contiguous
//! cyclic span. The burst length of a `width`-bit pattern is the smallest span
//! from the lowest to the highest set bit over all `width` cyclic rotations, so
//! a pattern that wraps through the top bit is measured across the wrap.
//!
//! # Examples
//!
//! ```rust
//! use cyclic_codes::ecc::burst::burst_length;
//!
//! assert_eq!(burst_length(0b0000, 4), 0);
//! assert_eq!(burst_length(0b0110, 4), 2);
//! // bits 0 and 3 are adjacent across the wrap
//! assert_eq!(burst_length(0b1001, 4), 2);
//! ```

use crate::ecc::gf2::{mask, rotate_left, Word};

/// Inclusive span between the lowest and highest set bit of a nonzero word.
fn span(word: Word) -> usize {
    let highest = Word::BITS - 1 - word.leading_zeros();
    let lowest = word.trailing_zeros();
    (highest - lowest + 1) as usize
}

/// Minimal cyclic span of the set bits of `pattern` inside a `width`-bit field.
///
/// Returns 0 for the zero pattern.
pub fn burst_length(pattern: Word, width: usize) -> usize {
    let pattern = pattern & mask(width);
    if pattern == 0 {
        return 0;
    }

    (0..width)
        .map(|shift| span(rotate_left(pattern, width, shift)))
        .min()
        .unwrap_or(0)
}

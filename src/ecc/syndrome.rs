//! Syndrome computation over the cyclic shifts of a received word.
//!
//! The parity-check matrix H has n − k rows of n bits. [`ParityTranspose`]
//! stores it column-wise: row `i` of the transpose is column `n - 1 - i` of H,
//! with parity row `r` landing on syndrome bit `n - k - 1 - r`. The syndrome of
//! a word is then the XOR of the transpose rows its set bits select, and one
//! transpose serves all n cyclic shifts of a received word.
//!
//! [`ErrorTrap`] inverts the syndrome map on the check window, the n − k
//! high-order positions k..n−1. If the error pattern of some shift xⁱ·r lies
//! entirely inside that window, the trap returns it exactly. For H in
//! systematic form the trapped pattern is the syndrome shifted left by k.

use crate::ecc::gf2::{cyclic_shifts, format_word, mask, Word, XorBasis};

/// Column-wise copy of a parity-check matrix.
#[derive(Debug, Clone)]
pub struct ParityTranspose {
    /// Row `i` holds column `length - 1 - i` of H
    rows: Vec<Word>,
    /// Code length n
    length: usize,
    /// Syndrome width n - k
    width: usize,
}

impl ParityTranspose {
    /// Transposes the parity-check rows of a code of length `length`.
    pub fn new(parity_check: &[Word], length: usize) -> Self {
        let width = parity_check.len();
        let mut rows = vec![0; length];

        for (index, &parity_row) in parity_check.iter().enumerate() {
            for column in 0..length {
                if (parity_row >> column) & 1 == 1 {
                    rows[length - 1 - column] |= 1 << (width - 1 - index);
                }
            }
        }

        ParityTranspose {
            rows,
            length,
            width,
        }
    }

    /// Transposed rows, `n` entries of `n - k` bits.
    pub fn rows(&self) -> &[Word] {
        &self.rows
    }

    /// Code length n.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Syndrome width n - k.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Syndrome of the single-bit word xᵖ, i.e. column `position` of H.
    pub fn column(&self, position: usize) -> Word {
        self.rows[self.length - 1 - position]
    }

    /// Syndrome of `word`: bit `j` of the word selects transpose row `n - 1 - j`.
    pub fn syndrome(&self, word: Word) -> Word {
        (0..self.length)
            .filter(|&position| (word >> position) & 1 == 1)
            .fold(0, |syndrome, position| syndrome ^ self.column(position))
    }

    /// Syndromes of the n cyclic shifts of `received`; entry `i` belongs to
    /// xⁱ·r, the received word rotated left by `i`.
    pub fn syndromes_for(&self, received: Word) -> Vec<Word> {
        cyclic_shifts(received, self.length)
            .into_iter()
            .map(|shifted| self.syndrome(shifted))
            .collect()
    }
}

/// Maps syndromes to the error pattern inside the check window that has them.
#[derive(Debug, Clone)]
pub struct ErrorTrap {
    /// Window columns of H tagged with their positions; `None` if they are dependent
    basis: Option<XorBasis>,
    /// Code length n
    length: usize,
    /// First window position k
    offset: usize,
}

impl ErrorTrap {
    /// Builds the trap by inverting the window columns of the parity check.
    pub fn new(transpose: &ParityTranspose) -> Self {
        let length = transpose.length();
        // More parity rows than positions leaves the whole word as the window
        let offset = length.saturating_sub(transpose.width());

        let mut basis = XorBasis::new(transpose.width());
        let independent = (offset..length)
            .all(|position| basis.insert(transpose.column(position), 1 << position));

        if !independent {
            log::warn!(
                "check window {}..{} of the parity-check matrix is singular; \
                 syndromes will be aligned by a plain shift",
                offset,
                length
            );
        }

        ErrorTrap {
            basis: independent.then_some(basis),
            length,
            offset,
        }
    }

    /// `true` when every syndrome has a unique pattern inside the window.
    pub fn is_exact(&self) -> bool {
        self.basis.is_some()
    }

    /// Error pattern confined to positions k..n−1 whose syndrome is `syndrome`.
    ///
    /// Falls back to `syndrome << k` when the window is singular.
    pub fn pattern(&self, syndrome: Word) -> Word {
        let trapped = self
            .basis
            .as_ref()
            .and_then(|basis| basis.decompose(syndrome));

        match trapped {
            Some(pattern) => pattern,
            None => {
                let shifted =
                    syndrome.checked_shl(self.offset as u32).unwrap_or(0) & mask(self.length);
                log::trace!(
                    "syndrome {} aligned by shift to {}",
                    format_word(syndrome, self.length - self.offset),
                    format_word(shifted, self.length)
                );
                shifted
            }
        }
    }
}

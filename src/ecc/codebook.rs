//! Codebook enumeration and minimum distance.
//!
//! The codebook of a binary linear code is the null space of its parity-check
//! matrix: every word `w` with `h · w = 0` over GF(2) for each parity row `h`.
//! It is found by testing all 2ⁿ candidates, which is only practical for the
//! short codes a [`Word`] can represent anyway.
//!
//! With the `parallel` feature the candidates are tested with rayon; the
//! resulting codebook is identical, ascending order included.

use crate::ecc::gf2::{hamming_weight, parity, Word};

/// Returns `true` when `word` has even parity against every parity-check row.
pub fn is_codeword(parity_check: &[Word], word: Word) -> bool {
    parity_check.iter().all(|&row| !parity(word, row))
}

/// All codewords of a code in increasing numeric order, with the derived
/// minimum distance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Codebook {
    /// Codewords in ascending order; always starts with the zero word
    words: Vec<Word>,
    /// Code length in bits
    length: usize,
    /// Minimum weight over nonzero codewords, `None` if the code is `{0}`
    min_distance: Option<usize>,
}

impl Codebook {
    /// Enumerates the codebook of the code with the given parity-check rows.
    ///
    /// # Arguments
    ///
    /// * `parity_check` - Rows of the parity-check matrix, each `length` bits wide
    /// * `length` - Code length n
    pub fn enumerate(parity_check: &[Word], length: usize) -> Self {
        let words = collect_codewords(parity_check, length);

        let min_distance = words
            .iter()
            .filter(|&&word| word != 0)
            .map(|&word| hamming_weight(word, length))
            .min();

        Codebook {
            words,
            length,
            min_distance,
        }
    }

    /// Codewords in ascending order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Iterator over the codewords in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.words.iter().copied()
    }

    /// Number of codewords (2ᵏ for a full-rank parity-check matrix).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// A codebook always holds the zero word, so this is only `true` for a
    /// default-constructed value.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test by binary search over the sorted codewords.
    pub fn contains(&self, word: Word) -> bool {
        self.words.binary_search(&word).is_ok()
    }

    /// Minimum Hamming weight over nonzero codewords.
    pub fn min_distance(&self) -> Option<usize> {
        self.min_distance
    }

    /// Code length the codebook was enumerated for.
    pub fn length(&self) -> usize {
        self.length
    }
}

#[cfg(not(feature = "parallel"))]
fn collect_codewords(parity_check: &[Word], length: usize) -> Vec<Word> {
    (0..1u64 << length)
        .map(|candidate| candidate as Word)
        .filter(|&word| is_codeword(parity_check, word))
        .collect()
}

#[cfg(feature = "parallel")]
fn collect_codewords(parity_check: &[Word], length: usize) -> Vec<Word> {
    use rayon::prelude::*;

    (0..1u64 << length)
        .into_par_iter()
        .map(|candidate| candidate as Word)
        .filter(|&word| is_codeword(parity_check, word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // (7,4) cyclic Hamming code, g(x) = 1 + x + x^3, systematic parity check
    const HAMMING_7_4_H: [Word; 3] = [0b100_1110, 0b010_0111, 0b001_1101];

    #[test]
    fn test_repetition_codebook() {
        let codebook = Codebook::enumerate(&[0b011, 0b101], 3);
        assert_eq!(codebook.words(), &[0b000, 0b111]);
        assert_eq!(codebook.min_distance(), Some(3));
        assert_eq!(codebook.len(), 2);
    }

    #[test]
    fn test_hamming_codebook() {
        let codebook = Codebook::enumerate(&HAMMING_7_4_H, 7);
        assert_eq!(codebook.len(), 16);
        assert_eq!(codebook.min_distance(), Some(3));

        // Ascending order, starting at zero
        assert_eq!(codebook.words()[0], 0);
        assert!(codebook.words().windows(2).all(|pair| pair[0] < pair[1]));

        // g(x) itself is a codeword
        assert!(codebook.contains(0b1011));
    }

    #[test]
    fn test_enumeration_keeps_ascending_order() {
        // (15,7) BCH parity checks; holds for the rayon path as well
        let (_, parity_check) =
            crate::ecc::polynomial::cyclic_matrices(15, 0b1_1101_0001).unwrap();
        let codebook = Codebook::enumerate(&parity_check, 15);

        let expected: Vec<Word> = (0..1 << 15)
            .filter(|&word| is_codeword(&parity_check, word))
            .collect();
        assert_eq!(codebook.words(), expected.as_slice());
        assert_eq!(codebook.len(), 128);
    }

    #[test]
    fn test_codebook_closed_under_xor() {
        let codebook = Codebook::enumerate(&HAMMING_7_4_H, 7);
        for a in codebook.iter() {
            for b in codebook.iter() {
                assert!(codebook.contains(a ^ b));
            }
        }
    }

    #[test]
    fn test_membership_matches_codebook() {
        let codebook = Codebook::enumerate(&HAMMING_7_4_H, 7);
        for word in 0..(1 << 7) {
            assert_eq!(is_codeword(&HAMMING_7_4_H, word), codebook.contains(word));
        }
    }

    #[test]
    fn test_min_distance_matches_pairwise_distance() {
        let codebook = Codebook::enumerate(&HAMMING_7_4_H, 7);
        let mut pairwise = usize::MAX;
        for a in codebook.iter() {
            for b in codebook.iter().filter(|&b| b != a) {
                pairwise = pairwise.min(hamming_weight(a ^ b, 7));
            }
        }
        assert_eq!(codebook.min_distance(), Some(pairwise));
    }

    #[test]
    fn test_degenerate_codes() {
        // No parity checks: every word is a codeword
        let codebook = Codebook::enumerate(&[], 3);
        assert_eq!(codebook.len(), 8);
        assert_eq!(codebook.min_distance(), Some(1));

        // Full-rank parity checks leave only the zero word
        let codebook = Codebook::enumerate(&[0b01, 0b10], 2);
        assert_eq!(codebook.words(), &[0]);
        assert_eq!(codebook.min_distance(), None);
    }
}

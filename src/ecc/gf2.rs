//! Word-level GF(2) arithmetic.
//!
//! A [`Word`] holds an element of GF(2)ⁿ with bit `i` carrying the coefficient
//! of xⁱ. Addition is XOR, the inner product is the parity of an AND, and a
//! cyclic rotation by one position inside an `m`-bit field is multiplication
//! by x in GF(2)\[x\]/(xᵐ − 1).
//!
//! # Examples
//!
//! ```rust
//! use cyclic_codes::ecc::gf2::{cyclic_shifts, hamming_distance, rotate_right};
//!
//! assert_eq!(hamming_distance(0b1011, 0b0001, 4), 2);
//! assert_eq!(cyclic_shifts(0b001, 3), vec![0b001, 0b010, 0b100]);
//! assert_eq!(rotate_right(0b001, 3, 1), 0b100);
//! ```

use bitvec::prelude::*;

/// An n-bit binary word, bit `i` being the coefficient of xⁱ.
pub type Word = u32;

/// Largest code length a [`Word`] can carry.
pub const MAX_CODE_LENGTH: usize = Word::BITS as usize;

/// Mask selecting the low `width` bits.
pub fn mask(width: usize) -> Word {
    if width == 0 {
        0
    } else {
        Word::MAX >> (MAX_CODE_LENGTH - width.min(MAX_CODE_LENGTH))
    }
}

/// Number of set bits of `word` within the low `width` positions.
pub fn hamming_weight(word: Word, width: usize) -> usize {
    (word & mask(width)).count_ones() as usize
}

/// Number of positions in which `a` and `b` differ.
pub fn hamming_distance(a: Word, b: Word, width: usize) -> usize {
    hamming_weight(a ^ b, width)
}

/// GF(2) inner product of two words: `true` when `a & b` has odd weight.
pub fn parity(a: Word, b: Word) -> bool {
    (a & b).count_ones() % 2 == 1
}

/// Rotates `word` left by `amount` inside a `width`-bit field.
///
/// The bit at position `p` moves to `(p + amount) mod width`.
pub fn rotate_left(word: Word, width: usize, amount: usize) -> Word {
    let word = word & mask(width);
    if width == 0 {
        return word;
    }
    let amount = amount % width;
    if amount == 0 {
        return word;
    }
    ((word << amount) | (word >> (width - amount))) & mask(width)
}

/// Rotates `word` right by `amount` inside a `width`-bit field, wrapping the
/// low bits back in at the top.
pub fn rotate_right(word: Word, width: usize, amount: usize) -> Word {
    if width == 0 {
        return word;
    }
    rotate_left(word, width, width - amount % width)
}

/// All `width` cyclic shifts of `word`; entry `i` is `word` rotated left by `i`.
pub fn cyclic_shifts(word: Word, width: usize) -> Vec<Word> {
    (0..width).map(|i| rotate_left(word, width, i)).collect()
}

/// Renders the low `width` bits of `word`, most significant first.
pub fn format_word(word: Word, width: usize) -> String {
    let width = width.min(MAX_CODE_LENGTH);
    word.view_bits::<Lsb0>()[..width]
        .iter()
        .rev()
        .map(|bit| if *bit { '1' } else { '0' })
        .collect()
}

/// A basis of GF(2) vectors in leading-bit echelon form.
///
/// Every inserted vector carries a tag; tags are combined with the same XOR
/// steps as the vectors, so [`XorBasis::decompose`] returns the combination of
/// tags whose vectors sum to the requested value.
#[derive(Debug, Clone)]
pub struct XorBasis {
    /// Slot `b` holds the vector whose leading bit is `b`, with its tag
    slots: Vec<Option<(Word, Word)>>,
    rank: usize,
}

impl XorBasis {
    /// Creates an empty basis for vectors of `width` bits.
    pub fn new(width: usize) -> Self {
        XorBasis {
            slots: vec![None; width.min(MAX_CODE_LENGTH)],
            rank: 0,
        }
    }

    /// Adds `value` with its `tag`. Returns `false` when `value` is already in
    /// the span, in which case the basis is left unchanged.
    pub fn insert(&mut self, value: Word, tag: Word) -> bool {
        let mut value = value & mask(self.slots.len());
        let mut tag = tag;

        for bit in (0..self.slots.len()).rev() {
            if (value >> bit) & 1 == 0 {
                continue;
            }
            match self.slots[bit] {
                Some((basis_value, basis_tag)) => {
                    value ^= basis_value;
                    tag ^= basis_tag;
                }
                None => {
                    self.slots[bit] = Some((value, tag));
                    self.rank += 1;
                    return true;
                }
            }
        }

        false
    }

    /// XOR of the tags of the basis vectors that sum to `value`, or `None` if
    /// `value` lies outside the span.
    pub fn decompose(&self, value: Word) -> Option<Word> {
        if value & !mask(self.slots.len()) != 0 {
            return None;
        }

        let mut value = value;
        let mut tag = 0;
        for bit in (0..self.slots.len()).rev() {
            if (value >> bit) & 1 == 0 {
                continue;
            }
            let (basis_value, basis_tag) = self.slots[bit]?;
            value ^= basis_value;
            tag ^= basis_tag;
        }

        Some(tag)
    }

    /// Number of independent vectors inserted so far.
    pub fn rank(&self) -> usize {
        self.rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask(0), 0);
        assert_eq!(mask(3), 0b111);
        assert_eq!(mask(32), u32::MAX);
    }

    #[test]
    fn test_hamming_weight_and_distance() {
        assert_eq!(hamming_weight(0, 7), 0);
        assert_eq!(hamming_weight(0b1011, 7), 3);
        // Bits beyond the width do not count
        assert_eq!(hamming_weight(0b1_0000_0001, 8), 1);

        assert_eq!(hamming_distance(0b111, 0b011, 3), 1);
        assert_eq!(hamming_distance(0b111, 0b000, 3), 3);
        assert_eq!(hamming_distance(0b101, 0b101, 3), 0);
    }

    #[test]
    fn test_parity() {
        assert!(!parity(0b011, 0b011));
        assert!(parity(0b011, 0b101));
        assert!(!parity(0, u32::MAX));
    }

    #[test]
    fn test_rotations() {
        assert_eq!(rotate_left(0b100, 3, 1), 0b001);
        assert_eq!(rotate_left(0b011, 3, 2), 0b101);
        assert_eq!(rotate_left(0b1011, 7, 7), 0b1011);
        assert_eq!(rotate_right(0b001, 3, 1), 0b100);
        assert_eq!(rotate_right(0b1011, 7, 3), 0b011_0001);

        // Full-width words wrap through the top bit
        assert_eq!(rotate_left(0x8000_0001, 32, 1), 0x0000_0003);
        assert_eq!(rotate_right(0x0000_0003, 32, 1), 0x8000_0001);

        // Left and right rotations undo each other
        for amount in 0..15 {
            let word = 0b101_1001_0110_0011;
            assert_eq!(rotate_right(rotate_left(word, 15, amount), 15, amount), word);
        }

        assert_eq!(rotate_left(0, 0, 3), 0);
    }

    #[test]
    fn test_cyclic_shifts() {
        let shifts = cyclic_shifts(0b0011, 4);
        assert_eq!(shifts, vec![0b0011, 0b0110, 0b1100, 0b1001]);

        assert!(cyclic_shifts(0b1, 0).is_empty());
        assert_eq!(cyclic_shifts(0, 5), vec![0; 5]);
    }

    #[test]
    fn test_format_word() {
        assert_eq!(format_word(0b011, 3), "011");
        assert_eq!(format_word(0b1011, 7), "0001011");
        assert_eq!(format_word(0xFF, 0), "");
    }

    #[test]
    fn test_xor_basis() {
        let mut basis = XorBasis::new(4);
        assert!(basis.insert(0b0011, 0b01));
        assert!(basis.insert(0b0110, 0b10));
        // 0b0101 = 0b0011 ^ 0b0110 is dependent
        assert!(!basis.insert(0b0101, 0b100));
        assert_eq!(basis.rank(), 2);

        assert_eq!(basis.decompose(0), Some(0));
        assert_eq!(basis.decompose(0b0011), Some(0b01));
        assert_eq!(basis.decompose(0b0101), Some(0b11));
        assert_eq!(basis.decompose(0b1000), None);
        // Outside the vector width
        assert_eq!(basis.decompose(0b1_0000), None);
    }
}

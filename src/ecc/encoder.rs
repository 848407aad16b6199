//! Generator-matrix encoding.
//!
//! A k-bit message selects generator rows and the codeword is their GF(2) sum.
//! The least significant message bit selects the *last* row: bit `i` picks row
//! `k - 1 - i`, so reading the message MSB-first walks the generator matrix
//! top to bottom.

use crate::ecc::gf2::{mask, Word, XorBasis};
use crate::error::{Error, Result};

/// Encoder over a fixed generator matrix.
#[derive(Debug, Clone)]
pub struct Encoder {
    /// Generator rows, each `length` bits wide
    rows: Vec<Word>,
    /// Row space of the generator, each row tagged with the message bit that selects it
    basis: XorBasis,
}

impl Encoder {
    /// Creates an encoder for the generator rows of a code of the given length.
    pub fn new(rows: Vec<Word>, length: usize) -> Self {
        let message_length = rows.len();
        let mut basis = XorBasis::new(length);

        for (index, &row) in rows.iter().enumerate() {
            let tag = 1 << (message_length - 1 - index);
            if !basis.insert(row, tag) {
                log::warn!(
                    "generator row {} is linearly dependent on the rows above it",
                    index
                );
            }
        }

        Encoder { rows, basis }
    }

    /// Generator rows in their original order.
    pub fn rows(&self) -> &[Word] {
        &self.rows
    }

    /// Number of message bits k.
    pub fn message_length(&self) -> usize {
        self.rows.len()
    }

    /// Encodes a k-bit message into its codeword.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputTooLarge`] if `message` has bits set at or above
    /// position k.
    pub fn encode(&self, message: Word) -> Result<Word> {
        let k = self.message_length();
        if message & !mask(k) != 0 {
            return Err(Error::InputTooLarge {
                length: (Word::BITS - message.leading_zeros()) as usize,
                max_length: k,
            });
        }

        Ok((0..k)
            .filter(|&bit| (message >> bit) & 1 == 1)
            .fold(0, |codeword, bit| codeword ^ self.rows[k - 1 - bit]))
    }

    /// Recovers the message a codeword was encoded from, or `None` if the word
    /// lies outside the generator's row space.
    pub fn recover_message(&self, codeword: Word) -> Option<Word> {
        self.basis.decompose(codeword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rows x^3 g, x^2 g, x g, g for g(x) = 1 + x + x^3
    const HAMMING_7_4_G: [Word; 4] = [0b101_1000, 0b010_1100, 0b001_0110, 0b000_1011];

    #[test]
    fn test_repetition_encoding() {
        let encoder = Encoder::new(vec![0b111], 3);
        assert_eq!(encoder.message_length(), 1);
        assert_eq!(encoder.encode(0).unwrap(), 0b000);
        assert_eq!(encoder.encode(1).unwrap(), 0b111);
    }

    #[test]
    fn test_low_message_bit_selects_last_row() {
        let encoder = Encoder::new(HAMMING_7_4_G.to_vec(), 7);
        assert_eq!(encoder.encode(0b0001).unwrap(), 0b000_1011);
        assert_eq!(encoder.encode(0b0010).unwrap(), 0b001_0110);
        assert_eq!(encoder.encode(0b1000).unwrap(), 0b101_1000);
        assert_eq!(encoder.encode(0b1111).unwrap(), 0b110_1001);
    }

    #[test]
    fn test_message_too_wide() {
        let encoder = Encoder::new(HAMMING_7_4_G.to_vec(), 7);
        let result = encoder.encode(0b1_0000);
        assert_eq!(
            result,
            Err(Error::InputTooLarge {
                length: 5,
                max_length: 4
            })
        );
    }

    #[test]
    fn test_recover_message() {
        let encoder = Encoder::new(HAMMING_7_4_G.to_vec(), 7);
        for message in 0..16 {
            let codeword = encoder.encode(message).unwrap();
            assert_eq!(encoder.recover_message(codeword), Some(message));
        }

        // A single bit is never a codeword of this code
        assert_eq!(encoder.recover_message(0b000_0001), None);
    }

    #[test]
    fn test_empty_generator() {
        let encoder = Encoder::new(Vec::new(), 4);
        assert_eq!(encoder.message_length(), 0);
        assert_eq!(encoder.encode(0).unwrap(), 0);
        assert!(encoder.encode(1).is_err());
        assert_eq!(encoder.recover_message(0), Some(0));
    }
}

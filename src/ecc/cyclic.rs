//! Binary cyclic code engine.
//!
//! A [`CyclicCode`] is built once from a generator matrix G (k rows), a
//! parity-check matrix H (n − k rows) and the code length n. Construction
//! enumerates the codebook, derives the minimum distance, transposes H and
//! prepares the error trap; afterwards every operation is a pure function of
//! that state, so a code can be shared freely between threads.
//!
//! Decoding looks at the syndromes of all n cyclic shifts xⁱ·r of the received
//! word r. Each syndrome traps a candidate error pattern inside the check
//! window (positions k..n−1). Two strategies choose among the candidates:
//!
//! - [`DecodingStrategy::WeightBound`] takes the first shift whose pattern has
//!   weight at most ⌊(d_min − 1)/2⌋ and falls back to nearest-neighbor
//!   decoding when no shift qualifies.
//! - [`DecodingStrategy::BurstLength`] searches burst lengths from the
//!   configured maximum down to zero, taking the lowest shift whose pattern
//!   has exactly that burst length. If none qualifies the word is returned
//!   unchanged and marked [`DecodeStatus::Uncorrectable`].
//!
//! The pattern chosen at shift i is relocated by x⁻ⁱ (a right rotation by i)
//! and added to the received word. The result is checked against the parity
//! checks unless that check is disabled on the builder.
//!
//! # Examples
//!
//! ```rust
//! use cyclic_codes::ecc::{CyclicCode, DecodeStatus};
//!
//! // The (3,1) repetition code
//! let code = CyclicCode::new(vec![0b111], vec![0b011, 0b101], 3).unwrap();
//! assert_eq!(code.codebook(), &[0b000, 0b111]);
//! assert_eq!(code.min_distance(), Some(3));
//!
//! let decoded = code.decode(0b011).unwrap();
//! assert_eq!(decoded.word, 0b111);
//! assert!(matches!(decoded.status, DecodeStatus::Corrected { .. }));
//! ```

use crate::ecc::burst::burst_length;
use crate::ecc::codebook::{self, Codebook};
use crate::ecc::encoder::Encoder;
use crate::ecc::gf2::{format_word, hamming_weight, mask, rotate_right, Word, MAX_CODE_LENGTH};
use crate::ecc::nearest_neighbor::{coset_leader, nearest_codeword};
use crate::ecc::polynomial::{cyclic_matrices, Polynomial};
use crate::ecc::syndrome::{ErrorTrap, ParityTranspose};
use crate::ecc::{ErrorCorrection, Result};
use crate::error::Error;
use bitvec::prelude::*;
use std::cmp::min;
use std::fmt::{Display, Formatter};

/// Burst bound used by [`DecodingStrategy::burst`].
pub const DEFAULT_MAX_BURST_LENGTH: usize = 3;

/// How the syndrome decoder picks an error pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodingStrategy {
    /// Accept the first trapped pattern of weight ≤ ⌊(d_min − 1)/2⌋, falling
    /// back to nearest-neighbor decoding.
    #[default]
    WeightBound,
    /// Accept trapped patterns by burst length, longest tolerated burst first.
    BurstLength {
        /// Longest burst the decoder searches for
        max_burst_length: usize,
    },
}

impl DecodingStrategy {
    /// Burst decoding with [`DEFAULT_MAX_BURST_LENGTH`].
    pub fn burst() -> Self {
        Self::burst_up_to(DEFAULT_MAX_BURST_LENGTH)
    }

    /// Burst decoding with a custom bound.
    pub fn burst_up_to(max_burst_length: usize) -> Self {
        DecodingStrategy::BurstLength { max_burst_length }
    }
}

/// What the decoder did with a received word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// The syndrome of the shift by `shift` trapped `error`, which was removed.
    /// A zero `error` means the word was already a codeword.
    Corrected { shift: usize, error: Word },
    /// No syndrome met the weight bound; the coset leader `error` was removed.
    NearestNeighbor { error: Word },
    /// No syndrome had an acceptable burst length; the word is unchanged.
    Uncorrectable,
    /// A syndrome was accepted at `shift` but the reconstructed word failed
    /// the parity checks. This points at the code's matrices, not at the
    /// channel.
    Inconsistent { shift: usize },
}

/// A decoded word together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded word, or the received word if decoding failed
    pub word: Word,
    /// Outcome of the decode
    pub status: DecodeStatus,
}

impl Decoded {
    /// `true` for [`DecodeStatus::Corrected`] and [`DecodeStatus::NearestNeighbor`].
    pub fn is_success(&self) -> bool {
        matches!(
            self.status,
            DecodeStatus::Corrected { .. } | DecodeStatus::NearestNeighbor { .. }
        )
    }

    /// The `(word, success)` pair.
    pub fn into_parts(self) -> (Word, bool) {
        (self.word, self.is_success())
    }
}

/// Builder for [`CyclicCode`].
///
/// ```rust
/// use cyclic_codes::ecc::{CyclicCode, DecodingStrategy};
///
/// let code = CyclicCode::builder()
///     .generator(vec![0b111])
///     .parity_check(vec![0b011, 0b101])
///     .length(3)
///     .strategy(DecodingStrategy::burst_up_to(1))
///     .build()
///     .unwrap();
/// assert_eq!(code.message_length(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CyclicCodeBuilder {
    generator: Vec<Word>,
    parity_check: Vec<Word>,
    length: Option<usize>,
    strategy: DecodingStrategy,
    verify_decoded: bool,
}

impl Default for CyclicCodeBuilder {
    fn default() -> Self {
        Self {
            generator: Vec::new(),
            parity_check: Vec::new(),
            length: None,
            strategy: DecodingStrategy::default(),
            verify_decoded: true,
        }
    }
}

impl CyclicCodeBuilder {
    /// Creates a builder with the default strategy and verification enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the generator rows (k rows of n bits).
    pub fn generator(mut self, rows: Vec<Word>) -> Self {
        self.generator = rows;
        self
    }

    /// Sets the parity-check rows (n − k rows of n bits).
    pub fn parity_check(mut self, rows: Vec<Word>) -> Self {
        self.parity_check = rows;
        self
    }

    /// Sets the code length n.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the decoding strategy used by [`CyclicCode::decode`].
    pub fn strategy(mut self, strategy: DecodingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables the post-decode codeword check.
    pub fn verify_decoded(mut self, verify: bool) -> Self {
        self.verify_decoded = verify;
        self
    }

    /// Validates the parameters and builds the code.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if the length is missing or zero, if G and H
    ///   do not have n rows together, or if a row is wider than n bits
    /// - [`Error::InputTooLarge`] if n exceeds [`MAX_CODE_LENGTH`]
    pub fn build(self) -> Result<CyclicCode> {
        let length = self
            .length
            .ok_or_else(|| Error::invalid_input("Code length must be set"))?;

        if length == 0 {
            return Err(Error::invalid_input("Code length must be positive"));
        }
        if length > MAX_CODE_LENGTH {
            return Err(Error::InputTooLarge {
                length,
                max_length: MAX_CODE_LENGTH,
            });
        }

        if self.generator.len() + self.parity_check.len() != length {
            return Err(Error::InvalidInput(format!(
                "Generator ({} rows) and parity-check ({} rows) matrices must have {} rows together",
                self.generator.len(),
                self.parity_check.len(),
                length
            )));
        }

        let rows = self
            .generator
            .iter()
            .map(|row| ("Generator", row))
            .chain(self.parity_check.iter().map(|row| ("Parity-check", row)));
        for (matrix, &row) in rows {
            if row & !mask(length) != 0 {
                return Err(Error::InvalidInput(format!(
                    "{} row {:#b} is wider than {} bits",
                    matrix, row, length
                )));
            }
        }

        let codebook = Codebook::enumerate(&self.parity_check, length);
        let transpose = ParityTranspose::new(&self.parity_check, length);
        let trap = ErrorTrap::new(&transpose);
        let encoder = Encoder::new(self.generator, length);

        let code = CyclicCode {
            length,
            parity_check: self.parity_check,
            encoder,
            codebook,
            transpose,
            trap,
            strategy: self.strategy,
            verify_decoded: self.verify_decoded,
        };

        log::debug!(
            "built {} with {} codewords, {:?}",
            code,
            code.codebook.len(),
            code.strategy
        );

        Ok(code)
    }
}

/// A binary cyclic code with its precomputed decoding tables.
#[derive(Debug, Clone)]
pub struct CyclicCode {
    /// Code length n
    length: usize,
    /// Parity-check rows
    parity_check: Vec<Word>,
    /// Generator rows and message recovery
    encoder: Encoder,
    /// All codewords and the minimum distance
    codebook: Codebook,
    /// Column-wise parity check shared by all shifts
    transpose: ParityTranspose,
    /// Syndrome to check-window pattern map
    trap: ErrorTrap,
    /// Strategy used by `decode`
    strategy: DecodingStrategy,
    /// Whether decoded words are checked against H
    verify_decoded: bool,
}

impl CyclicCode {
    /// Creates a code with the default strategy.
    ///
    /// # Arguments
    ///
    /// * `generator` - Generator rows, k rows of `length` bits
    /// * `parity_check` - Parity-check rows, `length - k` rows of `length` bits
    /// * `length` - Code length n, at most [`MAX_CODE_LENGTH`]
    pub fn new(generator: Vec<Word>, parity_check: Vec<Word>, length: usize) -> Result<Self> {
        Self::builder()
            .generator(generator)
            .parity_check(parity_check)
            .length(length)
            .build()
    }

    /// Starts a [`CyclicCodeBuilder`].
    pub fn builder() -> CyclicCodeBuilder {
        CyclicCodeBuilder::new()
    }

    /// Creates the cyclic code of length `length` generated by `generator`,
    /// with matrices from [`cyclic_matrices`].
    pub fn from_generator_polynomial(length: usize, generator: Polynomial) -> Result<Self> {
        let (generator_rows, parity_rows) = cyclic_matrices(length, generator)?;
        Self::new(generator_rows, parity_rows, length)
    }

    /// Code length n.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Message length k.
    pub fn message_length(&self) -> usize {
        self.encoder.message_length()
    }

    /// Generator rows.
    pub fn generator(&self) -> &[Word] {
        self.encoder.rows()
    }

    /// Parity-check rows.
    pub fn parity_check(&self) -> &[Word] {
        &self.parity_check
    }

    /// All codewords in ascending order.
    pub fn codebook(&self) -> &[Word] {
        self.codebook.words()
    }

    /// Minimum distance, `None` when the zero word is the only codeword.
    pub fn min_distance(&self) -> Option<usize> {
        self.codebook.min_distance()
    }

    /// Number of errors guaranteed correctable, ⌊(d_min − 1)/2⌋.
    pub fn weight_bound(&self) -> usize {
        self.min_distance().map_or(0, |distance| (distance - 1) / 2)
    }

    /// Strategy used by [`CyclicCode::decode`].
    pub fn strategy(&self) -> DecodingStrategy {
        self.strategy
    }

    /// Whether `word` satisfies every parity check.
    pub fn is_codeword(&self, word: Word) -> bool {
        word & !mask(self.length) == 0 && codebook::is_codeword(&self.parity_check, word)
    }

    /// Encodes a k-bit message.
    pub fn encode(&self, message: Word) -> Result<Word> {
        self.encoder.encode(message)
    }

    /// Message a codeword was encoded from.
    pub fn recover_message(&self, codeword: Word) -> Option<Word> {
        self.encoder.recover_message(codeword)
    }

    /// Syndromes of the n cyclic shifts of `received`.
    pub fn syndromes(&self, received: Word) -> Result<Vec<Word>> {
        self.check_width(received)?;
        Ok(self.transpose.syndromes_for(received))
    }

    /// Nearest codeword by brute force over the codebook.
    pub fn nearest_codeword(&self, received: Word) -> Result<Word> {
        self.check_width(received)?;
        Ok(nearest_codeword(&self.codebook, received))
    }

    /// Decodes `received` with the configured strategy.
    pub fn decode(&self, received: Word) -> Result<Decoded> {
        self.decode_with(received, self.strategy)
    }

    /// Decodes `received` with an explicit strategy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputTooLarge`] if `received` is wider than n bits.
    /// Uncorrectable words are reported through [`DecodeStatus`], not as errors.
    pub fn decode_with(&self, received: Word, strategy: DecodingStrategy) -> Result<Decoded> {
        self.check_width(received)?;

        let patterns: Vec<Word> = self
            .transpose
            .syndromes_for(received)
            .into_iter()
            .map(|syndrome| self.trap.pattern(syndrome))
            .collect();

        if log::log_enabled!(log::Level::Trace) {
            for (shift, &pattern) in patterns.iter().enumerate() {
                log::trace!(
                    "shift {:2}: trapped pattern {}",
                    shift,
                    format_word(pattern, self.length)
                );
            }
        }

        let selected = match strategy {
            DecodingStrategy::WeightBound => self.select_by_weight(&patterns),
            DecodingStrategy::BurstLength { max_burst_length } => {
                self.select_by_burst(&patterns, max_burst_length)
            }
        };

        let decoded = match (selected, strategy) {
            (Some((shift, pattern)), _) => self.relocate(received, shift, pattern),
            (None, DecodingStrategy::WeightBound) => {
                let error = coset_leader(&self.codebook, received);
                Decoded {
                    word: received ^ error,
                    status: DecodeStatus::NearestNeighbor { error },
                }
            }
            (None, DecodingStrategy::BurstLength { .. }) => Decoded {
                word: received,
                status: DecodeStatus::Uncorrectable,
            },
        };

        log::debug!(
            "decoded {} -> {}: {:?}",
            format_word(received, self.length),
            format_word(decoded.word, self.length),
            decoded.status
        );

        Ok(decoded)
    }

    /// First shift whose trapped pattern is within the weight bound.
    fn select_by_weight(&self, patterns: &[Word]) -> Option<(usize, Word)> {
        let bound = self.weight_bound();
        patterns
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, pattern)| hamming_weight(pattern, self.length) <= bound)
    }

    /// Lowest shift whose trapped pattern has the longest acceptable burst.
    fn select_by_burst(&self, patterns: &[Word], max_burst_length: usize) -> Option<(usize, Word)> {
        let bursts: Vec<usize> = patterns
            .iter()
            .map(|&pattern| burst_length(pattern, self.length))
            .collect();

        (0..=max_burst_length).rev().find_map(|desired| {
            bursts
                .iter()
                .position(|&burst| burst == desired)
                .map(|shift| (shift, patterns[shift]))
        })
    }

    /// Moves the pattern trapped in xⁱ·r back to the frame of r and removes it.
    fn relocate(&self, received: Word, shift: usize, pattern: Word) -> Decoded {
        let error = rotate_right(pattern, self.length, shift);
        let word = received ^ error;

        if self.verify_decoded && !self.is_codeword(word) {
            log::warn!(
                "shift {} reconstructed {} from {}, which fails the parity checks",
                shift,
                format_word(word, self.length),
                format_word(received, self.length)
            );
            return Decoded {
                word,
                status: DecodeStatus::Inconsistent { shift },
            };
        }

        Decoded {
            word,
            status: DecodeStatus::Corrected { shift, error },
        }
    }

    fn check_width(&self, word: Word) -> Result<()> {
        if word & !mask(self.length) != 0 {
            return Err(Error::InputTooLarge {
                length: (Word::BITS - word.leading_zeros()) as usize,
                max_length: self.length,
            });
        }
        Ok(())
    }
}

impl Display for CyclicCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.min_distance() {
            Some(distance) => write!(
                f,
                "Cyclic({},{},{})",
                self.length,
                self.message_length(),
                distance
            ),
            None => write!(f, "Cyclic({},{})", self.length, self.message_length()),
        }
    }
}

impl ErrorCorrection for CyclicCode {
    /// Encodes a byte stream, MSB first, k message bits per n-bit block. The
    /// last message is padded with zeros.
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let k = self.message_length();
        let n = self.length;
        if k == 0 {
            return Err(Error::invalid_input("Code carries no message bits"));
        }

        let data_bits = data.view_bits::<Msb0>();
        let blocks = data_bits.len().div_ceil(k);
        let mut encoded = bitvec![u8, Msb0; 0; blocks * n];

        for block in 0..blocks {
            let input_start = block * k;
            let input = &data_bits[input_start..min(input_start + k, data_bits.len())];

            let mut message: Word = 0;
            for (i, bit) in input.iter().enumerate() {
                if *bit {
                    message |= 1 << (k - 1 - i);
                }
            }

            let codeword = CyclicCode::encode(self, message)?;
            for i in 0..n {
                encoded.set(block * n + i, (codeword >> (n - 1 - i)) & 1 == 1);
            }
        }

        Ok(encoded.as_raw_slice().to_vec())
    }

    /// Decodes a byte stream of n-bit blocks back to k message bits each.
    /// Trailing bits that do not fill a block are ignored.
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let k = self.message_length();
        let n = self.length;
        let encoded_bits = data.view_bits::<Msb0>();
        if encoded_bits.len() < n {
            return Err(Error::InvalidInput(format!(
                "Encoded data too short, need at least {} bits",
                n
            )));
        }

        let blocks = encoded_bits.len() / n;
        let mut decoded = bitvec![u8, Msb0; 0; blocks * k];

        for block in 0..blocks {
            let input = &encoded_bits[block * n..(block + 1) * n];

            let mut received: Word = 0;
            for (i, bit) in input.iter().enumerate() {
                if *bit {
                    received |= 1 << (n - 1 - i);
                }
            }

            let result = CyclicCode::decode(self, received)?;
            match result.status {
                DecodeStatus::Uncorrectable => return Err(Error::Uncorrectable { block }),
                DecodeStatus::Inconsistent { .. } => {
                    return Err(Error::InconsistentDecode { block })
                }
                DecodeStatus::Corrected { .. } | DecodeStatus::NearestNeighbor { .. } => {}
            }

            let message = self
                .recover_message(result.word)
                .ok_or(Error::InconsistentDecode { block })?;
            for i in 0..k {
                decoded.set(block * k + i, (message >> (k - 1 - i)) & 1 == 1);
            }
        }

        Ok(decoded.as_raw_slice().to_vec())
    }
}

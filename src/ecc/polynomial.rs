//! Generator and parity-check matrices from a generator polynomial.
//!
//! A binary cyclic code of length n is the ideal of GF(2)\[x\]/(xⁿ + 1)
//! generated by a divisor g(x) of xⁿ + 1. Polynomials are held in a `u64`,
//! bit `i` being the coefficient of xⁱ, which leaves room for xⁿ + 1 itself.
//!
//! [`cyclic_matrices`] lays the code out for [`crate::ecc::CyclicCode`]:
//!
//! - generator row `r` is x^(k−1−r)·g(x), so under the reversed row mapping a
//!   message m encodes to m(x)·g(x);
//! - the parity-check matrix is systematic on the check window: column j of H
//!   is x^((j−k) mod n) mod g(x), which makes the syndrome of every pattern
//!   inside positions k..n−1 that pattern shifted down by k.
//!
//! # Examples
//!
//! ```rust
//! use cyclic_codes::ecc::polynomial::cyclic_matrices;
//!
//! // (7,4) Hamming code, g(x) = 1 + x + x^3
//! let (generator, parity_check) = cyclic_matrices(7, 0b1011).unwrap();
//! assert_eq!(generator.len(), 4);
//! assert_eq!(parity_check.len(), 3);
//! assert_eq!(generator[3], 0b0001011);
//! ```

use crate::ecc::gf2::{Word, MAX_CODE_LENGTH};
use crate::error::{Error, Result};

/// A binary polynomial, bit `i` holding the coefficient of xⁱ.
pub type Polynomial = u64;

/// Degree of `poly`, `None` for the zero polynomial.
pub fn degree(poly: Polynomial) -> Option<usize> {
    if poly == 0 {
        None
    } else {
        Some((Polynomial::BITS - 1 - poly.leading_zeros()) as usize)
    }
}

/// Carry-less product of two polynomials.
///
/// The product must fit in 64 bits; higher terms are dropped.
pub fn multiply(a: Polynomial, b: Polynomial) -> Polynomial {
    let mut product = 0;
    let mut shifted = a;
    let mut rest = b;

    while rest != 0 && shifted != 0 {
        if rest & 1 == 1 {
            product ^= shifted;
        }
        shifted <<= 1;
        rest >>= 1;
    }

    product
}

/// Remainder of `dividend` divided by `divisor` over GF(2).
pub fn remainder(dividend: Polynomial, divisor: Polynomial) -> Result<Polynomial> {
    let divisor_degree =
        degree(divisor).ok_or_else(|| Error::invalid_input("division by the zero polynomial"))?;

    let mut rest = dividend;
    while let Some(rest_degree) = degree(rest) {
        if rest_degree < divisor_degree {
            break;
        }
        rest ^= divisor << (rest_degree - divisor_degree);
    }

    Ok(rest)
}

/// Builds the generator and parity-check rows of the cyclic code of length
/// `length` generated by `generator`.
///
/// # Arguments
///
/// * `length` - Code length n, at most 32
/// * `generator` - Generator polynomial g(x), a divisor of xⁿ + 1
///
/// # Returns
///
/// `(G, H)` with k = n − deg g generator rows and deg g parity-check rows
pub fn cyclic_matrices(length: usize, generator: Polynomial) -> Result<(Vec<Word>, Vec<Word>)> {
    if length == 0 {
        return Err(Error::invalid_input("Code length must be positive"));
    }
    if length > MAX_CODE_LENGTH {
        return Err(Error::InputTooLarge {
            length,
            max_length: MAX_CODE_LENGTH,
        });
    }

    let check_length = degree(generator)
        .ok_or_else(|| Error::invalid_input("Generator polynomial must be nonzero"))?;
    if check_length > length {
        return Err(Error::InvalidInput(format!(
            "Generator polynomial degree ({}) exceeds code length ({})",
            check_length, length
        )));
    }

    let modulus = (1 << length) | 1;
    if remainder(modulus, generator)? != 0 {
        return Err(Error::InvalidInput(format!(
            "Generator polynomial {:#b} does not divide x^{} + 1",
            generator, length
        )));
    }

    let message_length = length - check_length;

    let generator_rows: Vec<Word> = (0..message_length)
        .map(|row| multiply(1 << (message_length - 1 - row), generator) as Word)
        .collect();

    // Column j of H is x^(j - k) mod g(x)
    let columns = (0..length)
        .map(|column| remainder(1 << ((column + length - message_length) % length), generator))
        .collect::<Result<Vec<_>>>()?;

    let parity_rows: Vec<Word> = (0..check_length)
        .map(|row| {
            let syndrome_bit = check_length - 1 - row;
            let mut parity_row: Word = 0;
            for (position, column) in columns.iter().enumerate() {
                if (column >> syndrome_bit) & 1 == 1 {
                    parity_row |= 1 << position;
                }
            }
            parity_row
        })
        .collect();

    Ok((generator_rows, parity_rows))
}

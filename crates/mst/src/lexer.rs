//! Table-driven ASCII number lexer.
//!
//! Integers are folded right-to-left with `POWERS`. The accumulator is seeded
//! with `DIFFS[len]`, which cancels the `b'0'` offset of every digit at once,
//! so the fold multiplies raw bytes and never subtracts per digit.

use crate::error::Error;
use crate::error::Result;

/// Longest integer token the tables cover (`10^19 - 1 < u64::MAX`).
pub const MAX_DIGITS: usize = 19;

pub static POWERS: [u64; MAX_DIGITS + 1] = powers();

pub static DIFFS: [u64; MAX_DIGITS + 1] = diffs();

pub static NEG_POWERS: [f64; MAX_DIGITS + 1] = [
    1e0, 1e-1, 1e-2, 1e-3, 1e-4, 1e-5, 1e-6, 1e-7, 1e-8, 1e-9, 1e-10, 1e-11, 1e-12, 1e-13, 1e-14,
    1e-15, 1e-16, 1e-17, 1e-18, 1e-19,
];

const fn powers() -> [u64; MAX_DIGITS + 1] {
    let mut table = [1_u64; MAX_DIGITS + 1];
    let mut k = 1;
    while k <= MAX_DIGITS {
        table[k] = table[k - 1] * 10;
        k += 1;
    }
    table
}

const fn diffs() -> [u64; MAX_DIGITS + 1] {
    let mut table = [0_u64; MAX_DIGITS + 1];
    let mut repunit = 0_u64;
    let mut k = 1;
    while k <= MAX_DIGITS {
        repunit = repunit * 10 + 1;
        table[k] = 0_u64.wrapping_sub(repunit.wrapping_mul(b'0' as u64));
        k += 1;
    }
    table
}

/// Folds an all-digit ASCII token into its value.
///
/// `offset` is only used for error reporting.
#[inline]
pub fn fold_digits(digits: &[u8], offset: usize) -> Result<u64> {
    let count = digits.len();
    if count > MAX_DIGITS {
        return Err(Error::TokenTooLong {
            offset,
            digits: count,
        });
    }

    let mut acc = DIFFS[count];
    for (place, &byte) in digits.iter().rev().enumerate() {
        debug_assert!(byte.is_ascii_digit(), "non-digit byte {byte:#04x} at {offset}");
        acc = acc.wrapping_add(POWERS[place].wrapping_mul(byte as u64));
    }
    Ok(acc)
}

/// Folds the digits after a decimal point into a fraction in `[0, 1)`.
///
/// Digits past the 19th place are below `f64` resolution and are dropped.
#[inline]
pub fn fold_fraction(digits: &[u8]) -> f64 {
    let mut acc = 0.0;
    for (&byte, &place) in digits.iter().zip(&NEG_POWERS[1..]) {
        debug_assert!(byte.is_ascii_digit());
        acc += place * f64::from(byte.wrapping_sub(b'0'));
    }
    acc
}

/// Bounds-checked forward cursor over a borrowed input buffer.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    #[inline]
    pub fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.bytes.len());
    }

    /// Returns the token that ends at `delim` (or at end of input) together
    /// with its starting offset, and moves past the delimiter.
    #[inline]
    pub fn token(&mut self, delim: u8, expected: &'static str) -> Result<(usize, &'a [u8])> {
        let start = self.pos;
        let rest = self.rest();
        if rest.is_empty() {
            return Err(Error::UnexpectedEof {
                offset: start,
                expected,
            });
        }

        match rest.iter().position(|&b| b == delim) {
            Some(len) => {
                self.pos += len + 1;
                Ok((start, &rest[..len]))
            }
            None => {
                self.pos = self.bytes.len();
                Ok((start, rest))
            }
        }
    }

    #[inline]
    pub fn integer(&mut self, delim: u8, expected: &'static str) -> Result<u64> {
        let (start, digits) = self.token(delim, expected)?;
        fold_digits(digits, start)
    }
}

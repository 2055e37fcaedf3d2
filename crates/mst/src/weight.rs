use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

use crate::error::Error;
use crate::error::Result;
use crate::lexer::Cursor;
use crate::lexer::fold_digits;
use crate::lexer::fold_fraction;

/// Edge weight stored in the graph representations.
///
/// `INFINITY` doubles as the "no edge" cell of an adjacency matrix and the
/// "not yet reached" key in Prim.
pub trait Weight:
    Copy + Default + Debug + PartialEq + Add<Output = Self> + Send + Sync + 'static
{
    const ZERO: Self;
    const INFINITY: Self;

    fn total_order(&self, other: &Self) -> Ordering;

    fn as_f64(self) -> f64;

    /// `self + other`, or `None` if the sum reaches `INFINITY`.
    fn checked_add(self, other: Self) -> Option<Self>;

    #[inline]
    fn less_than(self, other: Self) -> bool {
        self.total_order(&other) == Ordering::Less
    }
}

impl Weight for f64 {
    const ZERO: Self = 0.0;
    const INFINITY: Self = f64::INFINITY;

    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn checked_add(self, other: Self) -> Option<Self> {
        let sum = self + other;
        sum.is_finite().then_some(sum)
    }
}

impl Weight for u64 {
    const ZERO: Self = 0;
    const INFINITY: Self = u64::MAX;

    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn checked_add(self, other: Self) -> Option<Self> {
        u64::checked_add(self, other).filter(|&sum| sum != Self::INFINITY)
    }
}

/// Rejects integer weights that collide with the `INFINITY` sentinel.
#[inline]
fn finite_weight(value: Option<u64>, offset: usize) -> Result<u64> {
    match value {
        Some(weight) if weight < u64::INFINITY => Ok(weight),
        _ => Err(Error::WeightOutOfRange { offset }),
    }
}

/// How the weight column of an edge record is lexed.
///
/// The cursor sits at the start of the weight token; `parse` consumes the
/// token and its terminating newline.
pub trait WeightParser {
    type Weight: Weight;

    const NAME: &'static str;

    fn parse(cursor: &mut Cursor<'_>) -> Result<Self::Weight>;

    fn render(weight: Self::Weight) -> String;
}

/// Real weights with any number of fractional digits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decimal;

impl WeightParser for Decimal {
    type Weight = f64;

    const NAME: &'static str = "decimal";

    #[inline]
    fn parse(cursor: &mut Cursor<'_>) -> Result<f64> {
        let (start, token) = cursor.token(b'\n', "edge weight")?;
        let (whole, fraction) = match token.iter().position(|&b| b == b'.') {
            Some(point) => (&token[..point], &token[point + 1..]),
            None => (token, &token[token.len()..]),
        };
        Ok(fold_digits(whole, start)? as f64 + fold_fraction(fraction))
    }

    fn render(weight: f64) -> String {
        format!("{weight:?}")
    }
}

/// Weights with exactly `PLACES` fractional digits, kept as integers scaled
/// by `10^PLACES`.
///
/// The end of the token is computed from the position of the point rather
/// than scanned for.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedPoint<const PLACES: usize>;

impl<const PLACES: usize> FixedPoint<PLACES> {
    pub const SCALE: u64 = {
        assert!(PLACES < crate::lexer::MAX_DIGITS, "too many fixed-point places");
        10_u64.pow(PLACES as u32)
    };
}

impl<const PLACES: usize> WeightParser for FixedPoint<PLACES> {
    type Weight = u64;

    const NAME: &'static str = "fixed";

    #[inline]
    fn parse(cursor: &mut Cursor<'_>) -> Result<u64> {
        let start = cursor.position();
        let rest = cursor.rest();
        if rest.is_empty() {
            return Err(Error::UnexpectedEof {
                offset: start,
                expected: "edge weight",
            });
        }

        let stop = rest
            .iter()
            .position(|&b| b == b'.' || b == b'\n')
            .unwrap_or(rest.len());
        let whole = fold_digits(&rest[..stop], start)?.checked_mul(Self::SCALE);

        if rest.get(stop) != Some(&b'.') {
            cursor.advance(stop + 1);
            return finite_weight(whole, start);
        }

        let frac_start = stop + 1;
        let frac_end = frac_start + PLACES;
        let Some(digits) = rest.get(frac_start..frac_end) else {
            return Err(Error::UnexpectedEof {
                offset: start + rest.len(),
                expected: "fractional digits",
            });
        };
        let fraction = fold_digits(digits, start + frac_start)?;
        cursor.advance(frac_end + 1);
        finite_weight(whole.and_then(|w| w.checked_add(fraction)), start)
    }

    fn render(weight: u64) -> String {
        if PLACES == 0 {
            return weight.to_string();
        }
        let scale = Self::SCALE;
        format!("{}.{:0width$}", weight / scale, weight % scale, width = PLACES)
    }
}

/// Whole-number weights; any fractional digits are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct Integer;

impl WeightParser for Integer {
    type Weight = u64;

    const NAME: &'static str = "integer";

    #[inline]
    fn parse(cursor: &mut Cursor<'_>) -> Result<u64> {
        let (start, token) = cursor.token(b'\n', "edge weight")?;
        let whole = match token.iter().position(|&b| b == b'.') {
            Some(point) => &token[..point],
            None => token,
        };
        finite_weight(Some(fold_digits(whole, start)?), start)
    }

    fn render(weight: u64) -> String {
        weight.to_string()
    }
}

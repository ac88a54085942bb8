//! Money type for representing currency amounts
//!
//! Wraps an exact `rust_decimal::Decimal` so totals and remaining balances
//! never drift the way binary floating point does. Display always rounds
//! to two places.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Most fractional digits a decimal can hold
const MAX_SCALE: i64 = 28;

/// An exact monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wrap an existing decimal value
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying decimal value
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Add only if the sum is representable without rounding
    pub fn exact_add(self, other: Self) -> Option<Self> {
        let sum = self.checked_add(other)?;
        let exact = sum.checked_sub(other) == Some(self) && sum.checked_sub(self) == Some(other);
        exact.then_some(sum)
    }

    /// Subtract only if the difference is representable without rounding
    pub fn exact_sub(self, other: Self) -> Option<Self> {
        let diff = self.checked_sub(other)?;
        let exact = diff.checked_add(other) == Some(self) && self.checked_sub(diff) == Some(other);
        exact.then_some(diff)
    }

    /// Subtract, clamping at the representable bounds instead of panicking
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Parse a money amount from user-entered text
    ///
    /// Accepts an optional sign, digits with an optional fractional part and
    /// an optional exponent: "12.50", "-3", ".5", "1e3", "2.5E-1".
    /// Currency symbols, digit separators, NaN and infinities are rejected.
    /// Values a decimal cannot hold exactly, whether too large or too
    /// precise, are out of range rather than rounded.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, unsigned) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
            Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
            None => (unsigned, None),
        };

        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !is_digits(whole) || !is_digits(fraction) {
            return Err(invalid());
        }

        let exponent = match exponent {
            Some(exp) => parse_exponent(exp).ok_or_else(invalid)?,
            None => 0,
        };

        let out_of_range = || MoneyParseError::OutOfRange(s.to_string());
        let mut value =
            exact_decimal(negative, whole, fraction, exponent).ok_or_else(out_of_range)?;

        // Plain input keeps its entered scale ("12.50" stays at two places)
        if exponent != 0 {
            value = value.normalize();
        }

        Ok(Self(value))
    }

    /// Format with a currency symbol, rounded to two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}{:.2}", symbol, rounded.abs())
        } else {
            format!("{}{:.2}", symbol, rounded.abs())
        }
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Build `±whole.fraction × 10^exponent` exactly, or `None` if it would round
fn exact_decimal(negative: bool, whole: &str, fraction: &str, exponent: i64) -> Option<Decimal> {
    let mut scale = i64::try_from(fraction.len()).ok()?.checked_sub(exponent)?;
    let joined = format!("{whole}{fraction}");
    let digits = joined.trim_start_matches('0');
    if digits.is_empty() {
        return Decimal::try_from_i128_with_scale(0, u32::try_from(scale.clamp(0, MAX_SCALE)).ok()?)
            .ok();
    }

    // Trailing zeros past the representable scale carry no value
    let trailing = digits.len() - digits.trim_end_matches('0').len();
    let droppable = i64::try_from(trailing).ok()?.min(scale.saturating_sub(MAX_SCALE).max(0));
    let digits = &digits[..digits.len() - usize::try_from(droppable).ok()?];
    scale -= droppable;

    let mut mantissa: i128 = digits.parse().ok()?;
    if scale < 0 {
        let factor = 10i128.checked_pow(u32::try_from(-scale).ok()?)?;
        mantissa = mantissa.checked_mul(factor)?;
        scale = 0;
    }
    if negative {
        mantissa = -mantissa;
    }
    Decimal::try_from_i128_with_scale(mantissa, u32::try_from(scale).ok()?).ok()
}

fn parse_exponent(s: &str) -> Option<i64> {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if digits.is_empty() || !is_digits(digits) {
        return None;
    }
    // Very long exponents saturate and are rejected as out of range later
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if s.starts_with('-') { -magnitude } else { magnitude })
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("No amount given")]
    Empty,
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}

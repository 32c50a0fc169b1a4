//! # Fixed-Point Money
//!
//! **CRITICAL: NO FLOATING POINT IN PRICE ARITHMETIC**
//!
//! Part prices and market values are fixed-point decimals.
//!
//! ## Why Fixed-Point?
//!
//! - Deterministic: the same inventory produces the same allocation on all
//!   hardware
//! - No rounding drift: summing thousands of part lines never loses cents
//! - Auditable: a build's parts cost is reproducible from its detail lines
//!
//! ## Types
//!
//! - [`Money`]: u64 with 6 decimals - unit prices, line totals, parts cost
//! - [`Margin`]: i128 with 6 decimals - profit, which can be negative
//!
//! Float conversion exists only for the serialization boundary; the engine
//! itself never touches an `f64`.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CatalogError;

/// Number of decimal places carried by [`Money`] and [`Margin`].
const DECIMAL_PLACES: u32 = 6;

/// The scaling multiplier (10^6).
const MULTIPLIER: u64 = 10u64.pow(DECIMAL_PLACES);

/// Fixed-point monetary amount with 6 decimal places.
///
/// Internally stores value * 1,000,000 as a u64. Prices are never negative;
/// subtraction that could go below zero lives on [`Margin`].
///
/// # Range
///
/// - Minimum: 0.000000
/// - Maximum: 18,446,744,073,709.551615
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero value.
    pub const ZERO: Self = Self(0);

    /// One currency unit (1.000000).
    pub const ONE: Self = Self(MULTIPLIER);

    /// Creates a money value from a whole number of currency units.
    #[inline]
    #[must_use]
    pub const fn from_whole(whole: u64) -> Self {
        Self(whole * MULTIPLIER)
    }

    /// Creates a money value from whole and fractional parts.
    ///
    /// # Arguments
    ///
    /// * `whole` - The whole number part
    /// * `decimal` - The decimal part (0-999999)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let nickel = Money::from_parts(0, 50_000); // 0.050000
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(whole: u64, decimal: u32) -> Self {
        Self(whole * MULTIPLIER + (decimal as u64 % MULTIPLIER))
    }

    /// Creates a money value from its raw internal representation.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw internal value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Returns the whole number part.
    #[inline]
    #[must_use]
    pub const fn whole(self) -> u64 {
        self.0 / MULTIPLIER
    }

    /// Returns the decimal part (0-999999).
    #[inline]
    #[must_use]
    pub const fn decimal(self) -> u32 {
        (self.0 % MULTIPLIER) as u32
    }

    /// Returns true if this is exactly zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Saturating addition.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Checked multiplication by a unit count. Returns `None` on overflow.
    #[inline]
    #[must_use]
    pub const fn checked_mul_count(self, count: u64) -> Option<Self> {
        match self.0.checked_mul(count) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Saturating multiplication by a unit count.
    #[inline]
    #[must_use]
    pub const fn saturating_mul_count(self, count: u64) -> Self {
        Self(self.0.saturating_mul(count))
    }

    /// Signed difference `self - rhs`, which may be negative.
    ///
    /// This is the only subtraction on prices: it cannot underflow because
    /// the result widens into a [`Margin`].
    #[inline]
    #[must_use]
    pub const fn signed_diff(self, rhs: Self) -> Margin {
        Margin(self.0 as i128 - rhs.0 as i128)
    }

    /// Converts to an `f64` for the serialization boundary.
    ///
    /// Never used in scoring or allocation.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / MULTIPLIER as f64
    }

    /// Converts from an `f64` at the deserialization boundary.
    ///
    /// Rounds to 6 decimals. Returns `None` for negative, NaN, or
    /// out-of-range values.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn try_from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let scaled = (value * MULTIPLIER as f64).round();
        if scaled > u64::MAX as f64 {
            return None;
        }
        Some(Self(scaled as u64))
    }
}

impl FromStr for Money {
    type Err = CatalogError;

    /// Parses a non-negative decimal literal such as `"0.0525"` or `"12"`.
    ///
    /// At most 6 fractional digits are kept; extra digits are truncated,
    /// matching the stored precision.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || CatalogError::InvalidPrice {
            value: s.to_string(),
        };

        let (whole_str, frac_str) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole_str.is_empty() && frac_str.is_empty() {
            return Err(invalid());
        }

        let whole: u64 = if whole_str.is_empty() {
            0
        } else {
            whole_str.parse().map_err(|_| invalid())?
        };

        let mut decimal: u64 = 0;
        for (i, ch) in frac_str.chars().enumerate() {
            let digit = ch.to_digit(10).ok_or_else(invalid)?;
            if (i as u32) < DECIMAL_PLACES {
                decimal = decimal * 10 + u64::from(digit);
            }
        }
        let digits_kept = (frac_str.len() as u32).min(DECIMAL_PLACES);
        decimal *= 10u64.pow(DECIMAL_PLACES - digits_kept);

        whole
            .checked_mul(MULTIPLIER)
            .and_then(|w| w.checked_add(decimal))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({}.{:06})", self.whole(), self.decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.whole(), self.decimal())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

/// Visitor accepting JSON numbers or decimal strings as money.
struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative decimal number or decimal string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::try_from_f64(v).ok_or_else(|| E::custom(format!("invalid price: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money::from_whole(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        u64::try_from(v)
            .map(Money::from_whole)
            .map_err(|_| E::custom(format!("invalid price: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        v.parse().map_err(|_| E::custom(format!("invalid price: {v}")))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

/// Signed fixed-point amount with 6 decimal places.
///
/// Used for profit: market value minus parts cost, which is negative for
/// builds that would sell at a loss. Stored as an i128 so the difference of
/// any two [`Money`] values fits without overflow.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Margin(i128);

impl Margin {
    /// Zero margin - break-even, and also the degraded "no price data" value.
    pub const ZERO: Self = Self(0);

    /// Creates a margin from its raw internal representation.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    /// Returns the raw internal value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i128 {
        self.0
    }

    /// Returns true for a negative margin (a loss).
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Converts to an `f64` for the serialization boundary.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / MULTIPLIER as f64
    }

    /// Converts to an `f64` rounded to two decimal places, the report
    /// precision for profit.
    #[inline]
    #[must_use]
    pub fn to_f64_cents(self) -> f64 {
        (self.to_f64() * 100.0).round() / 100.0
    }
}

impl fmt::Debug for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Margin({self})")
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(
            f,
            "{sign}{}.{:06}",
            abs / u128::from(MULTIPLIER),
            abs % u128::from(MULTIPLIER)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let m: Money = "12".parse().unwrap();
        assert_eq!(m, Money::from_whole(12));
    }

    #[test]
    fn test_parse_fractional() {
        let m: Money = "0.0525".parse().unwrap();
        assert_eq!(m, Money::from_parts(0, 52_500));
    }

    #[test]
    fn test_parse_truncates_excess_digits() {
        let m: Money = "1.1234567".parse().unwrap();
        assert_eq!(m, Money::from_parts(1, 123_456));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("-1.0".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let m: Money = "3.141592".parse().unwrap();
        assert_eq!(m.to_string(), "3.141592");
    }

    #[test]
    fn test_signed_diff_negative() {
        let market = Money::from_whole(5);
        let cost = Money::from_whole(8);
        let profit = market.signed_diff(cost);
        assert!(profit.is_negative());
        assert_eq!(profit.to_string(), "-3.000000");
    }

    #[test]
    fn test_margin_cents_rounding() {
        let m = Money::from_parts(1, 234_567).signed_diff(Money::ZERO);
        assert!((m.to_f64_cents() - 1.23).abs() < 1e-9);
    }

    #[test]
    fn test_line_total() {
        let price = Money::from_parts(0, 250_000); // 0.25
        assert_eq!(price.saturating_mul_count(4), Money::from_whole(1));
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Money::try_from_f64(0.05), Some(Money::from_parts(0, 50_000)));
        assert_eq!(Money::try_from_f64(-0.01), None);
        assert_eq!(Money::try_from_f64(f64::NAN), None);
    }
}

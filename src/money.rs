//! Fixed-point money and risk values.
//!
//! Every monetary quantity is an integer count of micro-units (six decimal
//! places). Parsing never rounds: inputs with more precision are rejected.
//! Products are formed in `i128` and rounded once, half-up, at the boundary.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Decimal places carried by [`Amount`] and [`Risk`].
pub const SCALE_DIGITS: u32 = 6;
/// Micro-units per whole unit.
pub const SCALE: i64 = 1_000_000;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AmountParseError {
    #[error("invalid decimal: '{0}'")]
    Invalid(String),
    #[error("more than 6 decimal places: '{0}'")]
    TooPrecise(String),
    #[error("decimal out of range: '{0}'")]
    OutOfRange(String),
    #[error("negative value not allowed: '{0}'")]
    Negative(String),
}

fn parse_micros(s: &str) -> Result<i64, AmountParseError> {
    let t = s.trim();
    let invalid = || AmountParseError::Invalid(s.to_string());
    let (negative, body) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(invalid());
    }
    if frac_part.len() > SCALE_DIGITS as usize {
        return Err(AmountParseError::TooPrecise(s.to_string()));
    }

    let out_of_range = || AmountParseError::OutOfRange(s.to_string());
    let whole: i64 =
        if int_part.is_empty() { 0 } else { int_part.parse().map_err(|_| out_of_range())? };
    let mut frac: i64 =
        if frac_part.is_empty() { 0 } else { frac_part.parse().map_err(|_| invalid())? };
    for _ in frac_part.len()..SCALE_DIGITS as usize {
        frac *= 10;
    }
    let micros =
        whole.checked_mul(SCALE).and_then(|w| w.checked_add(frac)).ok_or_else(out_of_range)?;
    Ok(if negative { -micros } else { micros })
}

fn fmt_micros(micros: i128, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if micros < 0 { "-" } else { "" };
    let abs = micros.unsigned_abs();
    let scale = SCALE as u128;
    let whole = abs / scale;
    let frac = abs % scale;
    if frac == 0 {
        return write!(f, "{sign}{whole}");
    }
    let digits = format!("{frac:06}");
    write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
}

/// Divide `n` by positive `d`, rounding half away from zero.
pub(crate) fn div_round_half_up(n: i128, d: i128) -> i128 {
    debug_assert!(d > 0);
    let q = (n.abs() + d / 2) / d;
    if n < 0 {
        -q
    } else {
        q
    }
}

/// A signed monetary amount in micro-units.
///
/// ```
/// use pokerbet::money::Amount;
///
/// let bet: Amount = "0.05".parse().unwrap();
/// assert_eq!(bet.micros(), 50_000);
/// assert_eq!(bet.to_string(), "0.05");
/// assert!("0.0000001".parse::<Amount>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// Whole units, e.g. `Amount::try_from_units(10)` is 10.000000. `None` when
    /// the value does not fit.
    ///
    /// ```
    /// use pokerbet::money::Amount;
    ///
    /// assert_eq!(Amount::try_from_units(3).map(Amount::micros), Some(3_000_000));
    /// assert_eq!(Amount::try_from_units(i64::MAX / 1000), None);
    /// ```
    pub const fn try_from_units(units: i64) -> Option<Self> {
        match units.checked_mul(SCALE) {
            Some(micros) => Some(Self(micros)),
            None => None,
        }
    }

    /// Unchecked form for in-crate literals.
    pub(crate) const fn from_units(units: i64) -> Self {
        Self(units * SCALE)
    }

    pub const fn micros(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_micros(s).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_micros(self.0.into(), f)
    }
}

/// A non-negative risk factor, same six-decimal scale as [`Amount`].
///
/// ```
/// use pokerbet::money::Risk;
///
/// let risk: Risk = "1.5".parse().unwrap();
/// assert_eq!(risk.micros(), 1_500_000);
/// assert!("-0.5".parse::<Risk>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Risk(i64);

impl Risk {
    pub const ZERO: Risk = Risk(0);
    pub const ONE: Risk = Risk(SCALE);

    /// Rejects negative values.
    pub fn from_micros(micros: i64) -> Result<Self, AmountParseError> {
        if micros < 0 {
            return Err(AmountParseError::Negative(Amount(micros).to_string()));
        }
        Ok(Self(micros))
    }

    /// Tenths, e.g. `Risk::from_tenths(5)` is 0.5.
    pub const fn from_tenths(tenths: u16) -> Self {
        Self(tenths as i64 * (SCALE / 10))
    }

    pub const fn micros(self) -> i64 {
        self.0
    }

    pub(crate) fn saturating_add(self, other: Risk) -> Risk {
        Risk(self.0.saturating_add(other.0))
    }

    /// Floors at zero.
    pub(crate) fn saturating_sub(self, other: Risk) -> Risk {
        Risk(self.0.saturating_sub(other.0).max(0))
    }
}

impl FromStr for Risk {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let micros = parse_micros(s)?;
        if micros < 0 {
            return Err(AmountParseError::Negative(s.to_string()));
        }
        Ok(Risk(micros))
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_micros(self.0.into(), f)
    }
}

macro_rules! decimal_serde {
    ($ty:ident, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct DecimalVisitor;

                impl<'de> Visitor<'de> for DecimalVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<$ty, E> {
                        v.parse().map_err(E::custom)
                    }

                    fn visit_u64<E: de::Error>(self, v: u64) -> Result<$ty, E> {
                        self.visit_str(&v.to_string())
                    }

                    fn visit_i64<E: de::Error>(self, v: i64) -> Result<$ty, E> {
                        self.visit_str(&v.to_string())
                    }

                    // Shortest round-trip formatting keeps literals like 0.05 exact.
                    fn visit_f64<E: de::Error>(self, v: f64) -> Result<$ty, E> {
                        if !v.is_finite() {
                            return Err(E::custom(format!("non-finite decimal {v}")));
                        }
                        self.visit_str(&v.to_string())
                    }
                }

                deserializer.deserialize_any(DecimalVisitor)
            }
        }
    };
}

decimal_serde!(Amount, "a decimal amount as a string or number");
decimal_serde!(Risk, "a non-negative decimal risk as a string or number");

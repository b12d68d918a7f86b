//! Payout table, bet limits and the winnings formula.
//!
//! A winning category pays `bet * multiplier * (1 + risk)`; a category whose
//! multiplier is zero or negative (High Card) loses `bet * risk`. All arithmetic
//! runs on micro-units with one half-up rounding step at the end.

use crate::deck::DeckError;
use crate::evaluator::{evaluate, Category};
use crate::hand::Hand;
use crate::money::{div_round_half_up, Amount, Risk, SCALE};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A payout multiplier stored in tenths, so 2.5 is `Multiplier::from_tenths(25)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiplier(i32);

impl Multiplier {
    /// The High Card loss marker.
    pub const LOSS: Multiplier = Multiplier(-10);

    pub const fn from_tenths(tenths: i32) -> Self {
        Self(tenths)
    }

    pub const fn whole(n: i32) -> Self {
        Self(n * 10)
    }

    pub const fn tenths(self) -> i32 {
        self.0
    }

    pub const fn is_win(self) -> bool {
        self.0 > 0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        match abs % 10 {
            0 => write!(f, "{sign}{}", abs / 10),
            frac => write!(f, "{sign}{}.{frac}", abs / 10),
        }
    }
}

impl Serialize for Multiplier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Multiplier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MultiplierVisitor;

        impl<'de> Visitor<'de> for MultiplierVisitor {
            type Value = Multiplier;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a multiplier with at most one decimal place")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Multiplier, E> {
                let tenths = (v * 10.0).round();
                if !v.is_finite() || (v * 10.0 - tenths).abs() > 1e-9 {
                    return Err(E::custom(format!("multiplier {v} is not a multiple of 0.1")));
                }
                if tenths.abs() > f64::from(i32::MAX) {
                    return Err(E::custom(format!("multiplier {v} out of range")));
                }
                Ok(Multiplier(tenths as i32))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Multiplier, E> {
                i32::try_from(v)
                    .ok()
                    .and_then(|n| n.checked_mul(10))
                    .map(Multiplier)
                    .ok_or_else(|| E::custom(format!("multiplier {v} out of range")))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Multiplier, E> {
                let v = i64::try_from(v)
                    .map_err(|_| E::custom(format!("multiplier {v} out of range")))?;
                self.visit_i64(v)
            }

            // Same exact decimal parsing as amounts, so "3.5" reads like 3.5.
            fn visit_str<E: de::Error>(self, v: &str) -> Result<Multiplier, E> {
                let micros = v.parse::<Amount>().map_err(E::custom)?.micros();
                let tenth = SCALE / 10;
                if micros % tenth != 0 {
                    return Err(E::custom(format!("multiplier {v} is not a multiple of 0.1")));
                }
                i32::try_from(micros / tenth)
                    .map(Multiplier)
                    .map_err(|_| E::custom(format!("multiplier {v} out of range")))
            }
        }

        deserializer.deserialize_any(MultiplierVisitor)
    }
}

/// Multiplier for every category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutTable {
    rows: [Multiplier; 10],
}

impl PayoutTable {
    /// Straight pays 2, Three of a Kind pays 1.5.
    pub const fn standard() -> Self {
        Self {
            rows: [
                Multiplier::LOSS,            // High Card
                Multiplier::from_tenths(12), // One Pair
                Multiplier::from_tenths(15), // Two Pair
                Multiplier::from_tenths(15), // Three of a Kind
                Multiplier::whole(2),        // Straight
                Multiplier::whole(3),        // Flush
                Multiplier::whole(4),        // Full House
                Multiplier::whole(5),        // Four of a Kind
                Multiplier::whole(10),       // Straight Flush
                Multiplier::whole(50),       // Royal Flush
            ],
        }
    }

    /// Straight pays 2.5, Three of a Kind pays 2. Other rows match `standard`.
    pub fn boosted() -> Self {
        Self::standard()
            .with(Category::Straight, Multiplier::from_tenths(25))
            .with(Category::ThreeOfAKind, Multiplier::whole(2))
    }

    pub fn get(&self, category: Category) -> Multiplier {
        self.rows[category.ordinal() as usize]
    }

    /// Replace one row.
    pub fn with(mut self, category: Category, multiplier: Multiplier) -> Self {
        self.rows[category.ordinal() as usize] = multiplier;
        self
    }

    /// Rows weakest category first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Category, Multiplier)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

impl Default for PayoutTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LimitsError {
    #[error("minimum bet must be positive, got {0}")]
    MinBetNotPositive(Amount),
    #[error("minimum bet {min} exceeds maximum bet {max}")]
    BetRangeInverted { min: Amount, max: Amount },
    #[error("minimum risk {min} exceeds maximum risk {max}")]
    RiskRangeInverted { min: Risk, max: Risk },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BetLimitsFields {
    min_bet: Amount,
    max_bet: Amount,
    min_risk: Risk,
    max_risk: Risk,
}

/// Caller policy for accepted bets and risks, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BetLimitsFields")]
pub struct BetLimits {
    min_bet: Amount,
    max_bet: Amount,
    min_risk: Risk,
    max_risk: Risk,
}

impl TryFrom<BetLimitsFields> for BetLimits {
    type Error = LimitsError;

    fn try_from(f: BetLimitsFields) -> Result<Self, Self::Error> {
        BetLimits::new(f.min_bet, f.max_bet, f.min_risk, f.max_risk)
    }
}

impl BetLimits {
    pub fn new(
        min_bet: Amount,
        max_bet: Amount,
        min_risk: Risk,
        max_risk: Risk,
    ) -> Result<Self, LimitsError> {
        if !min_bet.is_positive() {
            return Err(LimitsError::MinBetNotPositive(min_bet));
        }
        if min_bet > max_bet {
            return Err(LimitsError::BetRangeInverted { min: min_bet, max: max_bet });
        }
        if min_risk > max_risk {
            return Err(LimitsError::RiskRangeInverted { min: min_risk, max: max_risk });
        }
        Ok(Self { min_bet, max_bet, min_risk, max_risk })
    }

    /// Bets of 10 and up, risk between 0.5 and 1.
    pub const fn high_roller() -> Self {
        Self {
            min_bet: Amount::from_units(10),
            max_bet: Amount::from_units(100_000),
            min_risk: Risk::from_tenths(5),
            max_risk: Risk::ONE,
        }
    }

    pub const fn min_bet(&self) -> Amount {
        self.min_bet
    }

    pub const fn max_bet(&self) -> Amount {
        self.max_bet
    }

    pub const fn min_risk(&self) -> Risk {
        self.min_risk
    }

    pub const fn max_risk(&self) -> Risk {
        self.max_risk
    }

    /// Bet bounds are checked before risk bounds.
    pub fn check(&self, bet: Amount, risk: Risk) -> Result<(), BetError> {
        if bet < self.min_bet {
            return Err(BetError::BetBelowMinimum { bet, min: self.min_bet });
        }
        if bet > self.max_bet {
            return Err(BetError::BetAboveMaximum { bet, max: self.max_bet });
        }
        if risk < self.min_risk {
            return Err(BetError::RiskBelowMinimum { risk, min: self.min_risk });
        }
        if risk > self.max_risk {
            return Err(BetError::RiskAboveMaximum { risk, max: self.max_risk });
        }
        Ok(())
    }
}

impl Default for BetLimits {
    /// Bets from 0.05 to 1000, risk between 0.5 and 2.
    fn default() -> Self {
        Self {
            min_bet: Amount::from_micros(50_000),
            max_bet: Amount::from_units(1_000),
            min_risk: Risk::from_tenths(5),
            max_risk: Risk::from_tenths(20),
        }
    }
}

/// A bet or risk outside the configured limits.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BetError {
    #[error("bet {bet} is below the minimum bet of {min}")]
    BetBelowMinimum { bet: Amount, min: Amount },
    #[error("bet {bet} is above the maximum bet of {max}")]
    BetAboveMaximum { bet: Amount, max: Amount },
    #[error("risk {risk} is below the minimum risk of {min}")]
    RiskBelowMinimum { risk: Risk, min: Risk },
    #[error("risk {risk} is above the maximum risk of {max}")]
    RiskAboveMaximum { risk: Risk, max: Risk },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PayoutError {
    #[error("invalid bet: {0}")]
    InvalidBet(#[from] BetError),
    #[error("payout does not fit in an amount")]
    Overflow,
    #[error("dealing failed: {0}")]
    Deal(#[from] DeckError),
}

/// Signed winnings for a multiplier, bet and risk, without limit checks.
///
/// ```
/// use pokerbet::money::{Amount, Risk};
/// use pokerbet::payout::{winnings, Multiplier};
///
/// let unit = Amount::from_micros(1_000_000);
/// let win = winnings(Multiplier::whole(50), unit, Risk::ONE).unwrap();
/// assert_eq!(win.to_string(), "100");
///
/// let bet: Amount = "10".parse().unwrap();
/// let loss = winnings(Multiplier::LOSS, bet, Risk::from_tenths(5)).unwrap();
/// assert_eq!(loss.to_string(), "-5");
/// ```
pub fn winnings(multiplier: Multiplier, bet: Amount, risk: Risk) -> Option<Amount> {
    let bet = i128::from(bet.micros());
    let risk = i128::from(risk.micros());
    let scale = i128::from(SCALE);
    let micros = if multiplier.is_win() {
        let n = bet.checked_mul(i128::from(multiplier.tenths()))?.checked_mul(scale + risk)?;
        div_round_half_up(n, 10 * scale)
    } else {
        -div_round_half_up(bet.checked_mul(risk)?, scale)
    };
    i64::try_from(micros).ok().map(Amount::from_micros)
}

/// Outcome of one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutResult {
    pub category: Category,
    pub multiplier: Multiplier,
    pub winnings: Amount,
}

/// Applies a payout table under bet limits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayoutCalculator {
    table: PayoutTable,
    limits: BetLimits,
}

impl PayoutCalculator {
    pub fn new(table: PayoutTable, limits: BetLimits) -> Self {
        Self { table, limits }
    }

    pub fn table(&self) -> &PayoutTable {
        &self.table
    }

    pub fn limits(&self) -> &BetLimits {
        &self.limits
    }

    /// Winnings for `category` at `bet` and `risk`; negative on a loss.
    ///
    /// ```
    /// use pokerbet::evaluator::Category;
    /// use pokerbet::money::{Amount, Risk};
    /// use pokerbet::payout::{BetError, PayoutCalculator, PayoutError};
    ///
    /// let calc = PayoutCalculator::default();
    /// let bet: Amount = "1".parse().unwrap();
    /// let won = calc.payout(Category::RoyalFlush, bet, Risk::ONE).unwrap();
    /// assert_eq!(won.to_string(), "100");
    ///
    /// let err = calc.payout(Category::OnePair, Amount::from_micros(1), Risk::ONE).unwrap_err();
    /// assert!(matches!(err, PayoutError::InvalidBet(BetError::BetBelowMinimum { .. })));
    /// ```
    pub fn payout(
        &self,
        category: Category,
        bet: Amount,
        risk: Risk,
    ) -> Result<Amount, PayoutError> {
        if let Err(e) = self.limits.check(bet, risk) {
            log::debug!("rejected bet {bet} at risk {risk}: {e}");
            return Err(e.into());
        }
        winnings(self.table.get(category), bet, risk).ok_or(PayoutError::Overflow)
    }

    /// Evaluate `hand` and pay it out.
    pub fn resolve(
        &self,
        hand: &Hand,
        bet: Amount,
        risk: Risk,
    ) -> Result<PayoutResult, PayoutError> {
        let category = evaluate(hand);
        let winnings = self.payout(category, bet, risk)?;
        Ok(PayoutResult { category, multiplier: self.table.get(category), winnings })
    }
}

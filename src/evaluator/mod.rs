pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::{Hand, HandError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// All categories, weakest first.
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Classify a dealt hand.
///
/// ```
/// use pokerbet::evaluator::{evaluate, Category};
/// use pokerbet::hand::Hand;
///
/// let hand: Hand = "Ah Kh Qh Jh 10h".parse().unwrap();
/// assert_eq!(evaluate(&hand), Category::RoyalFlush);
///
/// // Ace plays high only: the wheel is not a straight.
/// let wheel: Hand = "Ac 2d 3h 4s 5c".parse().unwrap();
/// assert_eq!(evaluate(&wheel), Category::HighCard);
/// ```
pub fn evaluate(hand: &Hand) -> Category {
    evaluate_five(hand.cards())
}

/// Classify an arbitrary card slice; anything other than five cards is rejected.
pub fn evaluate_cards(cards: &[Card]) -> Result<Category, EvalError> {
    let hand = Hand::from_slice(cards)?;
    Ok(evaluate(&hand))
}

/// Classify exactly five cards. Checks run strongest to weakest and the first
/// match wins.
pub fn evaluate_five(cards: &[Card; 5]) -> Category {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);
    let category = DETECTORS
        .iter()
        .find(|d| d.detect(&analysis))
        .map(|d| d.category())
        .unwrap_or(Category::HighCard);
    log::trace!("evaluated {:?} as {category}", analysis.ranks);
    category
}

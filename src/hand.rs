use crate::cards::{parse_cards, Card, CardParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cards dealt for one round.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a hand needs exactly 5 cards, got {0}")]
    CardCount(usize),
    #[error(transparent)]
    CardParse(#[from] CardParseError),
}

/// Exactly five cards dealt for one round.
///
/// Cards are kept in dealt order. Uniqueness is the dealer's contract and is not
/// re-checked here.
///
/// ```
/// use pokerbet::hand::Hand;
///
/// let hand: Hand = "Ah Kh Qh Jh 10h".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// assert!("Ah Kh".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        Self::from_slice(&cards)
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Ok(Self(cards))
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_new(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0.to_vec()
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Self::try_new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn card_count_is_enforced() {
        let c = Card::new(Rank::Two, Suit::Clubs);
        assert_eq!(Hand::try_new(vec![c; 4]), Err(HandError::CardCount(4)));
        assert_eq!(Hand::try_new(vec![c; 6]), Err(HandError::CardCount(6)));
        assert_eq!(Hand::try_new(Vec::new()), Err(HandError::CardCount(0)));
    }

    #[test]
    fn duplicates_are_not_rejected() {
        let c = Card::new(Rank::Two, Suit::Clubs);
        assert!(Hand::try_new(vec![c; 5]).is_ok());
    }

    #[test]
    fn parse_and_display_keep_dealt_order() {
        let hand: Hand = "2h, 7c 9d Js 4h".parse().unwrap();
        assert_eq!(hand.cards()[0], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(hand.cards()[4], Card::new(Rank::Four, Suit::Hearts));
        assert_eq!(hand.to_string(), "2h 7c 9d Js 4h");
    }

    #[test]
    fn parse_errors_keep_the_card_error() {
        let err = "2h 7c 9d Js 4x".parse::<Hand>().unwrap_err();
        assert!(matches!(err, HandError::CardParse(CardParseError::Suit(_))));
        assert_eq!(err.to_string(), "invalid suit: 'x'");
        let err = "2h 7c 9d Js 1h".parse::<Hand>().unwrap_err();
        assert!(matches!(err, HandError::CardParse(CardParseError::Rank(_))));
    }

    #[test]
    fn serde_rechecks_count() {
        let hand: Hand = "Ah Kh Qh Jh 10h".parse().unwrap();
        let json = serde_json::to_string(&hand).unwrap();
        let back: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hand);

        let short = r#"[{"rank":14,"suit":"hearts"}]"#;
        assert!(serde_json::from_str::<Hand>(short).is_err());
    }
}

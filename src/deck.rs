use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HandError, HAND_SIZE};
use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot draw {requested} cards from a {available}-card deck")]
    DrawCount { requested: usize, available: usize },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// A standard 52-card deck.
///
/// Every shuffling entry point takes a cryptographically secure generator; seeded
/// ChaCha is used only for reproducible replays and tests.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use pokerbet::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Uniform Fisher-Yates shuffle driven by `rng`.
    pub fn shuffle_with<R: CryptoRng + RngCore + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// The first `n` cards in current deck order.
    pub fn top(&self, n: usize) -> Result<&[Card], DeckError> {
        self.cards
            .get(..n)
            .ok_or(DeckError::DrawCount { requested: n, available: self.cards.len() })
    }
}

/// Draw `n` cards from a freshly built and shuffled deck.
///
/// Nothing is shared between calls: successive draws are independent full-deck
/// samples, never a depleting shoe.
///
/// ```
/// use pokerbet::deck::deal;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// assert_eq!(deal(5, &mut rng).unwrap().len(), 5);
/// assert!(deal(53, &mut rng).is_err());
/// ```
pub fn deal<R: CryptoRng + RngCore + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<Vec<Card>, DeckError> {
    if n > DECK_SIZE {
        return Err(DeckError::DrawCount { requested: n, available: DECK_SIZE });
    }
    let mut deck = Deck::standard();
    deck.shuffle_with(rng);
    Ok(deck.top(n)?.to_vec())
}

/// Deal one five-card hand.
pub fn deal_hand<R: CryptoRng + RngCore + ?Sized>(rng: &mut R) -> Result<Hand, DeckError> {
    Ok(Hand::from_slice(&deal(HAND_SIZE, rng)?)?)
}

use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::Category;

/// One category check. Detectors assume every stronger category has already
/// been ruled out, so they must run in `DETECTORS` order.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ace-high straight, all same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.top_rank == Some(Rank::Ace)
    }
}

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_straight
    }
}

/// Four of a Kind: one rank appears exactly four times
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }
}

/// Full House: rank counts are exactly {3, 2}
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.is_full_house()
    }
}

/// Flush: all five cards share a suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }
}

/// Straight: five consecutive ranks, Ace high only
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }
}

/// Three of a Kind: one rank appears exactly three times
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some()
    }
}

/// Two Pair: two distinct ranks appear exactly twice
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }
}

/// One Pair: exactly one rank appears exactly twice
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1
    }
}

/// High Card: fallback, always matches
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    fn analyse(s: &str) -> HandAnalysis {
        let cards = crate::cards::parse_cards(s).unwrap();
        let five: [Card; 5] = cards.try_into().unwrap();
        HandAnalysis::new(&five)
    }

    #[test]
    fn detectors_cover_every_category_strongest_first() {
        let cats: Vec<Category> = DETECTORS.iter().map(|d| d.category()).collect();
        let mut expected = Category::ALL.to_vec();
        expected.reverse();
        assert_eq!(cats, expected);
    }

    #[test]
    fn royal_requires_ace_top() {
        let royal = analyse("As Ks Qs Js 10s");
        assert!(RoyalFlushDetector.detect(&royal));
        let king_high = analyse("Ks Qs Js 10s 9s");
        assert!(!RoyalFlushDetector.detect(&king_high));
        assert!(StraightFlushDetector.detect(&king_high));
    }

    #[test]
    fn straight_flush_also_looks_like_flush_and_straight() {
        // Ordering in DETECTORS is what keeps these from being reported alone.
        let sf = analyse("9h 8h 7h 6h 5h");
        assert!(FlushDetector.detect(&sf));
        assert!(StraightDetector.detect(&sf));
    }

    #[test]
    fn quads_are_not_trips_or_pairs() {
        let quads = analyse("Ac Ad Ah As Ks");
        assert!(FourOfAKindDetector.detect(&quads));
        assert!(!ThreeOfAKindDetector.detect(&quads));
        assert!(!OnePairDetector.detect(&quads));
    }

    #[test]
    fn full_house_also_has_trips_and_a_pair() {
        let fh = analyse("2h 2c 2d 5d 5s");
        assert!(FullHouseDetector.detect(&fh));
        assert!(ThreeOfAKindDetector.detect(&fh));
        assert!(OnePairDetector.detect(&fh));
    }

    #[test]
    fn high_card_always_matches() {
        let hi = analyse("2h 7c 9d Js 4h");
        assert!(HighCardDetector.detect(&hi));
        let c = Card::new(Rank::Two, Suit::Clubs);
        assert!(HighCardDetector.detect(&HandAnalysis::new(&[c; 5])));
    }
}

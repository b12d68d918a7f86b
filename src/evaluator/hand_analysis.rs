use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed properties of a 5-card hand, built once and shared by all
/// category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ranks sorted high to low.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut ranks = cards.map(Card::rank);
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let mut rank_counts = [0u8; 15];
        for rank in ranks {
            rank_counts[rank.value() as usize] += 1;
        }

        Self {
            ranks,
            rank_groups: RankGroups::from_counts(&rank_counts),
            suit_info: SuitInfo::detect(cards),
            straight_info: StraightInfo::detect(&ranks),
        }
    }
}

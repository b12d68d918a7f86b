use crate::cards::Rank;

/// Whether five ranks form a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Five distinct consecutive ranks in any order. Ace only plays high, so
    /// A-2-3-4-5 is not a straight.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let consecutive = sorted.windows(2).all(|w| w[0].value() == w[1].value() + 1);
        if consecutive {
            StraightInfo { is_straight: true, top_rank: Some(sorted[0]) }
        } else {
            StraightInfo { is_straight: false, top_rank: None }
        }
    }
}

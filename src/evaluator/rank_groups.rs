use crate::cards::Rank;

/// Ranks grouped by how often they occur, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Build groups from a rank count array indexed by rank value (2..=14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&r| (r, rank_counts[r.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    /// Rank appearing exactly four times.
    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    /// Rank appearing exactly three times.
    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Ranks appearing exactly twice, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// True when the count multiset is exactly {3, 2}.
    pub fn is_full_house(&self) -> bool {
        self.counts() == [3, 2]
    }

    /// The count multiset, largest first.
    pub fn counts(&self) -> Vec<u8> {
        self.groups.iter().map(|(_, c)| *c).collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

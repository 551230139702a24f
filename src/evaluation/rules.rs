use super::ranking::Ranking;
use crate::cards::rank::Rank;

/// Which ranking conventions apply.
///
/// Short deck strips the deuces through fives, so the wheel becomes
/// A-6-7-8-9 and a flush (harder to make with nine cards per suit)
/// outranks a full house.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Rules {
    #[default]
    Standard,
    ShortDeck,
}

impl Rules {
    /// ranks of the ace-low straight
    pub const fn wheel(&self) -> u16 {
        match self {
            Rules::Standard => 0b_1000000001111,
            Rules::ShortDeck => 0b_1000011110000,
        }
    }
    /// high card of the ace-low straight
    pub const fn lowest_straight(&self) -> Rank {
        match self {
            Rules::Standard => Rank::Five,
            Rules::ShortDeck => Rank::Nine,
        }
    }
    /// category position used for comparison under these rules
    pub fn order(&self, ranking: &Ranking) -> u8 {
        match (self, ranking) {
            (Rules::ShortDeck, Ranking::Flush(_)) => 6,
            (Rules::ShortDeck, Ranking::FullHouse(..)) => 5,
            (_, ranking) => ranking.category(),
        }
    }
}

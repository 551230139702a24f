use crate::cards::rank::Rank;

/// A poker hand's category, with the ranks that define it.
///
/// This is a simplified version of the hand's value and does not include the hand's kicker cards.
/// Derived Ord follows standard ranking; [`Rules`] may reorder categories.
///
/// [`Rules`]: super::rules::Rules
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    /// ranks still eligible to kick
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Flush(hi) => !(u16::from(hi)),
            Ranking::FullHouse(..) | Ranking::StraightFlush(..) | Ranking::Straight(..) => 0,
        }
    }

    /// position in the standard category order, 0 = high card
    pub fn category(&self) -> u8 {
        match self {
            Ranking::HighCard(_) => 0,
            Ranking::OnePair(_) => 1,
            Ranking::TwoPair(..) => 2,
            Ranking::ThreeOAK(_) => 3,
            Ranking::Straight(_) => 4,
            Ranking::Flush(_) => 5,
            Ranking::FullHouse(..) => 6,
            Ranking::FourOAK(_) => 7,
            Ranking::StraightFlush(_) => 8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ranking::HighCard(_) => "High Card",
            Ranking::OnePair(_) => "Pair",
            Ranking::TwoPair(..) => "Two Pair",
            Ranking::ThreeOAK(_) => "Three of a Kind",
            Ranking::Straight(_) => "Straight",
            Ranking::Flush(_) => "Flush",
            Ranking::FullHouse(..) => "Full House",
            Ranking::FourOAK(_) => "Four of a Kind",
            Ranking::StraightFlush(Rank::Ace) => "Royal Flush",
            Ranking::StraightFlush(_) => "Straight Flush",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}

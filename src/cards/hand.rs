use super::card::Card;
use super::hands::HandIterator;
use super::suit::Suit;
use crate::equity::EquityError;

/// Hand represents an unordered set of Cards.
///
/// A single word holds the full set independent of its size: the 52 LSBs of a
/// u64, one bit per card at index `rank * 4 + suit`. Union, difference and
/// membership are single bitwise operations and nothing is heap allocated,
/// which matters when the same few cards are recombined dozens of times per
/// trial.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    /// union of two disjoint Hands
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    /// cards of self that are not in other
    pub fn minus(&self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// the subset of cards in one suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// every k-card subset of this Hand, in lexicographic bit order
    pub fn choose(&self, k: usize) -> HandIterator {
        HandIterator::from((k, self.complement()))
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }

    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = self.0.trailing_zeros() as u8;
            let card = Card::from(card);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(cards.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b))
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// str isomorphism
/// duplicates collapse silently here; callers that care use Card::parse
impl TryFrom<&str> for Hand {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(|cards| Self::from(cards.as_slice()))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

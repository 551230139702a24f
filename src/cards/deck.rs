use super::board::Board;
use super::card::Card;
use super::hand::Hand;
use super::hands::HandIterator;
use super::hole::Hole;
use super::variant::Variant;
use crate::equity::EquityError;
use rand::Rng;
use rand::seq::SliceRandom;

/// The unseen cards: everything in the variant's deck that is not
/// already in somebody's hole or on the board.
///
/// Wraps a [`Hand`] so that exact runouts come straight out of a
/// [`HandIterator`], while Monte Carlo runouts shuffle a materialized copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Deck {
    /// Derives the unseen-card pool for one equity request.
    ///
    /// Every placed card must be unique and must belong to the variant's
    /// rank alphabet; a card seen twice is a [`EquityError::DuplicateCard`].
    pub fn build(holes: &[Hole], board: &Board, variant: Variant) -> Result<Self, EquityError> {
        let full = variant.deck();
        let mut seen = Hand::empty();
        for card in holes
            .iter()
            .flat_map(|hole| hole.cards().iter())
            .chain(board.cards().iter())
        {
            if seen.contains(card) {
                return Err(EquityError::DuplicateCard(*card));
            }
            if !full.contains(card) {
                return Err(EquityError::OffDeckCard(*card));
            }
            seen.insert(*card);
        }
        Ok(Self(full.minus(seen)))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// every n-card completion drawn from the unseen cards
    pub fn runouts(&self, n: usize) -> HandIterator {
        HandIterator::from((n, self.0.complement()))
    }
    /// a uniformly random permutation of the unseen cards (full Fisher-Yates)
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Card> {
        let mut cards = Vec::<Card>::from(self.0);
        cards.shuffle(rng);
        cards
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

use super::error::EquityError;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::variant::Variant;

/// A validated equity request: holes, board, variant and the unseen deck.
///
/// Construction checks every precondition, so an engine handed a Request
/// never has to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    holes: Vec<Hole>,
    board: Board,
    variant: Variant,
    deck: Deck,
}

impl Request {
    pub fn new(holes: Vec<Hole>, board: Board, variant: Variant) -> Result<Self, EquityError> {
        if !(crate::MIN_PLAYERS..=crate::MAX_PLAYERS).contains(&holes.len()) {
            return Err(EquityError::InvalidPlayerCount(holes.len()));
        }
        if let Some((player, hole)) = holes
            .iter()
            .enumerate()
            .find(|(_, hole)| hole.len() != variant.n_hole())
        {
            return Err(EquityError::InvalidHoleCount {
                player,
                expected: variant.n_hole(),
                found: hole.len(),
            });
        }
        if board.len() > crate::BOARD_SIZE {
            return Err(EquityError::InvalidBoardSize(board.len()));
        }
        let deck = Deck::build(&holes, &board, variant)?;
        Ok(Self {
            holes,
            board,
            variant,
            deck,
        })
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn deck(&self) -> Deck {
        self.deck
    }
    pub fn players(&self) -> usize {
        self.holes.len()
    }
    /// board cards still to come
    pub fn missing(&self) -> usize {
        self.board.missing()
    }
    /// each player's hole cards as a card set, in seat order
    pub fn hands(&self) -> Vec<Hand> {
        self.holes.iter().map(Hand::from).collect()
    }
}

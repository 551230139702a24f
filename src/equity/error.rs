use crate::cards::card::Card;
use thiserror::Error;

/// Everything that can stop an equity computation.
///
/// Validation errors are raised before any trial runs. Nothing partial is
/// ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    #[error("expected 2 to 6 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("player {player} holds {found} cards, variant requires {expected}")]
    InvalidHoleCount {
        player: usize,
        expected: usize,
        found: usize,
    },

    #[error("board holds {0} cards, at most 5 allowed")]
    InvalidBoardSize(usize),

    #[error("unsupported variant: {0}")]
    UnsupportedVariant(String),

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("card {0} is not in this variant's deck")]
    OffDeckCard(Card),

    #[error("scoring oracle failure: {0}")]
    OracleFailure(String),

    #[error("computation cancelled")]
    Cancelled,

    #[error("invalid card: {0}")]
    InvalidCard(String),
}

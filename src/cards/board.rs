use super::card::Card;
use super::hand::Hand;
use crate::equity::EquityError;
use crate::BOARD_SIZE;

/// Community cards shared by every player, in the order they were revealed.
/// Grows one card at a time up to five; only [`Board::clear`] shrinks it.
#[derive(Debug, Default, Clone, Hash, Eq, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(BOARD_SIZE))
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// cards still to come
    pub fn missing(&self) -> usize {
        BOARD_SIZE.saturating_sub(self.0.len())
    }
    pub fn push(&mut self, card: Card) -> Result<(), EquityError> {
        match self.0.len() {
            BOARD_SIZE => Err(EquityError::InvalidBoardSize(BOARD_SIZE + 1)),
            _ => Ok(self.0.push(card)),
        }
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.cards())
    }
}

/// unchecked: oversized boards are rejected when a request is validated
impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl TryFrom<&str> for Board {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self)
    }
}
impl TryFrom<String> for Board {
    type Error = EquityError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

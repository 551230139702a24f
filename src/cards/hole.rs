use super::card::Card;
use super::hand::Hand;
use crate::equity::EquityError;

/// A player's private cards, in the order they were picked.
///
/// Length is not checked here because it depends on the [`Variant`];
/// requests validate it before any computation starts.
///
/// [`Variant`]: super::variant::Variant
#[derive(Debug, Default, Clone, Hash, Eq, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hole(Vec<Card>);

impl Hole {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&Hole> for Hand {
    fn from(hole: &Hole) -> Self {
        Hand::from(hole.cards())
    }
}
impl From<Vec<Card>> for Hole {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Hole> for Vec<Card> {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl TryFrom<&str> for Hole {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self)
    }
}
impl TryFrom<String> for Hole {
    type Error = EquityError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Hole> for String {
    fn from(hole: Hole) -> Self {
        hole.to_string()
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

use super::oracle::Oracle;
use super::rules::Rules;
use super::strength::Strength;
use crate::cards::hand::Hand;
use crate::equity::error::EquityError;

/// The built-in bitwise hand ranker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    rules: Rules,
}

impl From<Rules> for Showdown {
    fn from(rules: Rules) -> Self {
        Self { rules }
    }
}

impl Oracle for Showdown {
    type Score = Strength;

    fn score(&self, hand: Hand) -> Result<Strength, EquityError> {
        match hand.size() {
            5..=7 => Strength::try_from((hand, self.rules)),
            n => Err(EquityError::OracleFailure(format!(
                "cannot rank {} cards: {}",
                n, hand
            ))),
        }
    }

    fn label(&self, score: &Strength) -> String {
        score.label().to_string()
    }
}

use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use super::rules::Rules;
use crate::cards::hand::Hand;
use crate::equity::error::EquityError;

/// A hand's complete value: category position under the active rules,
/// the category's defining ranks, then kickers. Derived Ord compares
/// fields in that order, so greater is stronger.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    order: u8,
    ranking: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn new(ranking: Ranking, kicks: Kickers, rules: Rules) -> Self {
        Self {
            order: rules.order(&ranking),
            ranking,
            kicks,
        }
    }
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
    pub fn label(&self) -> &'static str {
        self.ranking.label()
    }
}

/// fails only for an empty Hand
impl TryFrom<(Hand, Rules)> for Strength {
    type Error = EquityError;
    fn try_from((hand, rules): (Hand, Rules)) -> Result<Self, Self::Error> {
        let evaluator = Evaluator::from((hand, rules));
        let ranking = evaluator
            .find_ranking()
            .ok_or_else(|| EquityError::OracleFailure("empty hand".to_string()))?;
        let kicks = evaluator.find_kickers(ranking);
        Ok(Self::new(ranking, kicks, rules))
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.ranking, self.kicks)
    }
}

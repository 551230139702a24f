use super::error::EquityError;
use crate::cards::hand::Hand;
use crate::cards::variant::Selection;
use crate::cards::variant::Variant;
use crate::evaluation::oracle::Oracle;
use std::cmp::Ordering;

/// Picks each player's best legal hand under the variant's selection rule.
pub struct Extractor<'a, O: Oracle> {
    oracle: &'a O,
    selection: Selection,
}

impl<'a, O: Oracle> Extractor<'a, O> {
    pub fn new(oracle: &'a O, variant: Variant) -> Self {
        Self {
            oracle,
            selection: variant.selection(),
        }
    }

    /// Score of the best legal hand from `hole` and a complete `board`.
    ///
    /// - Any: every card goes to the oracle at once.
    /// - AnySeven: over seven cards, each 7-card subset is scored.
    /// - TwoAndThree: each pair of hole cards with each triple of board cards.
    pub fn score(&self, hole: Hand, board: Hand) -> Result<O::Score, EquityError> {
        match self.selection {
            Selection::Any => self.oracle.score(Hand::add(hole, board)),
            Selection::AnySeven => {
                let cards = Hand::add(hole, board);
                match cards.size() {
                    0..=7 => self.oracle.score(cards),
                    _ => self.best(cards.choose(7)),
                }
            }
            Selection::TwoAndThree => self.best(
                hole.choose(2)
                    .flat_map(|two| board.choose(3).map(move |three| Hand::add(two, three))),
            ),
        }
    }

    /// The winning seats for one complete board.
    pub fn winners(&self, holes: &[Hand], board: Hand) -> Result<Vec<usize>, EquityError> {
        let scores = holes
            .iter()
            .map(|hole| self.score(*hole, board))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.oracle.winners(&scores))
    }

    /// The strongest legal 5-card hand itself, with its score.
    ///
    /// Costs far more oracle calls than [`Extractor::score`], so it is meant
    /// for display rather than for trials.
    pub fn reveal(&self, hole: Hand, board: Hand) -> Result<(Hand, O::Score), EquityError> {
        let candidates: Box<dyn Iterator<Item = Hand>> = match self.selection {
            Selection::Any | Selection::AnySeven => Box::new(Hand::add(hole, board).choose(5)),
            Selection::TwoAndThree => Box::new(
                hole.choose(2)
                    .flat_map(move |two| board.choose(3).map(move |three| Hand::add(two, three))),
            ),
        };
        let mut best: Option<(Hand, O::Score)> = None;
        for hand in candidates {
            let score = self.oracle.score(hand)?;
            if best.is_none_or(|(_, b)| self.oracle.compare(&score, &b) == Ordering::Less) {
                best = Some((hand, score));
            }
        }
        best.ok_or_else(|| {
            EquityError::OracleFailure(format!("no 5-card hand in {} with {}", hole, board))
        })
    }

    fn best(&self, candidates: impl Iterator<Item = Hand>) -> Result<O::Score, EquityError> {
        let mut best: Option<O::Score> = None;
        for hand in candidates {
            let score = self.oracle.score(hand)?;
            if best.is_none_or(|b| self.oracle.compare(&score, &b) == Ordering::Less) {
                best = Some(score);
            }
        }
        best.ok_or_else(|| EquityError::OracleFailure("no legal hand to score".to_string()))
    }
}

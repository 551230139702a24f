use crate::cards::hand::Hand;
use crate::equity::error::EquityError;
use std::cmp::Ordering;

/// Ranks a set of cards so the engines can compare players.
///
/// Engines only ever see opaque scores, so any ranking algorithm
/// (lookup tables, a remote service, a counting wrapper in tests) can
/// sit behind this seam. Scores order weakest to strongest.
pub trait Oracle {
    type Score: Copy + Ord + std::fmt::Debug;

    /// Score a 5 to 7 card hand.
    fn score(&self, hand: Hand) -> Result<Self::Score, EquityError>;

    /// Human-readable category name for a score, e.g. "Full House".
    fn label(&self, score: &Self::Score) -> String;

    /// Less means `a` is the stronger hand.
    fn compare(&self, a: &Self::Score, b: &Self::Score) -> Ordering {
        b.cmp(a)
    }

    /// Indices of every score tied for best.
    fn winners(&self, scores: &[Self::Score]) -> Vec<usize> {
        let best = scores.iter().max();
        scores
            .iter()
            .enumerate()
            .filter(|(_, s)| Some(*s) == best)
            .map(|(i, _)| i)
            .collect()
    }
}

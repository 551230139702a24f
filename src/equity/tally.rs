use super::result::Equity;
use super::result::Method;
use super::settings::TiePolicy;
use crate::Probability;

/// Running win and tie counters, indexed by seat.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    wins: Vec<u64>,
    ties: Vec<u64>,
    credit: Vec<Probability>,
    trials: u64,
    policy: TiePolicy,
}

impl Tally {
    pub fn new(players: usize, policy: TiePolicy) -> Self {
        Self {
            wins: vec![0; players],
            ties: vec![0; players],
            credit: vec![0.; players],
            trials: 0,
            policy,
        }
    }
    /// A single winner takes the trial; several winners each get tie credit.
    pub fn record(&mut self, winners: &[usize]) {
        self.trials += 1;
        match winners {
            [] => {}
            [winner] => self.wins[*winner] += 1,
            tied => {
                let credit = self.policy.credit(tied.len());
                for &seat in tied {
                    self.ties[seat] += 1;
                    self.credit[seat] += credit;
                }
            }
        }
    }
    pub fn trials(&self) -> u64 {
        self.trials
    }
    pub fn wins(&self) -> &[u64] {
        &self.wins
    }
    pub fn ties(&self) -> &[u64] {
        &self.ties
    }
    /// Normalize by the number of trials recorded.
    pub fn finish(self, method: Method) -> Equity {
        let n = self.trials.max(1) as Probability;
        let equities = self.wins.iter().map(|&w| w as Probability / n).collect();
        let ties = self.credit.iter().map(|&c| c / n).collect();
        Equity::new(
            equities,
            ties,
            self.wins,
            self.ties,
            self.trials,
            method,
            self.policy,
        )
    }
}

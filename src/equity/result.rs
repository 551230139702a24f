use super::settings::TiePolicy;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// Which engine produced a result.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Enumeration,
    Simulation,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Method::Enumeration => write!(f, "enumeration"),
            Method::Simulation => write!(f, "simulation"),
        }
    }
}

/// Per-seat win and tie frequencies, aligned with the input hands.
///
/// Under [`TiePolicy::Full`] a player's win and tie frequencies need not sum
/// to one across players, since every tied player is credited the same trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equity {
    equities: Vec<Probability>,
    ties: Vec<Probability>,
    wins_raw: Vec<u64>,
    ties_raw: Vec<u64>,
    trials: u64,
    method: Method,
    policy: TiePolicy,
}

impl Equity {
    pub(crate) fn new(
        equities: Vec<Probability>,
        ties: Vec<Probability>,
        wins_raw: Vec<u64>,
        ties_raw: Vec<u64>,
        trials: u64,
        method: Method,
        policy: TiePolicy,
    ) -> Self {
        Self {
            equities,
            ties,
            wins_raw,
            ties_raw,
            trials,
            method,
            policy,
        }
    }
    /// outright win frequency per seat
    pub fn equities(&self) -> &[Probability] {
        &self.equities
    }
    /// tie credit per seat, as a frequency
    pub fn ties(&self) -> &[Probability] {
        &self.ties
    }
    /// outright wins per seat
    pub fn wins(&self) -> &[u64] {
        &self.wins_raw
    }
    /// trials each seat tied for best
    pub fn tied(&self) -> &[u64] {
        &self.ties_raw
    }
    pub fn trials(&self) -> u64 {
        self.trials
    }
    pub fn method(&self) -> Method {
        self.method
    }
    pub fn players(&self) -> usize {
        self.equities.len()
    }
    /// win plus tie frequency per seat
    pub fn totals(&self) -> Vec<Probability> {
        self.equities
            .iter()
            .zip(self.ties.iter())
            .map(|(e, t)| e + t)
            .collect()
    }
}

impl std::fmt::Display for Equity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<8}{:>10}{:>10}", "seat", "win", "tie")?;
        for (i, (e, t)) in self.equities.iter().zip(self.ties.iter()).enumerate() {
            writeln!(f, "{:<8}{:>9.2}%{:>9.2}%", i + 1, e * 100., t * 100.)?;
        }
        write!(f, "{} trials by {}", self.trials, self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Equity {
        Equity::new(
            vec![0.5, 0.25],
            vec![0.25, 0.25],
            vec![2, 1],
            vec![1, 1],
            4,
            Method::Enumeration,
            TiePolicy::Full,
        )
    }

    #[test]
    fn totals() {
        assert_eq!(sample().totals(), vec![0.75, 0.5]);
        assert_eq!(sample().players(), 2);
    }

    #[test]
    fn json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["method"], "enumeration");
        assert_eq!(json["trials"], 4);
        assert_eq!(json["policy"], "full");
        let back = serde_json::from_value::<Equity>(json).unwrap();
        assert_eq!(back, sample());
    }
}

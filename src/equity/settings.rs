use crate::cards::variant::Variant;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/// How a trial with several best hands is credited.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiePolicy {
    /// every tied player is credited a whole tie
    #[default]
    Full,
    /// tied players share one trial, 1/|winners| each
    Split,
}

impl TiePolicy {
    pub fn credit(&self, winners: usize) -> Probability {
        match self {
            TiePolicy::Full => 1.,
            TiePolicy::Split => 1. / winners as Probability,
        }
    }
}

/// Monte Carlo trial counts per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trials {
    pub holdem: usize,
    pub short_deck: usize,
    pub super_holdem: usize,
    pub omaha: usize,
}

impl Default for Trials {
    fn default() -> Self {
        Self {
            holdem: crate::TRIALS_HOLDEM,
            short_deck: crate::TRIALS_DEFAULT,
            super_holdem: crate::TRIALS_SUPER,
            omaha: crate::TRIALS_OMAHA,
        }
    }
}

impl Trials {
    pub fn get(&self, variant: Variant) -> usize {
        match variant {
            Variant::Holdem => self.holdem,
            Variant::ShortDeck => self.short_deck,
            Variant::Super => self.super_holdem,
            Variant::Omaha => self.omaha,
        }
    }
    fn get_mut(&mut self, variant: Variant) -> &mut usize {
        match variant {
            Variant::Holdem => &mut self.holdem,
            Variant::ShortDeck => &mut self.short_deck,
            Variant::Super => &mut self.super_holdem,
            Variant::Omaha => &mut self.omaha,
        }
    }
}

/// Knobs for one equity computation. Defaults come from the crate constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    seed: Option<u64>,
    trials: Trials,
    ties: TiePolicy,
    deadline: Option<Duration>,
    check_interval: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            trials: Trials::default(),
            ties: TiePolicy::default(),
            deadline: None,
            check_interval: crate::CANCEL_CHECK_INTERVAL,
        }
    }
}

impl Settings {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn with_trials(mut self, variant: Variant, trials: usize) -> Self {
        *self.trials.get_mut(variant) = trials;
        self
    }
    pub fn with_ties(mut self, ties: TiePolicy) -> Self {
        self.ties = ties;
        self
    }
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
    /// zero is treated as one
    pub fn with_check_interval(mut self, interval: usize) -> Self {
        self.check_interval = interval.max(1);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn trials(&self, variant: Variant) -> usize {
        self.trials.get(variant)
    }
    pub fn ties(&self) -> TiePolicy {
        self.ties
    }
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
    pub fn check_interval(&self) -> usize {
        self.check_interval.max(1)
    }

    /// Settings for the i-th of several independent computations.
    /// A fixed seed is mixed with the index so no two share a stream.
    pub fn nth(&self, index: usize) -> Self {
        let mut settings = self.clone();
        settings.seed = self
            .seed
            .map(|seed| seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        settings
    }
}

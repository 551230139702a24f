use super::hand::Hand;
use super::rank::Rank;
use crate::equity::EquityError;
use crate::evaluation::Rules;
use crate::Pipe;

/// How hole cards and board cards combine into a 5-card hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Selection {
    /// best 5 of every hole and board card (at most 7)
    Any,
    /// best 5 of the best 7-card subset of up to 8 cards
    AnySeven,
    /// exactly 2 hole cards and exactly 3 board cards
    TwoAndThree,
}

/// The game being dealt. Fixes the rank alphabet, hole card count
/// and the rule for building a 5-card hand.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Variant {
    #[default]
    Holdem,
    ShortDeck,
    Super,
    Omaha,
}

impl Variant {
    pub const fn all() -> &'static [Self] {
        &[Self::Holdem, Self::ShortDeck, Self::Super, Self::Omaha]
    }
    pub const fn n_hole(&self) -> usize {
        match self {
            Self::Holdem => 2,
            Self::ShortDeck => 2,
            Self::Super => 3,
            Self::Omaha => 4,
        }
    }
    pub const fn selection(&self) -> Selection {
        match self {
            Self::Holdem | Self::ShortDeck => Selection::Any,
            Self::Super => Selection::AnySeven,
            Self::Omaha => Selection::TwoAndThree,
        }
    }
    pub const fn rules(&self) -> Rules {
        match self {
            Self::ShortDeck => Rules::ShortDeck,
            _ => Rules::Standard,
        }
    }
    /// rank alphabet, high to low
    pub fn ranks(&self) -> Vec<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| match self {
                Self::ShortDeck => *r >= Rank::Six,
                _ => true,
            })
            .collect()
    }
    /// every card dealt in this variant
    pub fn deck(&self) -> Hand {
        self.ranks()
            .into_iter()
            .map(u64::from)
            .fold(0u64, |a, b| a | b)
            .pipe(Hand::from)
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Holdem => "texas-holdem",
            Self::ShortDeck => "short-deck",
            Self::Super => "super-holdem",
            Self::Omaha => "omaha-holdem",
        }
    }
}

impl TryFrom<&str> for Variant {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "texas-holdem" | "holdem" | "nlhe" | "texas" => Ok(Self::Holdem),
            "short-deck" | "shortdeck" | "6+" => Ok(Self::ShortDeck),
            "super-holdem" | "super" => Ok(Self::Super),
            "omaha-holdem" | "omaha" | "plo" => Ok(Self::Omaha),
            _ => Err(EquityError::UnsupportedVariant(s.to_string())),
        }
    }
}
impl TryFrom<String> for Variant {
    type Error = EquityError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl std::str::FromStr for Variant {
    type Err = EquityError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
impl From<Variant> for String {
    fn from(v: Variant) -> Self {
        v.name().to_string()
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

use crate::equity::EquityError;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const MAX: Self = Suit::Spade;
    pub const MIN: Self = Suit::Club;

    pub const fn all() -> [Self; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
/// every card of this suit in the 52-bit Hand layout
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x0001111111111111 << u8::from(s)
    }
}

impl TryFrom<&str> for Suit {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::Club),
            "d" | "♦" => Ok(Suit::Diamond),
            "h" | "♥" => Ok(Suit::Heart),
            "s" | "♠" => Ok(Suit::Spade),
            _ => Err(EquityError::InvalidCard(format!("suit {:?}", s))),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

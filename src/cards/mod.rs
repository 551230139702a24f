pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::*;

pub mod hole;
pub use hole::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;

pub mod variant;
pub use variant::*;

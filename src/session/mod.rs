use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::variant::Variant;
use crate::equity::error::EquityError;
use crate::equity::extractor::Extractor;
use crate::equity::request::Request;
use crate::equity::result::Equity;
use crate::equity::settings::Settings;
use crate::evaluation::oracle::Oracle;
use crate::evaluation::showdown::Showdown;
use serde::Deserialize;
use serde::Serialize;

/// Which group of slots receives the next picked card.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    Player(usize),
    Board,
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Selector::Player(i) => write!(f, "player {}", i + 1),
            Selector::Board => write!(f, "board"),
        }
    }
}

/// Card-picking state for an interactive front end.
///
/// Every player has one slot per hole card and the board has five slots.
/// Slots may be emptied out of order; a picked card always fills the first
/// empty slot of the active selector. After any change to the slots, the
/// players or the cursor, a cursor resting on a full group moves on to the
/// next group that still has room. Any change to the cards discards the
/// last computed equity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    variant: Variant,
    holes: Vec<Vec<Option<Card>>>,
    board: [Option<Card>; crate::BOARD_SIZE],
    cursor: Selector,
    #[serde(default)]
    equity: Option<Equity>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl Session {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            holes: vec![vec![None; variant.n_hole()]; crate::MIN_PLAYERS],
            board: [None; crate::BOARD_SIZE],
            cursor: Selector::Player(0),
            equity: None,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn cursor(&self) -> Selector {
        self.cursor
    }
    pub fn players(&self) -> usize {
        self.holes.len()
    }
    pub fn equity(&self) -> Option<&Equity> {
        self.equity.as_ref()
    }

    /// every card currently sitting in a slot
    pub fn placed(&self) -> Hand {
        self.holes
            .iter()
            .flatten()
            .chain(self.board.iter())
            .flatten()
            .copied()
            .collect()
    }
    /// picked hole cards per player, in slot order
    pub fn holes(&self) -> Vec<Hole> {
        self.holes
            .iter()
            .map(|slots| Hole::from(slots.iter().flatten().copied().collect::<Vec<Card>>()))
            .collect()
    }
    /// picked board cards, in slot order
    pub fn board(&self) -> Board {
        Board::from(self.board.iter().flatten().copied().collect::<Vec<Card>>())
    }
    /// true once every player holds a full hand
    pub fn is_ready(&self) -> bool {
        self.holes.iter().all(|slots| slots.iter().all(Option::is_some))
    }

    /// Places a card in the active selector's first empty slot.
    ///
    /// Returns false, placing nothing, only when every slot is already full.
    pub fn select(&mut self, card: Card) -> Result<bool, EquityError> {
        if self.placed().contains(&card) {
            return Err(EquityError::DuplicateCard(card));
        }
        if !self.variant.deck().contains(&card) {
            return Err(EquityError::OffDeckCard(card));
        }
        let placed = match self.slots_mut(self.cursor) {
            Some(slots) => match slots.iter_mut().find(|slot| slot.is_none()) {
                Some(slot) => {
                    *slot = Some(card);
                    true
                }
                None => false,
            },
            None => false,
        };
        if placed {
            self.equity = None;
            self.advance();
        }
        Ok(placed)
    }
    /// Empties one slot, returning whatever card was in it.
    pub fn remove(&mut self, selector: Selector, slot: usize) -> Option<Card> {
        let card = self
            .slots_mut(selector)
            .and_then(|slots| slots.get_mut(slot))
            .and_then(Option::take);
        if card.is_some() {
            self.equity = None;
            self.advance();
        }
        card
    }
    /// Empties every slot of one selector.
    pub fn clear(&mut self, selector: Selector) {
        if let Some(slots) = self.slots_mut(selector) {
            slots.iter_mut().for_each(|slot| *slot = None);
            self.equity = None;
            self.advance();
        }
    }
    pub fn add_player(&mut self) -> bool {
        match self.players() < crate::MAX_PLAYERS {
            true => {
                self.holes.push(vec![None; self.variant.n_hole()]);
                self.equity = None;
                self.advance();
                true
            }
            false => false,
        }
    }
    /// Drops the last player, pulling the cursor back if it pointed past the end.
    pub fn remove_player(&mut self) -> bool {
        match self.players() > crate::MIN_PLAYERS {
            true => {
                self.holes.pop();
                self.equity = None;
                if let Selector::Player(i) = self.cursor {
                    if i >= self.players() {
                        self.cursor = Selector::Player(self.players() - 1);
                    }
                }
                self.advance();
                true
            }
            false => false,
        }
    }
    /// Points the cursor at a group, passing over it at once if it is full.
    pub fn focus(&mut self, selector: Selector) -> bool {
        match self.slots_mut(selector).is_some() {
            true => {
                self.cursor = selector;
                self.advance();
                true
            }
            false => false,
        }
    }
    /// Switches variant and starts over with the same number of players.
    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
        self.reset();
    }
    pub fn reset(&mut self) {
        let n = self.variant.n_hole();
        self.holes.iter_mut().for_each(|slots| *slots = vec![None; n]);
        self.board = [None; crate::BOARD_SIZE];
        self.cursor = Selector::Player(0);
        self.equity = None;
    }

    pub fn request(&self) -> Result<Request, EquityError> {
        Request::new(self.holes(), self.board(), self.variant)
    }
    /// Computes equity for the current cards and keeps the result.
    pub fn compute(&mut self, settings: &Settings) -> Result<&Equity, EquityError> {
        let equity = crate::equity::compute(&self.request()?, settings)?;
        Ok(&*self.equity.insert(equity))
    }
    /// Each player's best 5-card hand and its label, where one can be made yet.
    pub fn best_hands(&self) -> Vec<Option<(Hand, String)>> {
        let oracle = Showdown::from(self.variant.rules());
        let extractor = Extractor::new(&oracle, self.variant);
        let board = Hand::from(&self.board());
        self.holes()
            .iter()
            .map(|hole| match hole.len() == self.variant.n_hole() {
                true => extractor.reveal(Hand::from(hole), board).ok(),
                false => None,
            })
            .map(|best| best.map(|(hand, score)| (hand, oracle.label(&score))))
            .collect()
    }

    fn slots_mut(&mut self, selector: Selector) -> Option<&mut [Option<Card>]> {
        match selector {
            Selector::Player(i) => self.holes.get_mut(i).map(|slots| slots.as_mut_slice()),
            Selector::Board => Some(&mut self.board[..]),
        }
    }
    fn is_full(&self, selector: Selector) -> bool {
        match selector {
            Selector::Player(i) => self.holes.get(i).is_none_or(|s| s.iter().all(Option::is_some)),
            Selector::Board => self.board.iter().all(Option::is_some),
        }
    }
    /// Steps past full groups until one has room:
    /// player i, then player i + 1, then the board, then back to player 0.
    /// Stays put when every slot is filled.
    fn advance(&mut self) {
        if self.is_ready() && self.is_full(Selector::Board) {
            return;
        }
        while self.is_full(self.cursor) {
            self.cursor = match self.cursor {
                Selector::Player(i) if i + 1 < self.players() => Selector::Player(i + 1),
                Selector::Player(_) => Selector::Board,
                Selector::Board => Selector::Player(0),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    fn pick(session: &mut Session, cards: &str) {
        for card in Card::parse(cards).unwrap() {
            assert!(session.select(card).unwrap());
        }
    }

    #[test]
    fn auto_advance_through_players_then_board() {
        let mut session = Session::new(Variant::Holdem);
        assert_eq!(session.cursor(), Selector::Player(0));
        pick(&mut session, "As");
        assert_eq!(session.cursor(), Selector::Player(0));
        pick(&mut session, "Ah");
        assert_eq!(session.cursor(), Selector::Player(1));
        pick(&mut session, "KsKh");
        assert_eq!(session.cursor(), Selector::Board);
        pick(&mut session, "2c 7d 9h Jc");
        assert_eq!(session.cursor(), Selector::Board);
        pick(&mut session, "3s");
        assert_eq!(session.cursor(), Selector::Board);
        assert!(session.is_ready());
    }

    #[test]
    fn board_full_wraps_to_first_player() {
        let mut session = Session::new(Variant::Holdem);
        session.focus(Selector::Board);
        pick(&mut session, "2c 7d 9h Jc 3s");
        assert_eq!(session.cursor(), Selector::Player(0));
        pick(&mut session, "AsAh");
        assert_eq!(session.cursor(), Selector::Player(1));
        pick(&mut session, "KsKh");
        assert_eq!(session.cursor(), Selector::Player(1));
    }

    #[test]
    fn last_player_with_full_board_wraps() {
        let mut session = Session::new(Variant::Holdem);
        session.focus(Selector::Board);
        pick(&mut session, "2c 7d 9h Jc 3s");
        session.focus(Selector::Player(1));
        pick(&mut session, "KsKh");
        assert_eq!(session.cursor(), Selector::Player(0));
    }

    #[test]
    fn rejects_placed_and_off_deck_cards() {
        let mut session = Session::new(Variant::ShortDeck);
        pick(&mut session, "As");
        assert_eq!(session.select(card("As")), Err(EquityError::DuplicateCard(card("As"))));
        assert_eq!(session.select(card("2c")), Err(EquityError::OffDeckCard(card("2c"))));
    }

    #[test]
    fn focus_on_full_group_moves_on() {
        let mut session = Session::new(Variant::Holdem);
        pick(&mut session, "AsAh");
        assert!(session.focus(Selector::Player(0)));
        assert_eq!(session.cursor(), Selector::Player(1));
        assert_eq!(session.select(card("Qd")), Ok(true));
        assert_eq!(session.holes()[1], Hole::try_from("Qd").unwrap());
    }

    #[test]
    fn added_player_is_reachable() {
        let mut session = Session::new(Variant::Holdem);
        pick(&mut session, "AsAh KsKh 2c 7d 9h Jc 3s");
        assert_eq!(session.cursor(), Selector::Board);
        assert!(session.add_player());
        assert_eq!(session.cursor(), Selector::Player(2));
        assert_eq!(session.select(card("Qd")), Ok(true));
        assert_eq!(session.holes()[2], Hole::try_from("Qd").unwrap());
    }

    #[test]
    fn emptied_slot_pulls_cursor_from_full_table() {
        let mut session = Session::new(Variant::Holdem);
        pick(&mut session, "AsAh KsKh 2c 7d 9h Jc 3s");
        assert_eq!(session.remove(Selector::Player(0), 0), Some(card("As")));
        assert_eq!(session.cursor(), Selector::Player(0));
        pick(&mut session, "Qd");
        assert_eq!(session.holes()[0], Hole::try_from("QdAh").unwrap());
    }

    #[test]
    fn full_table_places_nothing() {
        let mut session = Session::new(Variant::Holdem);
        pick(&mut session, "AsAh KsKh 2c 7d 9h Jc 3s");
        session.focus(Selector::Player(0));
        assert_eq!(session.cursor(), Selector::Player(0));
        assert_eq!(session.select(card("Qd")), Ok(false));
        assert!(!session.placed().contains(&card("Qd")));
    }

    #[test]
    fn removed_slot_is_refilled_first() {
        let mut session = Session::new(Variant::Omaha);
        pick(&mut session, "As Ah Ad");
        assert_eq!(session.remove(Selector::Player(0), 1), Some(card("Ah")));
        assert_eq!(session.remove(Selector::Player(0), 1), None);
        pick(&mut session, "Kc");
        assert_eq!(session.holes()[0], Hole::try_from("AsKcAd").unwrap());
        assert_eq!(session.cursor(), Selector::Player(0));
    }

    #[test]
    fn player_bounds() {
        let mut session = Session::default();
        assert!(!session.remove_player());
        for _ in 0..4 {
            assert!(session.add_player());
        }
        assert!(!session.add_player());
        assert_eq!(session.players(), 6);
        assert!(session.focus(Selector::Player(5)));
        assert!(!session.focus(Selector::Player(6)));
        assert!(session.remove_player());
        assert_eq!(session.cursor(), Selector::Player(4));
    }

    #[test]
    fn variant_change_resets() {
        let mut session = Session::new(Variant::Holdem);
        session.add_player();
        pick(&mut session, "AsAh Ks");
        session.set_variant(Variant::Omaha);
        assert_eq!(session.players(), 3);
        assert_eq!(session.placed(), Hand::empty());
        assert_eq!(session.cursor(), Selector::Player(0));
        pick(&mut session, "As Ah Ad Ac");
        assert_eq!(session.cursor(), Selector::Player(1));
    }

    #[test]
    fn clear_board() {
        let mut session = Session::new(Variant::Holdem);
        session.focus(Selector::Board);
        pick(&mut session, "2c 7d 9h");
        session.clear(Selector::Board);
        assert!(session.board().is_empty());
    }

    #[test]
    fn incomplete_hands_cannot_compute() {
        let mut session = Session::new(Variant::Holdem);
        pick(&mut session, "AsAh Ks");
        assert!(matches!(
            session.request(),
            Err(EquityError::InvalidHoleCount { player: 1, .. })
        ));
    }

    #[test]
    fn compute_keeps_result_until_cards_change() {
        let mut session = Session::new(Variant::Holdem);
        pick(&mut session, "AsAh KsKh 2c 7d 9h Jc 3s");
        let equity = session.compute(&Settings::default()).unwrap();
        assert_eq!(equity.equities(), &[1., 0.]);
        assert!(session.equity().is_some());
        session.remove(Selector::Board, 4);
        assert!(session.equity().is_none());
    }

    #[test]
    fn best_hands_with_labels() {
        let mut session = Session::new(Variant::Holdem);
        session.focus(Selector::Board);
        pick(&mut session, "2c 7d 9h Jc 3s");
        pick(&mut session, "AsAh Ks");
        let best = session.best_hands();
        assert_eq!(best[0].as_ref().map(|(_, label)| label.as_str()), Some("Pair"));
        assert!(best[1].is_none());
    }

    #[test]
    fn json_round_trip() {
        let mut session = Session::new(Variant::Super);
        pick(&mut session, "As Ah Ad");
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"super-holdem\""));
        assert_eq!(serde_json::from_str::<Session>(&json).unwrap(), session);
    }
}

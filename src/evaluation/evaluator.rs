use super::kicks::Kickers;
use super::ranking::Ranking;
use super::rules::Rules;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// A lazy evaluator for a hand's strength.
///
/// Using the compact u64 representation of the Hand, we search for the
/// highest Ranking from the top category down using bitwise operations,
/// stopping at the first category the cards make.
pub struct Evaluator {
    hand: Hand,
    rules: Rules,
}

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        Self::from((hand, Rules::Standard))
    }
}
impl From<(Hand, Rules)> for Evaluator {
    fn from((hand, rules): (Hand, Rules)) -> Self {
        Self { hand, rules }
    }
}

impl Evaluator {
    /// None only for an empty Hand
    pub fn find_ranking(&self) -> Option<Ranking> {
        match self.rules {
            Rules::Standard => None
                .or_else(|| self.find_straight_flush())
                .or_else(|| self.find_4_oak())
                .or_else(|| self.find_3_oak_2_oak())
                .or_else(|| self.find_flush()),
            Rules::ShortDeck => None
                .or_else(|| self.find_straight_flush())
                .or_else(|| self.find_4_oak())
                .or_else(|| self.find_flush())
                .or_else(|| self.find_3_oak_2_oak()),
        }
        .or_else(|| self.find_straight())
        .or_else(|| self.find_3_oak())
        .or_else(|| self.find_2_oak_2_oak())
        .or_else(|| self.find_1_oak())
    }
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        let n = ranking.n_kickers();
        let ranks = match ranking {
            Ranking::Flush(_) => self
                .find_suit_of_flush()
                .map(|suit| u16::from(self.hand.of(&suit)))
                .unwrap_or_default(),
            _ => u16::from(self.hand),
        };
        let mut rank = ranks & ranking.mask();
        while n < rank.count_ones() as usize {
            let last = rank.trailing_zeros();
            let flip = 1 << last;
            let skip = !flip;
            rank &= skip;
        }
        Kickers::from(rank)
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(Ranking::HighCard)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).and_then(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .or_else(|| Some(Ranking::OnePair(hi)))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|triple| {
            self.find_rank_of_n_oak_skip(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.hand).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|suit| {
            let bits = u16::from(self.hand.of(&suit));
            let rank = Rank::from(bits);
            Ranking::Flush(rank)
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            self.find_rank_of_straight(self.hand.of(&suit))
                .map(Ranking::StraightFlush)
        })
    }

    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        let wheel = self.rules.wheel();
        let ranks = u16::from(hand);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if wheel == (wheel & ranks) {
            Some(self.rules.lowest_straight())
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.hand.of(suit).size() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let mut high = u64::from(Rank::Ace) << 4;
        while high > 0 {
            high >>= 4;
            if let Some(skip) = skip {
                let skip = u64::from(skip);
                let skip = high & skip;
                let skip = skip != 0;
                if skip {
                    continue;
                }
            }
            let mine = u64::from(self.hand);
            let mine = high & mine;
            let mine = mine.count_ones() >= n as u32;
            if mine {
                return Some(Rank::lo(high));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> (Ranking, Kickers) {
        let eval = Evaluator::from(Hand::try_from(s).unwrap());
        let ranking = eval.find_ranking().unwrap();
        let kickers = eval.find_kickers(ranking);
        (ranking, kickers)
    }

    fn short(s: &str) -> Ranking {
        Evaluator::from((Hand::try_from(s).unwrap(), Rules::ShortDeck))
            .find_ranking()
            .unwrap()
    }

    #[rustfmt::skip]
    #[test]
    fn high_card() {
        let (ranking, kickers) = eval("As Kh Qd Jc 9s");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[rustfmt::skip]
    #[test]
    fn one_pair() {
        let (ranking, kickers) = eval("As Ah Kd Qc Js");
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let (ranking, kickers) = eval("As Ah Ad Kc Qs");
        assert_eq!(ranking, Ranking::ThreeOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        let (ranking, kickers) = eval("Ts Jh Qd Kc As");
        assert_eq!(ranking, Ranking::Straight(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn flush() {
        let (ranking, kickers) = eval("As Ks Qs Js 9s");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn flush_kickers_ignore_offsuit_cards() {
        let (ranking, kickers) = eval("As Ks 7s 5s 3s Qh Jd");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Seven, Rank::Five, Rank::Three]));
    }

    #[test]
    fn full_house() {
        let (ranking, kickers) = eval("2s 2h 2d 3c 3s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn four_oak() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let (ranking, kickers) = eval("Ts Js Qs Ks As");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn wheel_straight() {
        let (ranking, _) = eval("As 2h 3d 4c 5s");
        assert_eq!(ranking, Ranking::Straight(Rank::Five));
    }

    #[test]
    fn wheel_straight_flush() {
        let (ranking, _) = eval("As 2s 3s 4s 5s");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn seven_card_hand() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs Jh 9d");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn flush_over_straight() {
        let (ranking, _) = eval("4h 6h 7h 8h 9h Ts");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn full_house_over_flush() {
        let (ranking, _) = eval("Kh Ah Ad As Ks Qs Js");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_oak_over_full_house() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks Kh Qd");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn low_straight() {
        let (ranking, _) = eval("As 2s 3h 4d 5c 6s");
        assert_eq!(ranking, Ranking::Straight(Rank::Six));
    }

    #[test]
    fn three_pair() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs Qh Jd");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn two_three_oak() {
        let (ranking, kickers) = eval("As Ah Ad Kc Ks Kh Qd");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn empty_hand_has_no_ranking() {
        assert_eq!(Evaluator::from(Hand::empty()).find_ranking(), None);
    }

    #[test]
    fn shortdeck_wheel_straight() {
        assert_eq!(short("6s 7h 8d 9c As"), Ranking::Straight(Rank::Nine));
        assert_eq!(short("As 6s 7s 8s 9s"), Ranking::StraightFlush(Rank::Nine));
    }

    #[test]
    fn shortdeck_flush_over_full_house() {
        assert_eq!(short("Kh Ah Ad As Ks 9h 7h 6h"), Ranking::Flush(Rank::Ace));
        assert_eq!(eval("Kh Ah Ad As Ks 9h 7h").0, Ranking::FullHouse(Rank::Ace, Rank::King));
    }
}

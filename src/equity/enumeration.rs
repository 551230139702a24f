use super::cancel::Cancel;
use super::error::EquityError;
use super::extractor::Extractor;
use super::request::Request;
use super::result::Equity;
use super::result::Method;
use super::settings::Settings;
use super::tally::Tally;
use crate::cards::hand::Hand;
use crate::evaluation::oracle::Oracle;

/// Exact equity over every completion of the board.
///
/// With nothing missing there is exactly one (empty) completion.
pub struct Enumeration<'a, O: Oracle> {
    request: &'a Request,
    settings: &'a Settings,
    extractor: Extractor<'a, O>,
    cancel: &'a Cancel,
}

impl<'a, O: Oracle> Enumeration<'a, O> {
    pub fn new(request: &'a Request, settings: &'a Settings, oracle: &'a O, cancel: &'a Cancel) -> Self {
        Self {
            request,
            settings,
            extractor: Extractor::new(oracle, request.variant()),
            cancel,
        }
    }

    pub fn run(&self) -> Result<Equity, EquityError> {
        let holes = self.request.hands();
        let board = Hand::from(self.request.board());
        let runouts = self.request.deck().runouts(self.request.missing());
        log::debug!("{:<32}{:<32}", "enumerating runouts", runouts.combinations());
        let mut tally = Tally::new(self.request.players(), self.settings.ties());
        for (i, runout) in runouts.enumerate() {
            if i % self.settings.check_interval() == 0 {
                self.cancel.check()?;
            }
            tally.record(&self.extractor.winners(&holes, Hand::add(board, runout))?);
        }
        Ok(tally.finish(Method::Enumeration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::board::Board;
    use crate::cards::hole::Hole;
    use crate::cards::variant::Variant;
    use crate::evaluation::showdown::Showdown;

    fn request(holes: &[&str], board: &str, variant: Variant) -> Request {
        let holes = holes.iter().map(|h| Hole::try_from(*h).unwrap()).collect();
        Request::new(holes, Board::try_from(board).unwrap(), variant).unwrap()
    }

    fn run(request: &Request, settings: &Settings) -> Result<Equity, EquityError> {
        let oracle = Showdown::from(request.variant().rules());
        Enumeration::new(request, settings, &oracle, &Cancel::default()).run()
    }

    #[test]
    fn river_is_one_trial() {
        let request = request(&["AsAh", "KsKh"], "2c 7d 9h Jc 3s", Variant::Holdem);
        let equity = run(&request, &Settings::default()).unwrap();
        assert_eq!(equity.trials(), 1);
        assert_eq!(equity.equities(), &[1., 0.]);
        assert_eq!(equity.method(), Method::Enumeration);
    }

    #[test]
    fn turn_counts_every_river() {
        let request = request(&["AsAh", "KsKh"], "2c 7d 9h Jc", Variant::Holdem);
        let equity = run(&request, &Settings::default()).unwrap();
        assert_eq!(equity.trials(), 44);
        // only the two remaining kings save the underdog
        assert_eq!(equity.wins(), &[42, 2]);
    }

    #[test]
    fn flop_counts_every_turn_and_river() {
        let request = request(&["AsAh", "KsKh"], "2c 7d 9h", Variant::Holdem);
        let equity = run(&request, &Settings::default()).unwrap();
        assert_eq!(equity.trials(), 45 * 44 / 2);
    }

    #[test]
    fn cancelled_before_first_trial() {
        let request = request(&["AsAh", "KsKh"], "2c 7d 9h", Variant::Holdem);
        let oracle = Showdown::default();
        let settings = Settings::default();
        let cancel = Cancel::default();
        cancel.cancel();
        let result = Enumeration::new(&request, &settings, &oracle, &cancel).run();
        assert_eq!(result, Err(EquityError::Cancelled));
    }
}

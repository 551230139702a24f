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
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Monte Carlo equity over randomly completed boards.
///
/// Every trial shuffles the whole unseen pool and deals the missing board
/// cards off the top. The generator is seeded from settings when a seed is
/// given and from the OS otherwise.
pub struct Simulation<'a, O: Oracle> {
    request: &'a Request,
    settings: &'a Settings,
    extractor: Extractor<'a, O>,
    cancel: &'a Cancel,
}

impl<'a, O: Oracle> Simulation<'a, O> {
    pub fn new(request: &'a Request, settings: &'a Settings, oracle: &'a O, cancel: &'a Cancel) -> Self {
        Self {
            request,
            settings,
            extractor: Extractor::new(oracle, request.variant()),
            cancel,
        }
    }

    pub fn run(&self) -> Result<Equity, EquityError> {
        let ref mut rng = match self.settings.seed() {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let holes = self.request.hands();
        let board = Hand::from(self.request.board());
        let deck = self.request.deck();
        let missing = self.request.missing();
        let trials = self.settings.trials(self.request.variant());
        log::debug!("{:<32}{:<32}", "simulating trials", trials);
        let mut tally = Tally::new(self.request.players(), self.settings.ties());
        for i in 0..trials {
            if i % self.settings.check_interval() == 0 {
                self.cancel.check()?;
            }
            let runout = deck.shuffle(rng).into_iter().take(missing).collect::<Hand>();
            tally.record(&self.extractor.winners(&holes, Hand::add(board, runout))?);
        }
        Ok(tally.finish(Method::Simulation))
    }
}

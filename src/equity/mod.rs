pub mod background;
pub use background::*;

pub mod batch;
pub use batch::*;

pub mod cancel;
pub use cancel::*;

pub mod enumeration;
pub use enumeration::*;

pub mod error;
pub use error::*;

pub mod extractor;
pub use extractor::*;

pub mod request;
pub use request::*;

pub mod result;
pub use result::*;

pub mod settings;
pub use settings::*;

pub mod simulation;
pub use simulation::*;

pub mod tally;
pub use tally::*;


use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::cards::variant::Variant;
use crate::evaluation::oracle::Oracle;
use crate::evaluation::showdown::Showdown;
use std::time::Instant;

/// Equity of each hand against the others, with default settings.
pub fn compute_equity(hands: &[Hole], board: &Board, variant: Variant) -> Result<Equity, EquityError> {
    let request = Request::new(hands.to_vec(), board.clone(), variant)?;
    compute(&request, &Settings::default())
}

/// Equity of a validated request using the built-in hand ranker.
pub fn compute(request: &Request, settings: &Settings) -> Result<Equity, EquityError> {
    let oracle = Showdown::from(request.variant().rules());
    compute_with(request, settings, &oracle, &Cancel::default())
}

/// Equity of a validated request against any oracle, stoppable through `cancel`.
///
/// Boards missing at most [`crate::ENUMERATION_THRESHOLD`] cards are
/// enumerated exactly; anything more is sampled.
pub fn compute_with<O: Oracle>(
    request: &Request,
    settings: &Settings,
    oracle: &O,
    cancel: &Cancel,
) -> Result<Equity, EquityError> {
    let start = Instant::now();
    let cancel = match settings.deadline() {
        Some(deadline) => cancel.until(start + deadline),
        None => cancel.clone(),
    };
    let result = match request.missing() {
        n if n <= crate::ENUMERATION_THRESHOLD => {
            Enumeration::new(request, settings, oracle, &cancel).run()
        }
        _ => Simulation::new(request, settings, oracle, &cancel).run(),
    };
    match result {
        Ok(ref equity) => log::info!(
            "{:<32}{:<32}",
            format!("{} {} trials", equity.method(), equity.trials()),
            format!("{} players {:?}", request.players(), start.elapsed())
        ),
        Err(EquityError::Cancelled) => log::warn!("{:<32}{:<32?}", "equity cancelled", start.elapsed()),
        Err(ref e) => log::debug!("{:<32}{:<32}", "equity failed", e),
    }
    result
}

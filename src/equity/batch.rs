use super::error::EquityError;
use super::request::Request;
use super::result::Equity;
use super::settings::Settings;
use rayon::prelude::*;

/// Computes independent requests in parallel.
///
/// Results line up with `requests`. Each request draws from its own
/// generator, derived from the base seed and its position when one is set.
pub fn batch(requests: &[Request], settings: &Settings) -> Vec<Result<Equity, EquityError>> {
    log::info!("{:<32}{:<32}", "computing equity batch", requests.len());
    requests
        .par_iter()
        .enumerate()
        .map(|(i, request)| super::compute(request, &settings.nth(i)))
        .collect()
}

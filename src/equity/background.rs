use super::cancel::Cancel;
use super::error::EquityError;
use super::request::Request;
use super::result::Equity;
use super::settings::Settings;
use crate::evaluation::showdown::Showdown;
use std::thread::JoinHandle;

/// An equity computation running on its own thread.
///
/// Keeps long simulations off latency-sensitive threads. Dropping the
/// handle detaches the worker; call [`Background::cancel`] first to stop it.
pub struct Background {
    cancel: Cancel,
    handle: JoinHandle<Result<Equity, EquityError>>,
}

impl Background {
    pub fn spawn(request: Request, settings: Settings) -> Self {
        let cancel = Cancel::default();
        let signal = cancel.clone();
        let handle = std::thread::spawn(move || {
            let oracle = Showdown::from(request.variant().rules());
            super::compute_with(&request, &settings, &oracle, &signal)
        });
        Self { cancel, handle }
    }
    pub fn cancel(&self) {
        log::debug!("{:<32}", "cancelling background equity");
        self.cancel.cancel();
    }
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
    /// Blocks until the worker returns. A panic in the worker resumes here.
    pub fn join(self) -> Result<Equity, EquityError> {
        self.handle
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::board::Board;
    use crate::cards::hole::Hole;
    use crate::cards::variant::Variant;

    fn request() -> Request {
        let holes = vec![Hole::try_from("AsAh").unwrap(), Hole::try_from("KsKh").unwrap()];
        Request::new(holes, Board::empty(), Variant::Holdem).unwrap()
    }

    #[test]
    fn joins_with_result() {
        let settings = Settings::default().with_seed(3).with_trials(Variant::Holdem, 500);
        let equity = Background::spawn(request(), settings).join().unwrap();
        assert_eq!(equity.trials(), 500);
    }

    #[test]
    fn reports_finished_before_join() {
        let settings = Settings::default().with_seed(5).with_trials(Variant::Holdem, 200);
        let worker = Background::spawn(request(), settings);
        let start = std::time::Instant::now();
        while !worker.is_finished() {
            assert!(start.elapsed() < std::time::Duration::from_secs(30));
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        assert!(worker.is_finished());
        assert_eq!(worker.join().unwrap().trials(), 200);
    }

    #[test]
    fn cancel_stops_worker() {
        let settings = Settings::default()
            .with_seed(3)
            .with_trials(Variant::Holdem, usize::MAX)
            .with_check_interval(1);
        let worker = Background::spawn(request(), settings);
        worker.cancel();
        assert_eq!(worker.join(), Err(EquityError::Cancelled));
    }
}

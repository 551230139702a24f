use super::error::EquityError;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// A shared stop signal with an optional deadline.
///
/// Clones share the same flag, so one handle can stop a computation
/// running on another thread. Engines poll it every few hundred trials.
#[derive(Debug, Clone, Default)]
pub struct Cancel {
    flag: Arc<AtomicBool>,
    until: Option<Instant>,
}

impl Cancel {
    /// Same flag, stopping no later than `until`.
    pub fn until(&self, until: Instant) -> Self {
        Self {
            flag: self.flag.clone(),
            until: Some(self.until.map_or(until, |t| t.min(until))),
        }
    }
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed) || self.until.is_some_and(|t| Instant::now() >= t)
    }
    pub fn check(&self) -> Result<(), EquityError> {
        match self.is_cancelled() {
            true => Err(EquityError::Cancelled),
            false => Ok(()),
        }
    }
}

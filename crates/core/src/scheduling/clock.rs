use chrono::{DateTime, Utc};

/// Wall-clock source for the past-slot check.
///
/// Injected rather than read from the system inside the engine so that
/// availability results are deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

use chrono::{DateTime, Utc};

/// Clock used for submission, response and notification timestamps and for
/// deciding whether a job posting is still open.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TimeService: Send + Sync + 'static {
    /// Returns the current time with at most microsecond precision, so values
    /// compare equal after a round trip through the database.
    fn now(&self) -> DateTime<Utc>;
}

#[cfg(feature = "mock")]
impl MockTimeService {
    /// Expects exactly one clock reading, returning `now`.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.expect_now().once().return_const(now);
        self
    }
}

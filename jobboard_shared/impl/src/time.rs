use chrono::{DateTime, SubsecRound, Utc};
use jobboard_di::Build;
use jobboard_shared_contracts::time::TimeService;
use jobboard_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Build)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    /// Returns the current time truncated to microseconds, the precision
    /// PostgreSQL stores timestamps with.
    #[trace_instrument(skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}

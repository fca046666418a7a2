use chrono::{NaiveDateTime, NaiveTime};
use shared::domain::WorkPeriod;

/// Date window the ticket explorer lists tickets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerQueryRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ExplorerQueryRange {
    /// Users allowed to see old tickets get the whole opening day; everyone
    /// else starts exactly when the work period opened.
    pub fn for_work_period(
        work_period: &WorkPeriod,
        may_display_old_tickets: bool,
        now: NaiveDateTime,
    ) -> Self {
        let start = if may_display_old_tickets {
            work_period.start_date.date().and_time(NaiveTime::MIN)
        } else {
            work_period.start_date
        };
        Self { start, end: now }
    }
}

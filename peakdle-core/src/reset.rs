use chrono::{DateTime, Days, Duration, Local, LocalResult, NaiveTime, TimeZone};

/// Start of the next local calendar day.
pub fn next_local_midnight(now: DateTime<Local>) -> DateTime<Local> {
    let mut naive = (now.date_naive() + Days::new(1)).and_time(NaiveTime::MIN);
    // A DST jump can make local midnight nonexistent; slide forward until
    // the wall clock maps to a real instant.
    loop {
        match Local.from_local_datetime(&naive) {
            LocalResult::Single(instant) => return instant,
            LocalResult::Ambiguous(earliest, _) => return earliest,
            LocalResult::None => naive = naive + Duration::hours(1),
        }
    }
}

/// Milliseconds until the next daily reset, for the countdown display.
pub fn ms_until_next_local_midnight(now: DateTime<Local>) -> i64 {
    (next_local_midnight(now) - now).num_milliseconds()
}

/// Tracks the upcoming day boundary and reports each crossing exactly once.
/// Callers poll it from their timer tick (once a second is plenty) and tear
/// down / rebuild sessions when it fires.
#[derive(Debug)]
pub struct ResetCoordinator {
    boundary: DateTime<Local>,
}

impl ResetCoordinator {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            boundary: next_local_midnight(now),
        }
    }

    pub fn ms_remaining(&self, now: DateTime<Local>) -> i64 {
        (self.boundary - now).num_milliseconds().max(0)
    }

    /// Returns true exactly once per boundary crossing, then re-arms for the
    /// following midnight.
    pub fn poll(&mut self, now: DateTime<Local>) -> bool {
        if now < self.boundary {
            return false;
        }
        self.boundary = next_local_midnight(now);
        true
    }
}

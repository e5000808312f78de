use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A guest's requested stay window. Either side may still be unset while the
/// guest is picking dates in the calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayDates {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl StayDates {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in: Some(check_in),
            check_out: Some(check_out),
        }
    }

    pub fn partial(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Self {
        Self { check_in, check_out }
    }

    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Number of nights, counted from check-in up to (not including)
    /// check-out. Clamped to 0 when either side is missing or the range is
    /// inverted, so callers never see a negative count.
    pub fn nights(&self) -> i64 {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => (check_out - check_in).num_days().max(0),
            _ => 0,
        }
    }

    /// Weekend nights in the stay. Walks day by day from check-in
    /// (inclusive) to check-out (exclusive); the check-out day is never a
    /// priced night.
    pub fn weekend_nights(&self) -> i64 {
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return 0;
        };
        let mut count = 0;
        let mut day = check_in;
        while day < check_out {
            if is_weekend(day) {
                count += 1;
            }
            day += Duration::days(1);
        }
        count
    }

    pub fn weekday_nights(&self) -> i64 {
        self.nights() - self.weekend_nights()
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive open/close hours for a single weekday, in 24-hour clock hours
/// (0-23). `open = 9, close = 16` means the first bookable slot starts at
/// 9:00 AM and the last at 4:00 PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub open: u32,
    pub close: u32,
}

impl HourRange {
    pub fn new(open: u32, close: u32) -> Self {
        Self { open, close }
    }
}

/// Business-hours rule set: one optional open/close range per weekday,
/// indexed Sunday=0 through Saturday=6.
///
/// A weekday with no range is closed and produces zero slots — that is the
/// normal state for Sunday, not an error. The set is an explicit value
/// rather than hard-coded branching so tests and deployments can supply
/// arbitrary rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    by_weekday: [Option<HourRange>; 7],
}

impl BusinessHours {
    pub fn new(by_weekday: [Option<HourRange>; 7]) -> Self {
        Self { by_weekday }
    }

    /// Rule set with every weekday closed.
    pub fn closed() -> Self {
        Self { by_weekday: [None; 7] }
    }

    /// The rule for `date`'s weekday, `None` when closed that day.
    pub fn range_for(&self, date: NaiveDate) -> Option<HourRange> {
        self.by_weekday[date.weekday().num_days_from_sunday() as usize]
    }
}

impl Default for BusinessHours {
    /// Production rules: closed Sunday, 9 AM-4 PM Monday through Friday,
    /// 9-11 AM Saturday.
    fn default() -> Self {
        let weekday = Some(HourRange::new(9, 16));
        Self {
            by_weekday: [
                None,
                weekday,
                weekday,
                weekday,
                weekday,
                weekday,
                Some(HourRange::new(9, 11)),
            ],
        }
    }
}

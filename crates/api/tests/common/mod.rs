#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use clearview_core::scheduling::Clock;
use clearview_db::models::DbBooking;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use uuid::Uuid;

/// Clock pinned to a fixed instant so availability results are stable
/// across test runs.
pub struct TestClock(pub DateTime<Utc>);

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(day: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    day.and_hms_opt(hour, minute, 0).unwrap().and_utc()
}

pub fn db_booking(day: NaiveDate, hour: u32) -> DbBooking {
    DbBooking {
        id: Uuid::new_v4(),
        booking_date: day,
        start_hour: hour as i32,
        customer_name: Name().fake(),
        customer_email: SafeEmail().fake(),
        customer_phone: None,
        address: "12 Harbour View Rd".to_string(),
        service_tier: "standard".to_string(),
        notes: None,
        created_at: Utc::now(),
    }
}

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::BookingError;
use crate::models::booking::Booking;

use super::hours::BusinessHours;

/// How many hours a booked appointment occupies the schedule.
///
/// Used for conflict detection only. Every booking blocks the same window
/// regardless of its service tier; a tier-specific duration would change
/// observable availability and is deliberately not modeled.
pub const SERVICE_DURATION_HOURS: u32 = 4;

/// One bookable hour-start on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub date: NaiveDate,
    pub hour: u32,
    /// 12-hour clock display label, e.g. "9:00 AM".
    pub label: String,
}

impl Slot {
    /// UTC instant at which this slot starts.
    pub fn start_time(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.date.and_time(NaiveTime::MIN))
            + Duration::hours(i64::from(self.hour))
    }
}

/// A candidate slot with its computed availability flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub slot: Slot,
    pub available: bool,
}

fn hour_label(hour: u32) -> String {
    match hour {
        0 => "12:00 AM".to_string(),
        1..=11 => format!("{hour}:00 AM"),
        12 => "12:00 PM".to_string(),
        _ => format!("{}:00 PM", hour - 12),
    }
}

/// Generates the candidate slots for `date` under the given rules.
///
/// Looks up the rule for `date`'s weekday and produces one slot per integer
/// hour from the open hour through the close hour inclusive, in ascending
/// order. A closed day yields an empty vec. Only the weekday and calendar
/// identity of `date` matter; any time-of-day the caller had attached is
/// irrelevant.
pub fn generate_slots(date: NaiveDate, hours: &BusinessHours) -> Vec<Slot> {
    let Some(range) = hours.range_for(date) else {
        return Vec::new();
    };

    (range.open..=range.close)
        .map(|hour| Slot {
            date,
            hour,
            label: hour_label(hour),
        })
        .collect()
}

/// Half-open interval intersection between a candidate slot and a booked
/// slot, both occupying [hour, hour + SERVICE_DURATION_HOURS).
fn conflicts(slot_hour: u32, booked_hour: u32) -> bool {
    slot_hour < booked_hour + SERVICE_DURATION_HOURS
        && slot_hour + SERVICE_DURATION_HOURS > booked_hour
}

/// Marks each candidate slot available or not.
///
/// A slot is unavailable if it overlaps the occupied interval of any booking
/// in the snapshot, or if its start time is strictly before `now`. The two
/// checks are independent; past slots are unavailable even on a day with no
/// bookings at all.
///
/// Precondition: `bookings_for_date` holds only bookings on the slots'
/// date. The engine does not verify this; a mixed snapshot is a caller bug.
pub fn compute_availability(
    slots: Vec<Slot>,
    bookings_for_date: &[Booking],
    now: DateTime<Utc>,
) -> Vec<SlotAvailability> {
    slots
        .into_iter()
        .map(|slot| {
            let conflicted = bookings_for_date
                .iter()
                .any(|booking| conflicts(slot.hour, booking.start_hour));
            let in_past = slot.start_time() < now;
            SlotAvailability {
                available: !conflicted && !in_past,
                slot,
            }
        })
        .collect()
}

/// Whether `date` should be offered in the calendar view.
///
/// Selectable iff the date is not strictly in the past and at least one of
/// its slots is still available. Closed days are never selectable.
pub fn is_date_selectable(
    date: NaiveDate,
    hours: &BusinessHours,
    bookings_for_date: &[Booking],
    now: DateTime<Utc>,
) -> bool {
    if date < now.date_naive() {
        return false;
    }

    compute_availability(generate_slots(date, hours), bookings_for_date, now)
        .iter()
        .any(|slot| slot.available)
}

/// Validates that the slot at `hour` on `date` can still be booked.
///
/// This is the re-validation primitive the submission path must run against
/// a freshly fetched snapshot immediately before writing: a snapshot taken
/// at render time may be stale by the time the customer submits.
///
/// Returns `Validation` when the hour is not a bookable slot under the
/// rules at all, and `SlotUnavailable` when the slot exists but is past or
/// conflicted.
pub fn validate_slot_request(
    date: NaiveDate,
    hour: u32,
    hours: &BusinessHours,
    bookings_for_date: &[Booking],
    now: DateTime<Utc>,
) -> Result<(), BookingError> {
    let Some(slot) = generate_slots(date, hours)
        .into_iter()
        .find(|slot| slot.hour == hour)
    else {
        return Err(BookingError::Validation(format!(
            "Hour {hour} is not a bookable slot on {date}"
        )));
    };

    let label = slot.label.clone();
    let availability = compute_availability(vec![slot], bookings_for_date, now);

    match availability.first() {
        Some(slot) if slot.available => Ok(()),
        _ => Err(BookingError::SlotUnavailable(format!(
            "The {label} slot on {date} is no longer available"
        ))),
    }
}

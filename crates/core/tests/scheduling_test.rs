use chrono::{DateTime, NaiveDate, Utc};
use clearview_core::errors::BookingError;
use clearview_core::models::booking::{Booking, ServiceTier};
use clearview_core::scheduling::{
    compute_availability, generate_slots, is_date_selectable, validate_slot_request, BusinessHours,
    HourRange,
};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(day: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    day.and_hms_opt(hour, minute, 0).unwrap().and_utc()
}

fn booking_at(day: NaiveDate, hour: u32) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        date: day,
        start_hour: hour,
        customer_name: Name().fake(),
        customer_email: SafeEmail().fake(),
        customer_phone: None,
        address: "12 Harbour View Rd".to_string(),
        service_tier: ServiceTier::Standard,
        notes: None,
        created_at: Utc::now(),
    }
}

// 2025-03-02 is a Sunday, 2025-03-03 a Monday, 2025-03-08 a Saturday.
const SUNDAY: (i32, u32, u32) = (2025, 3, 2);
const MONDAY: (i32, u32, u32) = (2025, 3, 3);
const SATURDAY: (i32, u32, u32) = (2025, 3, 8);

fn sunday() -> NaiveDate {
    date(SUNDAY.0, SUNDAY.1, SUNDAY.2)
}

fn monday() -> NaiveDate {
    date(MONDAY.0, MONDAY.1, MONDAY.2)
}

fn saturday() -> NaiveDate {
    date(SATURDAY.0, SATURDAY.1, SATURDAY.2)
}

#[test]
fn test_closed_day_generates_no_slots() {
    let slots = generate_slots(sunday(), &BusinessHours::default());
    assert_eq!(slots, vec![]);
}

#[test]
fn test_weekday_generates_hourly_slots_nine_to_four() {
    let slots = generate_slots(monday(), &BusinessHours::default());

    let labels: Vec<&str> = slots.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM",
            "4:00 PM",
        ]
    );

    let hours: Vec<u32> = slots.iter().map(|s| s.hour).collect();
    assert_eq!(hours, vec![9, 10, 11, 12, 13, 14, 15, 16]);
    assert!(slots.iter().all(|s| s.date == monday()));
}

#[test]
fn test_saturday_generates_three_slots() {
    let slots = generate_slots(saturday(), &BusinessHours::default());

    let labels: Vec<&str> = slots.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["9:00 AM", "10:00 AM", "11:00 AM"]);
}

#[test]
fn test_generation_is_deterministic() {
    let hours = BusinessHours::default();
    assert_eq!(generate_slots(monday(), &hours), generate_slots(monday(), &hours));
}

#[test]
fn test_midnight_and_noon_labels() {
    let hours = BusinessHours::new([
        Some(HourRange::new(0, 1)),
        Some(HourRange::new(10, 13)),
        None,
        None,
        None,
        None,
        None,
    ]);

    let sunday_labels: Vec<String> = generate_slots(sunday(), &hours)
        .into_iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(sunday_labels, vec!["12:00 AM", "1:00 AM"]);

    let monday_labels: Vec<String> = generate_slots(monday(), &hours)
        .into_iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(monday_labels, vec!["10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM"]);
}

#[rstest]
#[case(9, false)]
#[case(10, false)]
#[case(11, false)]
#[case(12, false)]
#[case(13, true)]
#[case(14, true)]
fn test_booking_at_nine_blocks_overlapping_slots(#[case] hour: u32, #[case] expected: bool) {
    let day = monday();
    let bookings = vec![booking_at(day, 9)];
    // Midnight: nothing is in the past yet, only the conflict check matters.
    let now = at(day, 0, 0);

    let availability =
        compute_availability(generate_slots(day, &BusinessHours::default()), &bookings, now);
    let slot = availability.iter().find(|s| s.slot.hour == hour).unwrap();

    assert_eq!(slot.available, expected, "hour {hour}");
}

#[test]
fn test_past_slots_unavailable_regardless_of_bookings() {
    let day = monday();
    // Mid-afternoon: every slot that has already started is gone.
    let now = at(day, 14, 30);

    let availability =
        compute_availability(generate_slots(day, &BusinessHours::default()), &[], now);

    for slot in &availability {
        let expected = slot.slot.hour > 14;
        assert_eq!(slot.available, expected, "hour {}", slot.slot.hour);
    }
}

#[test]
fn test_future_day_unaffected_by_current_time() {
    let now = at(monday(), 14, 30);
    let tuesday = monday().succ_opt().unwrap();

    let availability =
        compute_availability(generate_slots(tuesday, &BusinessHours::default()), &[], now);

    assert!(availability.iter().all(|s| s.available));
}

#[test]
fn test_availability_is_idempotent() {
    let day = monday();
    let bookings = vec![booking_at(day, 10)];
    let now = at(day, 9, 15);
    let hours = BusinessHours::default();

    let first = compute_availability(generate_slots(day, &hours), &bookings, now);
    let second = compute_availability(generate_slots(day, &hours), &bookings, now);

    assert_eq!(first, second);
}

#[test]
fn test_full_day_with_morning_booking() {
    // Business hours [9,16], one booking at 9:00 AM, now = midnight same day:
    // 9-12 conflict with the booking, 13-16 remain open.
    let day = monday();
    let bookings = vec![booking_at(day, 9)];
    let now = at(day, 0, 0);

    let availability =
        compute_availability(generate_slots(day, &BusinessHours::default()), &bookings, now);

    let expected = vec![
        (9, false),
        (10, false),
        (11, false),
        (12, false),
        (13, true),
        (14, true),
        (15, true),
        (16, true),
    ];
    let actual: Vec<(u32, bool)> = availability
        .iter()
        .map(|s| (s.slot.hour, s.available))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_closed_day_never_selectable() {
    let now = at(date(2025, 2, 1), 0, 0);
    assert!(!is_date_selectable(sunday(), &BusinessHours::default(), &[], now));
}

#[test]
fn test_past_date_not_selectable() {
    let now = at(monday().succ_opt().unwrap(), 0, 0);
    assert!(!is_date_selectable(monday(), &BusinessHours::default(), &[], now));
}

#[test]
fn test_fully_booked_day_not_selectable() {
    let day = saturday();
    // One 9:00 AM booking occupies 9-12, covering all three Saturday slots.
    let bookings = vec![booking_at(day, 9)];
    let now = at(date(2025, 3, 1), 0, 0);

    assert!(!is_date_selectable(day, &BusinessHours::default(), &bookings, now));
}

#[test]
fn test_partially_booked_day_still_selectable() {
    let day = monday();
    let bookings = vec![booking_at(day, 9)];
    let now = at(date(2025, 3, 1), 0, 0);

    assert!(is_date_selectable(day, &BusinessHours::default(), &bookings, now));
}

#[test]
fn test_today_selectable_while_slots_remain() {
    let day = monday();
    let now = at(day, 14, 30);

    assert!(is_date_selectable(day, &BusinessHours::default(), &[], now));
}

#[test]
fn test_validate_accepts_open_slot() {
    let day = monday();
    let now = at(date(2025, 3, 1), 0, 0);

    let result = validate_slot_request(day, 9, &BusinessHours::default(), &[], now);
    assert!(result.is_ok());
}

#[rstest]
#[case(8)]
#[case(17)]
fn test_validate_rejects_hour_outside_business_hours(#[case] hour: u32) {
    let now = at(date(2025, 3, 1), 0, 0);

    let result = validate_slot_request(monday(), hour, &BusinessHours::default(), &[], now);
    assert!(matches!(result, Err(BookingError::Validation(_))));
}

#[test]
fn test_validate_rejects_closed_day() {
    let now = at(date(2025, 3, 1), 0, 0);

    let result = validate_slot_request(sunday(), 9, &BusinessHours::default(), &[], now);
    assert!(matches!(result, Err(BookingError::Validation(_))));
}

#[test]
fn test_validate_rejects_stale_slot() {
    let day = monday();
    let hours = BusinessHours::default();
    let now = at(date(2025, 3, 1), 0, 0);

    // At render time the snapshot is empty and the 9:00 AM slot looks open.
    let stale_snapshot: Vec<Booking> = vec![];
    assert!(validate_slot_request(day, 9, &hours, &stale_snapshot, now).is_ok());

    // Another customer books before this one submits. The fresh snapshot
    // fetched right before the write must reject the request.
    let fresh_snapshot = vec![booking_at(day, 9)];
    let result = validate_slot_request(day, 9, &hours, &fresh_snapshot, now);
    assert!(matches!(result, Err(BookingError::SlotUnavailable(_))));
}

#[test]
fn test_validate_rejects_overlap_with_later_booking() {
    let day = monday();
    let now = at(date(2025, 3, 1), 0, 0);

    // A booking at 11 occupies [11, 15); a request for 9 occupies [9, 13).
    let bookings = vec![booking_at(day, 11)];
    let result = validate_slot_request(day, 9, &BusinessHours::default(), &bookings, now);
    assert!(matches!(result, Err(BookingError::SlotUnavailable(_))));
}

#[test]
fn test_validate_rejects_past_slot() {
    let day = monday();
    let now = at(day, 14, 30);

    let result = validate_slot_request(day, 10, &BusinessHours::default(), &[], now);
    assert!(matches!(result, Err(BookingError::SlotUnavailable(_))));
}

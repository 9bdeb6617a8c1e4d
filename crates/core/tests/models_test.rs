use chrono::{NaiveDate, Utc};
use clearview_core::models::booking::{Booking, CreateBookingRequest, ServiceTier};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use serde_test::{assert_tokens, Token};
use uuid::Uuid;

#[test]
fn test_booking_serialization() {
    let booking = Booking {
        id: Uuid::new_v4(),
        date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        start_hour: 9,
        customer_name: "Alex Morgan".to_string(),
        customer_email: "alex@example.com".to_string(),
        customer_phone: Some("+1 555 0100".to_string()),
        address: "12 Harbour View Rd".to_string(),
        service_tier: ServiceTier::Premium,
        notes: Some("Third floor, ring twice".to_string()),
        created_at: Utc::now(),
    };

    let json = to_string(&booking).expect("Failed to serialize booking");
    let deserialized: Booking = from_str(&json).expect("Failed to deserialize booking");

    assert_eq!(deserialized.id, booking.id);
    assert_eq!(deserialized.date, booking.date);
    assert_eq!(deserialized.start_hour, booking.start_hour);
    assert_eq!(deserialized.customer_name, booking.customer_name);
    assert_eq!(deserialized.customer_email, booking.customer_email);
    assert_eq!(deserialized.customer_phone, booking.customer_phone);
    assert_eq!(deserialized.address, booking.address);
    assert_eq!(deserialized.service_tier, booking.service_tier);
    assert_eq!(deserialized.notes, booking.notes);
    assert_eq!(deserialized.created_at, booking.created_at);
}

#[test]
fn test_create_booking_request_optional_fields_default() {
    let json = r#"{
        "date": "2025-03-03",
        "start_hour": 9,
        "customer_name": "Alex Morgan",
        "customer_email": "alex@example.com",
        "address": "12 Harbour View Rd"
    }"#;

    let request: CreateBookingRequest = from_str(json).expect("Failed to deserialize request");

    assert_eq!(request.start_hour, 9);
    assert_eq!(request.customer_phone, None);
    assert_eq!(request.service_tier, ServiceTier::Standard);
    assert_eq!(request.notes, None);
}

#[test]
fn test_service_tier_tokens() {
    assert_tokens(
        &ServiceTier::Basic,
        &[Token::UnitVariant {
            name: "ServiceTier",
            variant: "basic",
        }],
    );
    assert_tokens(
        &ServiceTier::Premium,
        &[Token::UnitVariant {
            name: "ServiceTier",
            variant: "premium",
        }],
    );
}

#[rstest]
#[case(ServiceTier::Basic, "basic")]
#[case(ServiceTier::Standard, "standard")]
#[case(ServiceTier::Premium, "premium")]
fn test_service_tier_str_round_trip(#[case] tier: ServiceTier, #[case] text: &str) {
    assert_eq!(tier.as_str(), text);
    assert_eq!(ServiceTier::parse(text), Some(tier));
}

#[test]
fn test_service_tier_parse_rejects_unknown() {
    assert_eq!(ServiceTier::parse("deluxe"), None);
    assert_eq!(ServiceTier::parse(""), None);
}

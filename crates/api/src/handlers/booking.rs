//! # Booking Handlers
//!
//! The booking submission flow. Submission is the only write path in the
//! system, and it is defended twice:
//!
//! 1. **Re-validation**: the slot the customer picked at render time is
//!    checked again against a freshly fetched snapshot immediately before
//!    the write. A snapshot taken when the form loaded may be minutes old.
//! 2. **Atomic insert**: the insert itself is conditional on the
//!    `(booking_date, start_hour)` uniqueness constraint, so two
//!    submissions that both pass re-validation cannot both land.
//!
//! Losing either race is a recoverable condition: the client receives
//! `409 Conflict` and should prompt for another slot.

use axum::{
    extract::{Path, State},
    Json,
};
use clearview_core::{
    errors::BookingError,
    models::booking::{Booking, CreateBookingRequest, CreateBookingResponse},
    scheduling::{generate_slots, validate_slot_request},
};
use clearview_db::repositories::booking::NewBooking;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn validate_payload(payload: &CreateBookingRequest) -> Result<(), BookingError> {
    if payload.customer_name.trim().is_empty() {
        return Err(BookingError::Validation(
            "customer_name must not be empty".to_string(),
        ));
    }
    if !payload.customer_email.contains('@') {
        return Err(BookingError::Validation(
            "customer_email must be a valid email address".to_string(),
        ));
    }
    if payload.address.trim().is_empty() {
        return Err(BookingError::Validation(
            "address must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Creates a booking for an available slot
///
/// # Endpoint
///
/// ```text
/// POST /api/bookings
/// ```
///
/// # Flow
///
/// 1. Validate the payload fields.
/// 2. Fetch a fresh booking snapshot for the target date.
/// 3. Re-run the availability check for the requested slot against that
///    snapshot; reject with `409` if it is past, conflicted, or not a
///    bookable hour at all.
/// 4. Attempt the conditional insert. `None` from the repository means a
///    concurrent submission took the slot between steps 3 and 4; that is
///    also a `409`, never a duplicate booking.
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    validate_payload(&payload)?;

    // Fresh snapshot for the target date; the one the form rendered from
    // may be stale.
    let bookings: Vec<_> =
        clearview_db::repositories::booking::get_bookings_by_date(&state.db_pool, payload.date)
            .await
            .map_err(BookingError::Database)?
            .into_iter()
            .map(|booking| booking.into_model())
            .collect();

    validate_slot_request(
        payload.date,
        payload.start_hour,
        &state.business_hours,
        &bookings,
        state.clock.now(),
    )?;

    let created = clearview_db::repositories::booking::create_booking(
        &state.db_pool,
        NewBooking {
            date: payload.date,
            start_hour: payload.start_hour,
            customer_name: &payload.customer_name,
            customer_email: &payload.customer_email,
            customer_phone: payload.customer_phone.as_deref(),
            address: &payload.address,
            service_tier: payload.service_tier.as_str(),
            notes: payload.notes.as_deref(),
        },
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        BookingError::SlotUnavailable(format!(
            "The slot at hour {} on {} was taken by another booking",
            payload.start_hour, payload.date
        ))
    })?;

    let label = generate_slots(payload.date, &state.business_hours)
        .into_iter()
        .find(|slot| slot.hour == payload.start_hour)
        .map(|slot| slot.label)
        .unwrap_or_default();

    let response = CreateBookingResponse {
        id: created.id,
        date: created.booking_date,
        start_hour: payload.start_hour,
        label,
        created_at: created.created_at,
    };

    Ok(Json(response))
}

/// Returns a single booking by id, for the confirmation view
///
/// # Endpoint
///
/// ```text
/// GET /api/bookings/:id
/// ```
#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let booking = clearview_db::repositories::booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Booking with ID {} not found", id)))?;

    Ok(Json(booking.into_model()))
}

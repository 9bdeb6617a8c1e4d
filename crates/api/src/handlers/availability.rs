//! # Availability Handlers
//!
//! Handlers for the availability calendar: the per-day slot view the
//! reservation form renders, and the selectable-dates query the calendar
//! widget uses to disable days with nothing left to book.
//!
//! Both handlers are thin: they fetch a booking snapshot for the requested
//! dates and hand everything to the pure engine in
//! `clearview_core::scheduling`. Snapshots are read-committed and may be
//! stale by the time the customer submits; the submission handler
//! re-validates against a fresh snapshot before writing.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use clearview_core::{
    errors::BookingError,
    models::booking::{DaySlotsResponse, SelectableDatesResponse, SlotResponse},
    scheduling::{compute_availability, generate_slots, is_date_selectable},
};
use serde::Deserialize;
use std::{collections::HashMap, sync::Arc};

use crate::{middleware::error_handling::AppError, ApiState};

/// Widest date range a single selectable-dates query may cover. Two months
/// is more than the calendar widget ever shows at once.
const MAX_RANGE_DAYS: i64 = 62;

/// Query parameters for the selectable-dates endpoint
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    /// First date of the visible range, inclusive
    pub from: NaiveDate,

    /// Last date of the visible range, inclusive
    pub to: NaiveDate,
}

/// Returns the slot list for one calendar day
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/2025-03-03
/// ```
///
/// Fetches the bookings already placed on that date, generates the
/// candidate slots from the business-hours rules, and flags each slot
/// available or not against the snapshot and the current time. A closed
/// day returns an empty slot list, not an error.
#[axum::debug_handler]
pub async fn get_day_slots(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<DaySlotsResponse>, AppError> {
    let bookings: Vec<_> =
        clearview_db::repositories::booking::get_bookings_by_date(&state.db_pool, date)
            .await
            .map_err(BookingError::Database)?
            .into_iter()
            .map(|booking| booking.into_model())
            .collect();

    let slots = generate_slots(date, &state.business_hours);
    let availability = compute_availability(slots, &bookings, state.clock.now());

    let response = DaySlotsResponse {
        date,
        slots: availability
            .into_iter()
            .map(|entry| SlotResponse {
                hour: entry.slot.hour,
                label: entry.slot.label,
                available: entry.available,
            })
            .collect(),
    };

    Ok(Json(response))
}

/// Returns the dates in a range that still have at least one open slot
///
/// # Endpoint
///
/// ```text
/// GET /api/availability?from=2025-03-01&to=2025-03-31
/// ```
///
/// A date is selectable when it is not in the past and at least one of its
/// slots is available; closed days and fully booked days are omitted. The
/// whole range is answered from a single range fetch, grouped per date, so
/// the cost is one query regardless of range width.
///
/// # Errors
///
/// * `BookingError::Validation` - `from` after `to`, or range wider than
///   the supported maximum
/// * `BookingError::Database` - snapshot fetch failed; surfaced as
///   retryable, never treated as "no bookings"
#[axum::debug_handler]
pub async fn get_selectable_dates(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<SelectableDatesResponse>, AppError> {
    if query.from > query.to {
        return Err(AppError(BookingError::Validation(
            "'from' must not be after 'to'".to_string(),
        )));
    }
    if (query.to - query.from).num_days() > MAX_RANGE_DAYS {
        return Err(AppError(BookingError::Validation(format!(
            "Date range must not exceed {MAX_RANGE_DAYS} days"
        ))));
    }

    let bookings = clearview_db::repositories::booking::get_bookings_in_range(
        &state.db_pool,
        query.from,
        query.to,
    )
    .await
    .map_err(BookingError::Database)?;

    // Group the snapshot per date so each day is checked against exactly
    // the bookings placed on it.
    let mut by_date: HashMap<NaiveDate, Vec<_>> = HashMap::new();
    for booking in bookings {
        by_date
            .entry(booking.booking_date)
            .or_default()
            .push(booking.into_model());
    }

    let now = state.clock.now();
    let empty = Vec::new();
    let dates = query
        .from
        .iter_days()
        .take_while(|date| *date <= query.to)
        .filter(|date| {
            let bookings_for_date = by_date.get(date).unwrap_or(&empty);
            is_date_selectable(*date, &state.business_hours, bookings_for_date, now)
        })
        .collect();

    Ok(Json(SelectableDatesResponse {
        from: query.from,
        to: query.to,
        dates,
    }))
}

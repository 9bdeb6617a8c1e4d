use crate::models::DbBooking;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Column values for a booking insert. The id and created_at are generated
/// here, matching the rest of the repository layer.
#[derive(Debug, Clone)]
pub struct NewBooking<'a> {
    pub date: NaiveDate,
    pub start_hour: u32,
    pub customer_name: &'a str,
    pub customer_email: &'a str,
    pub customer_phone: Option<&'a str>,
    pub address: &'a str,
    pub service_tier: &'a str,
    pub notes: Option<&'a str>,
}

/// Inserts a booking, unless its slot is already taken.
///
/// The insert is conditional on the `uniq_booking_slot` constraint:
/// `Ok(None)` means another booking for the same `(booking_date,
/// start_hour)` won the race, and the caller should treat the slot as no
/// longer available. This is what makes the check-then-write submission
/// flow safe against concurrent submissions.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    new: NewBooking<'_>,
) -> Result<Option<DbBooking>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating booking: id={}, date={}, start_hour={}",
        id,
        new.date,
        new.start_hour
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (
            id, booking_date, start_hour, customer_name, customer_email,
            customer_phone, address, service_tier, notes, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT ON CONSTRAINT uniq_booking_slot DO NOTHING
        RETURNING id, booking_date, start_hour, customer_name, customer_email,
                  customer_phone, address, service_tier, notes, created_at
        "#,
    )
    .bind(id)
    .bind(new.date)
    .bind(new.start_hour as i32)
    .bind(new.customer_name)
    .bind(new.customer_email)
    .bind(new.customer_phone)
    .bind(new.address)
    .bind(new.service_tier)
    .bind(new.notes)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    if booking.is_none() {
        tracing::debug!(
            "Slot already taken: date={}, start_hour={}",
            new.date,
            new.start_hour
        );
    }

    Ok(booking)
}

pub async fn get_bookings_by_date(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, booking_date, start_hour, customer_name, customer_email,
               customer_phone, address, service_tier, notes, created_at
        FROM bookings
        WHERE booking_date = $1
        ORDER BY start_hour ASC
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_bookings_in_range(
    pool: &Pool<Postgres>,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, booking_date, start_hour, customer_name, customer_email,
               customer_phone, address, service_tier, notes, created_at
        FROM bookings
        WHERE booking_date >= $1 AND booking_date <= $2
        ORDER BY booking_date ASC, start_hour ASC
        "#,
    )
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, booking_date, start_hour, customer_name, customer_email,
               customer_phone, address, service_tier, notes, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

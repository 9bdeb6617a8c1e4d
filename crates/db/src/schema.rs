use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create bookings table. The unique constraint on (booking_date,
    // start_hour) is the atomic double-booking guard: two concurrent
    // submissions for the same slot cannot both insert.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            booking_date DATE NOT NULL,
            start_hour INT NOT NULL,
            customer_name VARCHAR(255) NOT NULL,
            customer_email VARCHAR(255) NOT NULL,
            customer_phone VARCHAR(64) NULL,
            address TEXT NOT NULL,
            service_tier VARCHAR(32) NOT NULL DEFAULT 'standard',
            notes TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_start_hour CHECK (start_hour BETWEEN 0 AND 23),
            CONSTRAINT uniq_booking_slot UNIQUE (booking_date, start_hour)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_booking_date ON bookings(booking_date);
        CREATE INDEX IF NOT EXISTS idx_bookings_created_at ON bookings(created_at);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}

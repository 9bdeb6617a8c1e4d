use chrono::{DateTime, NaiveDate, Utc};
use clearview_core::models::booking::{Booking, ServiceTier};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub booking_date: NaiveDate,
    pub start_hour: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub address: String,
    pub service_tier: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DbBooking {
    /// Converts the row into the core domain model. `start_hour` is
    /// constrained to 0-23 by the schema; an unrecognized tier string falls
    /// back to the default tier rather than failing the whole fetch.
    pub fn into_model(self) -> Booking {
        Booking {
            id: self.id,
            date: self.booking_date,
            start_hour: self.start_hour.max(0) as u32,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            address: self.address,
            service_tier: ServiceTier::parse(&self.service_tier).unwrap_or_default(),
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

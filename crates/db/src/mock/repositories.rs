use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::models::DbBooking;

// Mock repositories for testing
mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            date: NaiveDate,
            start_hour: u32,
            customer_name: &'static str,
            customer_email: &'static str,
            address: &'static str,
            service_tier: &'static str,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_bookings_by_date(
            &self,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn get_bookings_in_range(
            &self,
            from: NaiveDate,
            to: NaiveDate,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn get_booking_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBooking>>;
    }
}

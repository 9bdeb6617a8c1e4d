use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Service tier selected by the customer.
///
/// Tiers affect pricing and what the crew brings, not scheduling: conflict
/// detection always uses the fixed service duration regardless of tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    Basic,
    #[default]
    Standard,
    Premium,
}

impl ServiceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceTier::Basic => "basic",
            ServiceTier::Standard => "standard",
            ServiceTier::Premium => "premium",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(ServiceTier::Basic),
            "standard" => Some(ServiceTier::Standard),
            "premium" => Some(ServiceTier::Premium),
            _ => None,
        }
    }
}

/// An existing reservation. Read-only to the availability engine; only
/// `date` and `start_hour` participate in conflict detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_hour: u32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub address: String,
    pub service_tier: ServiceTier,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub date: NaiveDate,
    pub start_hour: u32,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub address: String,
    #[serde(default)]
    pub service_tier: ServiceTier,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_hour: u32,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub hour: u32,
    pub label: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySlotsResponse {
    pub date: NaiveDate,
    pub slots: Vec<SlotResponse>,
}

/// Dates in the queried range with at least one bookable slot left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectableDatesResponse {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub dates: Vec<NaiveDate>,
}

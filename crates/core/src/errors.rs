use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested slot is taken or has passed. Recoverable: the caller
    /// should re-prompt for another slot, never abort the session.
    #[error("Slot no longer available: {0}")]
    SlotUnavailable(String),

    /// A booking snapshot fetch or write failed. Surfaced as retryable;
    /// never treated as "no bookings exist".
    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;

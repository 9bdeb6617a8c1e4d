//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Clearview
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! The one mapping worth calling out: `SlotUnavailable` becomes `409
//! Conflict`. A submission that lost the race for a slot is a recoverable,
//! user-facing condition the client should respond to by offering another
//! slot, not a server failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clearview_core::errors::BookingError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `BookingError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub BookingError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::SlotUnavailable(_) => StatusCode::CONFLICT,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from BookingError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, BookingError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Fetch and write failures from the repository layer surface as reports;
/// they are wrapped in `BookingError::Database` so the client sees a
/// retryable server error rather than an empty result.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}

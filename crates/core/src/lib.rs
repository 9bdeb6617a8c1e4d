//! # Clearview Core
//!
//! Domain types and the appointment availability engine for the Clearview
//! window-cleaning booking service.
//!
//! Everything in this crate is pure, synchronous computation over values the
//! caller supplies: business-hours rules, a snapshot of existing bookings,
//! and an injected clock. Persistence lives in `clearview-db` and the HTTP
//! surface in `clearview-api`.

/// Error taxonomy shared across the workspace
pub mod errors;
/// Booking domain models and request/response types
pub mod models;
/// Slot generation, conflict detection, and date selectability
pub mod scheduling;

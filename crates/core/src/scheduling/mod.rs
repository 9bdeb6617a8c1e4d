//! # Availability Engine
//!
//! Derives bookable time slots per day from business-hours rules and marks
//! each slot available or not against a snapshot of existing bookings and
//! the current time.
//!
//! The engine is a set of pure functions: no I/O, no shared state, no
//! errors in normal operation. Callers fetch the booking snapshot and the
//! clock themselves and pass both in, so every result is deterministic for
//! a given set of inputs. The booking submission path re-runs the same
//! computation against a fresh snapshot immediately before writing, which
//! is why the validation primitive lives here rather than in the API crate.

/// Injectable wall-clock source
pub mod clock;
/// Business-hours rule sets
pub mod hours;
/// Slot generation and availability computation
pub mod slots;

pub use clock::{Clock, SystemClock};
pub use hours::{BusinessHours, HourRange};
pub use slots::{
    compute_availability, generate_slots, is_date_selectable, validate_slot_request, Slot,
    SlotAvailability, SERVICE_DURATION_HOURS,
};

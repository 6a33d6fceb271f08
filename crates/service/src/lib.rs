//! Service layer for the booking API.
//! - `booking::BookingRepository` is the storage seam; the SeaORM
//!   implementation is the production one.
//! - `booking::BookingService` adds validation and logging on top and is what
//!   the HTTP layer holds.
//! - Errors from `models` are mapped onto `errors::ServiceError` without losing
//!   their kind.

pub mod errors;
pub mod booking;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
#[cfg(test)]
pub mod test_support;

//! Customers, restaurants and reservations: repository seam and the service
//! handed to the HTTP layer.

pub mod repository;
pub mod service;

pub use repository::{BookingRepository, SeaOrmBookingRepository};
pub use service::BookingService;

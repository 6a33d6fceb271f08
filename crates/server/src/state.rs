use std::sync::Arc;

use service::booking::{BookingRepository, BookingService};

/// Shared by every handler; cloning only bumps the repository `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub bookings: BookingService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { bookings: BookingService::new(repo) }
    }
}

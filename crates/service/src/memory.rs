//! In-memory `BookingRepository`.
//!
//! Mirrors the Postgres behaviour the HTTP layer depends on: generated ids,
//! insertion order on listing, FK checks on reservation insert and
//! idempotent deletes. Nothing is persisted.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use models::{customer, reservation, restaurant};
use models::reservation::NewReservation;

use crate::booking::BookingRepository;
use crate::errors::ServiceError;

#[derive(Default)]
struct Tables {
    customers: Vec<customer::Model>,
    restaurants: Vec<restaurant::Model>,
    reservations: Vec<reservation::Model>,
}

#[derive(Clone, Default)]
pub struct InMemoryBookingRepository {
    inner: Arc<RwLock<Tables>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self { Self::default() }

    /// Drop every row, like the destructive schema reset.
    pub async fn reset(&self) {
        let mut t = self.inner.write().await;
        *t = Tables::default();
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create_customer(&self, name: &str) -> Result<customer::Model, ServiceError> {
        let row = customer::Model { id: Uuid::new_v4(), name: name.to_string() };
        self.inner.write().await.customers.push(row.clone());
        Ok(row)
    }

    async fn list_customers(&self) -> Result<Vec<customer::Model>, ServiceError> {
        Ok(self.inner.read().await.customers.clone())
    }

    async fn create_restaurant(&self, name: &str) -> Result<restaurant::Model, ServiceError> {
        let row = restaurant::Model { id: Uuid::new_v4(), name: name.to_string() };
        self.inner.write().await.restaurants.push(row.clone());
        Ok(row)
    }

    async fn list_restaurants(&self) -> Result<Vec<restaurant::Model>, ServiceError> {
        Ok(self.inner.read().await.restaurants.clone())
    }

    async fn create_reservation(&self, input: NewReservation) -> Result<reservation::Model, ServiceError> {
        let mut t = self.inner.write().await;
        if !t.restaurants.iter().any(|r| r.id == input.restaurant_id) {
            return Err(ServiceError::InvalidReference(format!(
                "restaurant {} does not exist",
                input.restaurant_id
            )));
        }
        if !t.customers.iter().any(|c| c.id == input.customer_id) {
            return Err(ServiceError::InvalidReference(format!(
                "customer {} does not exist",
                input.customer_id
            )));
        }
        let row = reservation::Model {
            id: Uuid::new_v4(),
            date: input.date,
            party_count: input.party_count,
            restaurant_id: input.restaurant_id,
            customer_id: input.customer_id,
        };
        t.reservations.push(row.clone());
        Ok(row)
    }

    async fn list_reservations(&self) -> Result<Vec<reservation::Model>, ServiceError> {
        Ok(self.inner.read().await.reservations.clone())
    }

    async fn delete_reservation(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut t = self.inner.write().await;
        let before = t.reservations.len();
        t.reservations.retain(|r| r.id != id);
        Ok(t.reservations.len() != before)
    }
}

use std::sync::Arc;
use chrono::NaiveDate;
use uuid::Uuid;
use tracing::{debug, info, instrument};

use models::{customer, reservation, restaurant};
use models::reservation::NewReservation;

use crate::booking::repository::BookingRepository;
use crate::errors::ServiceError;

/// Application service for the booking API.
///
/// Built once at startup around a repository and shared by every request
/// handler. Holds no state of its own beyond the repository handle.
#[derive(Clone)]
pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn create_customer(&self, name: &str) -> Result<customer::Model, ServiceError> {
        models::validate_name(name)?;
        let created = self.repo.create_customer(name).await?;
        info!(id = %created.id, "created customer");
        Ok(created)
    }

    pub async fn list_customers(&self) -> Result<Vec<customer::Model>, ServiceError> {
        self.repo.list_customers().await
    }

    #[instrument(skip(self))]
    pub async fn create_restaurant(&self, name: &str) -> Result<restaurant::Model, ServiceError> {
        models::validate_name(name)?;
        let created = self.repo.create_restaurant(name).await?;
        info!(id = %created.id, "created restaurant");
        Ok(created)
    }

    pub async fn list_restaurants(&self) -> Result<Vec<restaurant::Model>, ServiceError> {
        self.repo.list_restaurants().await
    }

    /// Book a table. Neither parent is looked up first; the store's FK
    /// constraints decide, surfacing as `ServiceError::InvalidReference`.
    #[instrument(skip(self))]
    pub async fn create_reservation(
        &self,
        customer_id: Uuid,
        restaurant_id: Uuid,
        date: NaiveDate,
        party_count: i32,
    ) -> Result<reservation::Model, ServiceError> {
        let created = self
            .repo
            .create_reservation(NewReservation { restaurant_id, customer_id, date, party_count })
            .await?;
        info!(id = %created.id, "created reservation");
        Ok(created)
    }

    pub async fn list_reservations(&self) -> Result<Vec<reservation::Model>, ServiceError> {
        self.repo.list_reservations().await
    }

    /// Remove a reservation. Unknown ids succeed without doing anything.
    #[instrument(skip(self))]
    pub async fn delete_reservation(&self, id: Uuid) -> Result<(), ServiceError> {
        let removed = self.repo.delete_reservation(id).await?;
        debug!(removed, "delete reservation");
        Ok(())
    }
}

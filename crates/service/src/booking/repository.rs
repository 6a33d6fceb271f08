use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use models::{customer, reservation, restaurant};
use models::reservation::NewReservation;

use crate::errors::ServiceError;

/// Storage operations for the booking entities. Each call is one statement.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create_customer(&self, name: &str) -> Result<customer::Model, ServiceError>;
    async fn list_customers(&self) -> Result<Vec<customer::Model>, ServiceError>;
    async fn create_restaurant(&self, name: &str) -> Result<restaurant::Model, ServiceError>;
    async fn list_restaurants(&self) -> Result<Vec<restaurant::Model>, ServiceError>;
    async fn create_reservation(&self, input: NewReservation) -> Result<reservation::Model, ServiceError>;
    async fn list_reservations(&self) -> Result<Vec<reservation::Model>, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete_reservation(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmBookingRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn create_customer(&self, name: &str) -> Result<customer::Model, ServiceError> {
        Ok(customer::create(&self.db, name).await?)
    }

    async fn list_customers(&self) -> Result<Vec<customer::Model>, ServiceError> {
        Ok(customer::find_all(&self.db).await?)
    }

    async fn create_restaurant(&self, name: &str) -> Result<restaurant::Model, ServiceError> {
        Ok(restaurant::create(&self.db, name).await?)
    }

    async fn list_restaurants(&self) -> Result<Vec<restaurant::Model>, ServiceError> {
        Ok(restaurant::find_all(&self.db).await?)
    }

    async fn create_reservation(&self, input: NewReservation) -> Result<reservation::Model, ServiceError> {
        Ok(reservation::create(&self.db, input).await?)
    }

    async fn list_reservations(&self) -> Result<Vec<reservation::Model>, ServiceError> {
        Ok(reservation::find_all(&self.db).await?)
    }

    async fn delete_reservation(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(reservation::delete(&self.db, id).await?)
    }
}

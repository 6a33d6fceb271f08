//! Migrator registering the booking tables in dependency order.
//! Parents first; `down` runs in reverse so `reservations` is dropped
//! before the tables it references.
pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_customers;
mod m20240501_000002_create_restaurants;
mod m20240501_000003_create_reservations;
mod m20240501_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_customers::Migration),
            Box::new(m20240501_000002_create_restaurants::Migration),
            Box::new(m20240501_000003_create_reservations::Migration),
            // Indexes should always be applied last
            Box::new(m20240501_000004_add_indexes::Migration),
        ]
    }
}

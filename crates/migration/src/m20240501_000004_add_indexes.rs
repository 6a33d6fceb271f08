//! Secondary indexes on the reservation FK columns.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_customer_id")
                    .table(Reservations::Table)
                    .col(Reservations::CustomerId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_restaurant_id")
                    .table(Reservations::Table)
                    .col(Reservations::RestaurantId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_reservations_restaurant_id").table(Reservations::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reservations_customer_id").table(Reservations::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Reservations { Table, CustomerId, RestaurantId }

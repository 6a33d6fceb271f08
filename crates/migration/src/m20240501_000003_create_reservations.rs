//! Create `reservations` table with FKs to `restaurants` and `customers`.
//!
//! The FK constraints are the only existence check for the referenced rows.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(uuid(Reservations::Id).primary_key())
                    .col(date(Reservations::Date).not_null())
                    .col(integer(Reservations::PartyCount).not_null())
                    .col(uuid(Reservations::RestaurantId).not_null())
                    .col(uuid(Reservations::CustomerId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_restaurant")
                            .from(Reservations::Table, Reservations::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_customer")
                            .from(Reservations::Table, Reservations::CustomerId)
                            .to(Customers::Table, Customers::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reservations::Table).if_exists().to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Reservations { Table, Id, Date, PartyCount, RestaurantId, CustomerId }

#[derive(DeriveIden)]
enum Restaurants { Table, Id }

#[derive(DeriveIden)]
enum Customers { Table, Id }

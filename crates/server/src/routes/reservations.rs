use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use models::reservation;

use crate::errors::ApiError;
use crate::extractors::{AppJson, AppPath};
use crate::state::ServerState;

/// Body of a booking request; the customer comes from the path.
#[derive(Debug, Default, Deserialize)]
pub struct CreateReservationInput {
    #[serde(default)]
    pub restaurant_id: Option<Uuid>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub party_count: Option<i32>,
}

fn present<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::Rejected(format!("{field} is required")))
}

#[utoipa::path(
    get, path = "/api/reservations", tag = "reservations",
    responses(
        (status = 200, description = "All reservations", body = [crate::openapi::ReservationDoc]),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<reservation::Model>>, ApiError> {
    Ok(Json(state.bookings.list_reservations().await?))
}

/// The customer id is not checked here; an unknown one fails at the store.
#[utoipa::path(
    post, path = "/api/customers/{customer_id}/reservations", tag = "reservations",
    params(("customer_id" = Uuid, Path, description = "Customer id")),
    request_body = crate::openapi::CreateReservationInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ReservationDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    AppPath(customer_id): AppPath<Uuid>,
    AppJson(input): AppJson<CreateReservationInput>,
) -> Result<(StatusCode, Json<reservation::Model>), ApiError> {
    let restaurant_id = present(input.restaurant_id, "restaurant_id")?;
    let date = present(input.date, "date")?;
    let party_count = present(input.party_count, "party_count")?;
    let created = state
        .bookings
        .create_reservation(customer_id, restaurant_id, date, party_count)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `customer_id` is accepted for URL symmetry only; it does not scope the delete.
#[utoipa::path(
    delete, path = "/api/customers/{customer_id}/reservations/{id}", tag = "reservations",
    params(
        ("customer_id" = String, Path, description = "Ignored"),
        ("id" = Uuid, Path, description = "Reservation id")
    ),
    responses(
        (status = 204, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    AppPath((_customer_id, id)): AppPath<(String, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state.bookings.delete_reservation(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use models::restaurant;

use super::customers::required_name;
use crate::errors::ApiError;
use crate::extractors::AppJson;
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateRestaurantInput {
    #[serde(default)]
    pub name: Option<String>,
}

#[utoipa::path(
    post, path = "/api/restaurants", tag = "restaurants",
    request_body = crate::openapi::CreateNamedInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RestaurantDoc),
        (status = 400, description = "Name is required", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    AppJson(input): AppJson<CreateRestaurantInput>,
) -> Result<(StatusCode, Json<restaurant::Model>), ApiError> {
    let name = required_name(input.name)?;
    let created = state.bookings.create_restaurant(&name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/restaurants", tag = "restaurants",
    responses(
        (status = 200, description = "All restaurants", body = [crate::openapi::RestaurantDoc]),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<restaurant::Model>>, ApiError> {
    Ok(Json(state.bookings.list_restaurants().await?))
}

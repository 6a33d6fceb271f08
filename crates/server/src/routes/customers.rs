use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use models::customer;

use crate::errors::ApiError;
use crate::extractors::AppJson;
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateCustomerInput {
    #[serde(default)]
    pub name: Option<String>,
}

/// Absent or null `name`. Empty strings are rejected by `BookingService`.
pub(crate) fn required_name(name: Option<String>) -> Result<String, ApiError> {
    name.ok_or(ApiError::MissingName)
}

#[utoipa::path(
    post, path = "/api/customers", tag = "customers",
    request_body = crate::openapi::CreateNamedInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Name is required", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    AppJson(input): AppJson<CreateCustomerInput>,
) -> Result<(StatusCode, Json<customer::Model>), ApiError> {
    let name = required_name(input.name)?;
    let created = state.bookings.create_customer(&name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/customers", tag = "customers",
    responses(
        (status = 200, description = "All customers", body = [crate::openapi::CustomerDoc]),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<customer::Model>>, ApiError> {
    Ok(Json(state.bookings.list_customers().await?))
}

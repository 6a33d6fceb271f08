use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    #[schema(example = "Internal Server Error")]
    pub error: String,
    /// Set to `invalid_reference` when a referenced row does not exist.
    pub reason: Option<String>,
}

#[derive(ToSchema)]
pub struct CreateNamedInputDoc {
    #[schema(example = "Ada")]
    pub name: String,
}

#[derive(ToSchema)]
pub struct CustomerDoc { pub id: Uuid, pub name: String }

#[derive(ToSchema)]
pub struct RestaurantDoc { pub id: Uuid, pub name: String }

#[derive(ToSchema)]
pub struct CreateReservationInputDoc {
    pub restaurant_id: Uuid,
    #[schema(value_type = String, format = Date, example = "2024-05-01")]
    pub date: String,
    #[schema(example = 4)]
    pub party_count: i32,
}

#[derive(ToSchema)]
pub struct ReservationDoc {
    pub id: Uuid,
    #[schema(value_type = String, format = Date, example = "2024-05-01")]
    pub date: String,
    pub party_count: i32,
    pub restaurant_id: Uuid,
    pub customer_id: Uuid,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::create,
        crate::routes::customers::list,
        crate::routes::restaurants::create,
        crate::routes::restaurants::list,
        crate::routes::reservations::list,
        crate::routes::reservations::create,
        crate::routes::reservations::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBodyDoc,
            CreateNamedInputDoc,
            CustomerDoc,
            RestaurantDoc,
            CreateReservationInputDoc,
            ReservationDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "restaurants"),
        (name = "reservations")
    )
)]
pub struct ApiDoc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

pub const NAME_REQUIRED: &str = "Name is required";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Everything a handler can fail with. Only a missing name is a client
/// error; every other failure is answered with a uniform 500 and the cause is
/// kept in the server log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("name is required")]
    MissingName,
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// Body or path could not be decoded into the expected shape.
    #[error("rejected request: {0}")]
    Rejected(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn server_error(body: ErrorBody) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingName | ApiError::Service(ServiceError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(NAME_REQUIRED))).into_response()
            }
            ApiError::Service(ServiceError::InvalidReference(msg)) => {
                warn!(error = %msg, "reservation references a missing customer or restaurant");
                Self::server_error(ErrorBody::new(INTERNAL_SERVER_ERROR).with_reason("invalid_reference"))
            }
            ApiError::Service(ServiceError::Db(msg)) => {
                error!(error = %msg, "store operation failed");
                Self::server_error(ErrorBody::new(INTERNAL_SERVER_ERROR))
            }
            ApiError::Rejected(msg) => {
                warn!(error = %msg, "request rejected");
                Self::server_error(ErrorBody::new(INTERNAL_SERVER_ERROR))
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "unhandled failure");
                Self::server_error(ErrorBody::new(INTERNAL_SERVER_ERROR))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("cannot bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

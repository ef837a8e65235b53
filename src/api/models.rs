use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::constants::{SERVER_ERROR_MESSAGE, USER_EXISTS_MESSAGE};
use crate::core::errors::{FieldError, RegistrationError};

// Error response struct
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorsResponse {
    pub errors: Vec<FieldError>,
}

// Newtype wrapper for RegistrationError to implement IntoResponse
pub struct ApiError(pub RegistrationError);

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if !self.0.is_client_error() {
            error!(error = %self.0, retryable = self.0.is_retryable(), "Registration failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response();
        }
        let errors = match self.0 {
            RegistrationError::Validation(errors) => errors,
            RegistrationError::MalformedBody(msg) => vec![FieldError::message(msg)],
            // UserAlreadyExists
            _ => vec![FieldError::message(USER_EXISTS_MESSAGE)],
        };
        (StatusCode::BAD_REQUEST, Json(ErrorsResponse { errors })).into_response()
    }
}

use crate::{
    api::models::{ApiError, ErrorsResponse},
    constants::REGISTERED_MESSAGE,
    core::{errors::RegistrationError, models::user::NewUser, services::RegistrationService},
    infrastructure::{avatar::AvatarGenerator, hashing::PasswordHasher, storage::UserStore},
};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use std::sync::Arc;

// Define API routes
pub fn api_routes<S, H, A>(service: Arc<RegistrationService<S, H, A>>) -> Router
where
    S: UserStore + 'static,
    H: PasswordHasher + 'static,
    A: AvatarGenerator + 'static,
{
    Router::new()
        .route("/users", post(register_user::<S, H, A>))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = NewUser,
    responses(
        (status = 200, description = "User registered", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid input or email already registered", body = ErrorsResponse),
        (status = 500, description = "Server error", body = String, content_type = "text/plain")
    )
)]
pub async fn register_user<S, H, A>(
    State(service): State<Arc<RegistrationService<S, H, A>>>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<&'static str, ApiError>
where
    S: UserStore + 'static,
    H: PasswordHasher + 'static,
    A: AvatarGenerator + 'static,
{
    let Json(request) = payload.map_err(|rejection| RegistrationError::MalformedBody(rejection.body_text()))?;
    service.register(request).await?;
    Ok(REGISTERED_MESSAGE)
}

pub mod handlers;
pub mod models;
pub mod openapi;

use crate::core::services::RegistrationService;
use crate::infrastructure::{avatar::AvatarGenerator, hashing::PasswordHasher, storage::UserStore};
use axum::{Router, routing::get};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Full application router: health check, the `/api` routes and the
/// Swagger UI. Server-level layers are added by the binary.
pub fn app<S, H, A>(service: Arc<RegistrationService<S, H, A>>) -> Router
where
    S: UserStore + 'static,
    H: PasswordHasher + 'static,
    A: AvatarGenerator + 'static,
{
    Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", handlers::api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

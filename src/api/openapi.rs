use utoipa::OpenApi;

use crate::{
    api::models::ErrorsResponse,
    core::{
        errors::FieldError,
        models::user::{NewUser, User},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::register_user),
    components(schemas(NewUser, User, FieldError, ErrorsResponse)),
    info(
        title = "Registrar API",
        description = "User account registration",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

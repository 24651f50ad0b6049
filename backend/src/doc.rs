//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the registration and lookup endpoints together with
//! the user record, request/acknowledgement bodies, and the error body
//! returned for mapped domain errors.
//!
//! The generated specification is served by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{ErrorCode, User};
use crate::inbound::http::ErrorResponse;
use crate::inbound::http::users::{RegisterRequest, RegisterResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "Register users and look them up by username."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::get_user,
    ),
    components(schemas(User, RegisterRequest, RegisterResponse, ErrorResponse, ErrorCode)),
    tags(
        (name = "users", description = "Operations related to users")
    )
)]
pub struct ApiDoc;

//! Users API handlers.
//!
//! ```text
//! POST /register/ {"username":"alice","email":"a@x.com"}
//! GET /user/alice
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, User, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;

/// Message returned after a successful registration.
pub const REGISTERED_MESSAGE: &str = "User registered successfully.";

/// Registration request body for `POST /register/`.
///
/// Example JSON:
/// `{"username":"alice","email":"a@x.com"}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl TryFrom<RegisterRequest> for User {
    type Error = UserValidationError;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.username, value.email)
    }
}

/// Acknowledgement body for a successful registration.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = "User registered successfully.")]
    pub message: String,
}

impl RegisterResponse {
    fn registered() -> Self {
        Self {
            message: REGISTERED_MESSAGE.to_owned(),
        }
    }
}

/// Register a new user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::inbound::http::users::register_user;
///
/// let app = App::new().service(register_user);
/// ```
#[utoipa::path(
    post,
    path = "/register/",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Username taken or empty", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/register/")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let user = User::try_from(payload.into_inner())
        .map_err(|err| Error::invalid_user_data(err.to_string()))?;
    let username = user.username().clone();
    state.users.insert(user).await?;
    info!(%username, "user registered");
    Ok(web::Json(RegisterResponse::registered()))
}

/// Fetch a registered user by username.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::inbound::http::users::get_user;
///
/// let app = App::new().service(get_user);
/// ```
#[utoipa::path(
    get,
    path = "/user/{username}",
    params(("username" = String, Path, description = "Username given at registration")),
    responses(
        (status = 200, description = "Registered user", body = User),
        (status = 404, description = "No user with this username", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{username}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let username = path.into_inner();
    let user = state.users.find(&username).await?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests;

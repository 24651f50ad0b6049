//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while turning each
//! domain failure into a JSON body and the matching wire status. Failures
//! that are not domain errors (malformed JSON, unknown routes) keep Actix's
//! default responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON body returned for every mapped domain error.
///
/// `status_code` always equals the HTTP status of the response carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = 404)]
    pub status_code: u16,
    #[schema(example = "User with ID bob not found.")]
    pub message: String,
    pub error_code: ErrorCode,
}

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::UserNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidUserData => StatusCode::BAD_REQUEST,
    }
}

impl From<&Error> for ErrorResponse {
    fn from(error: &Error) -> Self {
        let code = error.code();
        Self {
            status_code: status_for(code).as_u16(),
            message: error.to_string(),
            error_code: code,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse::from(self);
        debug!(
            status = body.status_code,
            error_code = ?body.error_code,
            message = %body.message,
            "domain error mapped to response"
        );
        HttpResponse::build(self.status_code()).json(body)
    }
}

//! Request error taxonomy.
//!
//! Every failure a request can hit maps onto one of the [`ApiError`] variants
//! below, and every variant renders as a JSON body of the form
//! `{"error": "<message>"}` with a matching HTTP status code. Nothing else
//! ever escapes a handler.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// The complete set of error responses the lyrics endpoint can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing/mismatched proxy secret, or a caller outside the IP allowlist.
    #[error("Unauthorized")]
    Unauthorized,

    /// Query shape violation: wrong segment count or a nullish segment.
    #[error("Bad request")]
    BadRequest,

    /// Any HTTP method other than GET on the lyrics route.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The provider found nothing, or the lookup failed along the way.
    #[error("Lyrics not found")]
    NotFound,

    /// Anything unanticipated outside the lookup scope.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

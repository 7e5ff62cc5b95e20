use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

use business::domain::errors::RepositoryError;

/// Failure envelope shared by every endpoint and by the catch-all responder.
#[derive(Object, Serialize, Debug, Clone)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Error class (`ValidationError`, `Conflict`, `NotFound`, ...)
    pub name: String,
    /// Stable i18n code, e.g. `category.slug_taken`
    pub code: String,
    /// Human-readable message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(name: &str, code: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            name: name.to_string(),
            code: code.to_string(),
            error: error.into(),
        }
    }

    pub fn validation(code: &str, error: impl Into<String>) -> Json<Self> {
        Json(Self::new("ValidationError", code, error))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Builds the response tuple for a mapped domain error.
pub fn error_response(
    status: StatusCode,
    name: &str,
    code: impl std::fmt::Display,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse::new(name, &code.to_string(), message)),
    )
}

/// Shared mapping for persistence failures bubbling up through a resource error.
pub fn repository_error_response(error: &RepositoryError) -> (StatusCode, Json<ErrorResponse>) {
    match error {
        RepositoryError::NotFound => error_response(
            StatusCode::NOT_FOUND,
            "NotFound",
            error,
            "Resource not found",
        ),
        RepositoryError::Duplicated => error_response(
            StatusCode::BAD_REQUEST,
            "Conflict",
            error,
            "Resource already exists",
        ),
        e if e.is_client_error() => error_response(
            StatusCode::BAD_REQUEST,
            "ValidationError",
            error,
            "Invalid data",
        ),
        _ => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalError",
            error,
            "Internal server error",
        ),
    }
}

/// Parses a path identifier, producing the 400 envelope on failure.
pub fn parse_id(raw: &str, code: &str) -> Result<uuid::Uuid, Json<ErrorResponse>> {
    uuid::Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation(code, "Invalid identifier"))
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::favorite::errors::FavoriteError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response, repository_error_response};

impl IntoErrorResponse for FavoriteError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            FavoriteError::ProductNotFound => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product does not exist",
            ),
            FavoriteError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "Product is not in favorites",
            ),
            FavoriteError::Repository(e) => return repository_error_response(e),
        };

        error_response(status, name, &self, message)
    }
}

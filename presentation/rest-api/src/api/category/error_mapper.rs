use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response, repository_error_response};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CategoryError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Category name is required",
            ),
            CategoryError::SlugInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Slug may only contain lowercase letters, digits and hyphens",
            ),
            CategoryError::SlugTaken => (
                StatusCode::BAD_REQUEST,
                "Conflict",
                "A category with this slug already exists",
            ),
            CategoryError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Category not found"),
            CategoryError::Repository(e) => return repository_error_response(e),
        };

        error_response(status, name, &self, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_taken_slug_to_conflict() {
        let (status, json) = CategoryError::SlugTaken.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "Conflict");
        assert_eq!(json.0.code, "category.slug_taken");
    }

    #[test]
    fn should_map_not_found_to_404() {
        let (status, _) = CategoryError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

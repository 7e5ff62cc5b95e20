use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response, repository_error_response};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product name is required",
            ),
            ProductError::PriceNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Price cannot be negative",
            ),
            ProductError::CategoryEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product category is required",
            ),
            ProductError::RatingOutOfRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Rating must be between 0 and 5",
            ),
            ProductError::CategoryNotFound => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Category does not exist",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Product not found"),
            ProductError::Repository(e) => return repository_error_response(e),
        };

        error_response(status, name, &self, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_missing_category_to_bad_request() {
        let (status, json) = ProductError::CategoryNotFound.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.code, "product.category_not_found");
    }

    #[test]
    fn should_map_not_found_to_404() {
        let (status, json) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.name, "NotFound");
        assert_eq!(json.0.error, "Product not found");
    }

    #[test]
    fn should_map_repository_failures_to_500() {
        let (status, _) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}

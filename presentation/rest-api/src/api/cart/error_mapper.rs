use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response, repository_error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::QuantityNotPositive => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Quantity must be at least 1",
            ),
            CartError::ProductNotFound => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product does not exist",
            ),
            CartError::ProductOutOfStock => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product is out of stock",
            ),
            CartError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Cart item not found"),
            CartError::Repository(e) => return repository_error_response(e),
        };

        error_response(status, name, &self, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_unknown_product_to_bad_request() {
        let (status, json) = CartError::ProductNotFound.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.code, "cart.product_not_found");
    }

    #[test]
    fn should_map_missing_line_to_404() {
        let (status, json) = CartError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.code, "cart.item_not_found");
    }
}

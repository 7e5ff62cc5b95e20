use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response, repository_error_response};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::ItemsEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Order must contain at least one item",
            ),
            OrderError::QuantityNotPositive => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Item quantities must be at least 1",
            ),
            OrderError::ShippingAddressIncomplete => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Shipping address is incomplete",
            ),
            OrderError::BillingAddressIncomplete => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Billing address is incomplete",
            ),
            OrderError::ProductNotFound => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product does not exist",
            ),
            OrderError::ProductOutOfStock => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product is out of stock",
            ),
            OrderError::InvalidStatusTransition => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Order status cannot change this way",
            ),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Order not found"),
            OrderError::Repository(e) => return repository_error_response(e),
        };

        error_response(status, name, &self, message)
    }
}

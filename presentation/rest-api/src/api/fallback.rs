use std::any::Any;

use poem::http::StatusCode;
use poem::web::Json;
use poem::{IntoResponse, Response};

use crate::api::error::ErrorResponse;

fn classify(status: StatusCode) -> (&'static str, &'static str) {
    match status {
        StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED => ("NotFound", "http.not_found"),
        StatusCode::UNAUTHORIZED => ("Unauthorized", "auth.unauthorized"),
        StatusCode::FORBIDDEN => ("Forbidden", "auth.forbidden"),
        s if s.is_server_error() => ("InternalError", "http.internal_error"),
        _ => ("ValidationError", "http.bad_request"),
    }
}

/// Converts any framework error (unknown route, unparsable body or parameter,
/// failed authentication) into the failure envelope.
pub async fn catch_all_error(err: poem::Error) -> Response {
    let status = err.status();
    let (name, code) = classify(status);
    let message = match status {
        StatusCode::NOT_FOUND => "Route not found".to_string(),
        StatusCode::UNAUTHORIZED => "Authentication required".to_string(),
        s if s.is_server_error() => {
            tracing::error!("Unhandled error: {err}");
            "Internal server error".to_string()
        }
        _ => err.to_string(),
    };

    Json(ErrorResponse::new(name, code, message))
        .with_status(status)
        .into_response()
}

pub fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked");
    Json(ErrorResponse::new(
        "InternalError",
        "http.internal_error",
        "Internal server error",
    ))
    .with_status(StatusCode::INTERNAL_SERVER_ERROR)
    .into_response()
}

use chrono::{DateTime, Utc};
use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::envelope::Envelope;
use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// "healthy" while the process is serving requests
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Crate version
    pub version: String,
    /// Backing store: "memory" or "postgres"
    pub storage: String,
}

/// Liveness endpoint for load balancers and monitoring.
pub struct Api {
    storage: &'static str,
}

impl Api {
    pub fn new(storage: &'static str) -> Self {
        Self { storage }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Public; does not touch the backing store.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<Envelope<HealthCheckResponse>> {
        Json(Envelope::ok(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            storage: self.storage.to_string(),
        }))
    }
}

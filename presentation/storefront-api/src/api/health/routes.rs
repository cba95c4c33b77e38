use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" while the process is serving requests
    pub status: String,
    pub service: String,
    /// Service version from Cargo.toml
    pub version: String,
    /// Server time, RFC 3339
    pub timestamp: String,
}

/// Liveness endpoint for the storefront service.
pub struct HealthApi;

#[OpenApi]
impl HealthApi {
    /// Health check
    ///
    /// Public, never touches storage or the collector.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

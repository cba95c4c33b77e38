use std::env;
use std::time::Duration;

use super::env_or;

/// Where sale summaries are posted and products are fetched from.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub base_url: String,
    pub sale_detail_endpoint: String,
    pub products_endpoint: String,
    pub bearer_token: Option<String>,
    pub timeout: Duration,
    /// `0` keeps the single fire-and-forget attempt.
    pub max_retries: u32,
}

impl CollectorConfig {
    /// Environment variables:
    /// - API_BASE_URL (default: "http://localhost:8082")
    /// - ENDPOINT_DETALLE_VENTA (default: "/api/kafka/detalleVenta")
    /// - ENDPOINT_PRODUCTOS (default: "/productos")
    /// - API_BEARER_TOKEN (optional)
    /// - COLLECTOR_TIMEOUT_SECS (default: 30)
    /// - SUBMISSION_MAX_RETRIES (default: 0)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8082".to_string()),
            sale_detail_endpoint: env::var("ENDPOINT_DETALLE_VENTA")
                .unwrap_or_else(|_| "/api/kafka/detalleVenta".to_string()),
            products_endpoint: env::var("ENDPOINT_PRODUCTOS")
                .unwrap_or_else(|_| "/productos".to_string()),
            bearer_token: env::var("API_BEARER_TOKEN").ok(),
            timeout: Duration::from_secs(env_or("COLLECTOR_TIMEOUT_SECS", 30)),
            max_retries: env_or("SUBMISSION_MAX_RETRIES", 0),
        }
    }
}

use std::env;

use super::env_or;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Where the storefront API listens.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// - SERVICE_IP: interface to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: listener port (default: 8080, also used when the value
    ///   is not a valid port)
    pub fn from_env() -> Self {
        Self {
            ip: env::var("SERVICE_IP").unwrap_or_else(|_| DEFAULT_IP.to_string()),
            port: env_or("SERVICE_PORT", DEFAULT_PORT),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

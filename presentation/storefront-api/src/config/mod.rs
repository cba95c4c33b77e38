pub mod app_config;
pub mod checkout_config;
pub mod collector_config;
pub mod cors_config;
pub mod server_config;
pub mod storage_config;

use std::env;
use std::str::FromStr;

/// Reads `name` from the environment, falling back to `default` when it is
/// unset or does not parse.
pub(crate) fn env_or<T: FromStr>(name: &str, default: T) -> T {
    parse_or(name, env::var(name).ok(), default)
}

pub(crate) fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(variable = name, value = %raw, "Invalid configuration value, using default");
            default
        }
    }
}

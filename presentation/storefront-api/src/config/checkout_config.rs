use std::str::FromStr;
use std::time::Duration;

use super::env_or;

/// How sale ids are handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaleIdAllocation {
    /// Read-increment-write on the shared counter; racy across writers.
    #[default]
    Shared,
    /// Same counter behind a single in-process arbiter.
    Serialized,
}

impl FromStr for SaleIdAllocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shared" => Ok(SaleIdAllocation::Shared),
            "serialized" => Ok(SaleIdAllocation::Serialized),
            other => Err(format!("unknown sale id allocation: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub settle_delay: Duration,
    pub id_allocation: SaleIdAllocation,
}

impl CheckoutConfig {
    /// Environment variables:
    /// - CHECKOUT_SETTLE_MS (default: 1000)
    /// - SALE_ID_ALLOCATION: "shared" or "serialized" (default: "shared")
    pub fn from_env() -> Self {
        Self {
            settle_delay: Duration::from_millis(env_or("CHECKOUT_SETTLE_MS", 1000)),
            id_allocation: env_or("SALE_ID_ALLOCATION", SaleIdAllocation::Shared),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_allocation_modes() {
        assert_eq!("shared".parse::<SaleIdAllocation>(), Ok(SaleIdAllocation::Shared));
        assert_eq!("Serialized".parse::<SaleIdAllocation>(), Ok(SaleIdAllocation::Serialized));
        assert!("atomic".parse::<SaleIdAllocation>().is_err());
    }
}

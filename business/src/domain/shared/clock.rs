use chrono::{DateTime, Utc};

/// Source of the timestamps stamped on checkouts and confirmations.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

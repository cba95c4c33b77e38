use std::time::Duration;

use async_trait::async_trait;

/// Source of the settling pause taken before a checkout commits.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn delay(&self, duration: Duration);
}

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::checkout::services::Scheduler;

/// Wall-clock scheduler backed by the tokio timer.
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn delay(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use business::domain::sale::errors::SubmissionError;
use business::domain::sale::model::SaleSummary;
use business::domain::sale::services::SaleSubmitter;
use business::domain::shared::value_objects::SaleId;

/// Bounded-retry decorator around another submitter.
///
/// Retries network failures and 5xx rejections with exponential backoff.
/// A sale id that was already delivered through this instance is not sent
/// again. Only wired in when retries are configured.
pub struct RetryingSaleSubmitter {
    inner: Arc<dyn SaleSubmitter>,
    max_retries: u32,
    base_backoff: Duration,
    delivered: Mutex<HashSet<SaleId>>,
}

impl RetryingSaleSubmitter {
    pub fn new(inner: Arc<dyn SaleSubmitter>, max_retries: u32, base_backoff: Duration) -> Self {
        Self {
            inner,
            max_retries,
            base_backoff,
            delivered: Mutex::new(HashSet::new()),
        }
    }

    fn already_delivered(&self, sale_id: SaleId) -> bool {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&sale_id)
    }

    fn mark_delivered(&self, sale_id: SaleId) {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(sale_id);
    }

    fn is_retryable(err: &SubmissionError) -> bool {
        match err {
            SubmissionError::Network(_) => true,
            SubmissionError::Rejected(status) => *status >= 500,
        }
    }
}

#[async_trait]
impl SaleSubmitter for RetryingSaleSubmitter {
    async fn send(&self, summary: &SaleSummary) -> Result<(), SubmissionError> {
        if self.already_delivered(summary.sale_id) {
            tracing::debug!(sale_id = %summary.sale_id, "Sale already delivered, skipping");
            return Ok(());
        }

        let mut attempt = 0;
        loop {
            match self.inner.send(summary).await {
                Ok(()) => {
                    self.mark_delivered(summary.sale_id);
                    return Ok(());
                }
                Err(err) if attempt < self.max_retries && Self::is_retryable(&err) => {
                    let backoff = self.base_backoff.saturating_mul(2u32.saturating_pow(attempt));
                    attempt += 1;
                    tracing::warn!(
                        sale_id = %summary.sale_id,
                        attempt,
                        error = %err,
                        "Sale submission failed, retrying in {:?}",
                        backoff
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

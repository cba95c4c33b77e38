use async_trait::async_trait;

use super::errors::SubmissionError;
use super::model::SaleSummary;

/// Remote collector accepting sale summaries for downstream processing.
///
/// One call is one delivery attempt. Callers decide what a failure means;
/// the checkout flow only logs it.
#[async_trait]
pub trait SaleSubmitter: Send + Sync {
    async fn send(&self, summary: &SaleSummary) -> Result<(), SubmissionError>;
}

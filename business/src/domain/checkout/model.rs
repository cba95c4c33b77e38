use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

use crate::domain::sale::model::SaleRecord;
use crate::domain::shared::value_objects::SaleId;

/// Where the coordinator is in the current checkout attempt.
///
/// There is no failed state: local steps either complete or surface a storage
/// error and fall back to `Idle`, and a failed submission never undoes a
/// completed checkout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckoutStatus {
    Idle,
    Processing,
    Completed {
        sale_id: SaleId,
        completed_at: DateTime<Utc>,
    },
}

impl CheckoutStatus {
    pub fn is_processing(&self) -> bool {
        matches!(self, CheckoutStatus::Processing)
    }
}

/// Result of the asynchronous hand-off to the collector.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Delivered,
    Failed(String),
}

/// Handle to the background submission started by a checkout.
///
/// Dropping it detaches the task; awaiting it is only useful for observing
/// the outcome, never for deciding local completion.
#[derive(Debug)]
pub struct SubmissionHandle(JoinHandle<SubmissionOutcome>);

impl SubmissionHandle {
    pub fn new(handle: JoinHandle<SubmissionOutcome>) -> Self {
        Self(handle)
    }

    pub async fn outcome(self) -> SubmissionOutcome {
        match self.0.await {
            Ok(outcome) => outcome,
            Err(err) => SubmissionOutcome::Failed(format!("submission.task_aborted: {err}")),
        }
    }
}

#[derive(Debug)]
pub struct CheckoutOutcome {
    pub record: SaleRecord,
    pub submission: SubmissionHandle,
}

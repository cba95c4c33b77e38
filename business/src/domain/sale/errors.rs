#[derive(Debug, thiserror::Error)]
pub enum SaleError {
    #[error("sale.not_recorded")]
    NotRecorded,
    #[error("sale.submission_failed")]
    SubmissionFailed(#[from] SubmissionError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

/// Why the collector did not accept a sale summary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission.network: {0}")]
    Network(String),
    #[error("submission.rejected: {0}")]
    Rejected(u16),
}

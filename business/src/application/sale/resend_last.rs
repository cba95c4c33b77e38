use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::navigation::{Navigator, Route};
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::SaleSummary;
use crate::domain::sale::repository::SaleRecordRepository;
use crate::domain::sale::services::SaleSubmitter;
use crate::domain::sale::use_cases::resend_last::ResendLastSaleUseCase;

/// Sends the stored sale summary again from the confirmation view.
///
/// A single attempt: success navigates back to the product list, failure is
/// logged and returned without retrying.
pub struct ResendLastSaleUseCaseImpl {
    pub repository: Arc<dyn SaleRecordRepository>,
    pub submitter: Arc<dyn SaleSubmitter>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResendLastSaleUseCase for ResendLastSaleUseCaseImpl {
    async fn execute(&self) -> Result<SaleSummary, SaleError> {
        let Some(record) = self.repository.read() else {
            self.logger.error("Cannot resend sale: no sale recorded");
            return Err(SaleError::NotRecorded);
        };

        let summary = record.summary();
        self.logger
            .info(&format!("Resending sale {} to collector", summary.sale_id));

        if let Err(err) = self.submitter.send(&summary).await {
            self.logger.error(&format!(
                "Failed to resend sale {}: {}",
                summary.sale_id, err
            ));
            return Err(err.into());
        }

        self.logger
            .info(&format!("Sale {} resent to collector", summary.sale_id));
        self.navigator.navigate(Route::Products);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockNav, MockSaleRepo, MockSubmitter, mock_logger, sample_cart,
    };
    use crate::domain::sale::errors::SubmissionError;
    use crate::domain::sale::model::SaleRecord;
    use crate::domain::shared::value_objects::SaleId;

    fn stored_sale() -> MockSaleRepo {
        let mut mock_repo = MockSaleRepo::new();
        mock_repo
            .expect_read()
            .returning(|| Some(SaleRecord::checkout(SaleId::new(9), &sample_cart())));
        mock_repo
    }

    #[tokio::test]
    async fn should_send_summary_and_navigate_to_products() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_send()
            .withf(|summary| summary.sale_id == SaleId::new(9) && summary.total_amount == 2500.0)
            .times(1)
            .returning(|_| Ok(()));
        let mut navigator = MockNav::new();
        navigator
            .expect_navigate()
            .withf(|route| *route == Route::Products)
            .times(1)
            .returning(|_| ());

        let use_case = ResendLastSaleUseCaseImpl {
            repository: Arc::new(stored_sale()),
            submitter: Arc::new(submitter),
            navigator: Arc::new(navigator),
            logger: mock_logger(),
        };

        let summary = use_case.execute().await.unwrap();

        assert_eq!(summary.sale_id, SaleId::new(9));
    }

    #[tokio::test]
    async fn should_fail_without_sending_when_no_sale_recorded() {
        let mut mock_repo = MockSaleRepo::new();
        mock_repo.expect_read().returning(|| None);
        let mut submitter = MockSubmitter::new();
        submitter.expect_send().never();

        let use_case = ResendLastSaleUseCaseImpl {
            repository: Arc::new(mock_repo),
            submitter: Arc::new(submitter),
            navigator: Arc::new(MockNav::new()),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            SaleError::NotRecorded
        ));
    }

    #[tokio::test]
    async fn should_surface_failure_once_without_navigating() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_send()
            .times(1)
            .returning(|_| Err(SubmissionError::Network("connection refused".to_string())));
        let mut navigator = MockNav::new();
        navigator.expect_navigate().never();

        let use_case = ResendLastSaleUseCaseImpl {
            repository: Arc::new(stored_sale()),
            submitter: Arc::new(submitter),
            navigator: Arc::new(navigator),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            SaleError::SubmissionFailed(SubmissionError::Network(_))
        ));
    }
}

use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::checkout::gate::CheckoutGate;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub gate: Arc<CheckoutGate>,
    pub logger: Arc<dyn Logger>,
}

impl ClearCartUseCase for ClearCartUseCaseImpl {
    fn execute(&self) -> Result<(), CartError> {
        self.logger.info("Clearing cart");
        self.gate.mutate_cart(|| {
            self.repository.clear()?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockCartRepo, mock_logger};
    use crate::domain::checkout::model::CheckoutStatus;
    use crate::domain::errors::RepositoryError;

    #[test]
    fn should_delete_cart_slot() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_clear().times(1).returning(|| Ok(()));

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            gate: Arc::new(CheckoutGate::new()),
            logger: mock_logger(),
        };

        assert!(use_case.execute().is_ok());
    }

    #[test]
    fn should_surface_storage_failure() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_clear()
            .returning(|| Err(RepositoryError::Write));

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            gate: Arc::new(CheckoutGate::new()),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().unwrap_err(),
            CartError::Repository(RepositoryError::Write)
        ));
    }

    #[test]
    fn should_keep_cart_while_checkout_is_processing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_clear().never();
        let gate = Arc::new(CheckoutGate::new());
        *gate.lock() = CheckoutStatus::Processing;

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            gate,
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().unwrap_err(),
            CartError::CheckoutInProgress
        ));
    }
}

use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use crate::domain::checkout::gate::CheckoutGate;
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub gate: Arc<CheckoutGate>,
    pub logger: Arc<dyn Logger>,
}

impl AddToCartUseCase for AddToCartUseCaseImpl {
    fn execute(&self, params: AddToCartParams) -> Result<Cart, CartError> {
        let product_id = params.product.id;
        self.logger.info(&format!(
            "Adding {} unit(s) of product {} to cart",
            params.quantity, product_id
        ));

        self.gate.mutate_cart(|| {
            let mut cart = self.repository.load_for_update()?;
            if !cart.add(params.product, params.quantity) {
                self.logger.debug("Nothing to add, cart left untouched");
                return Ok(cart);
            }
            self.repository.save(&cart)?;

            Ok(cart)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockCartRepo, mock_logger, product, sample_cart};
    use crate::domain::checkout::model::CheckoutStatus;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ProductId;

    #[test]
    fn should_append_line_and_persist() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load_for_update().returning(|| Ok(sample_cart()));
        mock_repo
            .expect_save()
            .withf(|cart| cart.items().len() == 3)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            gate: Arc::new(CheckoutGate::new()),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddToCartParams {
                product: product(3, "C", 250.0),
                quantity: 1,
            })
            .unwrap();

        assert_eq!(cart.items()[2].id(), ProductId::new(3));
    }

    #[test]
    fn should_increase_existing_line_instead_of_duplicating() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load_for_update().returning(|| Ok(sample_cart()));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            gate: Arc::new(CheckoutGate::new()),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddToCartParams {
                product: product(1, "A", 1000.0),
                quantity: 3,
            })
            .unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 5);
    }

    #[test]
    fn should_not_persist_when_adding_zero_units() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load_for_update().returning(|| Ok(Cart::new()));
        mock_repo.expect_save().never();

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            gate: Arc::new(CheckoutGate::new()),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddToCartParams {
                product: product(1, "A", 1000.0),
                quantity: 0,
            })
            .unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn should_surface_storage_failure() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load_for_update().returning(|| Ok(Cart::new()));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Write));

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            gate: Arc::new(CheckoutGate::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(AddToCartParams {
            product: product(1, "A", 1000.0),
            quantity: 1,
        });

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::Write)
        ));
    }

    #[test]
    fn should_not_overwrite_cart_when_it_cannot_be_read() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load_for_update()
            .returning(|| Err(RepositoryError::Read));
        mock_repo.expect_save().never();

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            gate: Arc::new(CheckoutGate::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(AddToCartParams {
            product: product(3, "C", 250.0),
            quantity: 1,
        });

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::Read)
        ));
    }

    #[test]
    fn should_refuse_to_add_while_checkout_is_processing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load_for_update().never();
        mock_repo.expect_save().never();
        let gate = Arc::new(CheckoutGate::new());
        *gate.lock() = CheckoutStatus::Processing;

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            gate,
            logger: mock_logger(),
        };

        let result = use_case.execute(AddToCartParams {
            product: product(3, "C", 250.0),
            quantity: 1,
        });

        assert!(matches!(result.unwrap_err(), CartError::CheckoutInProgress));
    }
}

use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::checkout::gate::CheckoutGate;
use crate::domain::logger::Logger;

pub struct RemoveFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub gate: Arc<CheckoutGate>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    fn execute(&self, params: RemoveFromCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Removing product {} from cart", params.product_id));

        self.gate.mutate_cart(|| {
            let mut cart = self.repository.load_for_update()?;
            if cart.remove(params.product_id) {
                self.repository.save(&cart)?;
            } else {
                self.logger.debug(&format!(
                    "Product {} not in cart, nothing removed",
                    params.product_id
                ));
            }

            Ok(cart)
        })
    }
}

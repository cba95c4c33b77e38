use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::decrement::{
    DecrementCartItemParams, DecrementCartItemUseCase,
};
use crate::domain::checkout::gate::CheckoutGate;
use crate::domain::logger::Logger;

pub struct DecrementCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub gate: Arc<CheckoutGate>,
    pub logger: Arc<dyn Logger>,
}

impl DecrementCartItemUseCase for DecrementCartItemUseCaseImpl {
    fn execute(&self, params: DecrementCartItemParams) -> Result<Cart, CartError> {
        self.gate.mutate_cart(|| {
            let mut cart = self.repository.load_for_update()?;
            if cart.decrement(params.product_id) {
                self.repository.save(&cart)?;
                self.logger
                    .debug(&format!("Decremented product {}", params.product_id));
            }
            Ok(cart)
        })
    }
}

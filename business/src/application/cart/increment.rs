use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::increment::{
    IncrementCartItemParams, IncrementCartItemUseCase,
};
use crate::domain::checkout::gate::CheckoutGate;
use crate::domain::logger::Logger;

pub struct IncrementCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub gate: Arc<CheckoutGate>,
    pub logger: Arc<dyn Logger>,
}

impl IncrementCartItemUseCase for IncrementCartItemUseCaseImpl {
    fn execute(&self, params: IncrementCartItemParams) -> Result<Cart, CartError> {
        self.gate.mutate_cart(|| {
            let mut cart = self.repository.load_for_update()?;
            if cart.increment(params.product_id) {
                self.repository.save(&cart)?;
                self.logger
                    .debug(&format!("Incremented product {}", params.product_id));
            }
            Ok(cart)
        })
    }
}

use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::set_quantity::{
    SetCartItemQuantityParams, SetCartItemQuantityUseCase,
};
use crate::domain::checkout::gate::CheckoutGate;
use crate::domain::logger::Logger;

pub struct SetCartItemQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub gate: Arc<CheckoutGate>,
    pub logger: Arc<dyn Logger>,
}

impl SetCartItemQuantityUseCase for SetCartItemQuantityUseCaseImpl {
    fn execute(&self, params: SetCartItemQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of product {} to {}",
            params.product_id, params.quantity
        ));

        self.gate.mutate_cart(|| {
            let mut cart = self.repository.load_for_update()?;
            if cart.set_quantity(params.product_id, params.quantity) {
                self.repository.save(&cart)?;
            }

            Ok(cart)
        })
    }
}

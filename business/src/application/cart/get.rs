use std::sync::Arc;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::GetCartUseCase;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetCartUseCase for GetCartUseCaseImpl {
    fn execute(&self) -> Cart {
        let cart = self.repository.load();
        self.logger.debug(&format!(
            "Loaded cart with {} lines ({} units)",
            cart.items().len(),
            cart.item_count()
        ));
        cart
    }
}

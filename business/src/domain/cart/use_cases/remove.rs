use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct RemoveFromCartParams {
    pub product_id: ProductId,
}

pub trait RemoveFromCartUseCase: Send + Sync {
    fn execute(&self, params: RemoveFromCartParams) -> Result<Cart, CartError>;
}

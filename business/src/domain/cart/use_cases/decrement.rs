use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct DecrementCartItemParams {
    pub product_id: ProductId,
}

pub trait DecrementCartItemUseCase: Send + Sync {
    fn execute(&self, params: DecrementCartItemParams) -> Result<Cart, CartError>;
}

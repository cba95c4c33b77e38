use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct IncrementCartItemParams {
    pub product_id: ProductId,
}

pub trait IncrementCartItemUseCase: Send + Sync {
    fn execute(&self, params: IncrementCartItemParams) -> Result<Cart, CartError>;
}

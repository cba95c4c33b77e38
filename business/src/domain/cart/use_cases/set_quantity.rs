use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct SetCartItemQuantityParams {
    pub product_id: ProductId,
    /// Zero or negative removes the line.
    pub quantity: i64,
}

pub trait SetCartItemQuantityUseCase: Send + Sync {
    fn execute(&self, params: SetCartItemQuantityParams) -> Result<Cart, CartError>;
}

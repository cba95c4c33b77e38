use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::product::model::Product;

pub struct AddToCartParams {
    pub product: Product,
    pub quantity: u32,
}

pub trait AddToCartUseCase: Send + Sync {
    fn execute(&self, params: AddToCartParams) -> Result<Cart, CartError>;
}

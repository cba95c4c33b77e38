use crate::domain::cart::model::Cart;

pub trait GetCartUseCase: Send + Sync {
    fn execute(&self) -> Cart;
}

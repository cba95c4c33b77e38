use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{CheckoutOutcome, CheckoutStatus};

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    /// Converts the stored cart into a sale record, clears the cart and starts
    /// the submission. Not cancellable once started.
    async fn execute(&self) -> Result<CheckoutOutcome, CheckoutError>;
    fn status(&self) -> CheckoutStatus;
}

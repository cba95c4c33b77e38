use async_trait::async_trait;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::SaleSummary;

#[async_trait]
pub trait ResendLastSaleUseCase: Send + Sync {
    async fn execute(&self) -> Result<SaleSummary, SaleError>;
}

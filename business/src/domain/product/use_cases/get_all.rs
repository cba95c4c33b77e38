use async_trait::async_trait;

use crate::domain::product::model::Product;

/// Lists the catalog. Falls back to the built-in sample catalog when the
/// catalog is unreachable, so this never fails.
#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Product>;
}

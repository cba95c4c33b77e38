use async_trait::async_trait;

use super::errors::ProductError;
use super::model::Product;

/// Read-only product source owned by the catalog collaborator.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, ProductError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.catalog_unavailable")]
    CatalogUnavailable,
}

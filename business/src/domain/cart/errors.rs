#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.checkout_in_progress")]
    CheckoutInProgress,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

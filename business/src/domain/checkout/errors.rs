#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.already_in_progress")]
    AlreadyInProgress,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

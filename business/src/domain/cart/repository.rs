use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Durable slot holding the live cart. Writes are immediate, there is no
/// buffering, and every reader of the same storage observes them.
pub trait CartRepository: Send + Sync {
    /// Missing or corrupt data loads as an empty cart, and so does a failed
    /// read. For display only.
    fn load(&self) -> Cart;
    /// Load ahead of a write. Missing or corrupt data is an empty cart, a
    /// failed read is an error so the stored cart is never overwritten blind.
    fn load_for_update(&self) -> Result<Cart, RepositoryError>;
    fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    /// Deletes the slot entirely.
    fn clear(&self) -> Result<(), RepositoryError>;
}

use super::errors::StorageError;

/// Durable, synchronous, string-keyed storage shared by every reader.
///
/// Last write wins. There is no compare-and-swap and no multi-key
/// transaction, so callers must not rely on two writes landing together.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

use std::sync::{Arc, Mutex, PoisonError};

use business::domain::errors::RepositoryError;
use business::domain::sale::repository::SaleIdAllocator;
use business::domain::shared::value_objects::SaleId;

use crate::keys::StorageKey;
use crate::kv::store::KeyValueStore;

/// Read-increment-write counter kept in the `lastSaleId` slot.
///
/// Not atomic: two writers sharing the store can read the same last id and
/// both allocate the next one. Wrap it in [`SerializedSaleIdAllocator`] when
/// every writer lives in one process.
pub struct SharedCounterSaleIdAllocator {
    store: Arc<dyn KeyValueStore>,
}

impl SharedCounterSaleIdAllocator {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn last_allocated(&self) -> Result<SaleId, RepositoryError> {
        let raw = self
            .store
            .get(StorageKey::LastSaleId.as_ref())
            .map_err(|err| err.into_read())?;

        let last = raw
            .as_deref()
            .map(str::trim)
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(|| {
                if let Some(value) = raw.as_deref() {
                    tracing::warn!(value, "Invalid last sale id, counting from 0");
                }
                0
            });

        Ok(SaleId::new(last))
    }
}

impl SaleIdAllocator for SharedCounterSaleIdAllocator {
    fn allocate(&self) -> Result<SaleId, RepositoryError> {
        let sale_id = self.last_allocated()?.next();
        self.store
            .set(StorageKey::LastSaleId.as_ref(), &sale_id.to_string())
            .map_err(|err| err.into_write())?;
        tracing::debug!(%sale_id, "Allocated sale id");
        Ok(sale_id)
    }
}

/// Single-writer arbiter: allocations through the same instance never
/// interleave.
pub struct SerializedSaleIdAllocator {
    inner: Arc<dyn SaleIdAllocator>,
    gate: Mutex<()>,
}

impl SerializedSaleIdAllocator {
    pub fn new(inner: Arc<dyn SaleIdAllocator>) -> Self {
        Self {
            inner,
            gate: Mutex::new(()),
        }
    }
}

impl SaleIdAllocator for SerializedSaleIdAllocator {
    fn allocate(&self) -> Result<SaleId, RepositoryError> {
        let _turn = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        self.inner.allocate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::memory::InMemoryKeyValueStore;

    #[test]
    fn should_start_at_one_when_counter_absent() {
        let store = InMemoryKeyValueStore::new();
        let allocator = SharedCounterSaleIdAllocator::new(Arc::new(store.clone()));

        assert_eq!(allocator.allocate().unwrap(), SaleId::new(1));
        assert_eq!(store.get("lastSaleId").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn should_continue_from_stored_counter() {
        let store = InMemoryKeyValueStore::new();
        store.set("lastSaleId", "41").unwrap();
        let allocator = SharedCounterSaleIdAllocator::new(Arc::new(store));

        assert_eq!(allocator.allocate().unwrap(), SaleId::new(42));
        assert_eq!(allocator.allocate().unwrap(), SaleId::new(43));
    }

    #[test]
    fn should_treat_invalid_counter_as_zero() {
        for invalid in ["NaN", "-3", "", "1.5"] {
            let store = InMemoryKeyValueStore::new();
            store.set("lastSaleId", invalid).unwrap();
            let allocator = SharedCounterSaleIdAllocator::new(Arc::new(store));

            assert_eq!(allocator.allocate().unwrap(), SaleId::new(1), "{invalid}");
        }
    }

    #[test]
    fn should_collide_when_two_writers_read_before_writing() {
        let store = InMemoryKeyValueStore::new();
        let first_tab = SharedCounterSaleIdAllocator::new(Arc::new(store.clone()));
        let second_tab = SharedCounterSaleIdAllocator::new(Arc::new(store.clone()));

        let first_read = first_tab.last_allocated().unwrap();
        let second_read = second_tab.last_allocated().unwrap();

        assert_eq!(first_read.next(), second_read.next());
    }
}

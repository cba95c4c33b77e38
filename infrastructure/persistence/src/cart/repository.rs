use std::sync::Arc;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::{entities_from_cart, parse_items};
use crate::keys::StorageKey;
use crate::kv::store::KeyValueStore;

pub struct CartRepositoryKv {
    store: Arc<dyn KeyValueStore>,
}

impl CartRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Missing or unparseable data is an empty cart.
    fn decode(raw: Option<String>) -> Cart {
        let Some(raw) = raw else {
            return Cart::new();
        };

        match parse_items(&raw) {
            Some(items) => Cart::from_items(items),
            None => {
                tracing::warn!("Cart slot holds invalid data, starting with an empty cart");
                Cart::new()
            }
        }
    }
}

impl CartRepository for CartRepositoryKv {
    fn load(&self) -> Cart {
        match self.store.get(StorageKey::Cart.as_ref()) {
            Ok(raw) => Self::decode(raw),
            Err(err) => {
                tracing::warn!(error = %err, "Cart slot unreadable, showing an empty cart");
                Cart::new()
            }
        }
    }

    fn load_for_update(&self) -> Result<Cart, RepositoryError> {
        let raw = self
            .store
            .get(StorageKey::Cart.as_ref())
            .map_err(|err| err.into_read())?;
        Ok(Self::decode(raw))
    }

    fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let body = serde_json::to_string(&entities_from_cart(cart))
            .map_err(|_| RepositoryError::serialization())?;
        self.store
            .set(StorageKey::Cart.as_ref(), &body)
            .map_err(|err| err.into_write())
    }

    fn clear(&self) -> Result<(), RepositoryError> {
        self.store
            .remove(StorageKey::Cart.as_ref())
            .map_err(|err| err.into_write())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::errors::StorageError;
    use crate::kv::memory::InMemoryKeyValueStore;
    use business::domain::product::model::Product;
    use business::domain::shared::value_objects::ProductId;

    fn product(id: i64, price: f64) -> Product {
        Product::from_repository(ProductId::new(id), format!("P{id}"), price, None, None, None)
    }

    #[test]
    fn should_round_trip_through_a_fresh_instance() {
        let store = InMemoryKeyValueStore::new();
        let mut cart = Cart::new();
        cart.add(product(1, 1000.0), 3);
        CartRepositoryKv::new(Arc::new(store.clone())).save(&cart).unwrap();

        let loaded = CartRepositoryKv::new(Arc::new(store)).load();

        assert_eq!(loaded.get(ProductId::new(1)).map(|line| line.quantity), Some(3));
    }

    #[test]
    fn should_load_empty_cart_from_corrupted_slot() {
        let store = InMemoryKeyValueStore::new();
        store.set("cart", "{not json").unwrap();

        let cart = CartRepositoryKv::new(Arc::new(store)).load();

        assert!(cart.is_empty());
    }

    #[test]
    fn should_merge_duplicate_lines_on_load() {
        let store = InMemoryKeyValueStore::new();
        store
            .set(
                "cart",
                r#"[{"id":1,"name":"A","price":10,"quantity":1},{"id":2,"name":"B","price":5,"quantity":1},{"id":1,"name":"A","price":10,"quantity":2}]"#,
            )
            .unwrap();

        let cart = CartRepositoryKv::new(Arc::new(store)).load();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total(), 35.0);
    }

    #[test]
    fn should_treat_corrupted_slot_as_empty_when_updating() {
        let store = InMemoryKeyValueStore::new();
        store.set("cart", "{not json").unwrap();

        let cart = CartRepositoryKv::new(Arc::new(store))
            .load_for_update()
            .unwrap();

        assert!(cart.is_empty());
    }

    struct UnreadableStore;

    impl KeyValueStore for UnreadableStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io(std::io::Error::other("EIO")))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Ok(())
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn should_fail_update_load_when_store_is_unreadable() {
        let repository = CartRepositoryKv::new(Arc::new(UnreadableStore));

        assert!(repository.load().is_empty());
        assert!(matches!(
            repository.load_for_update(),
            Err(RepositoryError::Read)
        ));
    }

    #[test]
    fn should_delete_slot_on_clear() {
        let store = InMemoryKeyValueStore::new();
        store.set("cart", "[]").unwrap();

        CartRepositoryKv::new(Arc::new(store.clone())).clear().unwrap();

        assert_eq!(store.get("cart").unwrap(), None);
    }
}

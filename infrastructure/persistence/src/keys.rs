use strum_macros::{AsRefStr, Display};

/// Slots the storefront keeps in the key-value store.
///
/// The key strings are shared with the browser storefront, so they must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum StorageKey {
    #[strum(serialize = "cart")]
    Cart,
    #[strum(serialize = "lastSaleId")]
    LastSaleId,
    #[strum(serialize = "ultimaVenta")]
    LastSale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_storefront_key_names() {
        assert_eq!(StorageKey::Cart.as_ref(), "cart");
        assert_eq!(StorageKey::LastSaleId.as_ref(), "lastSaleId");
        assert_eq!(StorageKey::LastSale.to_string(), "ultimaVenta");
    }
}

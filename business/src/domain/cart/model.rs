use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// A product together with how many units the shopper wants.
///
/// Quantity is always at least 1: operations that would take a line to zero
/// remove the line instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// The shopper's live selection, in insertion order, one line per product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from persisted lines.
    ///
    /// Lines at quantity 0 are dropped and repeated product ids are merged into
    /// the first occurrence, so data written by another writer cannot break the
    /// one-line-per-product invariant.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.position(item.id()) {
                Some(index) => {
                    let line = &mut cart.items[index];
                    line.quantity = line.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == product_id)
    }

    /// Adds `quantity` units of `product`, merging into an existing line.
    /// Adding zero units is a no-op. Returns whether the cart changed.
    pub fn add(&mut self, product: Product, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        match self.position(product.id) {
            Some(index) => {
                let line = &mut self.items[index];
                line.quantity = line.quantity.saturating_add(quantity);
            }
            None => self.items.push(CartItem { product, quantity }),
        }
        true
    }

    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != product_id);
        self.items.len() != before
    }

    /// Sets the quantity of an existing line; `quantity <= 0` removes it.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        let Some(index) = self.position(product_id) else {
            return false;
        };
        if quantity <= 0 {
            self.items.remove(index);
            return true;
        }
        self.items[index].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        true
    }

    pub fn increment(&mut self, product_id: ProductId) -> bool {
        let Some(index) = self.position(product_id) else {
            return false;
        };
        let line = &mut self.items[index];
        line.quantity = line.quantity.saturating_add(1);
        true
    }

    /// Takes one unit off a line. A line at quantity 1 is removed.
    pub fn decrement(&mut self, product_id: ProductId) -> bool {
        let Some(index) = self.position(product_id) else {
            return false;
        };
        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }
        true
    }

    /// Σ price × quantity over the current lines, recomputed on every call.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == product_id)
    }
}

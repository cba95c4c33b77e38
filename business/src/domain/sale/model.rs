use chrono::{DateTime, Utc};

use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::shared::value_objects::SaleId;

/// Immutable snapshot of a completed checkout.
///
/// `total_amount` is frozen when the record is built; later price changes in
/// the catalog never alter it.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    sale_id: SaleId,
    items: Vec<CartItem>,
    total_amount: f64,
}

impl SaleRecord {
    /// Freezes `cart` into a record for `sale_id`.
    pub fn checkout(sale_id: SaleId, cart: &Cart) -> Self {
        Self {
            sale_id,
            items: cart.items().to_vec(),
            total_amount: cart.total(),
        }
    }

    /// Constructor for data already persisted in storage (no validation).
    pub fn from_repository(sale_id: SaleId, items: Vec<CartItem>, total_amount: f64) -> Self {
        Self {
            sale_id,
            items,
            total_amount,
        }
    }

    pub fn sale_id(&self) -> SaleId {
        self.sale_id
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// The part of the record sent to the collector. Line items stay local.
    pub fn summary(&self) -> SaleSummary {
        SaleSummary {
            sale_id: self.sale_id,
            total_amount: self.total_amount,
        }
    }
}

/// What the collector receives for a sale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleSummary {
    pub sale_id: SaleId,
    pub total_amount: f64,
}

/// Read model behind the confirmation view.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleConfirmation {
    /// Absent when no sale has been recorded yet.
    pub sale_id: Option<SaleId>,
    pub items: Vec<CartItem>,
    pub total_amount: f64,
    pub item_count: u64,
    pub viewed_at: DateTime<Utc>,
}

impl SaleConfirmation {
    pub fn empty(viewed_at: DateTime<Utc>) -> Self {
        Self {
            sale_id: None,
            items: Vec::new(),
            total_amount: 0.0,
            item_count: 0,
            viewed_at,
        }
    }

    pub fn from_record(record: SaleRecord, viewed_at: DateTime<Utc>) -> Self {
        let item_count = record.item_count();
        Self {
            sale_id: Some(record.sale_id),
            items: record.items,
            total_amount: record.total_amount,
            item_count,
            viewed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::ProductId;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(
            Product::from_repository(ProductId::new(1), "A".to_string(), 1000.0, None, None, None),
            2,
        );
        cart.add(
            Product::from_repository(ProductId::new(2), "B".to_string(), 500.0, None, None, None),
            1,
        );
        cart
    }

    #[test]
    fn should_freeze_total_at_checkout() {
        let mut cart = cart();
        let record = SaleRecord::checkout(SaleId::new(1), &cart);

        cart.increment(ProductId::new(2));

        assert_eq!(record.total_amount(), 2500.0);
        assert_eq!(record.items().len(), 2);
        assert_eq!(record.item_count(), 3);
    }

    #[test]
    fn should_summarise_without_line_items() {
        let record = SaleRecord::checkout(SaleId::new(7), &cart());

        let summary = record.summary();

        assert_eq!(summary.sale_id, SaleId::new(7));
        assert_eq!(summary.total_amount, 2500.0);
    }

    #[test]
    fn should_build_empty_confirmation() {
        let confirmation = SaleConfirmation::empty(Utc::now());

        assert!(confirmation.sale_id.is_none());
        assert!(confirmation.items.is_empty());
        assert_eq!(confirmation.total_amount, 0.0);
        assert_eq!(confirmation.item_count, 0);
    }

    #[test]
    fn should_build_confirmation_from_record() {
        let record = SaleRecord::checkout(SaleId::new(3), &cart());

        let confirmation = SaleConfirmation::from_record(record, Utc::now());

        assert_eq!(confirmation.sale_id, Some(SaleId::new(3)));
        assert_eq!(confirmation.item_count, 3);
        assert_eq!(confirmation.total_amount, 2500.0);
    }
}

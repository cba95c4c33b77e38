use serde::Serialize;
use serde_json::Value;

use business::domain::cart::model::CartItem;
use business::domain::sale::model::SaleRecord;
use business::domain::shared::value_objects::SaleId;

use crate::cart::entity::{CartItemEntity, items_from_values};

/// Shape of the last-sale slot: `{idCarrito, items, totalVenta}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecordEntity {
    pub id_carrito: u64,
    pub items: Vec<CartItemEntity>,
    pub total_venta: f64,
}

impl SaleRecordEntity {
    pub fn from_domain(record: &SaleRecord) -> Self {
        Self {
            id_carrito: record.sale_id().value(),
            items: record.items().iter().map(CartItemEntity::from_domain).collect(),
            total_venta: record.total_amount(),
        }
    }

    /// Reads a stored record, tolerating partial data.
    ///
    /// The sale id is required. Anything other than a list under `items`
    /// reads as no items, and a missing or non-numeric `totalVenta` is
    /// recomputed from the items.
    pub fn parse(raw: &str) -> Option<SaleRecord> {
        let Value::Object(mut fields) = serde_json::from_str::<Value>(raw).ok()? else {
            return None;
        };

        let sale_id = fields.get("idCarrito").and_then(read_sale_id)?;

        let items: Vec<CartItem> = match fields.remove("items") {
            Some(Value::Array(values)) => items_from_values(values),
            _ => Vec::new(),
        };

        let total_amount = fields
            .get("totalVenta")
            .and_then(Value::as_f64)
            .unwrap_or_else(|| items.iter().map(CartItem::line_total).sum());

        Some(SaleRecord::from_repository(sale_id, items, total_amount))
    }
}

fn read_sale_id(value: &Value) -> Option<SaleId> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
    .map(SaleId::new)
}

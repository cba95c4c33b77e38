use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

/// One persisted cart line.
///
/// Written with English field names; the Spanish names used by the browser
/// storefront are accepted on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemEntity {
    pub id: i64,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "precio")]
    pub price: f64,
    #[serde(alias = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    #[serde(alias = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(alias = "cantidad")]
    pub quantity: i64,
}

impl CartItemEntity {
    pub fn from_domain(item: &CartItem) -> Self {
        Self {
            id: item.product.id.value(),
            name: item.product.name.clone(),
            price: item.product.price,
            image_ref: item.product.image_ref.clone(),
            description: item.product.description.clone(),
            category: item.product.category.clone(),
            quantity: i64::from(item.quantity),
        }
    }

    /// `None` for lines that were persisted with a non-positive quantity.
    pub fn into_domain(self) -> Option<CartItem> {
        let quantity = u32::try_from(self.quantity).ok().filter(|q| *q > 0)?;
        Some(CartItem {
            product: Product::from_repository(
                ProductId::new(self.id),
                self.name,
                self.price,
                self.image_ref,
                self.description,
                self.category,
            ),
            quantity,
        })
    }
}

/// Parses a persisted line list, skipping lines that do not parse.
///
/// Returns `None` when `raw` is not a JSON array at all.
pub fn parse_items(raw: &str) -> Option<Vec<CartItem>> {
    match serde_json::from_str::<Value>(raw).ok()? {
        Value::Array(values) => Some(items_from_values(values)),
        _ => None,
    }
}

pub fn items_from_values(values: Vec<Value>) -> Vec<CartItem> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<CartItemEntity>(value) {
            Ok(entity) => entity.into_domain(),
            Err(err) => {
                tracing::warn!(error = %err, "Skipping unreadable cart line");
                None
            }
        })
        .collect()
}

pub fn entities_from_cart(cart: &Cart) -> Vec<CartItemEntity> {
    cart.items().iter().map(CartItemEntity::from_domain).collect()
}

use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::shared::value_objects::ProductId;

/// Product snapshot the client puts in the cart.
#[derive(Debug, Clone, Object)]
pub struct ProductPayload {
    pub id: i64,
    pub name: String,
    /// Unit price, must be zero or positive
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image_ref: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
}

impl ProductPayload {
    pub fn into_domain(self) -> Result<Product, ProductError> {
        Product::new(NewProductProps {
            id: ProductId::new(self.id),
            name: self.name,
            price: self.price,
            image_ref: self.image_ref,
            description: self.description,
            category: self.category,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    pub product: ProductPayload,
    /// Units to add (default: 1)
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Object)]
pub struct SetQuantityRequest {
    /// New quantity; zero or negative removes the line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image_ref: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    pub quantity: u32,
    /// price × quantity
    pub line_total: f64,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.id().value(),
            name: item.product.name.clone(),
            price: item.product.price,
            image_ref: item.product.image_ref.clone(),
            description: item.product.description.clone(),
            category: item.product.category.clone(),
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub total: f64,
    /// Sum of quantities across lines
    pub item_count: u64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemResponse::from).collect(),
            total: cart.total(),
            item_count: cart.item_count(),
        }
    }
}

use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image_ref: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: product.price,
            image_ref: product.image_ref,
            description: product.description,
            category: product.category,
        }
    }
}

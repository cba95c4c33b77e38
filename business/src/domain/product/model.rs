use super::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

/// A catalog product. Owned by the catalog; the cart only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image_ref: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image_ref: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if !props.price.is_finite() || props.price < 0.0 {
            return Err(ProductError::InvalidPrice);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            price: props.price,
            image_ref: props.image_ref,
            description: props.description,
            category: props.category,
        })
    }

    /// Constructor for data already persisted in storage (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: f64,
        image_ref: Option<String>,
        description: Option<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            image_ref,
            description,
            category,
        }
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::catalog::ProductCatalog;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::shared::value_objects::ProductId;

pub struct GetAllProductsUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Vec<Product> {
        self.logger.info("Fetching product catalog");
        match self.catalog.get_all().await {
            Ok(products) => {
                self.logger
                    .info(&format!("Found {} products", products.len()));
                products
            }
            Err(err) => {
                self.logger.error(&format!(
                    "Catalog unavailable ({}), serving sample products",
                    err
                ));
                sample_products()
            }
        }
    }
}

/// Products shown while the catalog cannot be reached.
pub fn sample_products() -> Vec<Product> {
    [
        (1, "Producto de Ejemplo 1", 29990.0, "Electrónicos", "Un producto increíble de alta calidad"),
        (2, "Producto de Ejemplo 2", 19990.0, "Ropa", "Estilo y comodidad en una sola prenda"),
        (3, "Producto de Ejemplo 3", 39990.0, "Hogar", "Transforma tu hogar con este producto"),
        (4, "Producto de Ejemplo 4", 15990.0, "Tecnología", "La última tecnología a tu alcance"),
    ]
    .into_iter()
    .map(|(id, name, price, category, description)| {
        Product::from_repository(
            ProductId::new(id),
            name.to_string(),
            price,
            None,
            Some(description.to_string()),
            Some(category.to_string()),
        )
    })
    .collect()
}

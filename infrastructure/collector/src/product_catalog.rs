use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use business::domain::product::catalog::ProductCatalog;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

use crate::client::CollectorClient;

/// Product as served by the catalog backend, Spanish or English field names.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductDto {
    id: i64,
    #[serde(alias = "nombre")]
    name: String,
    #[serde(alias = "precio")]
    price: f64,
    #[serde(alias = "imagen", default)]
    image_ref: Option<String>,
    #[serde(alias = "descripcion", default)]
    description: Option<String>,
    #[serde(alias = "categoria", default)]
    category: Option<String>,
}

impl ProductDto {
    fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.price,
            self.image_ref,
            self.description,
            self.category,
        )
    }
}

pub struct ProductCatalogHttp {
    client: CollectorClient,
    url: String,
}

impl ProductCatalogHttp {
    pub fn new(client: CollectorClient, endpoint: &str) -> Self {
        let url = client.endpoint_url(endpoint);
        Self { client, url }
    }

    /// Anything other than a JSON array is an empty catalog; entries that do
    /// not describe a product are skipped.
    fn parse_products(data: Value) -> Vec<Product> {
        let Value::Array(entries) = data else {
            tracing::warn!("Catalog response is not a list, treating it as empty");
            return Vec::new();
        };

        entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<ProductDto>(entry).ok())
            .filter(|dto| dto.price.is_finite() && dto.price >= 0.0)
            .map(ProductDto::into_domain)
            .collect()
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogHttp {
    async fn get_all(&self) -> Result<Vec<Product>, ProductError> {
        let response = self
            .client
            .request(Method::GET, &self.url)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(url = %self.url, error = %err, "Catalog request failed");
                ProductError::CatalogUnavailable
            })?;

        if !response.status().is_success() {
            tracing::error!(url = %self.url, status = response.status().as_u16(), "Catalog returned an error status");
            return Err(ProductError::CatalogUnavailable);
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| ProductError::CatalogUnavailable)?;

        Ok(Self::parse_products(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve;
    use std::time::Duration;

    #[test]
    fn should_parse_spanish_and_english_products() {
        let data = serde_json::json!([
            {"id": 1, "nombre": "Silla", "precio": 29990, "categoria": "Hogar"},
            {"id": 2, "name": "Mouse", "price": 9990.5, "imageRef": "mouse.png"},
            {"id": 3, "nombre": "Sin precio"},
            {"id": 4, "nombre": "Negativo", "precio": -1}
        ]);

        let products = ProductCatalogHttp::parse_products(data);

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Silla");
        assert_eq!(products[0].category.as_deref(), Some("Hogar"));
        assert_eq!(products[1].image_ref.as_deref(), Some("mouse.png"));
    }

    #[test]
    fn should_treat_non_list_response_as_empty() {
        let products = ProductCatalogHttp::parse_products(serde_json::json!({"content": []}));

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn should_fetch_products_from_endpoint() {
        let (base_url, server) =
            serve(vec![(200, r#"[{"id":7,"nombre":"Teclado","precio":15990}]"#)]).await;
        let client = CollectorClient::new(&base_url, None, Duration::from_secs(5)).unwrap();
        let catalog = ProductCatalogHttp::new(client, "/productos");

        let products = catalog.get_all().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId::new(7));
        assert!(server.await.unwrap()[0].head.starts_with("GET /productos "));
    }

    #[tokio::test]
    async fn should_fail_on_error_status() {
        let (base_url, server) = serve(vec![(503, "{}")]).await;
        let client = CollectorClient::new(&base_url, None, Duration::from_secs(5)).unwrap();
        let catalog = ProductCatalogHttp::new(client, "/productos");

        assert!(matches!(
            catalog.get_all().await,
            Err(ProductError::CatalogUnavailable)
        ));
        server.await.unwrap();
    }
}

use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;

use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
}

impl ProductApi {
    pub fn new(get_all_use_case: Arc<dyn GetAllProductsUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Serves the sample catalog when the catalog backend is unreachable.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all(&self) -> Json<Vec<ProductResponse>> {
        let products = self.get_all_use_case.execute().await;
        Json(products.into_iter().map(ProductResponse::from).collect())
    }
}

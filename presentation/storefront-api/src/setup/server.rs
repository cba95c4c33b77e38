use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, config.cors, &format!("http://{}", addr));
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    pub fn app(container: DependencyContainer, cors: Cors, server_url: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.cart_api,
                container.checkout_api,
                container.sale_api,
                container.navigation_api,
            ),
            "Storefront API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::json;

    use business::domain::product::catalog::ProductCatalog;
    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;
    use business::domain::sale::errors::SubmissionError;
    use business::domain::sale::model::SaleSummary;
    use business::domain::sale::services::SaleSubmitter;
    use persistence::kv::memory::InMemoryKeyValueStore;
    use persistence::kv::store::KeyValueStore;

    use super::*;
    use crate::config::checkout_config::{CheckoutConfig, SaleIdAllocation};
    use crate::setup::dependency_injection::Adapters;

    #[derive(Default)]
    struct FakeCollector {
        sent: Mutex<Vec<SaleSummary>>,
        fail: bool,
    }

    #[async_trait]
    impl SaleSubmitter for FakeCollector {
        async fn send(&self, summary: &SaleSummary) -> Result<(), SubmissionError> {
            self.sent.lock().unwrap().push(*summary);
            if self.fail {
                Err(SubmissionError::Network("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    struct UnreachableCatalog;

    #[async_trait]
    impl ProductCatalog for UnreachableCatalog {
        async fn get_all(&self) -> Result<Vec<Product>, ProductError> {
            Err(ProductError::CatalogUnavailable)
        }
    }

    fn client(
        store: &InMemoryKeyValueStore,
        collector: Arc<FakeCollector>,
    ) -> TestClient<impl Endpoint + use<>> {
        client_with_settle_delay(store, collector, Duration::ZERO)
    }

    fn client_with_settle_delay(
        store: &InMemoryKeyValueStore,
        collector: Arc<FakeCollector>,
        settle_delay: Duration,
    ) -> TestClient<impl Endpoint + use<>> {
        let container = DependencyContainer::from_adapters(
            Adapters {
                store: Arc::new(store.clone()),
                submitter: collector,
                catalog: Arc::new(UnreachableCatalog),
            },
            &CheckoutConfig {
                settle_delay,
                id_allocation: SaleIdAllocation::Serialized,
            },
        );
        TestClient::new(Server::app(container, Cors::new(), "http://localhost"))
    }

    fn add_body(id: i64, price: f64, quantity: u32) -> serde_json::Value {
        json!({
            "product": {"id": id, "name": format!("P{id}"), "price": price},
            "quantity": quantity
        })
    }

    #[tokio::test]
    async fn should_report_healthy() {
        let cli = client(&InMemoryKeyValueStore::new(), Arc::default());

        let resp = cli.get("/health").send().await;

        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("status")
            .assert_string("healthy");
    }

    #[tokio::test]
    async fn should_serve_sample_products_when_catalog_is_down() {
        let cli = client(&InMemoryKeyValueStore::new(), Arc::default());

        let resp = cli.get("/products").send().await;

        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_len(4);
    }

    #[tokio::test]
    async fn should_maintain_cart_lines() {
        let store = InMemoryKeyValueStore::new();
        let cli = client(&store, Arc::default());

        cli.post("/cart/items")
            .body_json(&add_body(1, 1000.0, 2))
            .send()
            .await
            .assert_status_is_ok();
        cli.post("/cart/items")
            .body_json(&add_body(2, 500.0, 1))
            .send()
            .await
            .assert_status_is_ok();
        cli.post("/cart/items/2/decrement")
            .send()
            .await
            .assert_status_is_ok();
        cli.put("/cart/items/1")
            .body_json(&json!({"quantity": 3}))
            .send()
            .await
            .assert_status_is_ok();

        let resp = cli.get("/cart").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let cart = json.value().object();
        cart.get("items").array().assert_len(1);
        cart.get("total").assert_f64(3000.0);
        cart.get("item_count").assert_i64(3);
    }

    #[tokio::test]
    async fn should_reject_negative_price() {
        let cli = client(&InMemoryKeyValueStore::new(), Arc::default());

        let resp = cli
            .post("/cart/items")
            .body_json(&add_body(1, -5.0, 1))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_check_out_and_show_confirmation() {
        let store = InMemoryKeyValueStore::new();
        let collector = Arc::new(FakeCollector::default());
        let cli = client(&store, collector.clone());
        cli.post("/cart/items")
            .body_json(&add_body(1, 1000.0, 2))
            .send()
            .await
            .assert_status_is_ok();
        cli.post("/cart/items")
            .body_json(&add_body(2, 500.0, 1))
            .send()
            .await
            .assert_status_is_ok();

        let resp = cli.post("/checkout").send().await;
        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        let sale = json.value().object();
        sale.get("sale_id").assert_i64(1);
        sale.get("total_amount").assert_f64(2500.0);

        cli.get("/view")
            .send()
            .await
            .json()
            .await
            .value()
            .object()
            .get("path")
            .assert_string("/venta");
        cli.get("/checkout/status")
            .send()
            .await
            .json()
            .await
            .value()
            .object()
            .get("state")
            .assert_string("completed");
        cli.get("/cart")
            .send()
            .await
            .json()
            .await
            .value()
            .object()
            .get("items")
            .array()
            .assert_len(0);
        cli.get("/sales/last")
            .send()
            .await
            .json()
            .await
            .value()
            .object()
            .get("item_count")
            .assert_i64(3);
        assert_eq!(store.get("lastSaleId").unwrap().as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn should_answer_conflict_for_cart_changes_during_checkout() {
        let store = InMemoryKeyValueStore::new();
        let cli = client_with_settle_delay(&store, Arc::default(), Duration::from_millis(500));
        cli.post("/cart/items")
            .body_json(&add_body(1, 1000.0, 2))
            .send()
            .await
            .assert_status_is_ok();

        let late_add = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            cli.post("/cart/items")
                .body_json(&add_body(2, 500.0, 1))
                .send()
                .await
        };
        let (checkout, late_add) = tokio::join!(cli.post("/checkout").send(), late_add);

        checkout.assert_status(StatusCode::CREATED);
        checkout
            .json()
            .await
            .value()
            .object()
            .get("total_amount")
            .assert_f64(2000.0);
        late_add.assert_status(StatusCode::CONFLICT);
        late_add
            .json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("cart.checkout_in_progress");
        cli.get("/cart")
            .send()
            .await
            .json()
            .await
            .value()
            .object()
            .get("items")
            .array()
            .assert_len(0);
    }

    #[tokio::test]
    async fn should_reject_checkout_of_empty_cart() {
        let cli = client(&InMemoryKeyValueStore::new(), Arc::default());

        let resp = cli.post("/checkout").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("checkout.empty_cart");
    }

    #[tokio::test]
    async fn should_report_missing_sale_on_resend() {
        let cli = client(&InMemoryKeyValueStore::new(), Arc::default());

        cli.post("/sales/last/submit")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_surface_failed_resend_and_stay_on_confirmation() {
        let store = InMemoryKeyValueStore::new();
        let collector = Arc::new(FakeCollector {
            fail: true,
            ..Default::default()
        });
        let cli = client(&store, collector.clone());
        cli.post("/cart/items")
            .body_json(&add_body(7, 100.0, 1))
            .send()
            .await
            .assert_status_is_ok();
        cli.post("/checkout")
            .send()
            .await
            .assert_status(StatusCode::CREATED);

        let resp = cli.post("/sales/last/submit").send().await;

        resp.assert_status(StatusCode::BAD_GATEWAY);
        cli.get("/view")
            .send()
            .await
            .json()
            .await
            .value()
            .object()
            .get("path")
            .assert_string("/venta");
    }
}

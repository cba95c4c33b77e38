use std::sync::Arc;
use std::time::Duration;

use logger::TracingLogger;

use collector::client::CollectorClient;
use collector::product_catalog::ProductCatalogHttp;
use collector::retry::RetryingSaleSubmitter;
use collector::sale_submitter::SaleSubmitterHttp;
use persistence::cart::repository::CartRepositoryKv;
use persistence::kv::file::FileKeyValueStore;
use persistence::kv::memory::InMemoryKeyValueStore;
use persistence::kv::store::KeyValueStore;
use persistence::sale::id_allocator::{SerializedSaleIdAllocator, SharedCounterSaleIdAllocator};
use persistence::sale::repository::SaleRecordRepositoryKv;

use business::application::cart::add::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::decrement::DecrementCartItemUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::increment::IncrementCartItemUseCaseImpl;
use business::application::cart::remove::RemoveFromCartUseCaseImpl;
use business::application::cart::set_quantity::SetCartItemQuantityUseCaseImpl;
use business::application::checkout::checkout::{CheckoutPorts, CheckoutUseCaseImpl};
use business::application::checkout::scheduler::TokioScheduler;
use business::application::clock::SystemClock;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::sale::get_last::GetLastSaleUseCaseImpl;
use business::application::sale::resend_last::ResendLastSaleUseCaseImpl;
use business::domain::checkout::gate::CheckoutGate;
use business::domain::product::catalog::ProductCatalog;
use business::domain::sale::repository::SaleIdAllocator;
use business::domain::sale::services::SaleSubmitter;

use crate::api::cart::routes::CartApi;
use crate::api::checkout::routes::CheckoutApi;
use crate::api::health::routes::HealthApi;
use crate::api::navigation::routes::NavigationApi;
use crate::api::product::routes::ProductApi;
use crate::api::sale::routes::SaleApi;
use crate::config::app_config::AppConfig;
use crate::config::checkout_config::{CheckoutConfig, SaleIdAllocation};
use crate::setup::navigation::SessionNavigator;

const RETRY_BASE_BACKOFF: Duration = Duration::from_millis(500);

/// Outbound adapters the use cases are wired against.
pub struct Adapters {
    pub store: Arc<dyn KeyValueStore>,
    pub submitter: Arc<dyn SaleSubmitter>,
    pub catalog: Arc<dyn ProductCatalog>,
}

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub cart_api: CartApi,
    pub checkout_api: CheckoutApi,
    pub sale_api: SaleApi,
    pub navigation_api: NavigationApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn KeyValueStore> = match &config.storage.path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using file-backed storage");
                Arc::new(FileKeyValueStore::new(path))
            }
            None => {
                tracing::info!("Using in-memory storage");
                Arc::new(InMemoryKeyValueStore::new())
            }
        };

        let collector = &config.collector;
        let client = CollectorClient::new(
            &collector.base_url,
            collector.bearer_token.clone(),
            collector.timeout,
        )?;

        let http_submitter: Arc<dyn SaleSubmitter> = Arc::new(SaleSubmitterHttp::new(
            client.clone(),
            &collector.sale_detail_endpoint,
        ));
        let submitter: Arc<dyn SaleSubmitter> = if collector.max_retries > 0 {
            tracing::info!(max_retries = collector.max_retries, "Sale submission retries enabled");
            Arc::new(RetryingSaleSubmitter::new(
                http_submitter,
                collector.max_retries,
                RETRY_BASE_BACKOFF,
            ))
        } else {
            http_submitter
        };

        let catalog = Arc::new(ProductCatalogHttp::new(client, &collector.products_endpoint));

        Ok(Self::from_adapters(
            Adapters {
                store,
                submitter,
                catalog,
            },
            &config.checkout,
        ))
    }

    pub fn from_adapters(adapters: Adapters, checkout: &CheckoutConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let navigator = Arc::new(SessionNavigator::new());
        let clock = Arc::new(SystemClock);
        let gate = Arc::new(CheckoutGate::new());

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryKv::new(adapters.store.clone()));
        let sale_repository = Arc::new(SaleRecordRepositoryKv::new(adapters.store.clone()));
        let shared_counter: Arc<dyn SaleIdAllocator> =
            Arc::new(SharedCounterSaleIdAllocator::new(adapters.store));
        let id_allocator: Arc<dyn SaleIdAllocator> = match checkout.id_allocation {
            SaleIdAllocation::Shared => shared_counter,
            SaleIdAllocation::Serialized => {
                Arc::new(SerializedSaleIdAllocator::new(shared_counter))
            }
        };

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            repository: cart_repository.clone(),
            gate: gate.clone(),
            logger: logger.clone(),
        });
        let remove_from_cart_use_case = Arc::new(RemoveFromCartUseCaseImpl {
            repository: cart_repository.clone(),
            gate: gate.clone(),
            logger: logger.clone(),
        });
        let set_quantity_use_case = Arc::new(SetCartItemQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            gate: gate.clone(),
            logger: logger.clone(),
        });
        let increment_use_case = Arc::new(IncrementCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            gate: gate.clone(),
            logger: logger.clone(),
        });
        let decrement_use_case = Arc::new(DecrementCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            gate: gate.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            gate: gate.clone(),
            logger: logger.clone(),
        });

        // Checkout
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl::new(
            CheckoutPorts {
                cart_repository,
                sale_repository: sale_repository.clone(),
                id_allocator,
                submitter: adapters.submitter.clone(),
                scheduler: Arc::new(TokioScheduler),
                navigator: navigator.clone(),
                clock: clock.clone(),
                logger: logger.clone(),
            },
            gate,
            checkout.settle_delay,
        ));

        // Sale use cases
        let get_last_sale_use_case = Arc::new(GetLastSaleUseCaseImpl {
            repository: sale_repository.clone(),
            clock,
            logger: logger.clone(),
        });
        let resend_last_sale_use_case = Arc::new(ResendLastSaleUseCaseImpl {
            repository: sale_repository,
            submitter: adapters.submitter,
            navigator: navigator.clone(),
            logger: logger.clone(),
        });

        // Product use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            catalog: adapters.catalog,
            logger,
        });

        Self {
            health_api: HealthApi,
            product_api: ProductApi::new(get_all_products_use_case),
            cart_api: CartApi::new(
                get_cart_use_case,
                add_to_cart_use_case,
                remove_from_cart_use_case,
                set_quantity_use_case,
                increment_use_case,
                decrement_use_case,
                clear_cart_use_case,
            ),
            checkout_api: CheckoutApi::new(checkout_use_case),
            sale_api: SaleApi::new(get_last_sale_use_case, resend_last_sale_use_case),
            navigation_api: NavigationApi::new(navigator),
        }
    }
}

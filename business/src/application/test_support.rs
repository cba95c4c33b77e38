//! Port doubles shared by the use-case tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockall::mock;

use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::checkout::services::Scheduler;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::navigation::{Navigator, Route};
use crate::domain::product::catalog::ProductCatalog;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::sale::errors::SubmissionError;
use crate::domain::sale::model::{SaleRecord, SaleSummary};
use crate::domain::sale::repository::{SaleIdAllocator, SaleRecordRepository};
use crate::domain::sale::services::SaleSubmitter;
use crate::domain::shared::clock::Clock;
use crate::domain::shared::value_objects::ProductId;

mock! {
    pub CartRepo {}

    impl CartRepository for CartRepo {
        fn load(&self) -> Cart;
        fn load_for_update(&self) -> Result<Cart, RepositoryError>;
        fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
        fn clear(&self) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub SaleRepo {}

    impl SaleRecordRepository for SaleRepo {
        fn write(&self, record: &SaleRecord) -> Result<(), RepositoryError>;
        fn read(&self) -> Option<SaleRecord>;
    }
}

mock! {
    pub IdAllocator {}

    impl SaleIdAllocator for IdAllocator {
        fn allocate(&self) -> Result<crate::domain::shared::value_objects::SaleId, RepositoryError>;
    }
}

mock! {
    pub Submitter {}

    #[async_trait]
    impl SaleSubmitter for Submitter {
        async fn send(&self, summary: &SaleSummary) -> Result<(), SubmissionError>;
    }
}

mock! {
    pub Sched {}

    #[async_trait]
    impl Scheduler for Sched {
        async fn delay(&self, duration: Duration);
    }
}

mock! {
    pub Nav {}

    impl Navigator for Nav {
        fn navigate(&self, route: Route);
    }
}

mock! {
    pub Catalog {}

    #[async_trait]
    impl ProductCatalog for Catalog {
        async fn get_all(&self) -> Result<Vec<Product>, ProductError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// 2024-05-01 12:00:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .unwrap()
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

pub fn product(id: i64, name: &str, price: f64) -> Product {
    Product::from_repository(ProductId::new(id), name.to_string(), price, None, None, None)
}

/// `[{A, 1000, x2}, {B, 500, x1}]`, total 2500.
pub fn sample_cart() -> Cart {
    Cart::from_items(vec![
        CartItem {
            product: product(1, "A", 1000.0),
            quantity: 2,
        },
        CartItem {
            product: product(2, "B", 500.0),
            quantity: 1,
        },
    ])
}

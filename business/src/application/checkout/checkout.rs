use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::gate::CheckoutGate;
use crate::domain::checkout::model::{
    CheckoutOutcome, CheckoutStatus, SubmissionHandle, SubmissionOutcome,
};
use crate::domain::checkout::services::Scheduler;
use crate::domain::checkout::use_cases::checkout::CheckoutUseCase;
use crate::domain::logger::Logger;
use crate::domain::navigation::{Navigator, Route};
use crate::domain::sale::model::{SaleRecord, SaleSummary};
use crate::domain::sale::repository::{SaleIdAllocator, SaleRecordRepository};
use crate::domain::sale::services::SaleSubmitter;
use crate::domain::shared::clock::Clock;

/// Collaborators the checkout coordinator drives.
pub struct CheckoutPorts {
    pub cart_repository: Arc<dyn CartRepository>,
    pub sale_repository: Arc<dyn SaleRecordRepository>,
    pub id_allocator: Arc<dyn SaleIdAllocator>,
    pub submitter: Arc<dyn SaleSubmitter>,
    pub scheduler: Arc<dyn Scheduler>,
    pub navigator: Arc<dyn Navigator>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

/// Cart-to-sale coordinator.
///
/// Steps run in a fixed order: settle, allocate the id, freeze the record,
/// persist it, start the submission, clear the cart, navigate. A storage
/// error at any step stops the sequence before the cart is cleared and
/// returns the coordinator to `Idle`. The submission runs on its own task and
/// its result never feeds back into the checkout.
///
/// The gate is shared with the cart use cases, which are refused for as long
/// as the checkout is `Processing`.
pub struct CheckoutUseCaseImpl {
    ports: CheckoutPorts,
    gate: Arc<CheckoutGate>,
    settle_delay: Duration,
}

impl CheckoutUseCaseImpl {
    pub fn new(ports: CheckoutPorts, gate: Arc<CheckoutGate>, settle_delay: Duration) -> Self {
        Self {
            ports,
            gate,
            settle_delay,
        }
    }

    /// Snapshots the cart and enters `Processing`.
    fn begin(&self) -> Result<(Cart, ProcessingGuard<'_>), CheckoutError> {
        let mut status = self.gate.lock();
        if status.is_processing() {
            return Err(CheckoutError::AlreadyInProgress);
        }

        let cart = self.ports.cart_repository.load_for_update()?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        *status = CheckoutStatus::Processing;
        Ok((
            cart,
            ProcessingGuard {
                gate: &self.gate,
                settled: false,
            },
        ))
    }

    async fn commit(&self, cart: &Cart) -> Result<(SaleRecord, SubmissionHandle), CheckoutError> {
        self.ports.scheduler.delay(self.settle_delay).await;

        // Read-then-write on shared storage; see SaleIdAllocator.
        let sale_id = self.ports.id_allocator.allocate()?;
        let record = SaleRecord::checkout(sale_id, cart);
        self.ports.sale_repository.write(&record)?;

        let submission = self.submit(record.summary());

        self.ports.cart_repository.clear()?;

        Ok((record, submission))
    }

    fn submit(&self, summary: SaleSummary) -> SubmissionHandle {
        let submitter = Arc::clone(&self.ports.submitter);
        let logger = Arc::clone(&self.ports.logger);

        SubmissionHandle::new(tokio::spawn(async move {
            match submitter.send(&summary).await {
                Ok(()) => {
                    logger.info(&format!(
                        "Sale {} sent to collector (total {})",
                        summary.sale_id, summary.total_amount
                    ));
                    SubmissionOutcome::Delivered
                }
                Err(err) => {
                    logger.error(&format!(
                        "Failed to send sale {} to collector: {}",
                        summary.sale_id, err
                    ));
                    SubmissionOutcome::Failed(err.to_string())
                }
            }
        }))
    }
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self) -> Result<CheckoutOutcome, CheckoutError> {
        let (cart, mut guard) = self.begin()?;
        self.ports.logger.info(&format!(
            "Checkout started: {} lines, {} units",
            cart.items().len(),
            cart.item_count()
        ));

        match self.commit(&cart).await {
            Ok((record, submission)) => {
                guard.settle(CheckoutStatus::Completed {
                    sale_id: record.sale_id(),
                    completed_at: self.ports.clock.now(),
                });
                self.ports.logger.info(&format!(
                    "Checkout completed: sale {} total {}",
                    record.sale_id(),
                    record.total_amount()
                ));
                self.ports.navigator.navigate(Route::SaleDetail);
                Ok(CheckoutOutcome { record, submission })
            }
            Err(err) => {
                guard.settle(CheckoutStatus::Idle);
                self.ports
                    .logger
                    .error(&format!("Checkout aborted, cart kept: {}", err));
                Err(err)
            }
        }
    }

    fn status(&self) -> CheckoutStatus {
        self.gate.status()
    }
}

/// Leaves `Processing` exactly once, falling back to `Idle` if the checkout
/// future is dropped before it settles.
struct ProcessingGuard<'a> {
    gate: &'a CheckoutGate,
    settled: bool,
}

impl ProcessingGuard<'_> {
    fn settle(&mut self, next: CheckoutStatus) {
        *self.gate.lock() = next;
        self.settled = true;
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *self.gate.lock() = CheckoutStatus::Idle;
        }
    }
}

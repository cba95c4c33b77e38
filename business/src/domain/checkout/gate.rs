use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::cart::errors::CartError;

use super::model::CheckoutStatus;

/// Checkout state shared by the coordinator and every cart mutation.
///
/// Cart writes run while holding the state lock and are refused once a
/// checkout is `Processing`, so the cart snapshotted at checkout start is the
/// cart that gets recorded and cleared.
#[derive(Debug)]
pub struct CheckoutGate {
    status: Mutex<CheckoutStatus>,
}

impl CheckoutGate {
    pub fn new() -> Self {
        Self {
            status: Mutex::new(CheckoutStatus::Idle),
        }
    }

    pub fn status(&self) -> CheckoutStatus {
        *self.lock()
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, CheckoutStatus> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs a cart mutation unless a checkout is in flight.
    pub fn mutate_cart<T>(
        &self,
        mutation: impl FnOnce() -> Result<T, CartError>,
    ) -> Result<T, CartError> {
        let status = self.lock();
        if status.is_processing() {
            return Err(CartError::CheckoutInProgress);
        }
        mutation()
    }
}

impl Default for CheckoutGate {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::{PoisonError, RwLock};

use business::domain::navigation::{Navigator, Route};

/// Remembers the last view the storefront was sent to. Starts on the product
/// list.
#[derive(Debug)]
pub struct SessionNavigator {
    current: RwLock<Route>,
}

impl SessionNavigator {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Route::Products),
        }
    }

    pub fn current(&self) -> Route {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for SessionNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "Navigating");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = route;
    }
}

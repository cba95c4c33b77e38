/// Views the storefront can move the shopper to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Product listing.
    Products,
    /// Confirmation of the last completed sale.
    SaleDetail,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Products => "/products",
            Route::SaleDetail => "/venta",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Navigation capability, invoked after checkout completes and after a
/// resubmission of the last sale succeeds.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_routes_to_paths() {
        assert_eq!(Route::Products.path(), "/products");
        assert_eq!(Route::SaleDetail.to_string(), "/venta");
    }
}

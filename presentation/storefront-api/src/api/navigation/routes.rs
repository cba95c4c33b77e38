use std::sync::Arc;

use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;
use crate::setup::navigation::SessionNavigator;

#[derive(Debug, Clone, Object)]
pub struct ViewResponse {
    /// Path of the view the storefront should show, e.g. "/venta"
    pub path: String,
}

pub struct NavigationApi {
    navigator: Arc<SessionNavigator>,
}

impl NavigationApi {
    pub fn new(navigator: Arc<SessionNavigator>) -> Self {
        Self { navigator }
    }
}

#[OpenApi]
impl NavigationApi {
    /// Current view
    ///
    /// Updated after a checkout completes and after the last sale is resent.
    #[oai(path = "/view", method = "get", tag = "ApiTags::Navigation")]
    async fn current_view(&self) -> Json<ViewResponse> {
        Json(ViewResponse {
            path: self.navigator.current().path().to_string(),
        })
    }
}

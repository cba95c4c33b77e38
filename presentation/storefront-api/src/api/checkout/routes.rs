use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::checkout::use_cases::checkout::CheckoutUseCase;

use crate::api::checkout::dto::{CheckoutStatusResponse, SaleRecordResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    checkout_use_case: Arc<dyn CheckoutUseCase>,
}

impl CheckoutApi {
    pub fn new(checkout_use_case: Arc<dyn CheckoutUseCase>) -> Self {
        Self { checkout_use_case }
    }
}

#[OpenApi]
impl CheckoutApi {
    /// Check out the cart
    ///
    /// Records the sale, clears the cart and hands the summary to the
    /// collector in the background. Responds once the local steps are done;
    /// the collector's answer does not affect the response.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn checkout(&self) -> CheckoutResponse {
        let use_case = Arc::clone(&self.checkout_use_case);
        // A started checkout must finish even if the client goes away.
        let result = tokio::spawn(async move { use_case.execute().await }).await;

        match result {
            Ok(Ok(outcome)) => CheckoutResponse::Created(Json((&outcome.record).into())),
            Ok(Err(err)) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutResponse::BadRequest(json),
                    409 => CheckoutResponse::Conflict(json),
                    _ => CheckoutResponse::InternalError(json),
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Checkout task did not complete");
                CheckoutResponse::InternalError(Json(ErrorResponse::new(
                    "InternalError",
                    "checkout.task_failed",
                )))
            }
        }
    }

    /// Checkout status
    ///
    /// For the busy indicator while a checkout is settling.
    #[oai(path = "/checkout/status", method = "get", tag = "ApiTags::Checkout")]
    async fn status(&self) -> Json<CheckoutStatusResponse> {
        Json(self.checkout_use_case.status().into())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResponse {
    #[oai(status = 201)]
    Created(Json<SaleRecordResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

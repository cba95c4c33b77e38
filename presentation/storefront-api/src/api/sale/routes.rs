use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::sale::use_cases::get_last::GetLastSaleUseCase;
use business::domain::sale::use_cases::resend_last::ResendLastSaleUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::sale::dto::{SaleConfirmationResponse, SaleSummaryResponse};
use crate::api::tags::ApiTags;

pub struct SaleApi {
    get_last_use_case: Arc<dyn GetLastSaleUseCase>,
    resend_last_use_case: Arc<dyn ResendLastSaleUseCase>,
}

impl SaleApi {
    pub fn new(
        get_last_use_case: Arc<dyn GetLastSaleUseCase>,
        resend_last_use_case: Arc<dyn ResendLastSaleUseCase>,
    ) -> Self {
        Self {
            get_last_use_case,
            resend_last_use_case,
        }
    }
}

#[OpenApi]
impl SaleApi {
    /// Last completed sale
    #[oai(path = "/sales/last", method = "get", tag = "ApiTags::Sales")]
    async fn get_last(&self) -> Json<SaleConfirmationResponse> {
        Json(self.get_last_use_case.execute().into())
    }

    /// Send the last sale to the collector again
    ///
    /// Waits for the collector. On success the storefront moves back to the
    /// product list; on failure nothing is retried.
    #[oai(path = "/sales/last/submit", method = "post", tag = "ApiTags::Sales")]
    async fn resend_last(&self) -> ResendLastSaleResponse {
        match self.resend_last_use_case.execute().await {
            Ok(summary) => ResendLastSaleResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ResendLastSaleResponse::NotFound(json),
                    502 => ResendLastSaleResponse::BadGateway(json),
                    _ => ResendLastSaleResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResendLastSaleResponse {
    #[oai(status = 200)]
    Ok(Json<SaleSummaryResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::InvalidPrice => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::CatalogUnavailable => (StatusCode::BAD_GATEWAY, "UpstreamError"),
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}

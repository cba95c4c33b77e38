use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::sale::errors::SaleError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SaleError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SaleError::NotRecorded => (StatusCode::NOT_FOUND, "NotFound", "sale.not_recorded"),
            SaleError::SubmissionFailed(_) => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "sale.submission_failed",
            ),
            SaleError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

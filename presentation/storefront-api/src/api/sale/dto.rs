use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::sale::model::{SaleConfirmation, SaleSummary};

use crate::api::cart::dto::CartItemResponse;

/// Confirmation view of the last sale. Without a recorded sale every field
/// is empty or zero.
#[derive(Debug, Clone, Object)]
pub struct SaleConfirmationResponse {
    #[oai(skip_serializing_if_is_none)]
    pub sale_id: Option<u64>,
    pub items: Vec<CartItemResponse>,
    pub total_amount: f64,
    pub item_count: u64,
    pub viewed_at: DateTime<Utc>,
}

impl From<SaleConfirmation> for SaleConfirmationResponse {
    fn from(confirmation: SaleConfirmation) -> Self {
        Self {
            sale_id: confirmation.sale_id.map(|id| id.value()),
            items: confirmation.items.iter().map(CartItemResponse::from).collect(),
            total_amount: confirmation.total_amount,
            item_count: confirmation.item_count,
            viewed_at: confirmation.viewed_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SaleSummaryResponse {
    pub sale_id: u64,
    pub total_amount: f64,
}

impl From<SaleSummary> for SaleSummaryResponse {
    fn from(summary: SaleSummary) -> Self {
        Self {
            sale_id: summary.sale_id.value(),
            total_amount: summary.total_amount,
        }
    }
}

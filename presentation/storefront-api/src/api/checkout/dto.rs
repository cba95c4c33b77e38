use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::checkout::model::CheckoutStatus;
use business::domain::sale::model::SaleRecord;

use crate::api::cart::dto::CartItemResponse;

#[derive(Debug, Clone, Object)]
pub struct SaleRecordResponse {
    pub sale_id: u64,
    pub items: Vec<CartItemResponse>,
    /// Frozen at checkout time
    pub total_amount: f64,
}

impl From<&SaleRecord> for SaleRecordResponse {
    fn from(record: &SaleRecord) -> Self {
        Self {
            sale_id: record.sale_id().value(),
            items: record.items().iter().map(CartItemResponse::from).collect(),
            total_amount: record.total_amount(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutStatusResponse {
    /// "idle", "processing" or "completed"
    pub state: String,
    #[oai(skip_serializing_if_is_none)]
    pub sale_id: Option<u64>,
    #[oai(skip_serializing_if_is_none)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<CheckoutStatus> for CheckoutStatusResponse {
    fn from(status: CheckoutStatus) -> Self {
        match status {
            CheckoutStatus::Idle => Self {
                state: "idle".to_string(),
                sale_id: None,
                completed_at: None,
            },
            CheckoutStatus::Processing => Self {
                state: "processing".to_string(),
                sale_id: None,
                completed_at: None,
            },
            CheckoutStatus::Completed {
                sale_id,
                completed_at,
            } => Self {
                state: "completed".to_string(),
                sale_id: Some(sale_id.value()),
                completed_at: Some(completed_at),
            },
        }
    }
}

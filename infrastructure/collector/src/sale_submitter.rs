use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use business::domain::sale::errors::SubmissionError;
use business::domain::sale::model::SaleSummary;
use business::domain::sale::services::SaleSubmitter;

use crate::client::CollectorClient;

/// Body accepted by the sale-detail endpoint. Line items are never sent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetailRequest {
    pub id_carrito: u64,
    pub total_venta: f64,
}

impl From<&SaleSummary> for SaleDetailRequest {
    fn from(summary: &SaleSummary) -> Self {
        Self {
            id_carrito: summary.sale_id.value(),
            total_venta: summary.total_amount,
        }
    }
}

/// Posts sale summaries to the collector, one attempt per call.
pub struct SaleSubmitterHttp {
    client: CollectorClient,
    url: String,
}

impl SaleSubmitterHttp {
    pub fn new(client: CollectorClient, endpoint: &str) -> Self {
        let url = client.endpoint_url(endpoint);
        Self { client, url }
    }
}

#[async_trait]
impl SaleSubmitter for SaleSubmitterHttp {
    async fn send(&self, summary: &SaleSummary) -> Result<(), SubmissionError> {
        let response = self
            .client
            .request(Method::POST, &self.url)
            .json(&SaleDetailRequest::from(summary))
            .send()
            .await
            .map_err(|err| {
                tracing::error!(url = %self.url, error = %err, "Sale detail request failed");
                SubmissionError::Network(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url = %self.url, status = status.as_u16(), "Collector rejected sale detail");
            return Err(SubmissionError::Rejected(status.as_u16()));
        }

        tracing::debug!(sale_id = %summary.sale_id, "Collector accepted sale detail");
        Ok(())
    }
}

use serde_json::Value;
use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Invoice, Page, PaymentReceipt, PaymentRequest};
use crate::transport::Transport;

/// `/billing/*` endpoints.
pub struct BillingApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: KeyValueStore> BillingApi<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub async fn invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        let page: Page<Invoice> = self.client.get_json("/billing/invoices/").await?;
        Ok(page.into_items())
    }

    pub async fn invoice(&self, id: i64) -> Result<Invoice, ApiError> {
        self.client
            .get_json(&format!("/billing/invoices/{id}/"))
            .await
    }

    pub async fn process_payment(
        &self,
        payment: &PaymentRequest,
    ) -> Result<PaymentReceipt, ApiError> {
        self.client
            .post_json("/billing/process-payment/", payment)
            .await
    }

    /// Past payments, as the backend reports them.
    pub async fn history(&self) -> Result<Vec<Value>, ApiError> {
        let page: Page<Value> = self.client.get_json("/billing/history/").await?;
        Ok(page.into_items())
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Open,
    Paid,
    Uncollectible,
    Void,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub tenant: i64,
    #[serde(default)]
    pub tenant_name: Option<String>,
    pub subscription: i64,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub subtotal: String,
    #[serde(default)]
    pub tax_amount: String,
    pub total_amount: String,
    #[serde(default)]
    pub currency: String,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub paid_date: Option<DateTime<Utc>>,
}

impl Invoice {
    /// Open invoices can be paid from the billing view.
    pub fn is_payable(&self) -> bool {
        self.status == InvoiceStatus::Open
    }
}

/// Body of `/billing/process-payment/`. The backend gateway is a mock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    pub invoice_id: i64,
    pub amount: String,
    pub payment_method: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

/// Reply of the mocked payment gateway.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub payment: serde_json::Value,
}

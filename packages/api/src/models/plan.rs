use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    Yearly,
}

/// A subscription plan offered to tenants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// Decimal string, e.g. `"29.00"`.
    pub price: String,
    #[serde(default)]
    pub currency: String,
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub max_users: Option<u32>,
    #[serde(default)]
    pub max_storage_gb: Option<u32>,
    #[serde(default)]
    pub max_api_calls: Option<u32>,
    #[serde(default)]
    pub features: serde_json::Value,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create/update body for plans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanInput {
    pub name: String,
    pub description: String,
    pub price: String,
    pub currency: String,
    pub billing_cycle: BillingCycle,
    pub max_users: u32,
    pub max_storage_gb: u32,
    pub max_api_calls: u32,
    pub features: Vec<String>,
    pub is_active: bool,
    pub is_popular: bool,
}

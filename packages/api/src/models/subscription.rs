use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Plan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Cancelled,
    PastDue,
    Unpaid,
    Trial,
}

/// A tenant's subscription to a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub tenant: i64,
    #[serde(default)]
    pub tenant_name: Option<String>,
    pub plan: i64,
    #[serde(default)]
    pub plan_details: Option<Plan>,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub current_period_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_period_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            SubscriptionStatus::Active | SubscriptionStatus::Trial
        )
    }
}

/// Create/update body for `/subscriptions/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionInput {
    pub plan: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
}

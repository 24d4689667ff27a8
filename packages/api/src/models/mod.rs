//! Wire models for the console's REST backend.
//!
//! Monetary amounts arrive as decimal strings (e.g. `"19.99"`) and are kept as
//! strings; timestamps are RFC 3339 and parse into `DateTime<Utc>`.

mod billing;
mod page;
mod plan;
mod subscription;
mod tenant;
mod user;

pub use billing::{Invoice, InvoiceStatus, PaymentReceipt, PaymentRequest};
pub use page::Page;
pub use plan::{BillingCycle, Plan, PlanInput};
pub use subscription::{Subscription, SubscriptionInput, SubscriptionStatus};
pub use tenant::{Tenant, TenantInput};
pub use user::{
    AuthResponse, NewUser, PasswordChange, ProfileUpdate, RegisterData, Role, TokenPair, User,
};

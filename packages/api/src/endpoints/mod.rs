//! Typed groups over the backend's REST endpoints. Each group borrows an
//! [`ApiClient`](crate::ApiClient) and goes through its authenticated
//! [`send`](crate::ApiClient::send).

mod auth;
mod billing;
mod collection;

pub use auth::AuthApi;
pub use billing::BillingApi;
pub use collection::Collection;

//! # API crate: session-aware client for the console's REST backend
//!
//! Everything the frontends need to talk to the backend and keep a user signed
//! in, with no dependency on the UI framework.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Token inspection, the session state machine, persistence, the session controller and the route guard |
//! | [`client`] | [`ApiClient`]: bearer credentials and the refresh-once retry on `401` |
//! | [`config`] | Base URL and timeout, from the environment with a local-development fallback |
//! | [`endpoints`] | Typed groups over `/auth`, `/tenants`, `/subscriptions`, `/billing` and `/users` |
//! | [`error`] | [`ApiError`], the single error type of this crate |
//! | [`models`] | Wire models |
//! | [`transport`] | The [`Transport`] seam and its reqwest implementation |
//!
//! ## Wiring
//!
//! ```no_run
//! use api::{ApiClient, ApiConfig, HttpTransport, SessionController, SessionHandle};
//! use store::MemoryStore;
//!
//! # async fn run() {
//! let session = SessionHandle::new(MemoryStore::new());
//! let client = ApiClient::new(HttpTransport::new(ApiConfig::from_env()), session);
//! let controller = SessionController::new(client);
//! controller.initialize().await;
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod transport;

pub use auth::{
    Access, Decision, Notifier, Redirect, SessionController, SessionHandle, SessionState,
    TracingNotifier,
};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{Role, TokenPair, User};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

//! Client-side session management.
//!
//! - [`token`] reads the expiry of a bearer token without verifying it.
//! - [`state`] is the session state machine.
//! - [`persist`] mirrors the session into a key/value store.
//! - [`SessionHandle`] ties the two together and is shared with the
//!   [`ApiClient`](crate::ApiClient).
//! - [`SessionController`] runs the user-facing operations.
//! - [`guard`] decides route access from a session snapshot.

mod controller;
pub mod guard;
mod notify;
pub mod persist;
mod session;
pub mod state;
pub mod token;

pub use controller::SessionController;
pub use guard::{evaluate, Access, Decision, Redirect};
pub use notify::{Notifier, TracingNotifier};
pub use persist::{StoredSession, TokenStore};
pub use session::SessionHandle;
pub use state::SessionState;

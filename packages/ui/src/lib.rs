//! Shared UI for the tenant console: the session provider, route guard,
//! navigation and notifications.

mod platform;
pub use platform::{make_controller, make_store, AppClient, AppController, AppStore};

mod session;
pub use session::{use_access, use_session, SessionContext, SessionProvider};

mod guard;
pub use guard::Guard;

pub mod navigation;
pub use navigation::{nav_items, NavItem};

mod sidebar;
pub use sidebar::Sidebar;

pub mod toast;
pub use toast::{use_toasts, ToastNotifier, Toaster};

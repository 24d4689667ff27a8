//! Platform wiring: which store backs the session and how the client is built.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Desktop / Mobile** (native): files under `<data_dir>/tenant-console/`
//! - **WASM without `web`**: an in-memory store, so nothing survives a reload

use std::rc::Rc;

use api::{ApiClient, ApiConfig, HttpTransport, Notifier, SessionController, SessionHandle};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type AppStore = store::FileStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type AppStore = store::MemoryStore;

pub type AppClient = ApiClient<HttpTransport, AppStore>;
pub type AppController = SessionController<HttpTransport, AppStore>;

/// The platform's session store.
pub fn make_store() -> AppStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("tenant-console");
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// A controller talking to the configured backend, reporting through `notifier`.
pub fn make_controller(notifier: Rc<dyn Notifier>) -> AppController {
    let config = ApiConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Connecting to API");
    let session = SessionHandle::new(make_store());
    let client = ApiClient::new(HttpTransport::new(config), session);
    SessionController::with_notifier(client, notifier)
}

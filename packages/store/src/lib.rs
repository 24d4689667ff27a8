//! # Store crate: durable key/value persistence for client state
//!
//! The console keeps exactly two pieces of client state across restarts: the
//! serialised token pair and the serialised user record. This crate provides the
//! storage substrate for them, behind the synchronous [`KeyValueStore`] trait.
//!
//! | Backend | Platform | Notes |
//! |---------|----------|-------|
//! | [`MemoryStore`] | any | Shared in-process map, used by tests and as a native fallback. |
//! | [`FileStore`] | native | One file per key under a base directory. |
//! | `LocalStorage` | wasm32 + `web` feature | The browser's `window.localStorage`. |
//!
//! Access is synchronous and unguarded: concurrent writers race and the last
//! write wins.

mod error;
pub use error::StoreError;

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

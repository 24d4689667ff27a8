//! Shared session handle: the observable state plus its persisted mirror.

use std::sync::Arc;

use store::KeyValueStore;
use tokio::sync::watch;

use super::persist::TokenStore;
use super::state::SessionState;
use crate::models::{TokenPair, User};

/// Cloneable handle onto one session.
///
/// Every transition goes through [`SessionHandle::transition`], which
/// publishes the new state to subscribers and then mirrors it into storage:
/// an authenticated state writes both entries, any other state removes them.
/// Storage failures are logged and never fail the transition.
pub struct SessionHandle<S> {
    state: Arc<watch::Sender<SessionState>>,
    store: TokenStore<S>,
}

impl<S: Clone> Clone for SessionHandle<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            store: self.store.clone(),
        }
    }
}

impl<S: KeyValueStore> SessionHandle<S> {
    /// A fresh handle in [`SessionState::Loading`]. Storage is not touched
    /// until the first transition.
    pub fn new(store: S) -> Self {
        let (state, _) = watch::channel(SessionState::Loading);
        Self {
            state: Arc::new(state),
            store: TokenStore::new(store),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn store(&self) -> &TokenStore<S> {
        &self.store
    }

    /// Apply `f` to the current state, publish the result and persist it.
    pub fn transition(&self, f: impl FnOnce(SessionState) -> SessionState) -> SessionState {
        let next = f(self.state());
        self.state.send_replace(next.clone());
        self.sync(&next);
        next
    }

    fn sync(&self, state: &SessionState) {
        let result = match state {
            SessionState::Authenticated { user, tokens } => self.store.save(user, tokens),
            _ => self.store.clear(),
        };
        if let Err(e) = result {
            tracing::warn!("Failed to persist session: {e}");
        }
    }

    pub fn signed_in(&self, user: User, tokens: TokenPair) -> SessionState {
        self.transition(|s| s.signed_in(user, tokens))
    }

    pub fn signed_out(&self) -> SessionState {
        self.transition(SessionState::signed_out)
    }

    pub fn loading(&self) {
        // Loading is not persisted: storage keeps whatever it held.
        self.state.send_replace(SessionState::Loading);
    }

    pub fn profile_updated(&self, user: User) -> SessionState {
        self.transition(|s| s.profile_updated(user))
    }

    /// Record a renewed access token.
    ///
    /// Outside an authenticated session (for instance during startup
    /// reconciliation) only the stored pair is rewritten.
    pub fn access_renewed(&self, access: &str) {
        if self.state.borrow().is_authenticated() {
            self.transition(|s| s.access_renewed(access.to_string()));
            return;
        }
        match self.stored_tokens() {
            Some(tokens) => {
                let renewed = TokenPair::new(access, tokens.refresh);
                if let Err(e) = self.store.save_tokens(&renewed) {
                    tracing::warn!("Failed to persist renewed access token: {e}");
                }
            }
            None => tracing::debug!("Access token renewed with no stored session"),
        }
    }

    /// The session can no longer be renewed: drop it.
    pub fn expire(&self) {
        tracing::info!("Session expired");
        self.signed_out();
    }

    /// The persisted token pair. Unreadable storage counts as no tokens.
    pub fn stored_tokens(&self) -> Option<TokenPair> {
        match self.store.tokens() {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::warn!("Failed to read stored tokens: {e}");
                None
            }
        }
    }

    /// The persisted access token, attached to outgoing requests.
    pub fn access_token(&self) -> Option<String> {
        self.stored_tokens().map(|t| t.access)
    }
}

//! The session controller: startup reconciliation, sign-in and sign-out.

use std::rc::Rc;

use store::KeyValueStore;
use tokio::sync::watch;

use super::notify::{Notifier, TracingNotifier};
use super::state::SessionState;
use super::token;
use super::SessionHandle;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, PasswordChange, ProfileUpdate, RegisterData, TokenPair, User};
use crate::transport::Transport;

/// Owns the session for the lifetime of the application.
///
/// Operations never run concurrently with each other by construction; if a
/// caller overlaps them the last transition wins.
pub struct SessionController<T, S> {
    client: ApiClient<T, S>,
    notifier: Rc<dyn Notifier>,
}

impl<T, S: Clone> Clone for SessionController<T, S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<T: Transport, S: KeyValueStore> SessionController<T, S> {
    pub fn new(client: ApiClient<T, S>) -> Self {
        Self::with_notifier(client, Rc::new(TracingNotifier))
    }

    pub fn with_notifier(client: ApiClient<T, S>, notifier: Rc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }

    pub fn client(&self) -> &ApiClient<T, S> {
        &self.client
    }

    pub fn session(&self) -> &SessionHandle<S> {
        self.client.session()
    }

    pub fn state(&self) -> SessionState {
        self.session().state()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.session().subscribe()
    }

    /// Reconcile the persisted session at startup. Never leaves the state in
    /// [`SessionState::Loading`].
    pub async fn initialize(&self) -> SessionState {
        let stored = match self.session().store().load() {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Stored session is unreadable, signing out: {e}");
                self.logout();
                return self.state();
            }
        };
        let Some(stored) = stored else {
            tracing::debug!("No stored session");
            return self.session().signed_out();
        };

        if !token::is_expired(&stored.tokens.access) {
            tracing::info!(user = %stored.user.email, "Session restored");
            return self.session().signed_in(stored.user, stored.tokens);
        }
        if token::is_expired(&stored.tokens.refresh) {
            tracing::info!("Stored session has expired");
            self.logout();
            return self.state();
        }

        match self.client.exchange_refresh(&stored.tokens.refresh).await {
            Ok(access) => {
                tracing::info!(user = %stored.user.email, "Session restored with renewed access token");
                let tokens = TokenPair::new(access, stored.tokens.refresh);
                self.session().signed_in(stored.user, tokens)
            }
            Err(e) => {
                tracing::warn!("Could not renew stored session: {e}");
                self.logout();
                self.state()
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.session().loading();
        let result = self.client.auth().login(email, password).await;
        self.complete_sign_in(result, "Login successful!", "Login failed")
    }

    pub async fn register(&self, data: &RegisterData) -> Result<User, ApiError> {
        self.session().loading();
        let result = self.client.auth().register(data).await;
        self.complete_sign_in(result, "Registration successful!", "Registration failed")
    }

    fn complete_sign_in(
        &self,
        result: Result<AuthResponse, ApiError>,
        success: &str,
        failure: &str,
    ) -> Result<User, ApiError> {
        match result {
            Ok(AuthResponse { user, tokens }) => {
                tracing::info!(user = %user.email, "Signed in");
                self.session().signed_in(user.clone(), tokens);
                self.notifier.success(success);
                Ok(user)
            }
            Err(e) => {
                tracing::warn!("{failure}: {e}");
                self.session().signed_out();
                self.notifier.error(&e.user_message(failure));
                Err(e)
            }
        }
    }

    /// Drop the local session. Never fails.
    pub fn logout(&self) {
        self.session().signed_out();
        self.notifier.success("Logged out successfully");
    }

    /// Ask the server to blacklist the refresh token, then [`logout`](Self::logout)
    /// whatever it answers.
    pub async fn sign_out(&self) {
        if let Some(tokens) = self.state().tokens().cloned() {
            if let Err(e) = self.client.auth().logout(&tokens.refresh).await {
                tracing::debug!("Server-side logout failed: {e}");
            }
        }
        self.logout();
    }

    /// Renew the access token of the current session.
    ///
    /// Fails with [`ApiError::NoRefreshToken`] before any network call when
    /// signed out. Any other failure tears the session down silently and is
    /// returned to the caller.
    pub async fn refresh(&self) -> Result<TokenPair, ApiError> {
        let Some(tokens) = self.state().tokens().cloned() else {
            return Err(ApiError::NoRefreshToken);
        };
        match self.client.exchange_refresh(&tokens.refresh).await {
            Ok(access) => {
                self.session().access_renewed(&access);
                Ok(TokenPair::new(access, tokens.refresh))
            }
            Err(e) => {
                tracing::warn!("Token refresh failed: {e}");
                self.session().signed_out();
                Err(e)
            }
        }
    }

    /// Re-read the signed-in user from `/auth/me/`.
    pub async fn reload_profile(&self) -> Result<User, ApiError> {
        let user = self.client.auth().me().await?;
        self.session().profile_updated(user.clone());
        Ok(user)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let user = self.client.auth().update_profile(update).await?;
        self.session().profile_updated(user.clone());
        Ok(user)
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        self.client.auth().change_password(change).await
    }
}
